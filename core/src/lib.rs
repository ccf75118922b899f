pub use chip8::Chip8;
pub use constants::{CLOCK_SPEED, TIMER_RATE};
pub use fault::Fault;

mod chip8;
pub mod constants;
mod fault;
mod instruction;
mod opcode;
mod operations;
pub mod state;
