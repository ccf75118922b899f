use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{MEMORY_SIZE, PROGRAM_START};
use crate::fault::Fault;
use crate::instruction;
use crate::state::{FrameBuffer, State};

/// # Chip-8
/// The Chip-8 virtual machine: a 4K-memory, 16-register, stack-based 8-bit
/// CPU with a monochrome display, a hex keypad, and two countdown timers.
///
/// The machine performs no I/O of its own. An external driver:
/// - loads a program with `load_program`
/// - calls `step` at CPU speed and `tick_timers` at a fixed 60 Hz,
///   independently of each other
/// - pushes key events in with `set_key_down`/`set_key_up`
/// - takes changed frames out with `consume_frame` and polls
///   `is_sound_active` to drive a tone
///
/// Faults (stack misuse, out-of-range memory access) surface from the `step`
/// that caused them; the machine never recovers on its own.
pub struct Chip8 {
    state: State,
    pressed_keys: [bool; 16],
    rng: StdRng,
}

impl Chip8 {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Builds a machine with a fixed RNG seed so that `Cxkk` is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Chip8 {
            state: State::new(),
            pressed_keys: [false; 16],
            rng,
        }
    }

    /// Returns the machine to its power-on state: memory cleared, font
    /// reloaded, registers and timers zeroed, pc back at 0x200.
    ///
    /// Idempotent. Loaded programs are erased and must be loaded again.
    pub fn reset(&mut self) {
        debug!("resetting machine");
        self.state = State::new();
        self.pressed_keys = [false; 16];
    }

    /// Copies a program into memory starting at 0x200.
    ///
    /// # Arguments
    /// * `program` raw program bytes, at most `4096 - 0x200` of them
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), Fault> {
        if program.len() > MEMORY_SIZE - PROGRAM_START {
            return Err(Fault::ProgramTooLarge(program.len()));
        }
        self.state.memory[PROGRAM_START..PROGRAM_START + program.len()].copy_from_slice(program);
        debug!("loaded {} byte program", program.len());
        Ok(())
    }

    /// Executes exactly one instruction: fetch, advance the pc, dispatch.
    pub fn step(&mut self) -> Result<(), Fault> {
        let op = self.fetch()?;
        self.state.pc += 2;
        trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            op,
            self.state.v,
            self.state.i,
            self.state.pc
        );
        instruction::from_op(op)(op, &mut self.state, &self.pressed_keys, &mut self.rng)
    }

    /// Decrements both timers by at most 1.
    ///
    /// The cadence belongs to the caller: this must be invoked at a fixed
    /// 60 Hz no matter how often `step` runs.
    pub fn tick_timers(&mut self) {
        self.state.delay_timer = self.state.delay_timer.saturating_sub(1);
        self.state.sound_timer = self.state.sound_timer.saturating_sub(1);
    }

    /// Marks a keypad key as held. Keys above 0xF are ignored.
    pub fn set_key_down(&mut self, key: u8) {
        if let Some(pressed) = self.pressed_keys.get_mut(key as usize) {
            *pressed = true;
        }
    }

    /// Marks a keypad key as released. Keys above 0xF are ignored.
    pub fn set_key_up(&mut self, key: u8) {
        if let Some(pressed) = self.pressed_keys.get_mut(key as usize) {
            *pressed = false;
        }
    }

    /// Whether the sound timer is still running; the audio collaborator
    /// plays a tone exactly while this is true.
    pub fn is_sound_active(&self) -> bool {
        self.state.sound_timer > 0
    }

    /// Hands out a copy of the framebuffer if it changed since the last
    /// call, clearing the dirty flag in the process.
    pub fn consume_frame(&mut self) -> Option<FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(self.state.frame_buffer)
        } else {
            None
        }
    }

    /// Reads the big-endian instruction word at the pc.
    fn fetch(&self) -> Result<u16, Fault> {
        let pc = self.state.pc as usize;
        if pc + 1 >= MEMORY_SIZE {
            return Err(Fault::AddressOutOfRange(pc));
        }
        Ok(u16::from(self.state.memory[pc]) << 8 | u16::from(self.state.memory[pc + 1]))
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
