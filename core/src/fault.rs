use thiserror::Error;

/// # Fault
/// Unrecoverable execution errors surfaced to the driver.
///
/// A fault leaves the machine in whatever state the offending instruction
/// reached; the driver decides whether to halt, reset, or just log it. The
/// permissive cases from historical interpreters (unrecognized opcodes,
/// out-of-range key indices) are deliberately not faults and execute as
/// no-ops instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    /// A `CALL` was executed with the call stack already full.
    #[error("call stack overflow")]
    StackOverflow,

    /// A `RET` was executed with no caller on the stack.
    #[error("call stack underflow")]
    StackUnderflow,

    /// A fetch or a memory operation reached past the 4K address space.
    #[error("memory access out of bounds at {0:#05X}")]
    AddressOutOfRange(usize),

    /// The loaded program does not fit between 0x200 and the end of memory.
    #[error("program of {0} bytes does not fit in memory")]
    ProgramTooLarge(usize),
}
