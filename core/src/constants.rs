/// Total addressable memory in bytes.
pub const MEMORY_SIZE: usize = 4096;

/// Where the font sprite sheet is loaded in memory.
pub const FONT_BASE: usize = 0x50;

/// Where programs are loaded and where execution begins.
pub const PROGRAM_START: usize = 0x200;

/// Bytes per font glyph; glyphs are 8x5 pixels.
pub const GLYPH_SIZE: usize = 5;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Maximum call depth before a push faults.
pub const STACK_DEPTH: usize = 16;

/// Suggested CPU clock for drivers, in instructions per second.
pub const CLOCK_SPEED: u32 = 600;

/// Rate at which the delay and sound timers count down, in Hz.
/// Drivers must call `tick_timers` at this rate regardless of clock speed.
pub const TIMER_RATE: u32 = 60;

/// Sprites for the hex digits 0-F, one glyph per digit.
///
/// Each glyph is 5 bytes; each byte is one 8-pixel row with the glyph in the
/// high nibble. `Fx29` points the index register at these.
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
