use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_BASE, MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET,
    STACK_DEPTH,
};

/// The monochrome display contents, indexed as `[y][x]`; `true` is a lit pixel.
pub type FrameBuffer = [[bool; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// # State
/// Everything the virtual CPU owns, with no behavior of its own.
///
/// ## Registers
/// - (v) 16 8-bit registers V0..VF
///     - VF doubles as the carry/borrow/collision flag; arithmetic and draw
///       instructions overwrite it freely
/// - (i) the 16-bit index register, used as a memory cursor
///
/// ## Control
/// - (pc) the 16-bit program counter, starting at 0x200
/// - (stack) 16 return addresses and (sp) the number of them in use
///
/// ## Timers
/// - (delay_timer, sound_timer) 8-bit countdowns, decremented at 60 Hz by the
///   driver; sound is audible while sound_timer > 0
///
/// ## Memory and display
/// - 4096 bytes of memory with the font sheet at 0x50 and programs at 0x200
/// - a 64x32 1-bit frame buffer and (draw_flag) set whenever it changes
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: usize,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_DEPTH],
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
}

impl State {
    pub fn new() -> Self {
        let mut memory = [0; MEMORY_SIZE];
        memory[FONT_BASE..FONT_BASE + SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);

        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START as u16,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_DEPTH],
            memory,
            frame_buffer: [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            draw_flag: false,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
