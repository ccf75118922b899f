/// # Opcodes
///
/// A Chip-8 instruction is a single 16-bit word. The top nibble selects a
/// dispatch group; depending on the group the remaining nibbles are either
/// part of the selector or operands:
/// - `(_, n, n, n)` a 12-bit address or immediate (nnn)
/// - `(_, x, _, _)` the index of register Vx
/// - `(_, _, y, _)` the index of register Vy
/// - `(_, _, k, k)` an 8-bit immediate (kk)
/// - `(_, _, _, n)` a 4-bit immediate, usually a sub-operation selector
///
/// Decoding is total: all 65536 words decode, and words that match no
/// instruction are the executor's problem (it ignores them).
pub trait Opcode {
    /// All four nibbles, most significant first; the first is the group.
    fn nibbles(&self) -> (u8, u8, u8, u8);

    /// The register index in `[_x__]`.
    fn x(&self) -> u8;

    /// The register index in `[__y_]`.
    fn y(&self) -> u8;

    /// The 4-bit immediate in `[___n]`.
    fn n(&self) -> u8;

    /// The 8-bit immediate in `[__kk]`.
    fn kk(&self) -> u8;

    /// The 12-bit address in `[_nnn]`.
    fn addr(&self) -> u16;
}

impl Opcode for u16 {
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        ((self >> 12) as u8, self.x(), self.y(), self.n())
    }

    fn x(&self) -> u8 {
        ((self & 0x0F00) >> 8) as u8
    }

    fn y(&self) -> u8 {
        ((self & 0x00F0) >> 4) as u8
    }

    fn n(&self) -> u8 {
        (self & 0x000F) as u8
    }

    fn kk(&self) -> u8 {
        (self & 0x00FF) as u8
    }

    fn addr(&self) -> u16 {
        self & 0x0FFF
    }
}
