use rand::rngs::StdRng;
use rand::Rng;

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_BASE, GLYPH_SIZE, MEMORY_SIZE, STACK_DEPTH};
use crate::fault::Fault;
use crate::opcode::Opcode;
use crate::state::State;

/// Uniform shape of every instruction handler.
///
/// The pc has already advanced past the instruction when a handler runs, so
/// skips add 2 and the key-wait stall subtracts 2.
pub type Operation =
    fn(op: u16, state: &mut State, keys: &[bool; 16], rng: &mut StdRng) -> Result<(), Fault>;

/// clear the display
pub fn clr(_op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    state.frame_buffer = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    state.draw_flag = true;
    Ok(())
}

/// PC = STACK.pop()
pub fn rts(_op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    if state.sp == 0 {
        return Err(Fault::StackUnderflow);
    }
    state.sp -= 1;
    state.pc = state.stack[state.sp];
    Ok(())
}

/// PC = nnn
pub fn jump(op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    state.pc = op.addr();
    Ok(())
}

/// STACK.push(PC); PC = nnn
pub fn call(op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    if state.sp == STACK_DEPTH {
        return Err(Fault::StackOverflow);
    }
    state.stack[state.sp] = state.pc;
    state.sp += 1;
    state.pc = op.addr();
    Ok(())
}

/// if Vx == kk then PC += 2
pub fn ske(op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    if state.v[op.x() as usize] == op.kk() {
        state.pc += 2;
    }
    Ok(())
}

/// if Vx != kk then PC += 2
pub fn skne(op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    if state.v[op.x() as usize] != op.kk() {
        state.pc += 2;
    }
    Ok(())
}

/// if Vx == Vy then PC += 2
pub fn skre(op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    if state.v[op.x() as usize] == state.v[op.y() as usize] {
        state.pc += 2;
    }
    Ok(())
}

/// Vx = kk
pub fn load(op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    state.v[op.x() as usize] = op.kk();
    Ok(())
}

/// Vx += kk, wrapping; VF untouched
pub fn add(op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    let x = op.x() as usize;
    state.v[x] = state.v[x].wrapping_add(op.kk());
    Ok(())
}

/// Vx = Vy
pub fn mv(op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    state.v[op.x() as usize] = state.v[op.y() as usize];
    Ok(())
}

/// Vx |= Vy
pub fn or(op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    state.v[op.x() as usize] |= state.v[op.y() as usize];
    Ok(())
}

/// Vx &= Vy
pub fn and(op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    state.v[op.x() as usize] &= state.v[op.y() as usize];
    Ok(())
}

/// Vx ^= Vy
pub fn xor(op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    state.v[op.x() as usize] ^= state.v[op.y() as usize];
    Ok(())
}

/// Vx += Vy; VF = carry
pub fn addr(op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    let (res, over) = state.v[op.x() as usize].overflowing_add(state.v[op.y() as usize]);
    state.v[0xF] = over as u8;
    state.v[op.x() as usize] = res;
    Ok(())
}

/// Vx -= Vy; VF = no borrow (Vx > Vy)
pub fn sub(op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    let vx = state.v[op.x() as usize];
    let vy = state.v[op.y() as usize];
    state.v[0xF] = (vx > vy) as u8;
    state.v[op.x() as usize] = vx.wrapping_sub(vy);
    Ok(())
}

/// Vx >>= 1; VF = the bit shifted out
pub fn shr(op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    let vx = state.v[op.x() as usize];
    state.v[0xF] = vx & 0x1;
    state.v[op.x() as usize] = vx >> 1;
    Ok(())
}

/// Vx = Vy - Vx; VF = no borrow (Vy > Vx)
pub fn subn(op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    let vx = state.v[op.x() as usize];
    let vy = state.v[op.y() as usize];
    state.v[0xF] = (vy > vx) as u8;
    state.v[op.x() as usize] = vy.wrapping_sub(vx);
    Ok(())
}

/// Vx <<= 1; VF = the bit shifted out
pub fn shl(op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    let vx = state.v[op.x() as usize];
    state.v[0xF] = (vx & 0x80) >> 7;
    state.v[op.x() as usize] = vx << 1;
    Ok(())
}

/// if Vx != Vy then PC += 2
pub fn skrne(op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    if state.v[op.x() as usize] != state.v[op.y() as usize] {
        state.pc += 2;
    }
    Ok(())
}

/// I = nnn
pub fn loadi(op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    state.i = op.addr();
    Ok(())
}

/// PC = nnn + V0 (COSMAC VIP form; always V0, never Vx)
pub fn jumpi(op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    state.pc = op.addr() + u16::from(state.v[0x0]);
    Ok(())
}

/// Vx = random byte & kk
pub fn rand(op: u16, state: &mut State, _keys: &[bool; 16], rng: &mut StdRng) -> Result<(), Fault> {
    state.v[op.x() as usize] = rng.gen::<u8>() & op.kk();
    Ok(())
}

/// XOR an n-row sprite from memory[I..] onto the display at (Vx, Vy).
///
/// Coordinates wrap per pixel. VF reports whether any lit pixel was erased.
pub fn draw(op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    let vx = state.v[op.x() as usize] as usize;
    let vy = state.v[op.y() as usize] as usize;

    state.v[0xF] = 0x0;
    for row in 0..op.n() as usize {
        let addr = state.i as usize + row;
        if addr >= MEMORY_SIZE {
            return Err(Fault::AddressOutOfRange(addr));
        }
        let sprite = state.memory[addr];
        for col in 0..8 {
            let pixel = (sprite >> (7 - col)) & 1 == 1;
            let x = (vx + col) % DISPLAY_WIDTH;
            let y = (vy + row) % DISPLAY_HEIGHT;
            let prev = state.frame_buffer[y][x];
            state.frame_buffer[y][x] = prev ^ pixel;
            if prev && pixel {
                state.v[0xF] = 0x1;
            }
        }
    }
    state.draw_flag = true;
    Ok(())
}

/// if key Vx is pressed then PC += 2
pub fn skpr(op: u16, state: &mut State, keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    if keys[(state.v[op.x() as usize] & 0xF) as usize] {
        state.pc += 2;
    }
    Ok(())
}

/// if key Vx is not pressed then PC += 2
pub fn skup(op: u16, state: &mut State, keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    if !keys[(state.v[op.x() as usize] & 0xF) as usize] {
        state.pc += 2;
    }
    Ok(())
}

/// Vx = delay timer
pub fn moved(op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    state.v[op.x() as usize] = state.delay_timer;
    Ok(())
}

/// Vx = next keypress; stalls by re-fetching itself until a key is down.
///
/// Keys are scanned 0-F in ascending order, so the lowest pressed key wins.
pub fn keyd(op: u16, state: &mut State, keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    match keys.iter().position(|&pressed| pressed) {
        Some(key) => state.v[op.x() as usize] = key as u8,
        None => state.pc -= 2,
    }
    Ok(())
}

/// delay timer = Vx
pub fn loads(op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    state.delay_timer = state.v[op.x() as usize];
    Ok(())
}

/// sound timer = Vx
pub fn ld(op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    state.sound_timer = state.v[op.x() as usize];
    Ok(())
}

/// I += Vx, wrapping at 16 bits
pub fn addi(op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    state.i = state.i.wrapping_add(u16::from(state.v[op.x() as usize]));
    Ok(())
}

/// I = address of the font glyph for digit Vx
pub fn ldspr(op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    state.i = (FONT_BASE + state.v[op.x() as usize] as usize * GLYPH_SIZE) as u16;
    Ok(())
}

/// memory[I..I+3] = hundreds, tens, ones of Vx
pub fn bcd(op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    let i = state.i as usize;
    if i + 2 >= MEMORY_SIZE {
        return Err(Fault::AddressOutOfRange(i + 2));
    }
    let val = state.v[op.x() as usize];
    state.memory[i] = val / 100;
    state.memory[i + 1] = val / 10 % 10;
    state.memory[i + 2] = val % 10;
    Ok(())
}

/// memory[I..=I+x] = V0..=Vx
pub fn stor(op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    let x = op.x() as usize;
    let i = state.i as usize;
    if i + x >= MEMORY_SIZE {
        return Err(Fault::AddressOutOfRange(i + x));
    }
    state.memory[i..=i + x].copy_from_slice(&state.v[0x0..=x]);
    Ok(())
}

/// V0..=Vx = memory[I..=I+x]
pub fn read(op: u16, state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    let x = op.x() as usize;
    let i = state.i as usize;
    if i + x >= MEMORY_SIZE {
        return Err(Fault::AddressOutOfRange(i + x));
    }
    state.v[0x0..=x].copy_from_slice(&state.memory[i..=i + x]);
    Ok(())
}

/// Unrecognized opcodes execute as nothing at all, per interpreter tradition.
pub fn noop(_op: u16, _state: &mut State, _keys: &[bool; 16], _rng: &mut StdRng) -> Result<(), Fault> {
    Ok(())
}
