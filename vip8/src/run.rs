use std::path::PathBuf;
use std::time::{Duration, Instant};

use beep::beep;
use log::{error, info, warn};
use sdl2::event::Event;

use vip8_core::{Chip8, CLOCK_SPEED, TIMER_RATE};
use vip8_display::Display;

use crate::keymap::keymap;

/// CPU instructions executed per 60 Hz frame.
const STEPS_PER_FRAME: u32 = CLOCK_SPEED / TIMER_RATE;

const BEEP_PITCH: u16 = 880;

/// Drives the machine: a 60 Hz frame loop that runs a batch of CPU steps,
/// ticks the timers once, renders changed frames, and toggles the beeper.
///
/// A fault from the machine halts the run; that policy lives here, not in
/// the core.
pub fn run(rom: PathBuf) {
    let mut chip8 = Chip8::new();

    let program = std::fs::read(&rom).expect("unable to read ROM file");
    if let Err(fault) = chip8.load_program(&program) {
        error!("refusing to start: {}", fault);
        return;
    }
    info!("loaded {} byte ROM from {}", program.len(), rom.display());

    let sdl = sdl2::init().unwrap();
    let mut display = Display::new(&sdl);
    let mut events = sdl.event_pump().unwrap();

    let frame_time = Duration::from_nanos(1_000_000_000 / u64::from(TIMER_RATE));
    let mut last_frame = Instant::now();
    let mut beeping = false;

    'frame: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'frame,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.set_key_down(kc);
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.set_key_up(kc);
                    }
                }
                _ => continue,
            }
        }

        // The CPU runs a fixed multiple of the timer rate; both cadences are
        // pinned to this frame loop so they stay decoupled from each other.
        for _ in 0..STEPS_PER_FRAME {
            if let Err(fault) = chip8.step() {
                error!("halting emulation: {}", fault);
                break 'frame;
            }
        }
        chip8.tick_timers();

        if let Some(frame) = chip8.consume_frame() {
            display.render(&frame);
        }

        if chip8.is_sound_active() != beeping {
            beeping = !beeping;
            let pitch = if beeping { BEEP_PITCH } else { 0 };
            if beep(pitch).is_err() && beeping {
                warn!("no beeper available; continuing silently");
            }
        }

        // Sleep off the rest of the frame
        let elapsed = last_frame.elapsed();
        if frame_time > elapsed {
            std::thread::sleep(frame_time - elapsed);
        }
        last_frame = Instant::now();
    }

    let _ = beep(0);
}
