use sdl2::pixels::PixelFormatEnum;

use vip8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use vip8_core::state::FrameBuffer;

const SCALE: usize = 10;

/// # Display
/// Renders the machine's 64x32 monochrome framebuffer into an SDL2 window at
/// a fixed integer scale.
///
/// This is a pure collaborator: it draws only when handed a frame, which the
/// driver takes from the machine when the machine reports a change.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
}

impl Display {
    /// Opens a window on the given SDL2 context.
    pub fn new(sdl: &sdl2::Sdl) -> Self {
        let video_subsystem = sdl.video().unwrap();
        let window = video_subsystem
            .window(
                "VIP-8",
                (DISPLAY_WIDTH * SCALE) as u32,
                (DISPLAY_HEIGHT * SCALE) as u32,
            )
            .position_centered()
            .opengl()
            .build()
            .unwrap();
        let canvas = window.into_canvas().build().unwrap();

        Display { canvas }
    }

    /// Flattens a framebuffer into an RGB24 texture buffer: rows are
    /// concatenated and every lit pixel becomes three 0xFF channel bytes.
    fn frame_to_texture(frame: &FrameBuffer) -> Vec<u8> {
        frame
            .iter()
            .flat_map(|row| row.iter())
            .flat_map(|&lit| {
                let channel = if lit { 0xFF } else { 0x00 };
                std::iter::repeat(channel).take(3)
            })
            .collect()
    }

    /// Uploads the frame as a streaming texture and presents it.
    pub fn render(&mut self, frame: &FrameBuffer) {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .unwrap();

        texture
            .with_lock(None, |buffer: &mut [u8], _pitch: usize| {
                buffer.copy_from_slice(&Display::frame_to_texture(frame));
            })
            .unwrap();

        self.canvas.copy(&texture, None, None).unwrap();
        self.canvas.present()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_to_texture() {
        let mut frame: FrameBuffer = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        frame[0][1] = true;
        frame[1][0] = true;
        let texture = Display::frame_to_texture(&frame);

        let mut expected: Vec<u8> = vec![0; DISPLAY_WIDTH * DISPLAY_HEIGHT * 3];
        expected[3..6].copy_from_slice(&[0xFF, 0xFF, 0xFF]);
        expected[192..195].copy_from_slice(&[0xFF, 0xFF, 0xFF]);

        assert_eq!(texture, expected);
    }
}
