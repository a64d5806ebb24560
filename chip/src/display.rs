//! The monochrome framebuffer of the chip.
use crate::definitions::display::{HEIGHT, WIDTH};

/// The full set of pixels, indexed as `frame[y][x]`.
pub type Frame = [[bool; WIDTH]; HEIGHT];

/// The graphics of the Chip 8 are black and white and the screen has a total of `2048` pixels
/// `(64 x 32)`. The buffer is only ever changed by clearing it or by drawing a sprite onto it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Display {
    pixels: Box<Frame>,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            pixels: Box::new([[false; WIDTH]; HEIGHT]),
        }
    }
}

impl Display {
    pub fn new() -> Self {
        Display::default()
    }

    /// Turns every pixel off.
    pub fn clear(&mut self) {
        for row in self.pixels.iter_mut() {
            row.fill(false);
        }
    }

    /// Draws the sprite `rows` with its upper left corner at `(x, y)`.
    ///
    /// Every row is 8 pixels wide, the most significant bit being the leftmost pixel. The
    /// sprite is composed with XOR and wraps around both display edges. Returns `true` if
    /// any pixel was switched from on to off.
    pub fn draw_sprite(&mut self, x: usize, y: usize, rows: &[u8]) -> bool {
        const BYTE: usize = 8;

        let mut collision = false;
        for (i, row) in rows.iter().enumerate() {
            let py = (y + i) % HEIGHT;

            for j in 0..BYTE {
                let mask: u8 = 0x80 >> j;
                if row & mask == 0 {
                    continue;
                }

                let px = (x + j) % WIDTH;
                let pixel = &mut self.pixels[py][px];
                collision |= *pixel;
                *pixel = !*pixel;
            }
        }
        collision
    }

    /// Returns the pixel at `(x, y)`, both coordinates wrap around the display edges.
    #[cfg(test)]
    fn pixel(&self, x: usize, y: usize) -> bool {
        self.pixels[y % HEIGHT][x % WIDTH]
    }

    pub fn get_pixels(&self) -> &Frame {
        &self.pixels
    }

    /// Counts the pixels that are currently on.
    #[cfg(test)]
    fn lit(&self) -> usize {
        self.pixels
            .iter()
            .map(|row| row.iter().filter(|pixel| **pixel).count())
            .sum()
    }
}
