pub mod blend;
pub mod draw;

use std::ops;

pub use blend::Argb;

/// A point on the canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct P2(pub i32, pub i32);

impl P2 {
    pub fn scale(self, s: i32) -> P2 {
        P2(self.0 * s, self.1 * s)
    }
}

impl ops::Add for P2 {
    type Output = P2;
    fn add(self, other: P2) -> P2 {
        P2(self.0 + other.0, self.1 + other.1)
    }
}

// Always non-negative, so a point can be wrapped into `[0, bound)`.
impl ops::Rem for P2 {
    type Output = P2;
    fn rem(self, bound: P2) -> P2 {
        P2(self.0.rem_euclid(bound.0), self.1.rem_euclid(bound.1))
    }
}

/// CPU side frame buffer. Everything is drawn here first, then
/// copied into the window surface with [`Canvas::scale_to`].
pub struct Canvas {
    buffer: Vec<Argb>,
    width: usize,
    height: usize,

    color: Argb,
    background: Argb,
}

impl Canvas {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            buffer: vec![blend::BLACK; w * h],
            width: w,
            height: h,

            color: blend::WHITE,
            background: blend::BLACK,
        }
    }

    pub fn color(&mut self, c: Argb) {
        self.color = c;
    }

    pub fn set_background(&mut self, bg: Argb) {
        self.background = bg;
    }

    #[cfg(test)]
    pub fn as_slice(&self) -> &[Argb] {
        &self.buffer
    }

    /// Fills the whole canvas with the background colour.
    pub fn clear(&mut self) {
        self.buffer.fill(self.background);
    }

    #[cfg(test)]
    pub fn pixel(&self, p: P2) -> Option<Argb> {
        if p.0 < 0 || p.1 < 0 {
            return None;
        }

        let (x, y) = (p.0 as usize, p.1 as usize);

        if x >= self.width || y >= self.height {
            return None;
        }

        self.buffer.get(y * self.width + x).copied()
    }

    // The surface may be a little larger than `width * scale` on some
    // compositors, so `dst_width` is the actual row length of `dest`.
    pub fn scale_to(&self, scale: usize, dest: &mut [Argb], dst_width: usize) {
        if self.width == 0 || scale == 0 || dst_width == 0 {
            return;
        }

        for (y, dst_row) in dest.chunks_exact_mut(dst_width).enumerate() {
            let sy = y / scale;

            let Some(src_row) = self.buffer.chunks_exact(self.width).nth(sy) else {
                dst_row.fill(self.background);
                continue;
            };

            let mut chunks = dst_row.chunks_mut(scale);

            for (src_pixel, dst_chunk) in src_row.iter().zip(&mut chunks) {
                dst_chunk.fill(*src_pixel);
            }

            chunks.for_each(|rest| rest.fill(self.background));
        }
    }
}
