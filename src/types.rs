// Core pixel types shared by the surface, the compositor and the window.

/// Background: frames start out as this color everywhere.
pub const BACKGROUND: u32 = 0x00_00_00_00;
/// Foreground: every stamped dot is this color.
pub const FOREGROUND: u32 = 0x00_FF_FF_FF;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: usize,     // buffer width in pixels
    pub height: usize,    // buffer height in pixels
    pub pixels: Vec<u32>, // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A buffer of the given size with every pixel set to `color`.
    pub fn filled(width: usize, height: usize, color: u32) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }

    pub fn blank(width: usize, height: usize) -> Self {
        Self::filled(width, height, BACKGROUND)
    }

    /// Pixel at (x,y), or None when outside the buffer.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    pub fn fill(&mut self, color: u32) {
        for p in &mut self.pixels {
            *p = color;
        }
    }

    pub fn is_uniform(&self, color: u32) -> bool {
        self.pixels.iter().all(|&p| p == color)
    }
}

#[inline]
pub fn unpack_rgb(px: u32) -> [u8; 3] {
    [((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8]
}

#[inline]
pub fn pack_rgb([r, g, b]: [u8; 3]) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_and_unpack_agree() {
        assert_eq!(unpack_rgb(0x00_12_34_56), [0x12, 0x34, 0x56]);
        assert_eq!(pack_rgb([0x12, 0x34, 0x56]), 0x00_12_34_56);
    }

    #[test]
    fn get_rejects_out_of_bounds() {
        let fb = FrameBuffer::blank(4, 3);
        assert_eq!(fb.get(3, 2), Some(BACKGROUND));
        assert_eq!(fb.get(4, 0), None);
        assert_eq!(fb.get(0, -1), None);
    }
}
