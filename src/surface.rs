// The editable pixel buffer. One frame is "checked out" into it at a time.
// Visual: this is the black square you draw white dots on.

use crate::error::Result;
use crate::frame::Frame;
use crate::types::{FOREGROUND, FrameBuffer};

/// Map a display-space point to buffer coordinates.
/// `buffer = floor((display - origin) / scale)`; floor, not round or truncate,
/// so points left of / above the origin land on negative cells.
#[inline]
pub fn map_display_to_buffer(display: (f32, f32), origin: (f32, f32), scale: f32) -> (i32, i32) {
    let x = ((display.0 - origin.0) / scale).floor() as i32;
    let y = ((display.1 - origin.1) / scale).floor() as i32;
    (x, y)
}

/// Precomputed filled disk: every offset with dx² + dy² ≤ r².
pub struct DiskStamp {
    radius: i32,
    pub offsets: Vec<(i32, i32)>,
}

impl DiskStamp {
    pub fn new(radius: i32) -> Self {
        let r2 = radius * radius;
        let mut offsets = Vec::new();
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r2 {
                    offsets.push((dx, dy));
                }
            }
        }
        Self { radius, offsets }
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }
}

pub struct RasterSurface {
    buffer: FrameBuffer,
    stamp: DiskStamp,
}

impl RasterSurface {
    pub fn new(width: usize, height: usize, dot_radius: i32) -> Self {
        Self {
            buffer: FrameBuffer::blank(width, height),
            stamp: DiskStamp::new(dot_radius),
        }
    }

    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    pub fn dot_radius(&self) -> i32 {
        self.stamp.radius()
    }

    /// Replace the buffer with the decoded frame.
    /// On a decode failure the previous content stays put and the error is returned.
    pub fn bind(&mut self, frame: &Frame) -> Result<()> {
        let decoded = frame.decode(self.buffer.width, self.buffer.height)?;
        self.buffer = decoded;
        Ok(())
    }

    /// Fill the disk centred on (px,py) with the foreground color.
    /// Only ever sets pixels, so stamping twice is the same as stamping once.
    pub fn stamp_dot(&mut self, px: i32, py: i32) {
        let w = self.buffer.width as i32;
        let h = self.buffer.height as i32;
        for &(dx, dy) in &self.stamp.offsets {
            let (x, y) = (px + dx, py + dy);
            if x < 0 || y < 0 || x >= w || y >= h {
                continue; // clipped at the canvas edge
            }
            let idx = y as usize * self.buffer.width + x as usize;
            self.buffer.pixels[idx] = FOREGROUND;
        }
    }

    pub fn snapshot(&self) -> Result<Frame> {
        Frame::encode(&self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BACKGROUND;

    #[test]
    fn mapping_floors_scaled_coordinates() {
        assert_eq!(map_display_to_buffer((41.0, 7.0), (0.0, 0.0), 2.0), (20, 3));
        assert_eq!(map_display_to_buffer((8.9, 2.99), (0.0, 0.0), 3.0), (2, 0));
        assert_eq!(map_display_to_buffer((110.0, 60.0), (100.0, 50.0), 3.0), (3, 3));
        // left of the origin floors towards negative infinity
        assert_eq!(map_display_to_buffer((99.0, 50.0), (100.0, 50.0), 3.0), (-1, 0));
    }

    #[test]
    fn disk_of_radius_two_has_thirteen_cells() {
        let stamp = DiskStamp::new(2);
        assert_eq!(stamp.offsets.len(), 13);
        assert!(stamp.offsets.contains(&(2, 0)));
        assert!(!stamp.offsets.contains(&(2, 1)));
        assert_eq!(DiskStamp::new(0).offsets, vec![(0, 0)]);
    }

    #[test]
    fn surface_reports_its_dot_radius() {
        assert_eq!(DiskStamp::new(3).radius(), 3);
        let s = RasterSurface::new(20, 20, 4);
        assert_eq!(s.dot_radius(), 4);
        // the farthest offset on either axis is the radius itself
        assert!(s.stamp.offsets.contains(&(4, 0)));
        assert!(!s.stamp.offsets.contains(&(5, 0)));
    }

    #[test]
    fn stamping_twice_equals_stamping_once() {
        let mut once = RasterSurface::new(20, 20, 2);
        once.stamp_dot(5, 5);
        let mut twice = RasterSurface::new(20, 20, 2);
        twice.stamp_dot(5, 5);
        twice.stamp_dot(5, 5);
        assert_eq!(once.buffer(), twice.buffer());
    }

    #[test]
    fn stamps_clip_at_edges() {
        let mut s = RasterSurface::new(10, 10, 2);
        s.stamp_dot(0, 0);
        s.stamp_dot(-5, 40);
        let lit = s.buffer().pixels.iter().filter(|&&p| p == FOREGROUND).count();
        // only the in-bounds quarter of the first disk survives
        assert_eq!(lit, 6);
    }

    #[test]
    fn bind_then_snapshot_round_trips() {
        let mut src = RasterSurface::new(16, 16, 3);
        src.stamp_dot(8, 8);
        src.stamp_dot(1, 14);
        let frame = src.snapshot().unwrap();

        let mut dst = RasterSurface::new(16, 16, 3);
        dst.bind(&frame).unwrap();
        assert_eq!(dst.snapshot().unwrap().decode(16, 16).unwrap(), frame.decode(16, 16).unwrap());
        assert_eq!(dst.buffer(), src.buffer());
    }

    #[test]
    fn failed_bind_keeps_previous_pixels() {
        let mut s = RasterSurface::new(8, 8, 1);
        s.stamp_dot(4, 4);
        let before = s.buffer().clone();
        assert!(s.bind(&Frame::from_bytes(vec![0u8; 10])).is_err());
        assert_eq!(s.buffer(), &before);
        assert!(!s.buffer().is_uniform(BACKGROUND));
    }
}
