// One still of the animation, stored as an encoded PNG blob.
// Frames are never edited in place: a new snapshot replaces the old one.

use std::io::Cursor;
use std::sync::Arc;

use image::{ImageBuffer, ImageFormat, Rgb};

use crate::error::{Error, Result};
use crate::types::{FrameBuffer, pack_rgb, unpack_rgb};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    bytes: Arc<[u8]>,
}

impl Frame {
    /// Wrap an already-encoded blob. Nothing is validated until decode.
    pub fn from_bytes(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self { bytes: bytes.into() }
    }

    /// The canonical blank frame: background color everywhere.
    pub fn blank(width: usize, height: usize) -> Result<Self> {
        Self::encode(&FrameBuffer::blank(width, height))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Encode a pixel buffer losslessly.
    pub fn encode(fb: &FrameBuffer) -> Result<Self> {
        let mut raw = Vec::with_capacity(fb.pixels.len() * 3);
        for &px in &fb.pixels {
            raw.extend_from_slice(&unpack_rgb(px));
        }
        let img: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::from_raw(fb.width as u32, fb.height as u32, raw)
                .ok_or_else(|| Error::Encode("pixel count does not match dimensions".into()))?;

        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| Error::Encode(e.to_string()))?;
        Ok(Self::from_bytes(bytes))
    }

    /// Decode the blob, insisting on the expected dimensions.
    /// Either the whole buffer comes back or an error does; never a partial image.
    pub fn decode(&self, width: usize, height: usize) -> Result<FrameBuffer> {
        let rgb = image::load_from_memory_with_format(&self.bytes, ImageFormat::Png)
            .map_err(|e| Error::decode(e.to_string()))?
            .to_rgb8();

        let (w, h) = rgb.dimensions();
        if w as usize != width || h as usize != height {
            return Err(Error::decode(format!("expected {width}x{height}, got {w}x{h}")));
        }

        let pixels = rgb.pixels().map(|p| pack_rgb(p.0)).collect();
        Ok(FrameBuffer { width, height, pixels })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BACKGROUND, FOREGROUND};

    #[test]
    fn blank_decodes_to_background() {
        let fb = Frame::blank(120, 120).unwrap().decode(120, 120).unwrap();
        assert_eq!(fb.pixels.len(), 120 * 120);
        assert!(fb.is_uniform(BACKGROUND));
    }

    #[test]
    fn encode_is_pixel_exact() {
        let mut fb = FrameBuffer::blank(7, 5);
        fb.pixels[0] = FOREGROUND;
        fb.pixels[12] = 0x00_12_34_56;
        fb.pixels[34] = 0x00_80_80_80;
        let back = Frame::encode(&fb).unwrap().decode(7, 5).unwrap();
        assert_eq!(back, fb);
    }

    #[test]
    fn decode_rejects_garbage() {
        let err = Frame::from_bytes(vec![1u8, 2, 3, 4]).decode(4, 4).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn decode_rejects_wrong_dimensions() {
        let frame = Frame::blank(8, 8).unwrap();
        assert!(matches!(frame.decode(16, 16), Err(Error::Decode(_))));
    }

    #[test]
    fn clones_share_the_blob() {
        let a = Frame::blank(4, 4).unwrap();
        let b = a.clone();
        assert!(std::ptr::eq(a.bytes().as_ptr(), b.bytes().as_ptr()));
    }
}
