// Onion skin: earlier frames drawn faintly over the live surface.
// Uses a screen blend so the black background of each earlier frame adds
// nothing; only its white dots lighten what is below.

use std::ops::Range;

use crate::types::{FrameBuffer, pack_rgb, unpack_rgb};

/// Which frames show as onion skin: every index strictly below `active`, or none.
pub fn onion_layers(active: usize, enabled: bool) -> Range<usize> {
    if enabled { 0..active } else { 0..0 }
}

/// Screen one channel: 1 - (1-a)(1-b), in 0..255 integer space.
#[inline]
fn screen_u8(dst: u8, src: u8) -> u8 {
    let inv = (255 - dst as u16) * (255 - src as u16);
    (255 - (inv + 127) / 255) as u8
}

/// Screen `src` onto `dst`, then mix with the original by `opacity`.
#[inline]
pub fn screen_blend(dst: u32, src: u32, opacity: f32) -> u32 {
    let d = unpack_rgb(dst);
    let s = unpack_rgb(src);
    let mut out = [0u8; 3];
    for c in 0..3 {
        let screened = screen_u8(d[c], s[c]) as f32;
        let base = d[c] as f32;
        out[c] = (base + (screened - base) * opacity).round().clamp(0.0, 255.0) as u8;
    }
    pack_rgb(out)
}

pub struct OnionSkin {
    pub opacity: f32,
}

impl OnionSkin {
    pub fn new(opacity: f32) -> Self {
        Self { opacity }
    }

    /// Write the live surface into `out`, then screen each onion layer over it in order.
    pub fn compose(
        &self,
        surface: &FrameBuffer,
        frames: &[FrameBuffer],
        active: usize,
        enabled: bool,
        out: &mut FrameBuffer,
    ) {
        out.width = surface.width;
        out.height = surface.height;
        out.pixels.clear();
        out.pixels.extend_from_slice(&surface.pixels);

        for j in onion_layers(active, enabled) {
            let layer = &frames[j];
            if layer.width != out.width || layer.height != out.height {
                continue;
            }
            for (dst, &src) in out.pixels.iter_mut().zip(&layer.pixels) {
                if src == 0 {
                    continue; // black contributes nothing under screen
                }
                *dst = screen_blend(*dst, src, self.opacity);
            }
        }
    }
}
