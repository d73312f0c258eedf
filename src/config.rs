// Session constants. Fixed once at startup; nothing changes them afterwards.

use std::path::PathBuf;

use clap::Parser;

use crate::error::{Error, Result};
use crate::layout::window_extent;

pub const MIN_FPS: u32 = 1;
pub const MAX_FPS: u32 = 12;
/// Largest canvas side; keeps every pixel coordinate well inside u32/i32.
pub const MAX_CANVAS_SIZE: usize = 4096;
/// Largest window side the layout may ask for.
pub const MAX_WINDOW_EXTENT: usize = 8192;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "dot-animator",
    version,
    about = "Draw white dots across a few frames and export them as PNGs"
)]
pub struct AnimatorConfig {
    /// Canvas width and height in buffer pixels (the canvas is square).
    #[arg(long = "size", default_value_t = 120)]
    pub canvas_size: usize,

    /// Radius of every stamped dot, in buffer pixels.
    #[arg(long = "radius", default_value_t = 2)]
    pub dot_radius: i32,

    /// Number of frames in the animation.
    #[arg(long = "frames", default_value_t = 4)]
    pub frame_count: usize,

    /// Display pixels per buffer pixel on the editing canvas.
    #[arg(long = "scale", default_value_t = 3)]
    pub scale_factor: usize,

    /// Initial preview rate (1..=12).
    #[arg(long, default_value_t = 5)]
    pub fps: u32,

    /// Opacity of each onion-skin layer.
    #[arg(long = "onion-opacity", default_value_t = 0.5)]
    pub onion_opacity: f32,

    /// Directory that exported frames are written to.
    #[arg(long = "out-dir", default_value = ".")]
    pub out_dir: PathBuf,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            canvas_size: 120,
            dot_radius: 2,
            frame_count: 4,
            scale_factor: 3,
            fps: 5,
            onion_opacity: 0.5,
            out_dir: PathBuf::from("."),
        }
    }
}

impl AnimatorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.canvas_size == 0 {
            return Err(Error::config("canvas size must be at least 1"));
        }
        if self.canvas_size > MAX_CANVAS_SIZE {
            return Err(Error::config(format!(
                "canvas size {} exceeds {MAX_CANVAS_SIZE}",
                self.canvas_size
            )));
        }
        if self.frame_count == 0 {
            return Err(Error::config("frame count must be at least 1"));
        }
        if self.scale_factor == 0 {
            return Err(Error::config("scale factor must be at least 1"));
        }
        if self.dot_radius < 0 || self.dot_radius as usize >= self.canvas_size {
            return Err(Error::config(format!(
                "dot radius {} does not fit a {}px canvas",
                self.dot_radius, self.canvas_size
            )));
        }
        if !(MIN_FPS..=MAX_FPS).contains(&self.fps) {
            return Err(Error::config(format!("fps {} outside {MIN_FPS}..={MAX_FPS}", self.fps)));
        }
        if !(0.0..=1.0).contains(&self.onion_opacity) {
            return Err(Error::config("onion opacity must be within 0..=1"));
        }
        match window_extent(self) {
            Some((w, h)) if w <= MAX_WINDOW_EXTENT && h <= MAX_WINDOW_EXTENT => Ok(()),
            Some((w, h)) => Err(Error::config(format!(
                "window of {w}x{h} exceeds {MAX_WINDOW_EXTENT}px"
            ))),
            None => Err(Error::config("canvas size, scale and frame count overflow the window")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_cli_defaults() {
        let parsed = AnimatorConfig::parse_from(["dot-animator"]);
        assert_eq!(parsed, AnimatorConfig::default());
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn cli_overrides_apply() {
        let parsed = AnimatorConfig::parse_from([
            "dot-animator",
            "--frames",
            "8",
            "--scale",
            "2",
            "--fps",
            "12",
        ]);
        assert_eq!(parsed.frame_count, 8);
        assert_eq!(parsed.scale_factor, 2);
        assert_eq!(parsed.fps, 12);
    }

    #[test]
    fn largest_accepted_window_stays_within_limits() {
        let cfg = AnimatorConfig { canvas_size: 2000, scale_factor: 2, ..Default::default() };
        assert!(cfg.validate().is_ok());
        let (w, h) = window_extent(&cfg).unwrap();
        assert!(w <= MAX_WINDOW_EXTENT && h <= MAX_WINDOW_EXTENT);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let bad = [
            AnimatorConfig { frame_count: 0, ..Default::default() },
            AnimatorConfig { scale_factor: 0, ..Default::default() },
            AnimatorConfig { dot_radius: 120, ..Default::default() },
            AnimatorConfig { fps: 13, ..Default::default() },
            AnimatorConfig { fps: 0, ..Default::default() },
            AnimatorConfig { onion_opacity: 1.5, ..Default::default() },
            AnimatorConfig { canvas_size: MAX_CANVAS_SIZE + 1, ..Default::default() },
            AnimatorConfig { canvas_size: 70_000, scale_factor: 3, ..Default::default() },
            AnimatorConfig {
                canvas_size: usize::MAX / 4,
                scale_factor: usize::MAX / 4,
                ..Default::default()
            },
            // each side fits on its own, the scaled canvas does not
            AnimatorConfig { canvas_size: 2048, scale_factor: 4, ..Default::default() },
            AnimatorConfig { frame_count: 1000, ..Default::default() },
            AnimatorConfig { frame_count: usize::MAX, ..Default::default() },
        ];
        for cfg in bad {
            assert!(matches!(cfg.validate(), Err(Error::Config(_))), "{cfg:?}");
        }
    }
}
