// Session state owned by the app loop: the animation, the surface checked out
// from it, which frame is active, and whether onion skin is on.
// Pointer positions come in as display coordinates and are mapped here.

use tracing::{debug, info, warn};

use crate::config::AnimatorConfig;
use crate::error::Result;
use crate::gesture::Gesture;
use crate::store::FrameStore;
use crate::surface::{RasterSurface, map_display_to_buffer};

pub struct Session {
    store: FrameStore,
    surface: RasterSurface,
    active: usize,
    onion_enabled: bool,
    gesture: Gesture,
    origin: (f32, f32), // display position of buffer pixel (0,0)
    scale: f32,
}

impl Session {
    /// Blank animation, frame 0 active, onion skin on.
    pub fn new(config: &AnimatorConfig, origin: (f32, f32)) -> Result<Self> {
        let size = config.canvas_size;
        let store = FrameStore::new(config.frame_count, size, size)?;
        let mut surface = RasterSurface::new(size, size, config.dot_radius);
        surface.bind(store.get(0))?;

        info!(frames = config.frame_count, size, radius = surface.dot_radius(), "session started");
        Ok(Self {
            store,
            surface,
            active: 0,
            onion_enabled: true,
            gesture: Gesture::Idle,
            origin,
            scale: config.scale_factor as f32,
        })
    }

    pub fn store(&self) -> &FrameStore {
        &self.store
    }

    pub fn surface(&self) -> &RasterSurface {
        &self.surface
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn onion_enabled(&self) -> bool {
        self.onion_enabled
    }

    pub fn is_drawing(&self) -> bool {
        self.gesture.is_drawing()
    }

    /// Start a stroke and stamp right away, so a plain click leaves a dot.
    pub fn pointer_down(&mut self, display: (f32, f32)) {
        self.gesture.begin();
        self.stamp_at(display);
    }

    /// Stamp at the new position while a stroke is active. Sparse samples are
    /// not joined up, so a fast drag can leave gaps between dots.
    pub fn pointer_move(&mut self, display: (f32, f32)) {
        if self.gesture.is_drawing() {
            self.stamp_at(display);
        }
    }

    /// Pointer up or leave: commit the surface into the active frame.
    /// A no-op when no stroke is in progress.
    pub fn pointer_up(&mut self) -> Result<()> {
        if self.gesture.end() {
            self.commit()?;
        }
        Ok(())
    }

    pub fn select_frame(&mut self, i: usize) {
        assert!(i < self.store.len(), "frame index {i} out of range");
        if let Err(e) = self.pointer_up() {
            warn!(error = %e, frame = self.active, "stroke lost while switching frames");
        }
        self.active = i;
        self.rebind();
        info!(frame = i, "frame selected");
    }

    /// Blank frame `i`. When it is the active frame the surface follows immediately.
    pub fn clear_frame(&mut self, i: usize) {
        self.store.clear(i);
        if i == self.active {
            self.gesture = Gesture::Idle;
            self.rebind();
        }
        info!(frame = i, "frame cleared");
    }

    pub fn toggle_onion(&mut self) {
        self.onion_enabled = !self.onion_enabled;
        info!(enabled = self.onion_enabled, "onion skin toggled");
    }

    fn stamp_at(&mut self, display: (f32, f32)) {
        let (x, y) = map_display_to_buffer(display, self.origin, self.scale);
        self.surface.stamp_dot(x, y);
    }

    fn commit(&mut self) -> Result<()> {
        let frame = self.surface.snapshot()?;
        self.store.set(self.active, frame);
        let revision = self.store.revision(self.active);
        debug!(frame = self.active, revision, "stroke committed");
        Ok(())
    }

    fn rebind(&mut self) {
        // a bad blob leaves the old pixels on screen rather than garbage
        if let Err(e) = self.surface.bind(self.store.get(self.active)) {
            warn!(error = %e, frame = self.active, "could not load frame, keeping previous pixels");
        }
    }
}
