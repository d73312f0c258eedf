// The per-iteration controller: turns polled mouse state and key commands
// into session / preview operations, then repaints.
// It never touches the window, so it can be driven headless.

use std::time::Instant;

use tracing::{error, info};

use crate::cache::DecodedFrames;
use crate::config::AnimatorConfig;
use crate::error::Result;
use crate::export::export_to_dir;
use crate::layout::FrameAction;
use crate::preview::PreviewLoop;
use crate::session::Session;
use crate::types::FrameBuffer;
use crate::ui::{Ui, View};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleOnion,
    ClearActive,
    TogglePlay,
    Faster,
    Slower,
    Select(usize),
    Export,
}

pub struct App {
    config: AnimatorConfig,
    session: Session,
    preview: PreviewLoop,
    cache: DecodedFrames,
    ui: Ui,
    button_was_down: bool,
    cursor: Option<(f32, f32)>,
    status: Option<String>,
}

impl App {
    /// Fresh session; onion skin on, preview playing from `now`.
    pub fn new(config: AnimatorConfig, now: Instant) -> Result<Self> {
        config.validate()?;
        let ui = Ui::new(&config);
        let session = Session::new(&config, ui.layout.canvas_origin())?;
        let cache = DecodedFrames::new(session.store());
        let mut preview = PreviewLoop::new(config.frame_count, config.fps);
        preview.play(now);

        Ok(Self {
            config,
            session,
            preview,
            cache,
            ui,
            button_was_down: false,
            cursor: None,
            status: None,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn preview(&self) -> &PreviewLoop {
        &self.preview
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn canvas_origin(&self) -> (f32, f32) {
        self.ui.layout.canvas_origin()
    }

    pub fn window_size(&self) -> (usize, usize) {
        (self.ui.layout.width, self.ui.layout.height)
    }

    /// Feed the mouse state for this iteration. `pos` is None when the pointer
    /// is outside the window.
    ///
    /// Leaving the canvas or releasing the button ends a stroke (and commits it).
    /// Only a fresh press starts one; dragging back in with the button held does not.
    pub fn pointer(&mut self, pos: Option<(f32, f32)>, down: bool) -> Result<()> {
        let pressed = down && !self.button_was_down;
        self.button_was_down = down;
        self.cursor = pos;

        let canvas = self.ui.layout.canvas;
        let on_canvas = pos.filter(|&(x, y)| canvas.contains(x, y));

        if self.session.is_drawing() {
            match on_canvas {
                Some(p) if down => self.session.pointer_move(p),
                _ => self.session.pointer_up()?,
            }
            return Ok(());
        }

        if !pressed {
            return Ok(());
        }
        if let Some(p) = on_canvas {
            self.session.pointer_down(p);
        } else if let Some((x, y)) = pos {
            match self.ui.layout.hit_frame(x, y) {
                Some(FrameAction::Select(i)) => self.session.select_frame(i),
                Some(FrameAction::Clear(i)) => self.session.clear_frame(i),
                None => {}
            }
        }
        Ok(())
    }

    pub fn command(&mut self, cmd: Command, now: Instant) {
        match cmd {
            Command::ToggleOnion => self.session.toggle_onion(),
            Command::ClearActive => {
                let i = self.session.active_index();
                self.session.clear_frame(i);
            }
            Command::TogglePlay => self.preview.toggle(now),
            Command::Faster => self.preview.set_fps(self.preview.fps() + 1),
            Command::Slower => self.preview.set_fps(self.preview.fps().saturating_sub(1)),
            Command::Select(i) => {
                // number keys beyond the frame count are ignored
                if i < self.session.store().len() {
                    self.session.select_frame(i);
                }
            }
            Command::Export => self.export(),
        }
    }

    /// Advance the preview clock and pick up any frames that changed.
    pub fn update(&mut self, now: Instant) {
        self.preview.poll(now);
        self.cache.refresh(self.session.store());
    }

    pub fn render(&mut self, screen: &mut FrameBuffer) {
        let view = View {
            session: &self.session,
            frames: self.cache.as_slice(),
            preview: &self.preview,
            cursor: self.cursor,
            status: self.status.as_deref(),
        };
        self.ui.render(screen, &view);
    }

    pub fn screen(&self) -> FrameBuffer {
        self.ui.screen()
    }

    fn export(&mut self) {
        let dir = &self.config.out_dir;
        let status = match export_to_dir(self.session.store(), dir) {
            Ok(report) if report.is_complete() => {
                info!(dir = %dir.display(), files = report.written.len(), "export finished");
                format!("SAVED {}", report.written.len())
            }
            Ok(report) => {
                error!(dir = %dir.display(), failed = report.failed.len(), "export incomplete");
                format!("SAVED {} FAILED {}", report.written.len(), report.failed.len())
            }
            Err(e) => {
                error!(dir = %dir.display(), error = %e, "export failed");
                "EXPORT FAILED".to_owned()
            }
        };
        self.status = Some(status);
    }
}
