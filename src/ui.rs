// Paints one full window image from the current session state.

use crate::config::AnimatorConfig;
use crate::draw::{
    blit_scaled, draw_crosshair, draw_line, draw_text_5x7, fill_rect, stroke_rect, text_width,
};
use crate::layout::{Layout, Rect};
use crate::onion::OnionSkin;
use crate::preview::PreviewLoop;
use crate::session::Session;
use crate::types::FrameBuffer;

const PANEL: u32 = 0x00_1C_1C_1E;
const BORDER: u32 = 0x00_40_40_46;
const ACCENT: u32 = 0x00_63_66_F1;
const LABEL: u32 = 0x00_A3_A3_A3;
const TEXT: u32 = 0x00_F5_F5_F5;
const DANGER: u32 = 0x00_DC_26_26;
const CURSOR: u32 = 0x00_FF_CC_33;

/// Everything a repaint reads. Nothing here is mutated by painting.
pub struct View<'a> {
    pub session: &'a Session,
    pub frames: &'a [FrameBuffer],
    pub preview: &'a PreviewLoop,
    pub cursor: Option<(f32, f32)>,
    pub status: Option<&'a str>,
}

pub struct Ui {
    pub layout: Layout,
    onion: OnionSkin,
    composed: FrameBuffer, // surface + onion layers, reused every repaint
    scale: usize,
}

impl Ui {
    pub fn new(config: &AnimatorConfig) -> Self {
        Self {
            layout: Layout::new(config),
            onion: OnionSkin::new(config.onion_opacity),
            composed: FrameBuffer::blank(config.canvas_size, config.canvas_size),
            scale: config.scale_factor,
        }
    }

    /// A correctly sized, empty window buffer.
    pub fn screen(&self) -> FrameBuffer {
        FrameBuffer::blank(self.layout.width, self.layout.height)
    }

    pub fn render(&mut self, screen: &mut FrameBuffer, view: &View) {
        screen.fill(PANEL);
        self.paint_frame_list(screen, view);
        self.paint_canvas(screen, view);
        self.paint_preview(screen, view);
    }

    fn paint_frame_list(&self, screen: &mut FrameBuffer, view: &View) {
        let active = view.session.active_index();
        for (i, thumb) in self.layout.thumbs.iter().enumerate() {
            let label = format!("FRAME {}", i + 1);
            draw_text_5x7(screen, thumb.x as i32, thumb.y as i32 - 9, &label, LABEL);
            blit_scaled(screen, &view.frames[i], thumb.x as i32, thumb.y as i32, 1);

            let ring = if i == active { ACCENT } else { BORDER };
            outline(screen, thumb, 2, ring);
            if i == active {
                outline(screen, thumb, 3, ring);
            }

            let c = self.layout.clear_boxes[i];
            fill_rect(screen, c.x as i32, c.y as i32, c.w as i32, c.h as i32, DANGER);
            let (x0, y0) = (c.x as i32 + 2, c.y as i32 + 2);
            let (x1, y1) = (c.right() as i32 - 3, c.bottom() as i32 - 3);
            draw_line(screen, x0, y0, x1, y1, TEXT);
            draw_line(screen, x0, y1, x1, y0, TEXT);
        }
    }

    fn paint_canvas(&mut self, screen: &mut FrameBuffer, view: &View) {
        let session = view.session;
        let canvas = self.layout.canvas;

        self.onion.compose(
            session.surface().buffer(),
            view.frames,
            session.active_index(),
            session.onion_enabled(),
            &mut self.composed,
        );
        blit_scaled(screen, &self.composed, canvas.x as i32, canvas.y as i32, self.scale);
        outline(screen, &canvas, 2, BORDER);

        let title = format!("FRAME {}", session.active_index() + 1);
        draw_text_5x7(screen, canvas.x as i32, canvas.y as i32 - 9, &title, LABEL);

        if let Some((mx, my)) = view.cursor.filter(|&(x, y)| canvas.contains(x, y)) {
            draw_crosshair(screen, mx as i32, my as i32, 6, CURSOR);
        }

        let onion = if session.onion_enabled() { "ONION ON" } else { "ONION OFF" };
        let hud_y = canvas.bottom() as i32 + 6;
        draw_text_5x7(screen, canvas.x as i32, hud_y, onion, TEXT);
        draw_text_5x7(
            screen,
            canvas.x as i32,
            hud_y + 10,
            "O:ONION C:CLEAR 1-9:FRAME S:SAVE",
            LABEL,
        );
        if let Some(status) = view.status {
            let x = canvas.right() as i32 - text_width(status);
            draw_text_5x7(screen, x, hud_y, status, TEXT);
        }
    }

    fn paint_preview(&self, screen: &mut FrameBuffer, view: &View) {
        let pane = self.layout.preview;
        let p = view.preview;
        draw_text_5x7(screen, pane.x as i32, pane.y as i32 - 9, "PREVIEW", LABEL);
        blit_scaled(screen, &view.frames[p.index()], pane.x as i32, pane.y as i32, 1);
        outline(screen, &pane, 2, BORDER);

        let counter = format!("{}/{}", p.index() + 1, view.frames.len());
        let cx = pane.right() as i32 - text_width(&counter) - 1;
        draw_text_5x7(screen, cx, pane.y as i32 + 2, &counter, LABEL);

        let state = if p.is_playing() { "PLAY" } else { "PAUSE" };
        let y = pane.bottom() as i32 + 6;
        draw_text_5x7(screen, pane.x as i32, y, state, TEXT);
        draw_text_5x7(screen, pane.x as i32, y + 10, &format!("FPS {}", p.fps()), TEXT);
        draw_text_5x7(screen, pane.x as i32, y + 20, "SPACE UP/DOWN", LABEL);
    }
}

/// Outline `r` grown outwards by `pad` pixels.
fn outline(screen: &mut FrameBuffer, r: &Rect, pad: i32, color: u32) {
    stroke_rect(
        screen,
        r.x as i32 - pad,
        r.y as i32 - pad,
        r.w as i32 + 2 * pad,
        r.h as i32 + 2 * pad,
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::DecodedFrames;
    use crate::types::{BACKGROUND, FOREGROUND};

    fn paint(ui: &mut Ui, session: &Session, preview: &PreviewLoop) -> FrameBuffer {
        let cache = DecodedFrames::new(session.store());
        let mut screen = ui.screen();
        let view = View { session, frames: cache.as_slice(), preview, cursor: None, status: None };
        ui.render(&mut screen, &view);
        screen
    }

    #[test]
    fn canvas_shows_live_dots_and_onion_skin() {
        let cfg = AnimatorConfig::default();
        let mut ui = Ui::new(&cfg);
        let origin = ui.layout.canvas_origin();
        let mut session = Session::new(&cfg, origin).unwrap();
        let preview = PreviewLoop::new(cfg.frame_count, cfg.fps);

        // frame 0: dot at buffer (10,10); frame 1: dot at buffer (40,40)
        session.pointer_down((origin.0 + 30.0, origin.1 + 30.0));
        session.pointer_up().unwrap();
        session.select_frame(1);
        session.pointer_down((origin.0 + 120.0, origin.1 + 120.0));
        session.pointer_up().unwrap();

        let canvas = ui.layout.canvas;
        let px = |screen: &FrameBuffer, bx: usize, by: usize| {
            screen.get((canvas.x + bx * 3 + 1) as i32, (canvas.y + by * 3 + 1) as i32)
        };

        let screen = paint(&mut ui, &session, &preview);
        assert_eq!(px(&screen, 40, 40), Some(FOREGROUND));
        assert_eq!(px(&screen, 10, 10), Some(0x00_80_80_80), "half-strength onion dot");

        session.toggle_onion();
        let screen = paint(&mut ui, &session, &preview);
        assert_eq!(px(&screen, 10, 10), Some(BACKGROUND));
        assert_eq!(px(&screen, 40, 40), Some(FOREGROUND));
    }

    #[test]
    fn thumbnails_show_each_stored_frame() {
        let cfg = AnimatorConfig::default();
        let mut ui = Ui::new(&cfg);
        let origin = ui.layout.canvas_origin();
        let mut session = Session::new(&cfg, origin).unwrap();
        session.select_frame(3);
        session.pointer_down((origin.0 + 30.0, origin.1 + 30.0));
        session.pointer_up().unwrap();

        let screen = paint(&mut ui, &session, &PreviewLoop::new(4, 5));
        let t3 = ui.layout.thumbs[3];
        let t0 = ui.layout.thumbs[0];
        assert_eq!(screen.get((t3.x + 10) as i32, (t3.y + 10) as i32), Some(FOREGROUND));
        assert_eq!(screen.get((t0.x + 10) as i32, (t0.y + 10) as i32), Some(BACKGROUND));
    }
}
