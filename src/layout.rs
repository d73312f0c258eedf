// Window geometry: thumbnail column on the left, the scaled canvas in the
// middle, the preview pane on the right. Everything derives from the config.

use crate::config::AnimatorConfig;

const MARGIN: usize = 12;
const CAPTION: usize = 10; // 7px glyphs plus breathing room
const CLEAR_BOX: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

impl Rect {
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x as f32
            && py >= self.y as f32
            && px < (self.x + self.w) as f32
            && py < (self.y + self.h) as f32
    }

    pub fn bottom(&self) -> usize {
        self.y + self.h
    }

    pub fn right(&self) -> usize {
        self.x + self.w
    }
}

/// Window size `Layout::new` would produce, or None if the arithmetic overflows.
/// Config validation uses this before anything is allocated.
pub fn window_extent(config: &AnimatorConfig) -> Option<(usize, usize)> {
    let size = config.canvas_size;
    let scaled = size.checked_mul(config.scale_factor)?;
    let slot = size.checked_add(CAPTION + MARGIN)?;

    let column_bottom = config.frame_count.checked_mul(slot)?;
    let canvas_bottom = scaled.checked_add(MARGIN + CAPTION)?;
    let preview_bottom = size.checked_add(MARGIN + CAPTION)?;
    let height = column_bottom
        .max(canvas_bottom.checked_add(3 * CAPTION)?)
        .max(preview_bottom.checked_add(4 * CAPTION)?)
        .checked_add(MARGIN)?;

    let width = size
        .checked_mul(2)?
        .checked_add(scaled)?
        .checked_add(MARGIN * 4)?;
    Some((width, height))
}

/// What a click on the frame column asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameAction {
    Select(usize),
    Clear(usize),
}

#[derive(Clone, Debug)]
pub struct Layout {
    pub width: usize,
    pub height: usize,
    pub thumbs: Vec<Rect>,
    pub clear_boxes: Vec<Rect>,
    pub canvas: Rect,
    pub preview: Rect,
}

impl Layout {
    pub fn new(config: &AnimatorConfig) -> Self {
        let size = config.canvas_size;
        let slot = CAPTION + size + MARGIN;

        let thumbs: Vec<Rect> = (0..config.frame_count)
            .map(|i| Rect { x: MARGIN, y: MARGIN + i * slot + CAPTION, w: size, h: size })
            .collect();
        let clear_boxes = thumbs
            .iter()
            .map(|t| Rect { x: t.right() - CLEAR_BOX - 1, y: t.y + 1, w: CLEAR_BOX, h: CLEAR_BOX })
            .collect();

        let canvas = Rect {
            x: MARGIN * 2 + size,
            y: MARGIN + CAPTION,
            w: size * config.scale_factor,
            h: size * config.scale_factor,
        };
        let preview = Rect { x: canvas.right() + MARGIN, y: canvas.y, w: size, h: size };

        let column_bottom = thumbs.last().map_or(0, Rect::bottom);
        let height = column_bottom
            .max(canvas.bottom() + 3 * CAPTION)
            .max(preview.bottom() + 4 * CAPTION)
            + MARGIN;
        let width = preview.right() + MARGIN;

        Self { width, height, thumbs, clear_boxes, canvas, preview }
    }

    /// Display position of canvas pixel (0,0); the origin pointer mapping uses.
    pub fn canvas_origin(&self) -> (f32, f32) {
        (self.canvas.x as f32, self.canvas.y as f32)
    }

    /// Resolve a click in the thumbnail column. The clear box wins over its thumbnail.
    pub fn hit_frame(&self, px: f32, py: f32) -> Option<FrameAction> {
        if let Some(i) = self.clear_boxes.iter().position(|r| r.contains(px, py)) {
            return Some(FrameAction::Clear(i));
        }
        self.thumbs.iter().position(|r| r.contains(px, py)).map(FrameAction::Select)
    }
}
