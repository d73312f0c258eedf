// Pointer gesture state: Idle until the button goes down on the canvas,
// Drawing until it comes up or the pointer leaves.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gesture {
    #[default]
    Idle,
    Drawing,
}

impl Gesture {
    pub fn is_drawing(self) -> bool {
        self == Gesture::Drawing
    }

    /// Pointer down. Always ends up Drawing; a repeated down is harmless.
    pub fn begin(&mut self) {
        *self = Gesture::Drawing;
    }

    /// Pointer up / leave. Returns true only on the Drawing -> Idle edge,
    /// which is the one place a snapshot must be committed.
    pub fn end(&mut self) -> bool {
        std::mem::take(self).is_drawing()
    }
}
