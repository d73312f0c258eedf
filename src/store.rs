// The animation: a fixed-length, ordered list of frames.
// Indices are validated by the UI before they get here; an out-of-range index
// is a bug, so it panics like any slice index would.

use crate::error::Result;
use crate::frame::Frame;

pub struct FrameStore {
    frames: Vec<Frame>,
    revisions: Vec<u64>, // bumped on every replace, lets views skip re-decoding
    blank: Frame,
    width: usize,
    height: usize,
}

impl FrameStore {
    /// `count` blank frames of `width`×`height`. The length never changes afterwards.
    pub fn new(count: usize, width: usize, height: usize) -> Result<Self> {
        let blank = Frame::blank(width, height)?;
        Ok(Self {
            frames: vec![blank.clone(); count],
            revisions: vec![0; count],
            blank,
            width,
            height,
        })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn get(&self, i: usize) -> &Frame {
        &self.frames[i]
    }

    /// Replace frame `i` wholesale.
    pub fn set(&mut self, i: usize, frame: Frame) {
        self.frames[i] = frame;
        self.revisions[i] += 1;
    }

    /// Reset frame `i` to the canonical blank frame.
    pub fn clear(&mut self, i: usize) {
        let blank = self.blank.clone();
        self.set(i, blank);
    }

    pub fn revision(&self, i: usize) -> u64 {
        self.revisions[i]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BACKGROUND, FOREGROUND, FrameBuffer};

    #[test]
    fn fresh_store_is_all_blank() {
        for n in 1..=5 {
            let store = FrameStore::new(n, 12, 12).unwrap();
            assert_eq!(store.len(), n);
            for i in 0..n {
                assert!(store.get(i).decode(12, 12).unwrap().is_uniform(BACKGROUND));
            }
        }
    }

    #[test]
    fn set_replaces_only_that_slot() {
        let mut store = FrameStore::new(3, 4, 4).unwrap();
        let white = Frame::encode(&FrameBuffer::filled(4, 4, FOREGROUND)).unwrap();
        store.set(1, white.clone());

        assert_eq!(store.get(1), &white);
        assert_eq!(store.revision(1), 1);
        assert_eq!(store.revision(0), 0);
        assert!(store.get(0).decode(4, 4).unwrap().is_uniform(BACKGROUND));
    }

    #[test]
    fn clear_restores_blank_and_bumps_revision() {
        let mut store = FrameStore::new(2, 4, 4).unwrap();
        store.set(0, Frame::encode(&FrameBuffer::filled(4, 4, FOREGROUND)).unwrap());
        store.clear(0);
        assert!(store.get(0).decode(4, 4).unwrap().is_uniform(BACKGROUND));
        assert_eq!(store.revision(0), 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    #[should_panic]
    fn out_of_range_index_is_a_bug() {
        let store = FrameStore::new(2, 4, 4).unwrap();
        let _ = store.get(2);
    }
}
