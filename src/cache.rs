// Decoded copies of every stored frame, refreshed only when a slot's revision moves.
// Thumbnails, onion skin and preview all read from here instead of decoding
// PNG blobs every loop iteration.

use tracing::warn;

use crate::store::FrameStore;
use crate::types::FrameBuffer;

pub struct DecodedFrames {
    frames: Vec<FrameBuffer>,
    seen: Vec<Option<u64>>,
}

impl DecodedFrames {
    pub fn new(store: &FrameStore) -> Self {
        let (w, h) = store.dimensions();
        let mut cache = Self {
            frames: vec![FrameBuffer::blank(w, h); store.len()],
            seen: vec![None; store.len()],
        };
        cache.refresh(store);
        cache
    }

    /// Re-decode every slot whose revision changed. Returns how many were decoded.
    /// A slot is swapped only after its decode fully succeeds.
    pub fn refresh(&mut self, store: &FrameStore) -> usize {
        let (w, h) = store.dimensions();
        let mut decoded = 0;
        for i in 0..store.len() {
            let rev = store.revision(i);
            if self.seen[i] == Some(rev) {
                continue;
            }
            match store.get(i).decode(w, h) {
                Ok(fb) => {
                    self.frames[i] = fb;
                    decoded += 1;
                }
                Err(e) => {
                    warn!(error = %e, frame = i, "frame failed to decode, showing last good copy");
                }
            }
            self.seen[i] = Some(rev);
        }
        decoded
    }

    pub fn get(&self, i: usize) -> &FrameBuffer {
        &self.frames[i]
    }

    pub fn as_slice(&self) -> &[FrameBuffer] {
        &self.frames
    }
}
