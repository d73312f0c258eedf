// Export: one PNG per frame, named by 1-based position like the on-screen labels.
// Best effort: a failed file is reported and the rest are still written.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::Result;
use crate::store::FrameStore;

/// Where exported files go.
pub trait ExportSink {
    fn write_file(&mut self, name: &str, bytes: &[u8]) -> io::Result<()>;
}

/// Writes files into an existing directory; `export_to_dir` creates it.
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportSink for DirectorySink {
    fn write_file(&mut self, name: &str, bytes: &[u8]) -> io::Result<()> {
        fs::write(self.dir.join(name), bytes)
    }
}

pub fn frame_file_name(index: usize) -> String {
    format!("frame_{}.png", index + 1)
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub written: Vec<String>,
    pub failed: Vec<(String, String)>, // (file name, error message)
}

impl ExportReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Hand every frame's blob to the sink, in order. The store is only read.
pub fn export_frames(store: &FrameStore, sink: &mut dyn ExportSink) -> ExportReport {
    let mut report = ExportReport::default();
    for (i, frame) in store.iter().enumerate() {
        let name = frame_file_name(i);
        match sink.write_file(&name, frame.bytes()) {
            Ok(()) => {
                info!(file = %name, bytes = frame.bytes().len(), "frame exported");
                report.written.push(name);
            }
            Err(e) => {
                warn!(file = %name, error = %e, "frame export failed");
                report.failed.push((name, e.to_string()));
            }
        }
    }
    report
}

/// Export into a directory. Fails up front only if the directory cannot be created.
pub fn export_to_dir(store: &FrameStore, dir: &Path) -> Result<ExportReport> {
    let mut sink = DirectorySink::new(dir);
    fs::create_dir_all(sink.dir())?;
    Ok(export_frames(store, &mut sink))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Frame;
    use crate::types::{FOREGROUND, FrameBuffer};

    #[derive(Default)]
    struct MemorySink {
        files: Vec<(String, Vec<u8>)>,
        fail_on: Option<String>,
    }

    impl ExportSink for MemorySink {
        fn write_file(&mut self, name: &str, bytes: &[u8]) -> io::Result<()> {
            if self.fail_on.as_deref() == Some(name) {
                return Err(io::Error::other("sink refused"));
            }
            self.files.push((name.to_owned(), bytes.to_vec()));
            Ok(())
        }
    }

    #[test]
    fn one_file_per_frame_with_its_blob() {
        let mut store = FrameStore::new(4, 8, 8).unwrap();
        store.set(2, Frame::encode(&FrameBuffer::filled(8, 8, FOREGROUND)).unwrap());

        let mut sink = MemorySink::default();
        let report = export_frames(&store, &mut sink);

        assert!(report.is_complete());
        let names: Vec<_> = sink.files.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["frame_1.png", "frame_2.png", "frame_3.png", "frame_4.png"]);
        for (i, (_, bytes)) in sink.files.iter().enumerate() {
            assert_eq!(bytes.as_slice(), store.get(i).bytes());
        }
    }

    #[test]
    fn failures_are_reported_and_the_rest_still_written() {
        let store = FrameStore::new(3, 4, 4).unwrap();
        let before: Vec<_> = store.iter().cloned().collect();
        let mut sink = MemorySink { fail_on: Some("frame_2.png".into()), ..Default::default() };

        let report = export_frames(&store, &mut sink);
        assert_eq!(report.written, ["frame_1.png", "frame_3.png"]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "frame_2.png");
        assert!(!report.is_complete());

        let after: Vec<_> = store.iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn only_export_to_dir_creates_the_directory() {
        let dir = std::env::temp_dir()
            .join(format!("dot-animator-sink-{}", std::process::id()))
            .join("nested");
        let _ = fs::remove_dir_all(dir.parent().unwrap());
        let store = FrameStore::new(2, 4, 4).unwrap();

        // a bare sink does not create anything, so every write fails
        let report = export_frames(&store, &mut DirectorySink::new(&dir));
        assert!(report.written.is_empty());
        assert_eq!(report.failed.len(), 2);
        assert!(!dir.exists());

        let report = export_to_dir(&store, &dir).unwrap();
        assert!(report.is_complete());
        for i in 0..2 {
            assert_eq!(fs::read(dir.join(frame_file_name(i))).unwrap(), store.get(i).bytes());
        }

        fs::remove_dir_all(dir.parent().unwrap()).unwrap();
    }
}
