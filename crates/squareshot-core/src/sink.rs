//! Optional persistence of finished captures.
//!
//! Saving is fire-and-forget: the UI inbox logs sink failures and moves on.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;

use crate::encode::{encode_output, EncodeError};
use crate::frame::OutputImage;
use crate::CameraConfig;

/// Errors that can occur while storing a capture.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The image could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Writing the encoded image failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Somewhere finished captures can be stored.
pub trait PhotoSink {
    fn save(&self, image: &OutputImage) -> Result<(), SinkError>;
}

/// Writes captures as numbered JPEG files into a directory.
#[derive(Debug)]
pub struct JpegDirectorySink {
    dir: PathBuf,
    quality: u8,
    next_index: AtomicU64,
}

impl JpegDirectorySink {
    /// Create a sink writing into `dir`, which must already exist.
    pub fn new(dir: impl Into<PathBuf>, quality: u8) -> Self {
        Self {
            dir: dir.into(),
            quality,
            next_index: AtomicU64::new(1),
        }
    }

    /// Create a sink writing into `dir` at the configured JPEG quality.
    pub fn from_config(dir: impl Into<PathBuf>, config: &CameraConfig) -> Self {
        Self::new(dir, config.jpeg_quality)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// Write encoded bytes to the first unused `capture-NNNNN.jpg` name.
    fn write_new_file(&self, bytes: &[u8]) -> Result<PathBuf, SinkError> {
        loop {
            let index = self.next_index.fetch_add(1, Ordering::Relaxed);
            let path = self.dir.join(format!("capture-{index:05}.jpg"));

            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => {
                    write_or_remove(file, &path, bytes)?;
                    return Ok(path);
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Write `bytes` to a freshly created file, removing it if the write fails.
fn write_or_remove<W: Write>(mut file: W, path: &Path, bytes: &[u8]) -> io::Result<()> {
    let result = file.write_all(bytes).and_then(|()| file.flush());
    if result.is_err() {
        drop(file);
        if let Err(e) = std::fs::remove_file(path) {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove partial capture");
        }
    }
    result
}

impl PhotoSink for JpegDirectorySink {
    fn save(&self, image: &OutputImage) -> Result<(), SinkError> {
        let bytes = encode_output(image, self.quality)?;
        let path = self.write_new_file(&bytes)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "saved capture");
        Ok(())
    }
}
