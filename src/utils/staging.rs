use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::TempPath;
use tracing::debug;

/// An uploaded audio payload written to a uniquely named `.wav` file.
///
/// The file is removed by [`StagedAudio::cleanup`] or, failing that, on drop.
/// Removal errors are never reported.
#[derive(Debug)]
pub struct StagedAudio {
    path: PathBuf,
    temp: Option<TempPath>,
}

impl StagedAudio {
    /// Write `bytes` to a new file inside `dir`.
    pub fn stage(dir: &Path, bytes: &[u8]) -> io::Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("assess-")
            .suffix(".wav")
            .tempfile_in(dir)?;
        file.write_all(bytes)?;
        file.flush()?;

        let temp = file.into_temp_path();
        let path = temp.to_path_buf();
        debug!("Staged {} bytes of audio at {}", bytes.len(), path.display());

        Ok(Self {
            path,
            temp: Some(temp),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the staged file. Safe to call more than once, and when the file
    /// was already removed by someone else.
    pub fn cleanup(&mut self) {
        if let Some(temp) = self.temp.take() {
            match temp.close() {
                Ok(()) => debug!("Removed staged audio {}", self.path.display()),
                Err(e) => debug!(
                    "Ignoring cleanup failure for {}: {}",
                    self.path.display(),
                    e
                ),
            }
        }
    }
}

impl Drop for StagedAudio {
    fn drop(&mut self) {
        self.cleanup();
    }
}
