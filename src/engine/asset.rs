//! Audio inputs and outputs.

use std::path::{Path, PathBuf};

use super::error::ToolkitError;
use crate::backend::AudioUpload;

/// A local audio file supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSource {
    path: PathBuf,
}

impl AudioSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Final path component, used to name outputs and uploads.
    pub fn name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }

    /// Name for reports, falling back to the full path.
    pub fn display_name(&self) -> String {
        self.name()
            .map(str::to_string)
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Read the file into memory for upload.
    pub fn load(&self) -> Result<AudioUpload, ToolkitError> {
        let name = self.name().ok_or_else(|| {
            ToolkitError::invalid(format!("not an audio file path: {}", self.path.display()))
        })?;

        let bytes = std::fs::read(&self.path).map_err(|e| ToolkitError::file_io(&self.path, e))?;

        Ok(AudioUpload::new(name, bytes))
    }
}

impl From<PathBuf> for AudioSource {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

/// Audio produced by the service, held in memory until saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    bytes: Vec<u8>,
}

impl AudioClip {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write the audio to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<(), ToolkitError> {
        std::fs::write(path, &self.bytes).map_err(|e| ToolkitError::file_io(path, e))
    }
}
