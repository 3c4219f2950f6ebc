//! Voice cloning flow.

use tracing::info;

use super::asset::AudioSource;
use super::error::ToolkitError;
use super::tts::TTSEngine;
use crate::backend::{Backend, CloneRequest};

/// A voice created from samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClonedVoice {
    pub voice_id: String,
    pub name: String,
    pub requires_verification: bool,
}

impl<B: Backend> TTSEngine<B> {
    /// Create a new voice from one or more samples.
    ///
    /// All samples are read before anything is sent; an unreadable sample
    /// aborts the flow without a request.
    pub fn clone_voice(
        &self,
        name: &str,
        description: Option<&str>,
        samples: &[AudioSource],
    ) -> Result<ClonedVoice, ToolkitError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ToolkitError::invalid("voice name cannot be empty"));
        }
        if samples.is_empty() {
            return Err(ToolkitError::invalid("at least one audio sample is required"));
        }

        let uploads = samples
            .iter()
            .map(AudioSource::load)
            .collect::<Result<Vec<_>, _>>()?;

        let request = CloneRequest {
            name: name.to_string(),
            description: description
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            samples: uploads,
        };

        info!(name, samples = request.samples.len(), "cloning voice");
        let response = self.backend.clone_voice(&request)?;
        info!(voice_id = %response.voice_id, "voice created");

        Ok(ClonedVoice {
            voice_id: response.voice_id,
            name: request.name,
            requires_verification: response.requires_verification,
        })
    }
}
