//! Engine and the synthesis flow.

use std::collections::BTreeMap;

use tracing::info;

use super::asset::AudioClip;
use super::error::ToolkitError;
use super::params::VoiceParameters;
use crate::backend::{Backend, SynthesizeRequest};

/// Runs the flows against a backend.
pub struct TTSEngine<B: Backend> {
    pub(super) backend: B,
}

impl<B: Backend> TTSEngine<B> {
    /// Create a new engine.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Synthesize speech from text.
    ///
    /// The text is sent as-is, so embedded SSML reaches the service
    /// unmodified. Nothing is sent unless the text is non-empty and the
    /// parameters are within bounds.
    pub fn synthesize(
        &self,
        text: &str,
        params: &VoiceParameters,
        output_format: Option<&str>,
    ) -> Result<AudioClip, ToolkitError> {
        if text.trim().is_empty() {
            return Err(ToolkitError::invalid("text cannot be empty"));
        }
        params.validate()?;

        let request = SynthesizeRequest {
            text: text.to_string(),
            model_id: params.model,
            voice_settings: params.voice_settings(),
            voice_id: params.voice_id.clone(),
            output_format: output_format.map(str::to_string),
        };

        info!(voice = %params.voice_id, model = params.model.as_str(), chars = text.len(), "synthesizing");
        let audio = self.backend.synthesize(&request)?;
        info!(bytes = audio.len(), "synthesis complete");

        Ok(AudioClip::new(audio))
    }

    /// Map a user-supplied voice (name or id) to an id.
    ///
    /// Values shaped like voice ids (20 or more ASCII alphanumerics) are
    /// returned as-is; anything else is looked up in the account's voices.
    pub fn resolve_voice(&self, voice: &str) -> Result<String, ToolkitError> {
        let voice = voice.trim();
        if voice.is_empty() {
            return Err(ToolkitError::invalid("voice cannot be empty"));
        }

        let looks_like_id = voice.len() >= 20 && voice.chars().all(|c| c.is_ascii_alphanumeric());
        if looks_like_id {
            return Ok(voice.to_string());
        }

        Ok(self.voice_directory()?.resolve(voice))
    }

    /// Fetch the account's voices as a name to id map.
    pub fn voice_directory(&self) -> Result<VoiceDirectory, ToolkitError> {
        let response = self.backend.list_voices()?;
        Ok(VoiceDirectory {
            voices: response
                .voices
                .into_iter()
                .map(|v| (v.name, v.voice_id))
                .collect(),
        })
    }
}

/// Voice names available to the account, mapped to their ids.
#[derive(Debug, Clone, Default)]
pub struct VoiceDirectory {
    voices: BTreeMap<String, String>,
}

impl VoiceDirectory {
    /// Map a voice name to its id; unknown input is assumed to be an id already.
    pub fn resolve(&self, name_or_id: &str) -> String {
        self.voices
            .get(name_or_id)
            .cloned()
            .unwrap_or_else(|| name_or_id.to_string())
    }

    /// Voices sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.voices.iter().map(|(n, id)| (n.as_str(), id.as_str()))
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }
}
