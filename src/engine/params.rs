//! Voice parameters and their bounds.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::error::ToolkitError;
use crate::backend::VoiceSettings;
use crate::cli::Model;

/// Range accepted for similarity boost, stability and style exaggeration.
pub const UNIT_RANGE: RangeInclusive<f32> = 0.0..=1.0;

/// Range accepted for the speed multiplier.
pub const SPEED_RANGE: RangeInclusive<f32> = 0.7..=1.2;

/// Voice, model and tuning values for one synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceParameters {
    pub model: Model,
    pub voice_id: String,
    pub similarity_boost: f32,
    pub stability: f32,
    pub style_exaggeration: f32,
    pub speed: f32,
}

impl Default for VoiceParameters {
    fn default() -> Self {
        Self {
            model: Model::default(),
            voice_id: String::new(),
            similarity_boost: 0.5,
            stability: 0.5,
            style_exaggeration: 0.0,
            speed: 1.0,
        }
    }
}

impl VoiceParameters {
    /// Create parameters with default tuning for a voice.
    pub fn for_voice(voice_id: impl Into<String>) -> Self {
        Self {
            voice_id: voice_id.into(),
            ..Default::default()
        }
    }

    /// Check that a voice is set and every value lies within its bounds.
    pub fn validate(&self) -> Result<(), ToolkitError> {
        if self.voice_id.trim().is_empty() {
            return Err(ToolkitError::invalid("voice id cannot be empty"));
        }

        self.validate_tuning()
    }

    /// Check the tuning values only.
    pub fn validate_tuning(&self) -> Result<(), ToolkitError> {
        check_range("similarity_boost", self.similarity_boost, &UNIT_RANGE)?;
        check_range("stability", self.stability, &UNIT_RANGE)?;
        check_range("style_exaggeration", self.style_exaggeration, &UNIT_RANGE)?;
        check_range("speed", self.speed, &SPEED_RANGE)?;

        Ok(())
    }

    /// Tuning values in wire form.
    pub fn voice_settings(&self) -> VoiceSettings {
        VoiceSettings {
            stability: self.stability,
            similarity_boost: self.similarity_boost,
            style_exaggeration: self.style_exaggeration,
            use_speaker_boost: true,
            speed: self.speed,
        }
    }
}

fn check_range(field: &str, value: f32, range: &RangeInclusive<f32>) -> Result<(), ToolkitError> {
    // NaN fails `contains`
    if range.contains(&value) {
        return Ok(());
    }

    Err(ToolkitError::invalid(format!(
        "{field} must be between {} and {}, got {value}",
        range.start(),
        range.end()
    )))
}
