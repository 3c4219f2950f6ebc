//! Preset file storage.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::template;
use crate::cli::Model;
use crate::engine::VoiceParameters;

/// Errors that can occur during preset management.
#[derive(Error, Debug)]
pub enum PresetError {
    #[error("Preset not found: {0}")]
    NotFound(String),

    #[error("Invalid preset name: {0}")]
    InvalidName(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// A saved SSML template with tuning values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    pub ssml_template: String,
    pub similarity_boost: f32,
    pub stability: f32,
    pub style_exaggeration: f32,
    pub speed: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<Model>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Preset {
    /// Build a preset from a sample SSML text and the parameters used with it.
    pub fn from_sample(sample_ssml: &str, params: &VoiceParameters) -> Self {
        let voice_id = Some(params.voice_id.clone()).filter(|v| !v.trim().is_empty());

        Self {
            ssml_template: template::template_from_sample(sample_ssml),
            similarity_boost: params.similarity_boost,
            stability: params.stability,
            style_exaggeration: params.style_exaggeration,
            speed: params.speed,
            voice_id,
            model: Some(params.model),
            created_at: Some(Utc::now().to_rfc3339()),
        }
    }

    /// Parameters this preset stands for; voice is empty if the preset has none.
    pub fn parameters(&self) -> VoiceParameters {
        VoiceParameters {
            model: self.model.unwrap_or_default(),
            voice_id: self.voice_id.clone().unwrap_or_default(),
            similarity_boost: self.similarity_boost,
            stability: self.stability,
            style_exaggeration: self.style_exaggeration,
            speed: self.speed,
        }
    }

    /// Fill the template with `text`.
    pub fn render(&self, text: &str) -> String {
        template::render(&self.ssml_template, text)
    }
}

/// Presets kept in a single JSON file keyed by name.
pub struct PresetStore {
    path: PathBuf,
}

impl PresetStore {
    /// Create a store at the default location.
    ///
    /// Falls back to the working directory when no home directory exists.
    pub fn new() -> Self {
        let path = dirs::home_dir()
            .map(|home| home.join(".eleven-toolkit"))
            .unwrap_or_default()
            .join("presets.json");

        Self { path }
    }

    /// Create a store backed by a custom file.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the preset file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validate a preset name.
    fn validate_name(name: &str) -> Result<(), PresetError> {
        if name.trim().is_empty() {
            return Err(PresetError::InvalidName("Name cannot be empty".to_string()));
        }

        // Names end up in generated file names
        if name.contains('/') || name.contains('\\') || name.contains("..") {
            return Err(PresetError::InvalidName(
                "Name cannot contain path separators".to_string(),
            ));
        }

        Ok(())
    }

    /// Load every preset; a missing file is an empty store.
    pub fn load_all(&self) -> Result<BTreeMap<String, Preset>, PresetError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let json = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn write_all(&self, presets: &BTreeMap<String, Preset>) -> Result<(), PresetError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(presets)?;
        std::fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), count = presets.len(), "presets written");

        Ok(())
    }

    /// Save a preset, replacing any preset with the same name.
    pub fn save(&self, name: &str, preset: &Preset) -> Result<(), PresetError> {
        Self::validate_name(name)?;

        let mut presets = self.load_all()?;
        presets.insert(name.to_string(), preset.clone());
        self.write_all(&presets)
    }

    /// Load one preset.
    pub fn get(&self, name: &str) -> Result<Preset, PresetError> {
        Self::validate_name(name)?;

        self.load_all()?
            .remove(name)
            .ok_or_else(|| PresetError::NotFound(name.to_string()))
    }

    /// Delete one preset.
    pub fn delete(&self, name: &str) -> Result<(), PresetError> {
        Self::validate_name(name)?;

        let mut presets = self.load_all()?;
        if presets.remove(name).is_none() {
            return Err(PresetError::NotFound(name.to_string()));
        }

        self.write_all(&presets)
    }

    /// List all presets sorted by name.
    pub fn list(&self) -> Result<Vec<(String, Preset)>, PresetError> {
        Ok(self.load_all()?.into_iter().collect())
    }
}

impl Default for PresetStore {
    fn default() -> Self {
        Self::new()
    }
}
