//! API request/response types.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::Model;

/// Errors that can occur when talking to the ElevenLabs API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Request rejected: {0}")]
    Validation(String),

    #[error("Remote service error (HTTP {status}): {message}")]
    RemoteService { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// API key held in memory for the session.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into().trim().to_string())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Tuning values sent alongside a synthesis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
    #[serde(rename = "style")]
    pub style_exaggeration: f32,
    pub use_speaker_boost: bool,
    pub speed: f32,
}

/// Request for speech synthesis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynthesizeRequest {
    pub text: String,
    pub model_id: Model,
    pub voice_settings: VoiceSettings,
    /// Voice id, sent as part of the URL path.
    #[serde(skip)]
    pub voice_id: String,
    /// Encoding such as `mp3_44100_128`, sent as a query parameter.
    #[serde(skip)]
    pub output_format: Option<String>,
}

/// An input audio file read into memory for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioUpload {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl AudioUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_for(&file_name);
        Self {
            file_name,
            mime_type,
            bytes,
        }
    }
}

fn mime_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "wav" => "audio/wav",
        "ogg" | "oga" => "audio/ogg",
        "flac" => "audio/flac",
        "m4a" | "mp4" => "audio/mp4",
        "webm" => "audio/webm",
        _ => "audio/mpeg",
    }
}

/// Request for adding a cloned voice.
#[derive(Debug, Clone, PartialEq)]
pub struct CloneRequest {
    pub name: String,
    pub description: Option<String>,
    pub samples: Vec<AudioUpload>,
}

/// Response from the add-voice endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloneResponse {
    pub voice_id: String,
    #[serde(default)]
    pub requires_verification: bool,
}

/// Voice information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceInfo {
    pub voice_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Response from list voices endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoicesResponse {
    #[serde(default)]
    pub voices: Vec<VoiceInfo>,
}
