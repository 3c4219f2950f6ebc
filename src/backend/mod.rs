//! Communication with the ElevenLabs API.
//!
//! Provides the [`Backend`] trait the flows are written against and an
//! HTTP implementation that talks to the hosted service.

mod client;
mod types;

pub use client::{DEFAULT_BASE_URL, HttpBackend};
pub use types::{
    ApiError, AudioUpload, CloneRequest, CloneResponse, Credential, SynthesizeRequest, VoiceInfo,
    VoiceSettings, VoicesResponse,
};

/// Trait for API communication.
///
/// Each method performs exactly one network call and never retries,
/// allowing for mock implementations in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Backend: Send + Sync {
    /// Synthesize speech from text.
    ///
    /// # Returns
    /// Raw encoded audio (MP3 unless another output format was requested)
    fn synthesize(&self, request: &SynthesizeRequest) -> Result<Vec<u8>, ApiError>;

    /// Re-voice an existing recording with the target voice.
    fn convert_voice(&self, audio: &AudioUpload, voice_id: &str) -> Result<Vec<u8>, ApiError>;

    /// Create a new voice from audio samples.
    fn clone_voice(&self, request: &CloneRequest) -> Result<CloneResponse, ApiError>;

    /// List the voices available to the account.
    fn list_voices(&self) -> Result<VoicesResponse, ApiError>;
}

/// Create an HTTP backend for the given host.
pub fn create_backend(credential: Credential, base_url: &str) -> HttpBackend {
    HttpBackend::new(credential, base_url)
}
