//! HTTP client for the ElevenLabs API.

use reqwest::Url;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{RequestBuilder, Response};
use tracing::debug;

use super::Backend;
use super::types::{
    ApiError, AudioUpload, CloneRequest, CloneResponse, Credential, SynthesizeRequest,
    VoicesResponse,
};

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";

const API_KEY_HEADER: &str = "xi-api-key";

/// HTTP-based API client.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::blocking::Client,
    credential: Credential,
}

impl HttpBackend {
    /// Create a new client for the given API host.
    pub fn new(credential: Credential, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
            credential,
        }
    }

    /// Get the base URL for this client.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an endpoint URL; each segment is percent-encoded on its own.
    fn url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::Validation(format!("invalid base URL: {e}")))?;

        url.path_segments_mut()
            .map_err(|()| ApiError::Validation(format!("invalid base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// Attach the credential, send, and map non-2xx statuses.
    fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        if self.credential.is_empty() {
            return Err(ApiError::Authentication("missing API key".to_string()));
        }

        let response = builder
            .header(API_KEY_HEADER, self.credential.expose())
            .send()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "API response");

        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
        Err(match status.as_u16() {
            401 | 403 => ApiError::Authentication(message),
            400 | 422 => ApiError::Validation(message),
            code => ApiError::RemoteService {
                status: code,
                message,
            },
        })
    }

    fn read_audio(response: Response) -> Result<Vec<u8>, ApiError> {
        let audio = response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if audio.is_empty() {
            return Err(ApiError::InvalidResponse("empty audio payload".to_string()));
        }

        Ok(audio)
    }

    fn file_part(upload: &AudioUpload) -> Result<Part, ApiError> {
        Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(upload.mime_type)
            .map_err(|e| ApiError::Validation(e.to_string()))
    }
}

impl Backend for HttpBackend {
    fn synthesize(&self, request: &SynthesizeRequest) -> Result<Vec<u8>, ApiError> {
        let url = self.url(&["v1", "text-to-speech", request.voice_id.as_str(), "stream"])?;
        debug!(%url, model = request.model_id.as_str(), "synthesize");

        let mut builder = self.client.post(url).json(request);
        if let Some(format) = &request.output_format {
            builder = builder.query(&[("output_format", format)]);
        }

        let response = self.send(builder)?;
        Self::read_audio(response)
    }

    fn convert_voice(&self, audio: &AudioUpload, voice_id: &str) -> Result<Vec<u8>, ApiError> {
        let url = self.url(&["v1", "voice-conversion", voice_id, "stream"])?;
        debug!(%url, file = %audio.file_name, "convert voice");

        let form = Form::new().part("audio", Self::file_part(audio)?);

        let response = self.send(self.client.post(url).multipart(form))?;
        Self::read_audio(response)
    }

    fn clone_voice(&self, request: &CloneRequest) -> Result<CloneResponse, ApiError> {
        let url = self.url(&["v1", "voices", "add"])?;
        debug!(%url, name = %request.name, samples = request.samples.len(), "clone voice");

        let mut form = Form::new()
            .text("name", request.name.clone())
            .text("description", request.description.clone().unwrap_or_default());

        for sample in &request.samples {
            form = form.part("files", Self::file_part(sample)?);
        }

        let response = self.send(self.client.post(url).multipart(form))?;
        response
            .json()
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    fn list_voices(&self) -> Result<VoicesResponse, ApiError> {
        let url = self.url(&["v1", "voices"])?;
        debug!(%url, "list voices");

        let response = self.send(self.client.get(url))?;
        response
            .json()
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}
