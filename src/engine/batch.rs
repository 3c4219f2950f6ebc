//! Sequential batch flows: voice conversion and generation from a preset.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::asset::{AudioClip, AudioSource};
use super::error::ToolkitError;
use super::params::VoiceParameters;
use super::tts::TTSEngine;
use crate::backend::Backend;
use crate::preset::Preset;

/// Audio files to re-voice with one target voice.
#[derive(Debug, Clone)]
pub struct BatchJob {
    pub inputs: Vec<AudioSource>,
    pub voice_id: String,
    pub output_dir: PathBuf,
}

/// One item written successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSuccess {
    pub input: String,
    pub output: PathBuf,
}

/// One item that failed, with the reason.
#[derive(Debug)]
pub struct BatchFailure {
    pub input: String,
    pub error: ToolkitError,
}

/// Outcome of a batch, both lists in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub succeeded: Vec<BatchSuccess>,
    pub failed: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_complete_success(&self) -> bool {
        self.failed.is_empty()
    }

    fn record(mut self, input: String, outcome: Result<PathBuf, ToolkitError>) -> Self {
        match outcome {
            Ok(output) => {
                info!(%input, output = %output.display(), "item done");
                self.succeeded.push(BatchSuccess { input, output });
            }
            Err(error) => {
                warn!(%input, kind = %error.kind(), %error, "item failed");
                self.failed.push(BatchFailure { input, error });
            }
        }
        self
    }
}

fn ensure_dir(dir: &Path) -> Result<(), ToolkitError> {
    std::fs::create_dir_all(dir).map_err(|e| ToolkitError::file_io(dir, e))
}

fn is_plain_name(name: &str) -> bool {
    !name.trim().is_empty() && !name.contains(['/', '\\']) && !name.contains("..")
}

/// Output file name for the `index`-th (0-based) text of a preset run.
pub fn preset_output_name(preset_name: &str, index: usize) -> String {
    format!("{preset_name}_{:03}.mp3", index + 1)
}

impl<B: Backend> TTSEngine<B> {
    /// Convert each input to the target voice, one request at a time.
    ///
    /// Each result is written to `output_dir` under the input's file name,
    /// so re-running a job overwrites the same files. A failing item is
    /// recorded in the report and the remaining items still run.
    pub fn convert_batch(&self, job: &BatchJob) -> Result<BatchReport, ToolkitError> {
        if job.inputs.is_empty() {
            return Err(ToolkitError::invalid("no input files"));
        }
        if job.voice_id.trim().is_empty() {
            return Err(ToolkitError::invalid("target voice cannot be empty"));
        }
        ensure_dir(&job.output_dir)?;

        info!(files = job.inputs.len(), voice = %job.voice_id, "starting batch conversion");

        let report = job
            .inputs
            .iter()
            .fold(BatchReport::default(), |report, source| {
                let outcome = self.convert_one(source, &job.voice_id, &job.output_dir);
                report.record(source.display_name(), outcome)
            });

        info!(
            succeeded = report.succeeded.len(),
            failed = report.failed.len(),
            "batch conversion finished"
        );
        Ok(report)
    }

    fn convert_one(
        &self,
        source: &AudioSource,
        voice_id: &str,
        output_dir: &Path,
    ) -> Result<PathBuf, ToolkitError> {
        let upload = source.load()?;
        let audio = self.backend.convert_voice(&upload, voice_id)?;

        let output = output_dir.join(&upload.file_name);
        AudioClip::new(audio).save(&output)?;
        Ok(output)
    }

    /// Synthesize `text` through a preset's template.
    ///
    /// The text itself must be non-empty; a template wrapped around nothing
    /// is rejected before any request.
    pub fn synthesize_preset(
        &self,
        preset: &Preset,
        text: &str,
        params: &VoiceParameters,
        output_format: Option<&str>,
    ) -> Result<AudioClip, ToolkitError> {
        if text.trim().is_empty() {
            return Err(ToolkitError::invalid("text cannot be empty"));
        }

        self.synthesize(&preset.render(text), params, output_format)
    }

    /// Synthesize each text through a preset's template and parameters.
    ///
    /// Outputs are named with [`preset_output_name`]. Failures are isolated
    /// per text, as in [`convert_batch`](Self::convert_batch).
    pub fn generate_from_preset(
        &self,
        preset_name: &str,
        preset: &Preset,
        voice_id: Option<&str>,
        texts: &[String],
        output_dir: &Path,
    ) -> Result<BatchReport, ToolkitError> {
        if texts.is_empty() {
            return Err(ToolkitError::invalid("no texts to generate"));
        }
        // The name becomes part of every output file name
        if !is_plain_name(preset_name) {
            return Err(ToolkitError::invalid(format!(
                "preset name cannot contain path separators: {preset_name}"
            )));
        }

        let mut params = preset.parameters();
        if let Some(voice) = voice_id {
            params.voice_id = voice.to_string();
        }
        params.validate()?;
        ensure_dir(output_dir)?;

        info!(preset = preset_name, texts = texts.len(), "generating from preset");

        let report = texts
            .iter()
            .enumerate()
            .fold(BatchReport::default(), |report, (index, text)| {
                let output = output_dir.join(preset_output_name(preset_name, index));
                let outcome = self
                    .synthesize_preset(preset, text, &params, None)
                    .and_then(|clip| clip.save(&output))
                    .map(|()| output);
                report.record(text.clone(), outcome)
            });

        Ok(report)
    }
}
