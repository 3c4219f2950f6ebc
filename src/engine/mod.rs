//! Request flows.
//!
//! This module provides the engine that validates user input, drives the
//! [`Backend`](crate::backend::Backend) and writes results to disk. Each
//! flow is a plain function from inputs to a result, independent of the
//! front-end that calls it.

mod asset;
mod batch;
mod clone;
mod error;
mod params;
mod tts;

pub use asset::{AudioClip, AudioSource};
pub use batch::{BatchFailure, BatchJob, BatchReport, BatchSuccess, preset_output_name};
pub use clone::ClonedVoice;
pub use error::{ErrorKind, ToolkitError};
pub use params::{SPEED_RANGE, UNIT_RANGE, VoiceParameters};
pub use tts::{TTSEngine, VoiceDirectory};
