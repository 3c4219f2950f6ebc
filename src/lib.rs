//! eleven-toolkit: speech synthesis, batch voice conversion and voice
//! cloning on top of the ElevenLabs API.
//!
//! The flows in [`engine`] are independent of any front-end; the bundled
//! binary drives them from the command line.

pub mod backend;
pub mod cli;
pub mod engine;
pub mod preset;
