//! CLI argument definitions and parsing.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::backend::DEFAULT_BASE_URL;

/// Speech synthesis, voice conversion and voice cloning with ElevenLabs.
#[derive(Parser, Debug)]
#[command(name = "eleven-toolkit")]
#[command(about = "Speech synthesis, batch voice conversion and voice cloning with ElevenLabs")]
#[command(version)]
pub struct Args {
    /// ElevenLabs API key
    #[arg(long, env = "ELEVENLABS_API_KEY", hide_env_values = true, default_value = "")]
    pub api_key: String,

    /// API host
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Preset file (defaults to ~/.eleven-toolkit/presets.json)
    #[arg(long, global = true)]
    pub presets: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Synthesize speech from text or SSML
    Speak(SpeakArgs),

    /// Convert audio files to a target voice, one request per file
    Convert(ConvertArgs),

    /// Create a new voice from audio samples
    Clone(CloneArgs),

    /// List the voices available to the account
    Voices,

    /// Manage saved presets
    #[command(subcommand)]
    Preset(PresetCommand),

    /// Synthesize several texts with a saved preset
    Generate(GenerateArgs),
}

/// Tuning flags shared by `speak` and `preset save`.
///
/// Unset values fall back to the preset (if any) and then to the defaults.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct TuningArgs {
    /// Voice model
    #[arg(short, long, value_enum)]
    pub model: Option<Model>,

    /// Voice name or id
    #[arg(long)]
    pub voice: Option<String>,

    /// Similarity boost (0.0 to 1.0)
    #[arg(long)]
    pub similarity_boost: Option<f32>,

    /// Stability (0.0 to 1.0)
    #[arg(long)]
    pub stability: Option<f32>,

    /// Style exaggeration (0.0 to 1.0)
    #[arg(long)]
    pub style: Option<f32>,

    /// Speech speed multiplier (0.7 to 1.2)
    #[arg(short, long)]
    pub speed: Option<f32>,
}

#[derive(ClapArgs, Debug)]
pub struct SpeakArgs {
    /// Text to speak; may contain SSML markup
    #[arg(short, long, conflicts_with = "text_file", required_unless_present = "text_file")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(long)]
    pub text_file: Option<PathBuf>,

    /// Apply a saved preset's template and parameters
    #[arg(short, long)]
    pub preset: Option<String>,

    #[command(flatten)]
    pub tuning: TuningArgs,

    /// Output encoding, e.g. mp3_44100_128
    #[arg(long)]
    pub output_format: Option<String>,

    /// Output audio file
    #[arg(short, long, default_value = "output.mp3")]
    pub output: PathBuf,
}

#[derive(ClapArgs, Debug)]
pub struct ConvertArgs {
    /// Target voice name or id
    #[arg(long)]
    pub voice: String,

    /// Directory for converted files
    #[arg(short = 'd', long, default_value = "converted")]
    pub output_dir: PathBuf,

    /// Audio files to convert, processed in order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct CloneArgs {
    /// Name of the new voice
    #[arg(short, long)]
    pub name: String,

    /// Description of the new voice
    #[arg(long)]
    pub description: Option<String>,

    /// Audio samples of the voice
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum PresetCommand {
    /// Save a preset from a sample SSML text and tuning values
    Save {
        /// Preset name
        name: String,

        /// Sample SSML; the innermost content becomes the {text} slot
        #[arg(short, long)]
        text: String,

        #[command(flatten)]
        tuning: TuningArgs,
    },

    /// List saved presets
    List,

    /// Show one preset
    Show { name: String },

    /// Delete a preset
    Delete { name: String },
}

#[derive(ClapArgs, Debug)]
pub struct GenerateArgs {
    /// Preset to apply
    #[arg(short, long)]
    pub preset: String,

    /// Voice name or id, overriding the preset's voice
    #[arg(long)]
    pub voice: Option<String>,

    /// Directory for generated files
    #[arg(short = 'd', long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Texts to synthesize, one file each
    #[arg(required = true)]
    pub texts: Vec<String>,
}

/// Voice model selection.
#[derive(ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Model {
    /// English-only first generation model
    #[value(name = "eleven_monolingual_v1")]
    #[serde(rename = "eleven_monolingual_v1")]
    MonolingualV1,

    /// Multilingual v2, highest quality
    #[default]
    #[value(name = "eleven_multilingual_v2")]
    #[serde(rename = "eleven_multilingual_v2")]
    MultilingualV2,

    /// Turbo v2.5, low latency
    #[value(name = "eleven_turbo_v2_5")]
    #[serde(rename = "eleven_turbo_v2_5")]
    TurboV2_5,

    /// Flash v2.5, lowest latency
    #[value(name = "eleven_flash_v2_5")]
    #[serde(rename = "eleven_flash_v2_5")]
    FlashV2_5,
}

impl Model {
    /// Returns the API model id.
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::MonolingualV1 => "eleven_monolingual_v1",
            Model::MultilingualV2 => "eleven_multilingual_v2",
            Model::TurboV2_5 => "eleven_turbo_v2_5",
            Model::FlashV2_5 => "eleven_flash_v2_5",
        }
    }

    /// Returns the human-readable name of the model.
    pub fn name(&self) -> &'static str {
        match self {
            Model::MonolingualV1 => "Eleven Monolingual v1",
            Model::MultilingualV2 => "Eleven Multilingual v2",
            Model::TurboV2_5 => "Eleven Turbo v2.5",
            Model::FlashV2_5 => "Eleven Flash v2.5",
        }
    }
}
