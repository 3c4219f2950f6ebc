//! eleven-toolkit CLI entry point.

use std::fs;

use anyhow::{Context, Result, bail};
use clap::Parser;
use eleven_toolkit::backend::{Backend, Credential, create_backend};
use eleven_toolkit::cli::{
    Args, CloneArgs, Command, ConvertArgs, GenerateArgs, PresetCommand, SpeakArgs, TuningArgs,
};
use eleven_toolkit::engine::{
    AudioSource, BatchJob, BatchReport, TTSEngine, ToolkitError, VoiceParameters,
};
use eleven_toolkit::preset::{Preset, PresetStore};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let store = match &args.presets {
        Some(path) => PresetStore::with_path(path.clone()),
        None => PresetStore::new(),
    };

    let backend = create_backend(Credential::new(&args.api_key), &args.base_url);
    let engine = TTSEngine::new(backend);

    match args.command {
        Command::Speak(speak) => speak_text(&engine, &store, speak),
        Command::Convert(convert) => convert_files(&engine, convert),
        Command::Clone(clone) => clone_voice(&engine, clone),
        Command::Voices => list_voices(&engine),
        Command::Generate(generate) => generate_from_preset(&engine, &store, generate),
        Command::Preset(command) => run_preset(&store, &command),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("warn,eleven_toolkit={default_level}"))),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Attach the error category to a flow error for display.
fn describe(err: ToolkitError) -> anyhow::Error {
    let kind = err.kind();
    anyhow::Error::new(err).context(format!("{kind}"))
}

fn resolve_voice<B: Backend>(engine: &TTSEngine<B>, voice: &str) -> Result<String> {
    engine
        .resolve_voice(voice)
        .map_err(describe)
        .with_context(|| format!("Failed to resolve voice '{voice}'"))
}

fn apply_tuning(mut params: VoiceParameters, tuning: &TuningArgs) -> VoiceParameters {
    if let Some(model) = tuning.model {
        params.model = model;
    }
    if let Some(voice) = &tuning.voice {
        params.voice_id = voice.clone();
    }
    if let Some(v) = tuning.similarity_boost {
        params.similarity_boost = v;
    }
    if let Some(v) = tuning.stability {
        params.stability = v;
    }
    if let Some(v) = tuning.style {
        params.style_exaggeration = v;
    }
    if let Some(v) = tuning.speed {
        params.speed = v;
    }
    params
}

fn speak_text<B: Backend>(engine: &TTSEngine<B>, store: &PresetStore, args: SpeakArgs) -> Result<()> {
    let text = match (&args.text, &args.text_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read text file: {}", path.display()))?,
        (None, None) => bail!("No text given. Use --text or --text-file."),
    };

    let preset = match &args.preset {
        Some(name) => {
            let preset = store
                .get(name)
                .with_context(|| format!("Preset '{name}' not found"))?;
            println!("Using preset: {name}");
            Some(preset)
        }
        None => None,
    };
    let base = preset
        .as_ref()
        .map(Preset::parameters)
        .unwrap_or_default();

    let mut params = apply_tuning(base, &args.tuning);
    if !params.voice_id.is_empty() {
        params.voice_id = resolve_voice(engine, &params.voice_id)?;
    }

    println!("Generating speech...");
    println!("  Voice: {}", params.voice_id);
    println!("  Model: {}", params.model.name());
    println!("  Speed: {:.2}x", params.speed);

    let output_format = args.output_format.as_deref();
    let clip = match &preset {
        Some(preset) => engine.synthesize_preset(preset, &text, &params, output_format),
        None => engine.synthesize(&text, &params, output_format),
    }
    .map_err(describe)
    .context("Failed to synthesize speech")?;

    clip.save(&args.output)
        .map_err(describe)
        .context("Failed to save audio")?;

    println!("Audio saved to: {}", args.output.display());
    println!("  Size: {} bytes", clip.len());

    Ok(())
}

fn print_report(report: &BatchReport) {
    for done in &report.succeeded {
        println!("  ok    {} -> {}", done.input, done.output.display());
    }
    for failure in &report.failed {
        println!("  FAIL  {} ({}): {}", failure.input, failure.error.kind(), failure.error);
    }
    println!(
        "{} of {} succeeded, {} failed.",
        report.succeeded.len(),
        report.total(),
        report.failed.len()
    );
}

fn convert_files<B: Backend>(engine: &TTSEngine<B>, args: ConvertArgs) -> Result<()> {
    let voice_id = resolve_voice(engine, &args.voice)?;

    let job = BatchJob {
        inputs: args.files.into_iter().map(AudioSource::from).collect(),
        voice_id,
        output_dir: args.output_dir,
    };

    println!("Converting {} file(s)...", job.inputs.len());
    let report = engine
        .convert_batch(&job)
        .map_err(describe)
        .context("Batch conversion could not start")?;

    print_report(&report);
    if !report.is_complete_success() {
        bail!("{} file(s) failed to convert", report.failed.len());
    }

    Ok(())
}

fn clone_voice<B: Backend>(engine: &TTSEngine<B>, args: CloneArgs) -> Result<()> {
    let samples: Vec<AudioSource> = args.files.into_iter().map(AudioSource::from).collect();

    let voice = engine
        .clone_voice(&args.name, args.description.as_deref(), &samples)
        .map_err(describe)
        .with_context(|| format!("Failed to clone voice '{}'", args.name))?;

    println!("Voice created: {} - {}", voice.voice_id, voice.name);
    if voice.requires_verification {
        println!("  The voice requires verification before use.");
    }

    Ok(())
}

fn list_voices<B: Backend>(engine: &TTSEngine<B>) -> Result<()> {
    let directory = engine
        .voice_directory()
        .map_err(describe)
        .context("Failed to list voices")?;

    if directory.is_empty() {
        println!("No voices found.");
        return Ok(());
    }

    println!("Available voices:");
    for (name, id) in directory.iter() {
        println!("  {name} ({id})");
    }

    Ok(())
}

fn generate_from_preset<B: Backend>(
    engine: &TTSEngine<B>,
    store: &PresetStore,
    args: GenerateArgs,
) -> Result<()> {
    let preset = store
        .get(&args.preset)
        .with_context(|| format!("Preset '{}' not found", args.preset))?;

    // A preset may hold a voice name rather than an id
    let voice = args
        .voice
        .as_deref()
        .or(preset.voice_id.as_deref())
        .map(|voice| resolve_voice(engine, voice))
        .transpose()?;

    println!("Generating {} text(s) with preset '{}'...", args.texts.len(), args.preset);
    let report = engine
        .generate_from_preset(
            &args.preset,
            &preset,
            voice.as_deref(),
            &args.texts,
            &args.output_dir,
        )
        .map_err(describe)
        .context("Generation could not start")?;

    print_report(&report);
    if !report.is_complete_success() {
        bail!("{} text(s) failed", report.failed.len());
    }

    Ok(())
}

fn run_preset(store: &PresetStore, command: &PresetCommand) -> Result<()> {
    match command {
        PresetCommand::Save { name, text, tuning } => {
            let params = apply_tuning(VoiceParameters::default(), tuning);
            // A preset may be saved without a voice
            params
                .validate_tuning()
                .map_err(describe)
                .context("Invalid preset parameters")?;

            let preset = Preset::from_sample(text, &params);
            store
                .save(name, &preset)
                .with_context(|| format!("Failed to save preset '{name}'"))?;

            println!("Preset '{name}' saved to {}", store.path().display());
            println!("  Template: {}", preset.ssml_template);
        }
        PresetCommand::List => {
            let presets = store.list().context("Failed to read presets")?;
            if presets.is_empty() {
                println!("No presets found.");
                return Ok(());
            }

            println!("Saved presets:");
            for (name, preset) in presets {
                println!("  {name}");
                print_preset(&preset);
            }
        }
        PresetCommand::Show { name } => {
            let preset = store
                .get(name)
                .with_context(|| format!("Preset '{name}' not found"))?;
            println!("{name}");
            print_preset(&preset);
        }
        PresetCommand::Delete { name } => {
            store
                .delete(name)
                .with_context(|| format!("Failed to delete preset '{name}'"))?;
            println!("Preset '{name}' deleted.");
        }
    }

    Ok(())
}

fn print_preset(preset: &Preset) {
    println!("    Template: {}", preset.ssml_template);
    println!(
        "    similarity_boost={} stability={} style={} speed={}",
        preset.similarity_boost, preset.stability, preset.style_exaggeration, preset.speed
    );
    if let Some(voice) = &preset.voice_id {
        println!("    Voice: {voice}");
    }
    if let Some(model) = preset.model {
        println!("    Model: {}", model.as_str());
    }
}
