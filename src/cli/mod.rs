//! CLI argument parsing and validation.

mod args;

pub use args::{
    Args, CloneArgs, Command, ConvertArgs, GenerateArgs, Model, PresetCommand, SpeakArgs,
    TuningArgs,
};

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    // ===========================================
    // Argument parsing tests
    // ===========================================

    #[test]
    fn test_parse_speak_with_tuning() {
        let args = Args::try_parse_from([
            "eleven-toolkit",
            "--api-key",
            "k",
            "speak",
            "-t",
            "<speak>Ciao</speak>",
            "--voice",
            "Rachel",
            "--stability",
            "0.3",
            "-m",
            "eleven_turbo_v2_5",
        ])
        .unwrap();

        assert_eq!(args.api_key, "k");
        let Command::Speak(speak) = args.command else {
            panic!("expected speak");
        };
        assert_eq!(speak.text.as_deref(), Some("<speak>Ciao</speak>"));
        assert_eq!(speak.tuning.voice.as_deref(), Some("Rachel"));
        assert_eq!(speak.tuning.stability, Some(0.3));
        assert_eq!(speak.tuning.model, Some(Model::TurboV2_5));
        assert_eq!(speak.tuning.speed, None);
        assert_eq!(speak.output, PathBuf::from("output.mp3"));
    }

    #[test]
    fn test_parse_speak_requires_text() {
        let result = Args::try_parse_from(["eleven-toolkit", "speak", "--voice", "v"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_convert_keeps_file_order() {
        let args = Args::try_parse_from([
            "eleven-toolkit",
            "convert",
            "--voice",
            "v",
            "b.mp3",
            "a.mp3",
        ])
        .unwrap();

        let Command::Convert(convert) = args.command else {
            panic!("expected convert");
        };
        assert_eq!(
            convert.files,
            vec![PathBuf::from("b.mp3"), PathBuf::from("a.mp3")]
        );
        assert_eq!(convert.output_dir, PathBuf::from("converted"));
    }

    #[test]
    fn test_parse_clone_requires_files() {
        let result = Args::try_parse_from(["eleven-toolkit", "clone", "--name", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_preset_save() {
        let args = Args::try_parse_from([
            "eleven-toolkit",
            "preset",
            "save",
            "calm",
            "--text",
            "<speak>hi</speak>",
            "--speed",
            "0.9",
        ])
        .unwrap();

        let Command::Preset(PresetCommand::Save { name, tuning, .. }) = args.command else {
            panic!("expected preset save");
        };
        assert_eq!(name, "calm");
        assert_eq!(tuning.speed, Some(0.9));
    }

    // ===========================================
    // Model enum tests
    // ===========================================

    #[test]
    fn test_model_default_is_multilingual() {
        assert_eq!(Model::default(), Model::MultilingualV2);
    }

    #[test]
    fn test_model_ids() {
        assert_eq!(Model::MonolingualV1.as_str(), "eleven_monolingual_v1");
        assert_eq!(Model::FlashV2_5.as_str(), "eleven_flash_v2_5");
    }

    #[test]
    fn test_model_serde_uses_ids() {
        let json = serde_json::to_string(&Model::TurboV2_5).unwrap();
        assert_eq!(json, "\"eleven_turbo_v2_5\"");

        let model: Model = serde_json::from_str("\"eleven_flash_v2_5\"").unwrap();
        assert_eq!(model, Model::FlashV2_5);
    }
}
