//! Saved presets: an SSML template plus tuning values, stored locally
//! and applied to synthesis requests.

mod store;
mod template;

pub use store::{Preset, PresetError, PresetStore};
pub use template::{TEXT_SLOT, render, template_from_sample};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Model;
    use crate::engine::VoiceParameters;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn sample_preset() -> Preset {
        Preset {
            ssml_template: "<speak>{text}</speak>".to_string(),
            similarity_boost: 0.8,
            stability: 0.4,
            style_exaggeration: 0.2,
            speed: 0.9,
            voice_id: Some("voice-1".to_string()),
            model: Some(Model::TurboV2_5),
            created_at: None,
        }
    }

    // ===========================================
    // Template tests
    // ===========================================

    #[test]
    fn test_template_from_nested_ssml() {
        let template =
            template_from_sample(r#"<speak><prosody rate="slow">Buongiorno</prosody></speak>"#);
        assert_eq!(template, "<speak>{text}</speak>");
    }

    #[test]
    fn test_template_spans_lines() {
        let template = template_from_sample("<speak>\nline one\nline two\n</speak>");
        assert_eq!(template, "<speak>{text}</speak>");
    }

    #[test]
    fn test_template_plain_text_unchanged() {
        assert_eq!(template_from_sample("just words"), "just words");
    }

    #[test]
    fn test_render_fills_every_slot() {
        assert_eq!(render("<p>{text}</p><p>{text}</p>", "hi"), "<p>hi</p><p>hi</p>");
        assert_eq!(render("no slot", "hi"), "no slot");
    }

    #[test]
    fn test_preset_from_sample_and_parameters() {
        let params = VoiceParameters {
            model: Model::FlashV2_5,
            voice_id: "abc".to_string(),
            similarity_boost: 0.7,
            stability: 0.6,
            style_exaggeration: 0.1,
            speed: 1.1,
        };

        let preset = Preset::from_sample("<speak>ciao</speak>", &params);
        assert_eq!(preset.ssml_template, "<speak>{text}</speak>");
        assert!(preset.created_at.is_some());
        assert_eq!(preset.parameters(), params);
        assert_eq!(preset.render("salve"), "<speak>salve</speak>");
    }

    #[test]
    fn test_preset_without_voice_has_empty_voice_id() {
        let preset = Preset::from_sample("hi", &VoiceParameters::default());
        assert_eq!(preset.voice_id, None);
        assert_eq!(preset.parameters().voice_id, "");
    }

    #[test]
    fn test_preset_reads_minimal_json() {
        // Files written by earlier tools carry only the template and tuning values
        let json = r#"{
            "ssml_template": "<speak>{text}</speak>",
            "similarity_boost": 0.5,
            "stability": 0.5,
            "style_exaggeration": 0.0,
            "speed": 1.0
        }"#;

        let preset: Preset = serde_json::from_str(json).unwrap();
        assert_eq!(preset.model, None);
        assert_eq!(preset.parameters().model, Model::MultilingualV2);
    }

    // ===========================================
    // PresetStore tests
    // ===========================================

    #[test]
    fn test_store_default_path() {
        let store = PresetStore::new();
        let expected = dirs::home_dir()
            .unwrap()
            .join(".eleven-toolkit")
            .join("presets.json");
        assert_eq!(store.path(), expected);
    }

    #[test]
    fn test_store_custom_path() {
        let path = PathBuf::from("/tmp/custom-presets.json");
        let store = PresetStore::with_path(path.clone());
        assert_eq!(store.path(), path);
    }

    #[test]
    fn test_store_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = PresetStore::with_path(temp_dir.path().join("presets.json"));

        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_store_save_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = PresetStore::with_path(temp_dir.path().join("nested").join("presets.json"));

        store.save("calm", &sample_preset()).unwrap();

        let loaded = store.get("calm").unwrap();
        assert_eq!(loaded, sample_preset());
    }

    #[test]
    fn test_store_save_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let store = PresetStore::with_path(temp_dir.path().join("presets.json"));

        store.save("calm", &sample_preset()).unwrap();
        let mut changed = sample_preset();
        changed.speed = 1.2;
        store.save("calm", &changed).unwrap();

        assert_eq!(store.list().unwrap().len(), 1);
        assert_eq!(store.get("calm").unwrap().speed, 1.2);
    }

    #[test]
    fn test_store_list_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let store = PresetStore::with_path(temp_dir.path().join("presets.json"));

        store.save("zeta", &sample_preset()).unwrap();
        store.save("alpha", &sample_preset()).unwrap();

        let names: Vec<String> = store.list().unwrap().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let store = PresetStore::with_path(temp_dir.path().join("presets.json"));

        assert!(matches!(store.get("nope"), Err(PresetError::NotFound(_))));
    }

    #[test]
    fn test_store_delete() {
        let temp_dir = TempDir::new().unwrap();
        let store = PresetStore::with_path(temp_dir.path().join("presets.json"));

        store.save("to_delete", &sample_preset()).unwrap();
        store.delete("to_delete").unwrap();

        assert!(store.get("to_delete").is_err());
        assert!(matches!(
            store.delete("to_delete"),
            Err(PresetError::NotFound(_))
        ));
    }

    #[test]
    fn test_store_rejects_empty_name() {
        let temp_dir = TempDir::new().unwrap();
        let store = PresetStore::with_path(temp_dir.path().join("presets.json"));

        let result = store.save("  ", &sample_preset());
        assert!(matches!(result, Err(PresetError::InvalidName(_))));
    }

    #[test]
    fn test_store_rejects_path_separators() {
        let temp_dir = TempDir::new().unwrap();
        let store = PresetStore::with_path(temp_dir.path().join("store").join("presets.json"));

        for name in ["../escaped", "a/b", "a\\b", ".."] {
            let result = store.save(name, &sample_preset());
            assert!(matches!(result, Err(PresetError::InvalidName(_))), "{name}");
        }
        assert!(matches!(store.get("../x"), Err(PresetError::InvalidName(_))));
        assert!(matches!(store.delete("a/b"), Err(PresetError::InvalidName(_))));

        assert!(!store.path().exists());
        assert!(!temp_dir.path().join("escaped").exists());
    }

    #[test]
    fn test_store_writes_pretty_json_keyed_by_name() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("presets.json");
        let store = PresetStore::with_path(path.clone());

        store.save("calm", &sample_preset()).unwrap();

        let raw = std::fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["calm"]["ssml_template"], "<speak>{text}</speak>");
        assert_eq!(value["calm"]["model"], "eleven_turbo_v2_5");
        assert!(raw.contains('\n'));
    }
}
