use boolmask::config::{AppConfig, ConfigManager, ConfigSection, EvaluationConfig};
use boolmask::MaskError;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("boolmask-{}-{}.toml", name, std::process::id()))
}

#[test]
fn test_defaults_are_valid() {
    let config = AppConfig::default();

    assert!(config.validate().is_ok());
    assert_eq!(EvaluationConfig::section_name(), "evaluation");
    assert!(config.evaluation.use_parallel(config.evaluation.parallel_threshold));
    assert!(!config.evaluation.use_parallel(10));
}

#[test]
fn test_invalid_update_is_rejected() {
    let manager = ConfigManager::new();

    let result = manager.update(|c| c.evaluation.chunk_size = 0);

    assert!(matches!(result, Err(MaskError::Configuration(_))));
    assert_eq!(manager.get(), AppConfig::default());
}

#[test]
fn test_save_then_load() {
    let path = temp_path("roundtrip");
    let manager = ConfigManager::new();
    manager
        .update(|c| {
            c.evaluation.parallel = false;
            c.evaluation.chunk_size = 128;
        })
        .unwrap();

    manager.save_to_file(&path).unwrap();
    let loaded = ConfigManager::new();
    loaded.load_from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded.get(), manager.get());
}

#[test]
fn test_load_rejects_invalid_file() {
    let path = temp_path("invalid");
    std::fs::write(&path, "[evaluation]\nparallel_threshold = 0\n").unwrap();

    let result = ConfigManager::new().load_from_file(&path);
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(result, Err(MaskError::Configuration(_))));
}

#[test]
fn test_layered_missing_file_keeps_defaults() {
    let manager = ConfigManager::new();

    manager.load_layered(temp_path("missing")).unwrap();

    assert_eq!(manager.get().evaluation.chunk_size, 8_192);
}

#[test]
fn test_layered_env_overrides_file() {
    let path = temp_path("layered");
    std::fs::write(&path, "[evaluation]\nchunk_size = 100\nparallel_threshold = 50\n").unwrap();
    std::env::set_var("BOOLMASK_EVALUATION__PARALLEL_THRESHOLD", "5");

    let manager = ConfigManager::new();
    let result = manager.load_layered(&path);
    std::env::remove_var("BOOLMASK_EVALUATION__PARALLEL_THRESHOLD");
    std::fs::remove_file(&path).unwrap();

    result.unwrap();
    let evaluation = manager.get().evaluation;
    assert_eq!(evaluation.chunk_size, 100);
    assert_eq!(evaluation.parallel_threshold, 5);
    assert!(evaluation.parallel);
}
