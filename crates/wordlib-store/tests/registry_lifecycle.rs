use std::fs;

use wordlib_config::StoreConfig;
use wordlib_core::{Category, Meaning, WordItemParts, WordLib};
use wordlib_store::{library_path, load_library, save_library, LibraryRegistry};

fn test_config() -> (tempfile::TempDir, StoreConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    let dir = tempfile::tempdir().expect("tempdir");
    let config = StoreConfig {
        data_dir: dir.path().to_path_buf(),
        ..StoreConfig::default()
    };
    (dir, config)
}

fn sample_library() -> WordLib {
    let mut lib = WordLib::new();
    lib.add_word(
        "run",
        WordItemParts {
            meanings: vec![Meaning::new("to move fast", Category::Verb)],
            example: "I run every morning.".into(),
        },
    )
    .unwrap();
    lib.add_word(
        "cat",
        WordItemParts {
            meanings: vec![Meaning::new("feline", Category::Noun)],
            ..WordItemParts::default()
        },
    )
    .unwrap();
    lib
}

#[test]
fn save_then_load_round_trips() {
    let (_dir, config) = test_config();
    let lib = sample_library();

    save_library(&config, "main", &lib).unwrap();
    assert!(library_path(&config, "main").exists());

    let loaded = load_library(&config, "main").unwrap();
    assert_eq!(loaded.len(), 2);
    let run = loaded.get_by_word("run").unwrap();
    assert_eq!(run.example(), "I run every morning.");
    assert_eq!(run.meanings()[0], Meaning::new("to move fast", Category::Verb));
}

#[test]
fn load_of_missing_file_is_an_error() {
    let (_dir, config) = test_config();
    assert!(load_library(&config, "nowhere").is_err());
}

#[test]
fn save_overwrites_previous_contents() {
    let (_dir, config) = test_config();
    let mut lib = sample_library();
    save_library(&config, "main", &lib).unwrap();

    lib.remove_by_word("cat");
    save_library(&config, "main", &lib).unwrap();

    let loaded = load_library(&config, "main").unwrap();
    assert_eq!(loaded.len(), 1);
    assert!(!loaded.contains_word("cat"));
}

#[test]
fn open_scans_the_data_dir_sorted() {
    let (_dir, config) = test_config();
    save_library(&config, "zoo", &sample_library()).unwrap();
    save_library(&config, "alpha", &WordLib::new()).unwrap();
    // unrelated files and directories are ignored, even with the extension
    fs::write(config.data_dir.join("notes.txt"), "not a library").unwrap();
    fs::create_dir(config.data_dir.join("folder.dat")).unwrap();

    let registry = LibraryRegistry::open(&config).unwrap();
    assert_eq!(registry.names(), vec!["alpha", "zoo"]);
    assert_eq!(registry.get("zoo").unwrap().len(), 2);
    // first library becomes current when none is configured
    assert_eq!(registry.current_name(), Some("alpha"));
}

#[test]
fn open_honors_the_configured_current_library() {
    let (_dir, mut config) = test_config();
    save_library(&config, "alpha", &WordLib::new()).unwrap();
    save_library(&config, "beta", &sample_library()).unwrap();

    config.current_library = Some("beta".into());
    let registry = LibraryRegistry::open(&config).unwrap();
    assert_eq!(registry.current_name(), Some("beta"));
    assert_eq!(registry.current().unwrap().len(), 2);
}

#[test]
fn open_of_missing_dir_starts_empty() {
    let (dir, config) = test_config();
    drop(dir); // removes the directory
    let registry = LibraryRegistry::open(&config).unwrap();
    assert!(registry.is_empty());
    assert!(registry.current_name().is_none());
}

#[test]
fn create_registers_and_persists_an_empty_library() {
    let (_dir, config) = test_config();
    let mut registry = LibraryRegistry::open(&config).unwrap();

    registry.create(&config, "fresh").unwrap();
    assert!(library_path(&config, "fresh").exists());
    assert_eq!(registry.current_name(), Some("fresh"));
    assert!(registry.create(&config, "fresh").is_err());
}

#[test]
fn edits_through_the_registry_survive_save_all() {
    let (_dir, config) = test_config();
    save_library(&config, "main", &sample_library()).unwrap();

    let mut registry = LibraryRegistry::open(&config).unwrap();
    registry
        .current_mut()
        .unwrap()
        .add_word(
            "dog",
            WordItemParts {
                meanings: vec![Meaning::new("canine", Category::Noun)],
                ..WordItemParts::default()
            },
        )
        .unwrap();
    registry.save_all(&config).unwrap();

    let reloaded = load_library(&config, "main").unwrap();
    assert_eq!(reloaded.len(), 3);
    assert!(reloaded.contains_word("dog"));
}

#[test]
fn set_current_rejects_unknown_names() {
    let (_dir, config) = test_config();
    save_library(&config, "main", &WordLib::new()).unwrap();
    let mut registry = LibraryRegistry::open(&config).unwrap();
    assert!(registry.set_current("main").is_ok());
    assert!(registry.set_current("ghost").is_err());
}
