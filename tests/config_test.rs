// tests/config_test.rs
use herald::config::{load_config, Config};
use herald::CategoryKey;
use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.repository.slug, None);
    assert_eq!(config.repository.remote, "origin");
    assert_eq!(config.repository.default_to, "master");
    assert_eq!(config.api.base_url, "https://api.github.com");
    assert_eq!(config.categories[0].title, "SECURITY");
    assert_eq!(
        config.categories[6].title,
        "SUPPORTING REPOSITORIES & VENDOR PACKAGES"
    );
    assert!(config.categories.iter().all(|c| c.show_when_empty));
}

#[test]
#[serial]
fn test_load_from_file() {
    let config = load_config(Some("tests/fixtures/config_with_categories.toml"))
        .expect("Failed to load test config");
    assert_eq!(config.repository.slug.as_deref(), Some("Submitty/Submitty"));
    assert_eq!(config.repository.default_to, "main");
    assert_eq!(config.api.timeout_secs, 10);
    assert_eq!(config.category_order()[3], CategoryKey::Bugfix);

    let shown: Vec<CategoryKey> = config
        .categories
        .iter()
        .filter(|c| c.show_when_empty)
        .map(|c| c.key)
        .collect();
    assert_eq!(shown, vec![CategoryKey::Feature, CategoryKey::Bugfix]);
}

#[test]
fn test_load_rejects_incomplete_categories() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[[categories]]
key = "feature"
title = "FEATURES"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("Configuration error"));
}

#[test]
fn test_load_rejects_unknown_category_key() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[[categories]]\nkey = \"chore\"\ntitle = \"CHORES\"\n")
        .unwrap();
    temp_file.flush().unwrap();

    assert!(load_config(Some(temp_file.path().to_str().unwrap())).is_err());
}

#[test]
#[serial]
fn test_load_missing_file_is_io_error() {
    let err = load_config(Some("tests/fixtures/does_not_exist.toml")).unwrap_err();
    assert!(err.to_string().contains("I/O error"));
}

#[test]
#[serial]
fn test_load_from_working_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("herald.toml"),
        "[repository]\nslug = \"owner/from-cwd\"\n",
    )
    .unwrap();

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    env::set_current_dir(original_dir).unwrap();

    let config = result.expect("Should load herald.toml from working directory");
    assert_eq!(config.repository.slug.as_deref(), Some("owner/from-cwd"));
    assert_eq!(config.categories.len(), 9);
}
