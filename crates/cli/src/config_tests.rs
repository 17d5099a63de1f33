// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::TempDir;

#[test]
fn init_creates_config_and_gitignore() {
    let temp = TempDir::new().unwrap();
    let work_dir = init_work_dir(temp.path()).unwrap();

    assert_eq!(work_dir, temp.path().join(".todosaurus"));
    assert_eq!(Config::load(&work_dir).unwrap(), Config::default());
    let gitignore = fs::read_to_string(work_dir.join(".gitignore")).unwrap();
    assert!(gitignore.lines().any(|l| l == "choice.toml"));
}

#[test]
fn init_twice_fails() {
    let temp = TempDir::new().unwrap();
    init_work_dir(temp.path()).unwrap();
    let err = init_work_dir(temp.path()).unwrap_err();
    assert!(err.to_string().starts_with("already initialized"));
}

#[test]
fn missing_fields_use_defaults() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "").unwrap();
    let config = Config::load(temp.path()).unwrap();
    assert_eq!(config.repository_types, vec!["GitHub", "GitLab"]);
    assert!(config.source_url_base.is_none());
}

#[test]
fn custom_config_round_trips() {
    let temp = TempDir::new().unwrap();
    let config = Config {
        repository_types: vec!["GitLab".into()],
        source_url_base: Some("https://code.example.com".into()),
    };
    config.save(temp.path()).unwrap();
    assert_eq!(Config::load(temp.path()).unwrap(), config);
}

#[test]
fn load_reports_parse_errors() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "repository_types = 3").unwrap();
    let err = Config::load(temp.path()).unwrap_err();
    assert!(err.to_string().contains("failed to parse config"));
}

#[test]
fn project_root_is_parent_of_work_dir() {
    assert_eq!(
        project_root(Path::new("/src/app/.todosaurus")),
        PathBuf::from("/src/app")
    );
}
