// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use super::*;
use crate::test_helpers::{new_item, Fixture};
use tempfile::TempDir;

fn choice(tracker: Option<&str>, credentials: Option<&str>) -> UserChoice {
    UserChoice {
        issue_tracker_id: tracker.map(str::to_string),
        credentials_id: credentials.map(str::to_string),
        placement_details: Some(PlacementDetails::new("owner/repo")),
        saved_at: None,
    }
}

#[test]
fn in_memory_store_starts_empty() {
    let store = UserChoiceStore::in_memory();
    assert!(store.get_choice_or_null().is_none());
    assert!(store.path().is_none());
}

#[test]
fn save_then_get_returns_choice() {
    let store = UserChoiceStore::in_memory();
    let saved = choice(Some("GitHub"), Some("work"));
    store.save_choice(saved.clone()).unwrap();
    assert_eq!(store.get_choice_or_null(), Some(saved));
}

#[test]
fn save_replaces_previous_choice() {
    let store = UserChoiceStore::in_memory();
    store.save_choice(choice(Some("GitHub"), Some("work"))).unwrap();
    store.save_choice(choice(Some("GitLab"), Some("home"))).unwrap();
    let current = store.get_choice_or_null().unwrap();
    assert_eq!(current.issue_tracker_id.as_deref(), Some("GitLab"));
}

#[test]
fn clear_forgets_choice() {
    let store = UserChoiceStore::in_memory();
    store.save_choice(choice(Some("GitHub"), Some("work"))).unwrap();
    store.clear().unwrap();
    assert!(store.get_choice_or_null().is_none());
}

#[test]
fn file_store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".todosaurus").join("choice.toml");

    let store = UserChoiceStore::open(&path).unwrap();
    assert!(store.get_choice_or_null().is_none());
    let saved = choice(Some("GitHub"), Some("work"));
    store.save_choice(saved.clone()).unwrap();
    assert!(path.is_file());

    let reopened = UserChoiceStore::open(&path).unwrap();
    assert_eq!(reopened.get_choice_or_null(), Some(saved));
}

#[test]
fn file_store_clear_removes_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("choice.toml");
    let store = UserChoiceStore::open(&path).unwrap();
    store.save_choice(choice(Some("GitHub"), Some("work"))).unwrap();

    store.clear().unwrap();

    assert!(!path.exists());
    assert!(UserChoiceStore::open(&path).unwrap().get_choice_or_null().is_none());
}

#[test]
fn clear_without_file_is_ok() {
    let dir = TempDir::new().unwrap();
    let store = UserChoiceStore::open(&dir.path().join("choice.toml")).unwrap();
    store.clear().unwrap();
}

#[test]
fn open_rejects_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("choice.toml");
    std::fs::write(&path, "credentials_id = [").unwrap();
    let err = UserChoiceStore::open(&path).unwrap_err();
    assert!(matches!(err, Error::Store(_)));
}

#[test]
fn saved_file_omits_missing_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("choice.toml");
    let store = UserChoiceStore::open(&path).unwrap();
    store
        .save_choice(UserChoice {
            issue_tracker_id: Some("GitHub".into()),
            ..UserChoice::default()
        })
        .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("issue_tracker_id = \"GitHub\""));
    assert!(!content.contains("credentials_id"));
}

#[tokio::test]
async fn retrieve_builds_context_from_choice() {
    let fixture = Fixture::new();
    let (_doc, item) = new_item("TODO: fix");

    let context = retrieve_wizard_context_based_on_user_choice(
        &fixture.provider,
        item,
        &choice(Some("GitHub"), Some("work")),
    )
    .await
    .unwrap();

    let tracker = context.connection_details.issue_tracker.as_ref().unwrap();
    assert_eq!(tracker.id(), "GitHub");
    assert_eq!(context.connection_details.credentials.as_ref().unwrap().id, "work");
    assert_eq!(
        context.placement_details,
        Some(PlacementDetails::new("owner/repo"))
    );
    assert!(!context.remember_choice);
}

#[tokio::test]
async fn retrieve_without_credentials_id_fails_first() {
    let fixture = Fixture::new();
    let (_doc, item) = new_item("TODO: fix");

    // Unknown tracker too, but the missing identifier wins.
    let err = retrieve_wizard_context_based_on_user_choice(
        &fixture.provider,
        item,
        &choice(Some("Jira"), None),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, Error::MissingCredentialsId));
    assert!(fixture.remote.clients().is_empty());
    assert_eq!(fixture.remote.calls(), 0);
}

#[tokio::test]
async fn retrieve_with_unknown_tracker_fails() {
    let fixture = Fixture::new();
    let (_doc, item) = new_item("TODO: fix");

    let err = retrieve_wizard_context_based_on_user_choice(
        &fixture.provider,
        item,
        &choice(Some("GitLab"), Some("work")),
    )
    .await
    .unwrap_err();

    match err {
        Error::IssueTrackerNotFound(id) => assert_eq!(id, "GitLab"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn retrieve_without_tracker_id_fails_as_not_found() {
    let fixture = Fixture::new();
    let (_doc, item) = new_item("TODO: fix");

    let err = retrieve_wizard_context_based_on_user_choice(
        &fixture.provider,
        item,
        &choice(None, Some("work")),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, Error::IssueTrackerNotFound(id) if id.is_empty()));
}

#[tokio::test]
async fn retrieve_with_unknown_credentials_fails() {
    let fixture = Fixture::new();
    let (_doc, item) = new_item("TODO: fix");

    let err = retrieve_wizard_context_based_on_user_choice(
        &fixture.provider,
        item,
        &choice(Some("GitHub"), Some("personal")),
    )
    .await
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "unable to find credentials with \"personal\" identifier"
    );
}
