// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::sync::{Arc, Mutex};

#[tokio::test]
async fn run_returns_job_result() {
    let executor = DocumentExecutor::spawn().unwrap();
    assert_eq!(executor.run(|| 2 + 2).await.unwrap(), 4);
}

#[tokio::test]
async fn jobs_run_on_document_thread() {
    let executor = DocumentExecutor::spawn().unwrap();
    let name = executor
        .run(|| thread::current().name().map(str::to_string))
        .await
        .unwrap();
    assert_eq!(name.as_deref(), Some("tds-document"));
}

#[tokio::test]
async fn concurrent_submissions_all_run() {
    let executor = DocumentExecutor::spawn().unwrap();
    let log = Arc::new(Mutex::new(Vec::new()));

    let mut pending = Vec::new();
    for i in 0..20 {
        let log = Arc::clone(&log);
        let executor = executor.clone();
        pending.push(tokio::spawn(async move {
            executor.run(move || log.lock().unwrap().push(i)).await
        }));
        tokio::task::yield_now().await;
    }
    for handle in pending {
        handle.await.unwrap().unwrap();
    }

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 20);
}

#[tokio::test]
async fn clones_share_one_thread() {
    let executor = DocumentExecutor::spawn().unwrap();
    let other = executor.clone();
    let a = executor.run(|| thread::current().id()).await.unwrap();
    let b = other.run(|| thread::current().id()).await.unwrap();
    assert_eq!(a, b);
}
