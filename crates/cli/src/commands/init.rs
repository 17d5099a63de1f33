// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::config::{init_work_dir, Config};
use crate::error::Result;

pub fn run(path: Option<String>) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };

    let work_dir = init_work_dir(&target_path)?;
    let config = Config::load(&work_dir)?;

    println!("Initialized todosaurus at {}", work_dir.display());
    println!("Trackers: {}", config.repository_types.join(", "));
    Ok(())
}
