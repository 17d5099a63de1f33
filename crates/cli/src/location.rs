// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `FILE:LINE` arguments.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A 1-based line in a file, as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub line: usize,
}

impl FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidLocation(s.to_string());
        let (path, line) = s.rsplit_once(':').ok_or_else(invalid)?;
        let line: usize = line.parse().map_err(|_| invalid())?;
        if path.is_empty() || line == 0 {
            return Err(invalid());
        }
        Ok(Location {
            path: path.to_string(),
            line,
        })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path, self.line)
    }
}

#[cfg(test)]
#[path = "location_tests.rs"]
mod tests;
