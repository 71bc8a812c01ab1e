// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Errors that end the program.

use crate::http::HTTPError;
use crate::twitter::client;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A fatal program error.
///
/// Every variant maps to a process exit status via [`Error::exit_code()`].
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file does not exist.
    #[error("config: could not find file: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// The configuration file exists but could not be read, or it is
    /// missing the `[twitter]` section or one of its keys.
    #[error("config: {}: {reason}", .path.display())]
    ConfigMalformed { path: PathBuf, reason: String },

    /// The program was invoked incorrectly.
    #[error("{0}")]
    Usage(String),

    /// An HTTP client could not be constructed, so no search is possible.
    #[error("dependency unavailable: {0}")]
    DependencyUnavailable(#[source] HTTPError),

    /// The search client failed while talking to Twitter.
    #[error("search failed: {0}")]
    SearchClient(#[from] client::Error),

    /// Results could not be written to the terminal.
    #[error("output error: {0}")]
    Output(#[from] io::Error),
}

impl Error {
    /// The status the process should exit with when this error occurs.
    ///
    /// Usage errors exit with 2, like clap's own argument errors; everything
    /// else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) => 2,
            _ => 1,
        }
    }
}
