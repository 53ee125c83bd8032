// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Output targets for generated source text.
//!
//! A [`Sink`] receives one complete file per call. Writes honour an overwrite
//! flag: when it is off and the target already exists the call is a no-op,
//! reported as [`WriteOutcome::Skipped`] rather than as an error.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf}
};

use crate::error::{Result, ScaffoldError};

/// What a sink did with a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The content was stored.
    Written,
    /// The target existed and overwriting was disabled.
    Skipped
}

/// Destination for generated files.
pub trait Sink {
    /// Store `content` at `path`, creating intermediate directories.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Write`] when the target cannot be written.
    fn write(&mut self, path: &Path, content: &str, overwrite: bool) -> Result<WriteOutcome>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write(&mut self, path: &Path, content: &str, overwrite: bool) -> Result<WriteOutcome> {
        (**self).write(path, content, overwrite)
    }
}

/// Sink writing to the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSink;

impl Sink for FileSink {
    fn write(&mut self, path: &Path, content: &str, overwrite: bool) -> Result<WriteOutcome> {
        let to_error = |source| ScaffoldError::Write {
            path: path.to_path_buf(),
            source
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(to_error)?;
        }

        if !overwrite && path.exists() {
            tracing::debug!(path = %path.display(), "target exists, overwrite disabled");
            return Ok(WriteOutcome::Skipped);
        }

        fs::write(path, content).map_err(to_error)?;
        Ok(WriteOutcome::Written)
    }
}

/// Sink keeping files in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: BTreeMap<PathBuf, String>
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Content stored at `path`.
    #[must_use]
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    /// All stored files, ordered by path.
    #[must_use]
    pub fn files(&self) -> &BTreeMap<PathBuf, String> {
        &self.files
    }
}

impl Sink for MemorySink {
    fn write(&mut self, path: &Path, content: &str, overwrite: bool) -> Result<WriteOutcome> {
        if !overwrite && self.files.contains_key(path) {
            tracing::debug!(path = %path.display(), "target exists, overwrite disabled");
            return Ok(WriteOutcome::Skipped);
        }
        self.files
            .insert(path.to_path_buf(), content.to_string());
        Ok(WriteOutcome::Written)
    }
}
