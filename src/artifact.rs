// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Rendered output of one generation unit.

use std::path::{Path, PathBuf};

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Class name; also the file stem.
    pub class_name: String,

    /// Dialect file extension, without the dot.
    pub extension: &'static str,

    /// Complete source text.
    pub content: String
}

impl Artifact {
    /// Create an artifact.
    #[must_use]
    pub fn new(class_name: String, extension: &'static str, content: String) -> Self {
        Self {
            class_name,
            extension,
            content
        }
    }

    /// `{class_name}.{extension}`
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.class_name, self.extension)
    }

    /// Destination inside `output_dir`.
    #[must_use]
    pub fn path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.file_name())
    }
}
