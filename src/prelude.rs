// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Everything needed to run a generation.
//!
//! ```rust
//! use schema_scaffold::prelude::*;
//! ```

pub use scaffold_core::prelude::*;

pub use crate::{
    Artifact, Casing, ConnectionSettings, ConstructorStyle, Dialect, Entity, GenerationConfig,
    LineDedup, Scaffolder
};
