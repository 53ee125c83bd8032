// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Connection parameters for database-backed schema providers.
//!
//! Settings are checked before a provider is built, so incomplete settings
//! never reach the database:
//!
//! ```rust
//! use schema_scaffold::{ConnectionSettings, ScaffoldError};
//!
//! let settings = ConnectionSettings::new("localhost", "app", "", "shop");
//! let opened = settings.open(|_| Ok::<_, std::io::Error>(()));
//!
//! assert!(matches!(
//!     opened,
//!     Err(ScaffoldError::MissingConnectionParameters { .. })
//! ));
//! ```

use std::fmt;

use scaffold_core::{Result, ScaffoldError, Stage};
use serde::Deserialize;

/// Environment variable holding the host.
pub const HOST_VAR: &str = "DB_HOST";
/// Environment variable holding the user.
pub const USER_VAR: &str = "DB_USER";
/// Environment variable holding the password.
pub const PASSWORD_VAR: &str = "DB_PASS";
/// Environment variable holding the database name.
pub const DATABASE_VAR: &str = "DB_NAME";

/// Host, credentials and database of a schema source.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConnectionSettings {
    /// Server host name or address.
    pub host: String,

    /// User name.
    pub user: String,

    /// Password.
    pub password: String,

    /// Database (schema) name.
    pub database: String
}

impl ConnectionSettings {
    /// Create settings from explicit values.
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>
    ) -> Self {
        Self {
            host:     host.into(),
            user:     user.into(),
            password: password.into(),
            database: database.into()
        }
    }

    /// Read `DB_HOST`, `DB_USER`, `DB_PASS` and `DB_NAME`.
    ///
    /// Unset variables are left empty and reported by [`Self::validate`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the four variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name| lookup(name).unwrap_or_default();
        Self {
            host:     read(HOST_VAR),
            user:     read(USER_VAR),
            password: read(PASSWORD_VAR),
            database: read(DATABASE_VAR)
        }
    }

    /// Check that every parameter is set.
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::MissingConnectionParameters`] naming every empty
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&'static str> = [
            ("host", &self.host),
            ("user", &self.user),
            ("password", &self.password),
            ("database", &self.database)
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ScaffoldError::MissingConnectionParameters {
                missing
            })
        }
    }

    /// Validate, then build a provider with `connect`.
    ///
    /// `connect` is never called with incomplete settings.
    ///
    /// # Errors
    ///
    /// - [`ScaffoldError::MissingConnectionParameters`] from validation
    /// - [`ScaffoldError::Query`] at [`Stage::Connecting`] when `connect`
    ///   fails
    pub fn open<P, E>(&self, connect: impl FnOnce(&Self) -> Result<P, E>) -> Result<P>
    where
        E: std::error::Error + Send + Sync + 'static
    {
        self.validate()?;
        tracing::debug!(host = %self.host, database = %self.database, "connecting");
        connect(self).map_err(|err| ScaffoldError::query(Stage::Connecting, &self.database, err))
    }
}

impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .finish()
    }
}
