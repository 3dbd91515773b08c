//! Core runtime configuration.
//!
//! Resolved once at process startup and passed into [`LabRecords`](crate::LabRecords).
//! Nothing in the core reads environment variables.

use std::path::{Path, PathBuf};

use crate::auth::DEFAULT_ITERATIONS;
use crate::{LabRecordsError, LabRecordsResult};

/// Default SQLite file name.
pub const DEFAULT_DATABASE_FILE: &str = "patients.db";

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    database_path: PathBuf,
    password_iterations: u32,
}

impl CoreConfig {
    pub fn new(database_path: PathBuf, password_iterations: u32) -> LabRecordsResult<Self> {
        if database_path.as_os_str().is_empty() {
            return Err(LabRecordsError::InvalidInput(
                "database path cannot be empty".into(),
            ));
        }
        if password_iterations == 0 {
            return Err(LabRecordsError::InvalidInput(
                "password iterations must be at least 1".into(),
            ));
        }

        Ok(Self {
            database_path,
            password_iterations,
        })
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    /// PBKDF2 rounds used when hashing new passwords.
    pub fn password_iterations(&self) -> u32 {
        self.password_iterations
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_FILE),
            password_iterations: DEFAULT_ITERATIONS,
        }
    }
}
