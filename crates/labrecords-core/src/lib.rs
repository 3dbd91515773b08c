//! Lab Records Core Library
//!
//! Record keeping for a clinical lab: patients, test results, lab letterheads
//! and user credentials, plus diagnostic reports that annotate each result
//! against its reference range.
//!
//! # Architecture
//!
//! ```text
//! NewPatient / NewLabTest ──validate──▶ SQLite store (patients, tests, labs, users)
//!                                               │
//!                                      ReportBuilder::build
//!                                               │
//!                          classify(test_value, normal_range) per test
//!                                               │
//!                                  PatientReport { tests[].status }
//! ```
//!
//! # Modules
//!
//! - [`classifier`]: Reference-range parsing and Normal/Low/High classification
//! - [`db`]: SQLite database layer
//! - [`models`]: Domain types (Patient, LabTest, Lab, User)
//! - [`report`]: Per-patient diagnostic reports
//! - [`analytics`]: Store-wide dashboard summary
//! - [`catalog`]: Built-in standard test catalog
//! - [`auth`]: Password hashing for stored credentials
//! - [`config`]: Startup configuration

pub mod analytics;
pub mod auth;
pub mod catalog;
pub mod classifier;
pub mod config;
pub mod db;
pub mod models;
pub mod report;

// Re-export commonly used types
pub use analytics::LabSummary;
pub use catalog::{CatalogEntry, TestCatalog};
pub use classifier::{classify, ReferenceRange, Status};
pub use config::CoreConfig;
pub use db::Database;
pub use models::{
    Lab, LabTest, LabTestListing, NewLab, NewLabTest, NewPatient, Patient, PatientSummary, User,
};
pub use report::{PatientReport, ReportBuilder, ReportEntry};

use std::sync::{Arc, Mutex};

// =========================================================================
// Error Type
// =========================================================================

#[derive(Debug, thiserror::Error)]
pub enum LabRecordsError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type LabRecordsResult<T> = Result<T, LabRecordsError>;

impl From<db::DbError> for LabRecordsError {
    fn from(e: db::DbError) -> Self {
        match e {
            db::DbError::NotFound(what) => LabRecordsError::NotFound(what),
            db::DbError::Constraint(what) => LabRecordsError::Conflict(what),
            other => LabRecordsError::Database(other.to_string()),
        }
    }
}

impl From<models::ValidationError> for LabRecordsError {
    fn from(e: models::ValidationError) -> Self {
        LabRecordsError::InvalidInput(e.to_string())
    }
}

impl From<serde_json::Error> for LabRecordsError {
    fn from(e: serde_json::Error) -> Self {
        LabRecordsError::Serialization(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for LabRecordsError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        LabRecordsError::Database(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe entry point over one database.
pub struct LabRecords {
    db: Arc<Mutex<Database>>,
    password_iterations: u32,
}

impl LabRecords {
    /// Open or create the database named by the config.
    pub fn open(config: &CoreConfig) -> LabRecordsResult<Self> {
        let db = Database::open(config.database_path())?;
        Ok(Self {
            db: Arc::new(Mutex::new(db)),
            password_iterations: config.password_iterations(),
        })
    }

    /// Create an in-memory store (for testing).
    pub fn open_in_memory(password_iterations: u32) -> LabRecordsResult<Self> {
        let db = Database::open_in_memory()?;
        Ok(Self {
            db: Arc::new(Mutex::new(db)),
            password_iterations: password_iterations.max(1),
        })
    }

    // =========================================================================
    // Patient Operations
    // =========================================================================

    /// Register a patient. Patient codes are unique.
    pub fn add_patient(&self, patient: NewPatient) -> LabRecordsResult<Patient> {
        patient.validate()?;
        let db = self.db.lock()?;
        let id = db.insert_patient(&patient)?;
        db.get_patient(id)?
            .ok_or_else(|| LabRecordsError::NotFound(format!("patient {id}")))
    }

    /// All patients, newest first.
    pub fn list_patients(&self) -> LabRecordsResult<Vec<Patient>> {
        let db = self.db.lock()?;
        Ok(db.list_patients()?)
    }

    /// Report header for a patient code.
    pub fn patient_summary(&self, patient_code: &str) -> LabRecordsResult<PatientSummary> {
        let db = self.db.lock()?;
        let patient = db
            .get_patient_by_code(patient_code)?
            .ok_or_else(|| LabRecordsError::NotFound("Patient not found".into()))?;
        Ok(PatientSummary::from(&patient))
    }

    // =========================================================================
    // Test Result Operations
    // =========================================================================

    /// Record a test result for an existing patient.
    pub fn add_test(&self, test: NewLabTest) -> LabRecordsResult<LabTest> {
        test.validate()?;
        let db = self.db.lock()?;
        let id = db.insert_test(&test)?;
        db.get_test(id)?
            .ok_or_else(|| LabRecordsError::NotFound(format!("test {id}")))
    }

    /// All test results with their patients, newest first.
    pub fn list_tests(&self) -> LabRecordsResult<Vec<LabTestListing>> {
        let db = self.db.lock()?;
        Ok(db.list_tests()?)
    }

    /// Delete a test result.
    pub fn delete_test(&self, test_id: i64) -> LabRecordsResult<()> {
        let db = self.db.lock()?;
        if !db.delete_test(test_id)? {
            return Err(LabRecordsError::NotFound(format!("test {test_id}")));
        }
        Ok(())
    }

    // =========================================================================
    // Lab Operations
    // =========================================================================

    pub fn add_lab(&self, lab: NewLab) -> LabRecordsResult<i64> {
        lab.validate()?;
        let db = self.db.lock()?;
        Ok(db.insert_lab(&lab)?)
    }

    /// All labs, newest first.
    pub fn list_labs(&self) -> LabRecordsResult<Vec<Lab>> {
        let db = self.db.lock()?;
        Ok(db.list_labs()?)
    }

    // =========================================================================
    // Report Operations
    // =========================================================================

    /// Diagnostic report for a patient row ID.
    pub fn generate_report(&self, patient_id: i64) -> LabRecordsResult<PatientReport> {
        let db = self.db.lock()?;
        ReportBuilder::new(&db)
            .build(patient_id)?
            .ok_or_else(|| LabRecordsError::NotFound("Patient not found".into()))
    }

    /// Diagnostic report for a patient code.
    pub fn report_for_code(&self, patient_code: &str) -> LabRecordsResult<PatientReport> {
        let db = self.db.lock()?;
        ReportBuilder::new(&db)
            .build_for_code(patient_code)?
            .ok_or_else(|| LabRecordsError::NotFound("Patient not found".into()))
    }

    /// Store-wide counts and demographics.
    pub fn summary(&self) -> LabRecordsResult<LabSummary> {
        let db = self.db.lock()?;
        Ok(LabSummary::compute(&db)?)
    }

    // =========================================================================
    // Credential Operations
    // =========================================================================

    /// Register a user. Passwords shorter than six characters are rejected.
    pub fn sign_up(&self, email: &str, password: &str) -> LabRecordsResult<User> {
        let email = email.trim();
        if email.is_empty() || !auth::is_acceptable_password(password) {
            return Err(LabRecordsError::InvalidInput(
                "Invalid email or password".into(),
            ));
        }

        let hash = auth::hash_password(password, self.password_iterations);
        let db = self.db.lock()?;
        let id = db.insert_user(email, &hash)?;
        tracing::info!(user_id = id, "registered user");
        Ok(User {
            id,
            email: email.to_string(),
        })
    }

    /// Check an email/password pair against the stored credentials.
    pub fn authenticate(&self, email: &str, password: &str) -> LabRecordsResult<User> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(LabRecordsError::InvalidInput(
                "Missing email or password".into(),
            ));
        }

        let db = self.db.lock()?;
        match db.get_user_credentials(email)? {
            Some((user, stored)) if auth::verify_password(password, &stored) => Ok(user),
            _ => {
                tracing::warn!("rejected credentials");
                Err(LabRecordsError::InvalidCredentials)
            }
        }
    }
}
