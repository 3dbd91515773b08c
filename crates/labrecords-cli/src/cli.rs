//! CLI argument definitions for the lab records tool.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use labrecords_core::auth::DEFAULT_ITERATIONS;
use labrecords_core::config::DEFAULT_DATABASE_FILE;

#[derive(Parser)]
#[command(
    name = "labrecords",
    version,
    about = "Clinical lab records - patients, test results and diagnostic reports",
    long_about = "Manage patients, lab test results and lab letterheads stored in SQLite.\n\n\
                  Reports annotate every test result as Normal, Low or High against\n\
                  its stored reference range."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// SQLite database file.
    #[arg(
        long = "database",
        env = "LABRECORDS_DB",
        value_name = "PATH",
        default_value = DEFAULT_DATABASE_FILE,
        global = true
    )]
    pub database: PathBuf,

    /// PBKDF2 rounds used when hashing new passwords.
    #[arg(
        long = "pbkdf2-iterations",
        env = "LABRECORDS_PBKDF2_ITERATIONS",
        value_name = "N",
        default_value_t = DEFAULT_ITERATIONS,
        global = true
    )]
    pub password_iterations: u32,

    /// Explicit log level (RUST_LOG is used when omitted).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Register and look up patients.
    Patient {
        #[command(subcommand)]
        action: PatientCommand,
    },

    /// Record, list and delete test results.
    Test {
        #[command(subcommand)]
        action: TestCommand,
    },

    /// Manage lab letterhead details.
    Lab {
        #[command(subcommand)]
        action: LabCommand,
    },

    /// Register users and check credentials.
    User {
        #[command(subcommand)]
        action: UserCommand,
    },

    /// Print a patient's diagnostic report as JSON.
    Report(ReportArgs),

    /// Classify a single value against a reference range.
    Classify(ClassifyArgs),

    /// Print store-wide counts and demographics.
    Summary,

    /// List the built-in standard test catalog.
    Catalog(CatalogArgs),
}

#[derive(Subcommand)]
pub enum PatientCommand {
    /// Register a new patient.
    Add(PatientAddArgs),
    /// List all patients, newest first.
    List,
    /// Show the report header for a patient code.
    Show {
        #[arg(value_name = "PATIENT_CODE")]
        code: String,
    },
}

#[derive(Parser)]
pub struct PatientAddArgs {
    #[arg(long = "name")]
    pub full_name: String,
    #[arg(long)]
    pub age: u32,
    #[arg(long)]
    pub gender: String,
    #[arg(long = "contact")]
    pub contact_number: String,
    #[arg(long)]
    pub email: String,
    #[arg(long = "code")]
    pub patient_code: String,
    #[arg(long)]
    pub address: String,
}

#[derive(Subcommand)]
pub enum TestCommand {
    /// Record a test result.
    ///
    /// Unit and reference range are taken from the catalog when omitted.
    Add(TestAddArgs),
    /// List all test results, newest first.
    List,
    /// Delete a test result by ID.
    Delete {
        #[arg(value_name = "TEST_ID")]
        id: i64,
    },
}

#[derive(Parser)]
pub struct TestAddArgs {
    #[arg(long = "patient-id")]
    pub patient_id: i64,
    #[arg(long)]
    pub category: String,
    #[arg(long)]
    pub name: String,
    #[arg(long, allow_negative_numbers = true)]
    pub value: f64,
    /// Reference range, e.g. "70-110", "<1.1", "Up to 60".
    #[arg(long, allow_hyphen_values = true)]
    pub range: Option<String>,
    #[arg(long)]
    pub unit: Option<String>,
    #[arg(long)]
    pub note: Option<String>,
}

#[derive(Subcommand)]
pub enum LabCommand {
    /// Add a lab.
    Add(LabAddArgs),
    /// List labs, newest first.
    List,
}

#[derive(Parser)]
pub struct LabAddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub slogan: Option<String>,
    #[arg(long)]
    pub address: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub email: String,
}

#[derive(Subcommand)]
pub enum UserCommand {
    /// Register a new user.
    Signup(CredentialArgs),
    /// Check an email/password pair.
    Login(CredentialArgs),
}

#[derive(Parser)]
pub struct CredentialArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "LABRECORDS_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Parser)]
#[command(group(ArgGroup::new("patient").required(true).args(["patient_id", "code"])))]
pub struct ReportArgs {
    /// Patient row ID.
    #[arg(value_name = "PATIENT_ID")]
    pub patient_id: Option<i64>,

    /// Look the patient up by patient code instead.
    #[arg(long)]
    pub code: Option<String>,

    /// Print only Low/High results.
    #[arg(long = "abnormal-only")]
    pub abnormal_only: bool,
}

#[derive(Parser)]
pub struct ClassifyArgs {
    #[arg(allow_negative_numbers = true)]
    pub value: f64,
    #[arg(allow_hyphen_values = true)]
    pub range: String,
}

#[derive(Parser)]
pub struct CatalogArgs {
    /// Only list tests in this category.
    #[arg(long)]
    pub category: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
