//! Command handlers. Each prints its result to stdout as JSON.

use anyhow::{anyhow, Context, Result};
use labrecords_core::{
    CoreConfig, LabRecords, NewLab, NewLabTest, NewPatient, PatientReport, ReferenceRange,
    TestCatalog,
};
use serde::Serialize;

use crate::cli::{
    CatalogArgs, ClassifyArgs, Command, LabCommand, PatientCommand, ReportArgs, TestAddArgs,
    TestCommand, UserCommand,
};

/// Dispatch a parsed command.
pub fn run(command: &Command, config: &CoreConfig) -> Result<()> {
    match command {
        Command::Classify(args) => run_classify(args),
        Command::Catalog(args) => run_catalog(args),
        Command::Patient { action } => run_patient(action, &open(config)?),
        Command::Test { action } => run_test(action, &open(config)?),
        Command::Lab { action } => run_lab(action, &open(config)?),
        Command::User { action } => run_user(action, &open(config)?),
        Command::Report(args) => run_report(args, &open(config)?),
        Command::Summary => print_json(&open(config)?.summary()?),
    }
}

fn open(config: &CoreConfig) -> Result<LabRecords> {
    LabRecords::open(config).with_context(|| {
        format!(
            "failed to open database {}",
            config.database_path().display()
        )
    })
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_patient(action: &PatientCommand, records: &LabRecords) -> Result<()> {
    match action {
        PatientCommand::Add(args) => {
            let patient = records.add_patient(NewPatient {
                full_name: args.full_name.clone(),
                age: args.age,
                gender: args.gender.clone(),
                contact_number: args.contact_number.clone(),
                email: args.email.clone(),
                patient_code: args.patient_code.clone(),
                address: args.address.clone(),
            })?;
            print_json(&patient)
        }
        PatientCommand::List => print_json(&records.list_patients()?),
        PatientCommand::Show { code } => print_json(&records.patient_summary(code)?),
    }
}

fn run_test(action: &TestCommand, records: &LabRecords) -> Result<()> {
    match action {
        TestCommand::Add(args) => {
            let test = records.add_test(new_test_from_args(args, &TestCatalog::new())?)?;
            print_json(&test)
        }
        TestCommand::List => print_json(&records.list_tests()?),
        TestCommand::Delete { id } => {
            records.delete_test(*id)?;
            print_json(&serde_json::json!({ "message": "Test deleted successfully" }))
        }
    }
}

/// Fill unit and range from the catalog when not given explicitly.
fn new_test_from_args(args: &TestAddArgs, catalog: &TestCatalog) -> Result<NewLabTest> {
    let entry = catalog.find(&args.category, &args.name);

    let normal_range = match (&args.range, entry) {
        (Some(range), _) => range.clone(),
        (None, Some(entry)) => entry.reference_range.to_string(),
        (None, None) => {
            return Err(anyhow!(
                "no catalog entry for {:?} / {:?}; pass --range and --unit",
                args.category,
                args.name
            ))
        }
    };
    let unit = match (&args.unit, entry) {
        (Some(unit), _) => unit.clone(),
        (None, Some(entry)) => entry.unit.to_string(),
        (None, None) => return Err(anyhow!("missing --unit for {:?}", args.name)),
    };

    Ok(NewLabTest {
        patient_id: args.patient_id,
        test_category: args.category.clone(),
        test_name: args.name.clone(),
        test_value: args.value,
        normal_range,
        unit,
        additional_note: args.note.clone(),
    })
}

fn run_lab(action: &LabCommand, records: &LabRecords) -> Result<()> {
    match action {
        LabCommand::Add(args) => {
            let id = records.add_lab(NewLab {
                name: args.name.clone(),
                slogan: args.slogan.clone(),
                address: args.address.clone(),
                phone: args.phone.clone(),
                email: args.email.clone(),
            })?;
            print_json(&serde_json::json!({ "id": id, "message": "Lab added successfully" }))
        }
        LabCommand::List => print_json(&records.list_labs()?),
    }
}

fn run_user(action: &UserCommand, records: &LabRecords) -> Result<()> {
    match action {
        UserCommand::Signup(args) => print_json(&records.sign_up(&args.email, &args.password)?),
        UserCommand::Login(args) => print_json(&records.authenticate(&args.email, &args.password)?),
    }
}

fn run_report(args: &ReportArgs, records: &LabRecords) -> Result<()> {
    let mut report: PatientReport = match (&args.code, args.patient_id) {
        (Some(code), _) => records.report_for_code(code)?,
        (None, Some(id)) => records.generate_report(id)?,
        (None, None) => return Err(anyhow!("pass a patient ID or --code")),
    };
    if args.abnormal_only {
        report.tests.retain(|entry| entry.status.is_abnormal());
    }
    print_json(&report)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClassifyOutput<'a> {
    value: f64,
    normal_range: &'a str,
    parsed: ReferenceRange,
    status: labrecords_core::Status,
}

fn run_classify(args: &ClassifyArgs) -> Result<()> {
    let parsed = ReferenceRange::parse(&args.range);
    print_json(&ClassifyOutput {
        value: args.value,
        normal_range: &args.range,
        parsed,
        status: parsed.classify(args.value),
    })
}

fn run_catalog(args: &CatalogArgs) -> Result<()> {
    let catalog = TestCatalog::new();
    match &args.category {
        Some(category) => {
            let entries: Vec<_> = catalog.tests_in(category).collect();
            if entries.is_empty() {
                return Err(anyhow!(
                    "unknown category {category:?}; known: {}",
                    catalog.categories().join(", ")
                ));
            }
            print_json(&entries)
        }
        None => print_json(catalog.entries()),
    }
}
