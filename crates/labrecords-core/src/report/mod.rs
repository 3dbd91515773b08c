//! Diagnostic report assembly.
//!
//! A report combines a patient's identity with every recorded test result,
//! each annotated with its [`Status`] against the stored reference range.
//! Statuses are recomputed on every build and never stored.

use serde::{Deserialize, Serialize};

use crate::classifier::{classify, Status};
use crate::db::{Database, DbResult};
use crate::models::{LabTest, Patient};

/// One annotated test line in a report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    pub id: i64,
    pub test_category: String,
    pub test_name: String,
    pub test_value: f64,
    pub normal_range: String,
    pub unit: String,
    pub additional_note: Option<String>,
    pub created_at: String,
    pub status: Status,
}

impl From<LabTest> for ReportEntry {
    fn from(test: LabTest) -> Self {
        let status = classify(test.test_value, &test.normal_range);
        Self {
            id: test.id,
            test_category: test.test_category,
            test_name: test.test_name,
            test_value: test.test_value,
            normal_range: test.normal_range,
            unit: test.unit,
            additional_note: test.additional_note,
            created_at: test.created_at,
            status,
        }
    }
}

/// Full diagnostic report for one patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientReport {
    pub patient_name: String,
    pub patient_code: String,
    pub patient_age: u32,
    pub patient_gender: String,
    /// Newest first
    pub tests: Vec<ReportEntry>,
}

impl PatientReport {
    /// Assemble a report from a patient and their test results.
    pub fn new(patient: &Patient, tests: Vec<LabTest>) -> Self {
        Self {
            patient_name: patient.full_name.clone(),
            patient_code: patient.patient_code.clone(),
            patient_age: patient.age,
            patient_gender: patient.gender.clone(),
            tests: tests.into_iter().map(ReportEntry::from).collect(),
        }
    }

    /// Entries grouped by category, categories in first-appearance order.
    pub fn by_category(&self) -> Vec<(&str, Vec<&ReportEntry>)> {
        let mut groups: Vec<(&str, Vec<&ReportEntry>)> = Vec::new();
        for entry in &self.tests {
            match groups
                .iter()
                .position(|(category, _)| *category == entry.test_category)
            {
                Some(i) => groups[i].1.push(entry),
                None => groups.push((entry.test_category.as_str(), vec![entry])),
            }
        }
        groups
    }

    /// Entries flagged Low or High.
    pub fn abnormal(&self) -> impl Iterator<Item = &ReportEntry> {
        self.tests.iter().filter(|e| e.status.is_abnormal())
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Builds reports from the store.
pub struct ReportBuilder<'a> {
    db: &'a Database,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Build the report for a patient row ID. `None` if the patient is unknown.
    pub fn build(&self, patient_id: i64) -> DbResult<Option<PatientReport>> {
        match self.db.get_patient(patient_id)? {
            Some(patient) => self.build_for(&patient).map(Some),
            None => Ok(None),
        }
    }

    /// Build the report for a patient code. `None` if the code is unknown.
    pub fn build_for_code(&self, patient_code: &str) -> DbResult<Option<PatientReport>> {
        match self.db.get_patient_by_code(patient_code)? {
            Some(patient) => self.build_for(&patient).map(Some),
            None => Ok(None),
        }
    }

    fn build_for(&self, patient: &Patient) -> DbResult<PatientReport> {
        let tests = self.db.list_tests_for_patient(patient.id)?;
        let report = PatientReport::new(patient, tests);
        tracing::info!(
            patient_id = patient.id,
            tests = report.tests.len(),
            abnormal = report.abnormal().count(),
            "generated report"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewLabTest, NewPatient};

    fn setup_db() -> (Database, i64) {
        let db = Database::open_in_memory().unwrap();
        let patient_id = db
            .insert_patient(&NewPatient {
                full_name: "Kiran Rao".into(),
                age: 51,
                gender: "Male".into(),
                contact_number: "555-0120".into(),
                email: "kiran@example.com".into(),
                patient_code: "P-300".into(),
                address: "3 Temple St".into(),
            })
            .unwrap();
        (db, patient_id)
    }

    fn add(db: &Database, patient_id: i64, category: &str, name: &str, value: f64, range: &str) {
        db.insert_test(&NewLabTest {
            patient_id,
            test_category: category.into(),
            test_name: name.into(),
            test_value: value,
            normal_range: range.into(),
            unit: "unit".into(),
            additional_note: None,
        })
        .unwrap();
    }

    #[test]
    fn test_build_annotates_status() {
        let (db, patient_id) = setup_db();
        add(&db, patient_id, "Biochemistry Tests", "FBS", 65.0, "70\u{2013}110");
        add(&db, patient_id, "Biochemistry Tests", "GGT", 61.0, "Up to 60");
        add(&db, patient_id, "Hematology Tests", "INR", 1.0, "<1.1");

        let report = ReportBuilder::new(&db).build(patient_id).unwrap().unwrap();

        assert_eq!(report.patient_name, "Kiran Rao");
        assert_eq!(report.patient_code, "P-300");
        assert_eq!(report.patient_age, 51);

        let statuses: Vec<(&str, Status)> = report
            .tests
            .iter()
            .map(|e| (e.test_name.as_str(), e.status))
            .collect();
        assert_eq!(
            statuses,
            vec![
                ("INR", Status::Normal),
                ("GGT", Status::High),
                ("FBS", Status::Low),
            ]
        );
        assert_eq!(report.abnormal().count(), 2);
    }

    #[test]
    fn test_unknown_patient() {
        let (db, patient_id) = setup_db();
        let builder = ReportBuilder::new(&db);
        assert!(builder.build(patient_id + 1).unwrap().is_none());
        assert!(builder.build_for_code("missing").unwrap().is_none());
    }

    #[test]
    fn test_build_for_code() {
        let (db, patient_id) = setup_db();
        add(&db, patient_id, "Biochemistry Tests", "Sodium", 150.0, "135-145");

        let report = ReportBuilder::new(&db)
            .build_for_code("P-300")
            .unwrap()
            .unwrap();
        assert_eq!(report.tests.len(), 1);
        assert_eq!(report.tests[0].status, Status::High);
    }

    #[test]
    fn test_by_category_preserves_first_appearance() {
        let (db, patient_id) = setup_db();
        add(&db, patient_id, "Hematology Tests", "Hb", 14.0, "13-16");
        add(&db, patient_id, "Biochemistry Tests", "Sodium", 140.0, "135-145");
        add(&db, patient_id, "Hematology Tests", "MCV", 85.0, "82-92");

        let report = ReportBuilder::new(&db).build(patient_id).unwrap().unwrap();
        let groups = report.by_category();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Hematology Tests");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "Biochemistry Tests");
        assert_eq!(groups[1].1.len(), 1);
    }

    #[test]
    fn test_json_shape() {
        let (db, patient_id) = setup_db();
        add(&db, patient_id, "Hematology Tests", "Hb", 12.0, "M: 13-16; F: 11.5-14.5");

        let report = ReportBuilder::new(&db).build(patient_id).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["patientName"], "Kiran Rao");
        assert_eq!(json["patientGender"], "Male");
        assert_eq!(json["tests"][0]["testName"], "Hb");
        assert_eq!(json["tests"][0]["status"], "Normal");
        assert!(json["tests"][0]["additionalNote"].is_null());
    }
}
