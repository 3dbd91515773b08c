//! Patient models.

use serde::{Deserialize, Serialize};

use super::{require, ValidationError};

/// A registered patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Store-assigned row ID
    pub id: i64,
    pub full_name: String,
    /// Age in years
    pub age: u32,
    /// "Male", "Female", or free text
    pub gender: String,
    pub contact_number: String,
    pub email: String,
    /// Lab-issued code, unique per patient
    pub patient_code: String,
    pub address: String,
    /// Creation timestamp
    pub created_at: String,
}

/// Input for registering a patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub full_name: String,
    pub age: u32,
    pub gender: String,
    pub contact_number: String,
    pub email: String,
    pub patient_code: String,
    pub address: String,
}

impl NewPatient {
    /// Check that every required text field is filled in.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("fullName", &self.full_name)?;
        require("gender", &self.gender)?;
        require("contactNumber", &self.contact_number)?;
        require("email", &self.email)?;
        require("patientCode", &self.patient_code)?;
        require("address", &self.address)?;
        Ok(())
    }
}

/// Patient identity block shown at the top of a printed report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientSummary {
    pub patient_name: String,
    pub patient_age: u32,
    pub patient_gender: String,
    pub patient_code: String,
    pub patient_contact: String,
}

impl From<&Patient> for PatientSummary {
    fn from(patient: &Patient) -> Self {
        Self {
            patient_name: patient.full_name.clone(),
            patient_age: patient.age,
            patient_gender: patient.gender.clone(),
            patient_code: patient.patient_code.clone(),
            patient_contact: patient.contact_number.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewPatient {
        NewPatient {
            full_name: "Asha Verma".into(),
            age: 42,
            gender: "Female".into(),
            contact_number: "555-0100".into(),
            email: "asha@example.com".into(),
            patient_code: "P-0001".into(),
            address: "12 Lake Road".into(),
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut patient = sample();
        patient.contact_number = "  ".into();
        patient.address = String::new();
        assert_eq!(
            patient.validate(),
            Err(ValidationError::MissingField("contactNumber"))
        );
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["fullName"], "Asha Verma");
        assert_eq!(json["patientCode"], "P-0001");
    }
}
