//! Dashboard summary over the whole store.

use serde::{Deserialize, Serialize};

use crate::db::{Database, DbResult};
use crate::models::Patient;

/// Age buckets as (label, min, max), inclusive.
const AGE_GROUPS: [(&str, u32, u32); 5] = [
    ("0-17 years", 0, 17),
    ("18-35 years", 18, 35),
    ("36-50 years", 36, 50),
    ("51-65 years", 51, 65),
    ("66+ years", 66, u32::MAX),
];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GenderDistribution {
    pub male: usize,
    pub female: usize,
    pub other: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgeGroupCount {
    pub label: String,
    pub count: usize,
}

/// Headline counts and patient demographics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LabSummary {
    pub total_patients: usize,
    pub total_tests: usize,
    /// Tests classified Low or High
    pub abnormal_results: usize,
    pub gender: GenderDistribution,
    pub age_groups: Vec<AgeGroupCount>,
}

impl LabSummary {
    /// Compute the summary from the store.
    pub fn compute(db: &Database) -> DbResult<Self> {
        let patients = db.list_patients()?;
        let tests = db.list_tests()?;

        let abnormal_results = tests
            .iter()
            .filter(|listing| listing.test.status().is_abnormal())
            .count();

        Ok(Self {
            total_patients: patients.len(),
            total_tests: db.count_tests()?,
            abnormal_results,
            gender: gender_distribution(&patients),
            age_groups: age_distribution(&patients),
        })
    }
}

fn gender_distribution(patients: &[Patient]) -> GenderDistribution {
    let mut dist = GenderDistribution::default();
    for patient in patients {
        match patient.gender.as_str() {
            "Male" => dist.male += 1,
            "Female" => dist.female += 1,
            _ => dist.other += 1,
        }
    }
    dist
}

fn age_distribution(patients: &[Patient]) -> Vec<AgeGroupCount> {
    AGE_GROUPS
        .iter()
        .map(|&(label, min, max)| AgeGroupCount {
            label: label.to_string(),
            count: patients
                .iter()
                .filter(|p| p.age >= min && p.age <= max)
                .count(),
        })
        .collect()
}
