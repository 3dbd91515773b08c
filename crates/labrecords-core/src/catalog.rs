//! Standard test catalog.
//!
//! Built-in list of routine tests with their units and reference ranges,
//! used to pre-fill new test records.

use serde::Serialize;

/// One catalog test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub category: &'static str,
    pub name: &'static str,
    pub unit: &'static str,
    pub reference_range: &'static str,
}

const fn entry(
    category: &'static str,
    name: &'static str,
    unit: &'static str,
    reference_range: &'static str,
) -> CatalogEntry {
    CatalogEntry {
        category,
        name,
        unit,
        reference_range,
    }
}

/// Lookup over the built-in test list.
pub struct TestCatalog {
    entries: Vec<CatalogEntry>,
}

impl Default for TestCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCatalog {
    /// Create a catalog with the default entries.
    pub fn new() -> Self {
        Self {
            entries: Self::default_entries(),
        }
    }

    /// Find a test by category and exact name.
    pub fn find(&self, category: &str, name: &str) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|e| e.category == category && e.name == name)
    }

    /// Category names in catalog order.
    pub fn categories(&self) -> Vec<&'static str> {
        let mut seen: Vec<&'static str> = Vec::new();
        for e in &self.entries {
            if !seen.contains(&e.category) {
                seen.push(e.category);
            }
        }
        seen
    }

    /// Tests in one category.
    pub fn tests_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
        self.entries.iter().filter(move |e| e.category == category)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a lab-specific test.
    pub fn add(&mut self, entry: CatalogEntry) {
        self.entries.push(entry);
    }

    fn default_entries() -> Vec<CatalogEntry> {
        vec![
            // Biochemistry
            entry("Biochemistry Tests", "Fasting Blood Sugar (FBS)", "mg/dL", "70\u{2013}110"),
            entry("Biochemistry Tests", "Postprandial Blood Sugar (PPBS)", "mg/dL", "110\u{2013}160"),
            entry("Biochemistry Tests", "Random Blood Sugar (RBS)", "mg/dL", "70\u{2013}140"),
            entry("Biochemistry Tests", "HbA1c", "%", "4.4\u{2013}6.7"),
            entry("Biochemistry Tests", "Blood Urea Nitrogen (BUN)", "mg/dL", "25\u{2013}40"),
            entry("Biochemistry Tests", "Serum Creatinine", "mg/dL", "0.6\u{2013}1.5"),
            entry("Biochemistry Tests", "Uric Acid", "mg/dL", "M: 3.5\u{2013}7.2; F: 2.6\u{2013}6.0"),
            entry("Biochemistry Tests", "Total Bilirubin", "mg/dL", "0\u{2013}1.2"),
            entry("Biochemistry Tests", "Direct Bilirubin", "mg/dL", "0\u{2013}0.2"),
            entry("Biochemistry Tests", "Indirect Bilirubin", "mg/dL", "0.1\u{2013}1.1"),
            entry("Biochemistry Tests", "SGOT (AST)", "U/L", "8\u{2013}40"),
            entry("Biochemistry Tests", "SGPT (ALT)", "U/L", "8\u{2013}40"),
            entry("Biochemistry Tests", "Alkaline Phosphatase (ALP)", "U/L", "108\u{2013}306"),
            entry("Biochemistry Tests", "Gamma GT (GGT)", "U/L", "Up to 60"),
            entry("Biochemistry Tests", "Total Protein", "g/dL", "6\u{2013}8"),
            entry("Biochemistry Tests", "Albumin", "g/dL", "3.5\u{2013}5.5"),
            entry("Biochemistry Tests", "Globulin", "g/dL", "2.5\u{2013}3.5"),
            entry("Biochemistry Tests", "A/G Ratio", "Ratio", "1.2\u{2013}2.2"),
            entry("Biochemistry Tests", "Calcium (Total)", "mg/dL", "8.5\u{2013}10.5"),
            entry("Biochemistry Tests", "Phosphorus", "mg/dL", "2.5\u{2013}5.0"),
            entry("Biochemistry Tests", "Sodium", "mEq/L", "135\u{2013}145"),
            entry("Biochemistry Tests", "Potassium", "mEq/L", "3.6\u{2013}5.0"),
            entry("Biochemistry Tests", "Chloride", "mEq/L", "98\u{2013}119"),
            entry("Biochemistry Tests", "Lipid Profile", "mg/dL", "Varies per component"),
            entry("Biochemistry Tests", "Amylase", "U/L", "Up to 85"),
            entry("Biochemistry Tests", "Lipase", "U/L", "Up to 200"),

            // Hematology
            entry("Hematology Tests", "Hemoglobin (Hb)", "g/dL", "M: 13\u{2013}16; F: 11.5\u{2013}14.5"),
            entry("Hematology Tests", "Total Leukocyte Count (TLC)", "x10³/µL", "4\u{2013}11"),
            entry("Hematology Tests", "Red Blood Cell Count (RBC)", "x10⁶/µL", "M: 4.5\u{2013}6.0; F: 4.0\u{2013}4.5"),
            entry("Hematology Tests", "Packed Cell Volume (PCV)", "%", "M: 42\u{2013}52; F: 36\u{2013}48"),
            entry("Hematology Tests", "Mean Corpuscular Volume (MCV)", "fL", "82\u{2013}92"),
            entry("Hematology Tests", "Mean Corpuscular Hemoglobin (MCH)", "pg", "27\u{2013}32"),
            entry("Hematology Tests", "Mean Corpuscular Hemoglobin Concentration (MCHC)", "g/dL", "32\u{2013}36"),
            entry("Hematology Tests", "Differential Leukocyte Count (DLC)", "%", "Neutrophils: 40\u{2013}75; Lymphocytes: 20\u{2013}45; Monocytes: 2\u{2013}8; Eosinophils: 1\u{2013}4; Basophils: 0\u{2013}1"),
            entry("Hematology Tests", "Erythrocyte Sedimentation Rate (ESR)", "mm/hr", "M: up to 15; F: up to 20"),
            entry("Hematology Tests", "Reticulocyte Count", "%", "Adult: 0.5\u{2013}2; Infant: 2\u{2013}6"),
            entry("Hematology Tests", "Bleeding Time", "minutes", "2\u{2013}7"),
            entry("Hematology Tests", "Clotting Time", "minutes", "4\u{2013}9"),
            entry("Hematology Tests", "Prothrombin Time (PT)", "seconds", "10\u{2013}14"),
            entry("Hematology Tests", "International Normalized Ratio (INR)", "Ratio", "<1.1"),
            entry("Hematology Tests", "Activated Partial Thromboplastin Time (APTT)", "seconds", "30\u{2013}40"),

            // Microbiology & Serology
            entry("Microbiology & Serology Tests", "Widal Test", "\u{2013}", "Negative"),
            entry("Microbiology & Serology Tests", "HIV Test", "\u{2013}", "Negative"),
            entry("Microbiology & Serology Tests", "HCV Test", "\u{2013}", "Negative"),
            entry("Microbiology & Serology Tests", "HBsAg Test", "\u{2013}", "Negative"),
            entry("Microbiology & Serology Tests", "Dengue NS1 Antigen", "\u{2013}", "Negative"),
            entry("Microbiology & Serology Tests", "Dengue IgG/IgM", "\u{2013}", "Negative"),
            entry("Microbiology & Serology Tests", "Malaria Parasite Test", "\u{2013}", "Negative"),
            entry("Microbiology & Serology Tests", "Mantoux Test", "mm induration", "<5 mm (negative)"),

            // Urine and Stool
            entry("Urine and Stool Tests", "Urine Routine Examination", "\u{2013}", "Normal"),
            entry("Urine and Stool Tests", "Urine Pregnancy Test", "\u{2013}", "Negative"),
            entry("Urine and Stool Tests", "Stool Routine Examination", "\u{2013}", "Normal"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{ReferenceRange, Status};

    #[test]
    fn test_find() {
        let catalog = TestCatalog::new();

        let entry = catalog.find("Biochemistry Tests", "Gamma GT (GGT)").unwrap();
        assert_eq!(entry.unit, "U/L");
        assert_eq!(entry.reference_range, "Up to 60");

        assert!(catalog.find("Biochemistry Tests", "Hemoglobin (Hb)").is_none());
        assert!(catalog.find("Biochemistry Tests", "gamma gt (ggt)").is_none());
    }

    #[test]
    fn test_categories_in_order() {
        let catalog = TestCatalog::new();
        assert_eq!(
            catalog.categories(),
            vec![
                "Biochemistry Tests",
                "Hematology Tests",
                "Microbiology & Serology Tests",
                "Urine and Stool Tests",
            ]
        );
    }

    #[test]
    fn test_tests_in_category() {
        let catalog = TestCatalog::new();
        assert_eq!(catalog.tests_in("Urine and Stool Tests").count(), 3);
        assert_eq!(catalog.tests_in("Unknown").count(), 0);
    }

    #[test]
    fn test_default_ranges_parse_as_expected() {
        let catalog = TestCatalog::new();

        let fbs = catalog.find("Biochemistry Tests", "Fasting Blood Sugar (FBS)").unwrap();
        assert_eq!(
            ReferenceRange::parse(fbs.reference_range),
            ReferenceRange::Bounded { low: 70.0, high: 110.0 }
        );

        let inr = catalog
            .find("Hematology Tests", "International Normalized Ratio (INR)")
            .unwrap();
        assert_eq!(
            ReferenceRange::parse(inr.reference_range),
            ReferenceRange::Below { high: 1.1 }
        );

        let widal = catalog.find("Microbiology & Serology Tests", "Widal Test").unwrap();
        assert!(!ReferenceRange::parse(widal.reference_range).is_recognized());
    }

    #[test]
    fn test_add_custom_entry() {
        let mut catalog = TestCatalog::new();
        let before = catalog.len();
        catalog.add(entry("Endocrinology Tests", "TSH", "mIU/L", "0.4\u{2013}4.0"));

        assert_eq!(catalog.len(), before + 1);
        let tsh = catalog.find("Endocrinology Tests", "TSH").unwrap();
        assert_eq!(
            ReferenceRange::parse(tsh.reference_range).classify(5.2),
            Status::High
        );
    }
}
