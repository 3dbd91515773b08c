//! Patient database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{unique_violation, Database, DbResult};
use crate::models::{now_timestamp, NewPatient, Patient};

const PATIENT_COLUMNS: &str = "id, full_name, age, gender, contact_number, email, \
                               patient_code, address, created_at";

fn patient_from_row(row: &Row<'_>) -> rusqlite::Result<Patient> {
    Ok(Patient {
        id: row.get(0)?,
        full_name: row.get(1)?,
        age: row.get(2)?,
        gender: row.get(3)?,
        contact_number: row.get(4)?,
        email: row.get(5)?,
        patient_code: row.get(6)?,
        address: row.get(7)?,
        created_at: row.get(8)?,
    })
}

impl Database {
    /// Insert a new patient, returning its row ID.
    pub fn insert_patient(&self, patient: &NewPatient) -> DbResult<i64> {
        self.conn
            .execute(
                r#"
                INSERT INTO patients (
                    full_name, age, gender, contact_number, email,
                    patient_code, address, created_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                "#,
                params![
                    patient.full_name,
                    patient.age,
                    patient.gender,
                    patient.contact_number,
                    patient.email,
                    patient.patient_code,
                    patient.address,
                    now_timestamp(),
                ],
            )
            .map_err(|e| unique_violation(e, "Patient code already exists"))?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(patient_id = id, "inserted patient");
        Ok(id)
    }

    /// Get a patient by row ID.
    pub fn get_patient(&self, id: i64) -> DbResult<Option<Patient>> {
        self.conn
            .query_row(
                &format!("SELECT {PATIENT_COLUMNS} FROM patients WHERE id = ?"),
                [id],
                patient_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Get a patient by lab-issued patient code.
    pub fn get_patient_by_code(&self, patient_code: &str) -> DbResult<Option<Patient>> {
        self.conn
            .query_row(
                &format!("SELECT {PATIENT_COLUMNS} FROM patients WHERE patient_code = ?"),
                [patient_code],
                patient_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all patients, newest first.
    pub fn list_patients(&self) -> DbResult<Vec<Patient>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {PATIENT_COLUMNS} FROM patients ORDER BY created_at DESC, id DESC"
        ))?;

        let rows = stmt.query_map([], patient_from_row)?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Number of registered patients.
    pub fn count_patients(&self) -> DbResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM patients", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
