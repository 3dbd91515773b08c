//! Lab database operations.

use rusqlite::params;

use super::{Database, DbResult};
use crate::models::{now_timestamp, Lab, NewLab};

impl Database {
    /// Insert a lab, returning its row ID.
    pub fn insert_lab(&self, lab: &NewLab) -> DbResult<i64> {
        self.conn.execute(
            r#"
            INSERT INTO labs (name, slogan, address, phone, email, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                lab.name,
                lab.slogan,
                lab.address,
                lab.phone,
                lab.email,
                now_timestamp(),
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(lab_id = id, "inserted lab");
        Ok(id)
    }

    /// List all labs, newest first.
    pub fn list_labs(&self) -> DbResult<Vec<Lab>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, name, slogan, address, phone, email, created_at
            FROM labs
            ORDER BY created_at DESC, id DESC
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Lab {
                id: row.get(0)?,
                name: row.get(1)?,
                slogan: row.get(2)?,
                address: row.get(3)?,
                phone: row.get(4)?,
                email: row.get(5)?,
                created_at: row.get(6)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
