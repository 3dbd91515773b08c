//! User credential database operations.

use rusqlite::OptionalExtension;

use super::{unique_violation, Database, DbResult};
use crate::models::User;

impl Database {
    /// Insert a user with an already-hashed password, returning its row ID.
    pub fn insert_user(&self, email: &str, password_hash: &str) -> DbResult<i64> {
        self.conn
            .execute(
                "INSERT INTO users (email, password) VALUES (?1, ?2)",
                [email, password_hash],
            )
            .map_err(|e| unique_violation(e, "Email already exists"))?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Look up a user and their stored password hash by email.
    pub fn get_user_credentials(&self, email: &str) -> DbResult<Option<(User, String)>> {
        self.conn
            .query_row(
                "SELECT id, email, password FROM users WHERE email = ?",
                [email],
                |row| {
                    Ok((
                        User {
                            id: row.get(0)?,
                            email: row.get(1)?,
                        },
                        row.get(2)?,
                    ))
                },
            )
            .optional()
            .map_err(Into::into)
    }
}
