//! User account models.

use serde::{Deserialize, Serialize};

/// A registered user. The password hash stays in the store layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
}
