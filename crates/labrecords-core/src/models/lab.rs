//! Lab (issuing laboratory) models.

use serde::{Deserialize, Serialize};

use super::{require, ValidationError};

/// Laboratory letterhead details printed on reports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lab {
    pub id: i64,
    pub name: String,
    pub slogan: Option<String>,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub created_at: String,
}

/// Input for adding a lab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewLab {
    pub name: String,
    #[serde(default)]
    pub slogan: Option<String>,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl NewLab {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("address", &self.address)?;
        require("phone", &self.phone)?;
        require("email", &self.email)?;
        Ok(())
    }
}
