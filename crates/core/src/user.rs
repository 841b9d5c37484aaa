//! Backend user entity and its relations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Role;

/// Placeholder shown where the backend left a relation empty.
pub const UNASSIGNED: &str = "No Asignado";

/// Company relation on a user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub company_name: String,
}

/// User entity as returned by `/users`.
///
/// `role` and `company` are optional on the wire; after a successful list
/// fetch the store guarantees both are present, with [`UNASSIGNED`]
/// placeholders filled in where the backend sent nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dni: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub company: Option<Company>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// Replace absent relations with the placeholder sentinel.
    pub fn fill_missing_relations(&mut self) {
        if self.role.is_none() {
            self.role = Some(Role::named(UNASSIGNED));
        }
        if self.company.is_none() {
            self.company = Some(Company {
                company_name: UNASSIGNED.to_string(),
            });
        }
    }
}
