//! Wire shapes for the admin endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use padron_core::{Role, Session, UserRecord};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub dni: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Role as carried in a user payload.
///
/// Forms supply the full role object; the wire wants the bare name. The
/// users store flattens `Object` to `Name` before sending.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RoleField {
    Object(Role),
    Name(String),
}

impl RoleField {
    pub fn name(&self) -> &str {
        match self {
            RoleField::Object(role) => &role.name,
            RoleField::Name(name) => name,
        }
    }
}

/// Payload for user creation and update.
///
/// `UsersStore::create_user` rewrites this in place before sending:
/// passwords derived from the DNI, role flattened to its name. The
/// mutation is observable by the caller and part of the contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub dni: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_confirmation: Option<String>,
    pub role: RoleField,
}

/// One row of a bulk user upload, as the import form supplies it.
#[derive(Debug, Clone, Serialize)]
pub struct UploadRow {
    pub dni: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub role: String,
}

/// Wire row for `/users/storeUsers`: upload rows with dni-derived
/// passwords attached.
#[derive(Debug, Clone, Serialize)]
pub struct UploadUser {
    pub dni: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadUsersRequest {
    pub users: Vec<UploadUser>,
}

/// Payload for role assignment/removal on a user.
#[derive(Debug, Clone, Serialize)]
pub struct RoleAssignment {
    pub email: String,
    pub role: String,
}

// -------------------------
// Response envelopes
// -------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// `/roles` body.
///
/// The two roles read paths consume different fields of this response;
/// both are tolerated here and default to empty when absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RolesResponse {
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub data: Vec<Role>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: String,
}

/// Creation response; only the id is trusted, the record itself is
/// re-fetched afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedUser {
    pub id: u64,
}

/// Outcome of a bulk upload.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadReport {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub success: Vec<UserRecord>,
    #[serde(default)]
    pub failed: Vec<Value>,
}

/// Session as `/auth/me` wraps it.
pub type MeResponse = DataEnvelope<Session>;
