//! Endpoint table: one method per backend operation.
//!
//! Each method is a pure mapping from arguments to a pending request: no
//! retries, no caching, no validation of its own. Backend routing changes
//! land here and nowhere else; the stores never spell out a path.

use padron_core::{ApiError, Role, Session, UserRecord};

use crate::dto::{
    CreatedUser, Credentials, DataEnvelope, MeResponse, MessageBody, NewUser, RegisterRequest,
    RoleAssignment, RolesResponse, UploadReport, UploadUsersRequest,
};
use crate::http::Http;

pub struct Api {
    http: Http,
}

impl Api {
    pub fn new(http: Http) -> Self {
        Self { http }
    }

    // Auth

    pub async fn login(&self, payload: &Credentials) -> Result<Session, ApiError> {
        self.http.post("/auth/login", payload).await
    }

    pub async fn register(&self, payload: &RegisterRequest) -> Result<Session, ApiError> {
        self.http.post("/auth/register", payload).await
    }

    pub async fn logout(&self) -> Result<MessageBody, ApiError> {
        self.http.post_empty("/auth/logout").await
    }

    pub async fn refresh(&self) -> Result<Session, ApiError> {
        self.http.post_empty("/auth/refresh").await
    }

    pub async fn me(&self) -> Result<MeResponse, ApiError> {
        self.http.post_empty("/auth/me").await
    }

    // Users

    pub async fn get_users(&self) -> Result<DataEnvelope<Vec<UserRecord>>, ApiError> {
        self.http.get("/users").await
    }

    pub async fn get_user(&self, id: u64) -> Result<DataEnvelope<UserRecord>, ApiError> {
        self.http.get(&format!("/users/{id}")).await
    }

    pub async fn create_user(&self, payload: &NewUser) -> Result<DataEnvelope<CreatedUser>, ApiError> {
        self.http.post("/users", payload).await
    }

    pub async fn update_user(&self, payload: &NewUser, id: u64) -> Result<UserRecord, ApiError> {
        self.http.put(&format!("/users/{id}"), payload).await
    }

    pub async fn upload_users(
        &self,
        payload: &UploadUsersRequest,
    ) -> Result<DataEnvelope<UploadReport>, ApiError> {
        self.http.post("/users/storeUsers", payload).await
    }

    pub async fn delete_user(&self, id: u64) -> Result<MessageBody, ApiError> {
        self.http.delete(&format!("/users/{id}")).await
    }

    // Roles

    pub async fn get_roles(&self) -> Result<RolesResponse, ApiError> {
        self.http.get("/roles").await
    }

    pub async fn update_role(&self, payload: &Role) -> Result<MessageBody, ApiError> {
        self.http
            .put(&format!("/roles/user/{}", payload.name), payload)
            .await
    }

    pub async fn assign_role(&self, payload: &RoleAssignment) -> Result<MessageBody, ApiError> {
        self.http.put("/roles/user", payload).await
    }

    pub async fn remove_role(&self, payload: &RoleAssignment) -> Result<MessageBody, ApiError> {
        self.http.delete_with_body("/roles/user", payload).await
    }
}
