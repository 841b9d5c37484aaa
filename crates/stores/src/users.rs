//! Users store: the user list slice and its actions.

use std::sync::Arc;

use padron_client::Api;
use padron_client::dto::{MessageBody, NewUser, RoleField, UploadReport, UploadRow, UploadUser, UploadUsersRequest};
use padron_core::{ApiError, UserRecord};

use crate::ActionOutcome;
use crate::cache::Cache;

const USERS_KEY: &str = "users";

pub struct UsersStore {
    api: Arc<Api>,
    cache: Cache,
    pub users: Option<Vec<UserRecord>>,
    pub user: Option<UserRecord>,
    pub msg: Option<String>,
    pub status: Option<u16>,
    pub loading: bool,
}

impl UsersStore {
    pub fn new(api: Arc<Api>, cache: Cache) -> Self {
        let users = cache.get_item(USERS_KEY);
        Self {
            api,
            cache,
            users,
            user: None,
            msg: None,
            status: None,
            loading: false,
        }
    }

    /// Fetch the whole list. The raw response is cached as-is; the
    /// placeholder repair for missing `role`/`company` relations happens
    /// on the in-memory copy only.
    pub async fn get_users(&mut self) -> ActionOutcome<Vec<UserRecord>> {
        match self.api.get_users().await {
            Ok(envelope) => {
                let raw = envelope.data;
                if let Err(err) = self.cache.set_item(USERS_KEY, &raw) {
                    tracing::warn!(%err, "failed to persist user list");
                }
                let mut users = raw;
                for user in &mut users {
                    user.fill_missing_relations();
                }
                self.users = Some(users.clone());
                self.loading = true;
                Ok(users)
            }
            Err(err) => {
                self.msg = Some(err.message);
                self.users = None;
                Err(err.status_code)
            }
        }
    }

    /// Create a user.
    ///
    /// Rewrites `payload` in place before sending: both password fields
    /// are derived from the DNI and the role object is flattened to its
    /// bare name. Callers observe the rewritten payload; that side effect
    /// is part of the contract. The created record is then re-fetched by
    /// id rather than trusting the creation response body.
    pub async fn create_user(&mut self, payload: &mut NewUser) -> ActionOutcome<UserRecord> {
        payload.password = Some(payload.dni.clone());
        payload.password_confirmation = Some(payload.dni.clone());
        payload.role = RoleField::Name(payload.role.name().to_string());

        let fetched = match self.api.create_user(payload).await {
            Ok(created) => self.api.get_user(created.data.id).await,
            Err(err) => Err(err),
        };

        match fetched {
            Ok(envelope) => {
                self.user = Some(envelope.data.clone());
                Ok(envelope.data)
            }
            Err(err) => {
                self.user = None;
                Err(self.fail(err))
            }
        }
    }

    /// Bulk upload: every row is sent with dni-derived passwords.
    pub async fn upload_users(&mut self, rows: &[UploadRow]) -> ActionOutcome<UploadReport> {
        let request = UploadUsersRequest {
            users: rows
                .iter()
                .map(|row| UploadUser {
                    dni: row.dni.clone(),
                    name: row.name.clone(),
                    phone: row.phone.clone(),
                    email: row.email.clone(),
                    password: row.dni.clone(),
                    password_confirmation: row.dni.clone(),
                    role: row.role.clone(),
                })
                .collect(),
        };

        match self.api.upload_users(&request).await {
            Ok(envelope) => {
                self.msg = Some(envelope.data.message.clone());
                Ok(envelope.data)
            }
            Err(err) => {
                self.users = None;
                Err(self.fail(err))
            }
        }
    }

    pub async fn update_user(&mut self, payload: &NewUser, id: u64) -> ActionOutcome<UserRecord> {
        match self.api.update_user(payload, id).await {
            Ok(updated) => {
                self.user = Some(updated.clone());
                Ok(updated)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    pub async fn delete_user(&mut self, id: u64) -> ActionOutcome<MessageBody> {
        match self.api.delete_user(id).await {
            Ok(body) => Ok(body),
            Err(err) => Err(self.fail(err)),
        }
    }

    fn fail(&mut self, err: ApiError) -> Option<u16> {
        tracing::debug!(message = %err.message, status = ?err.status_code, "users action failed");
        self.status = err.status_code;
        self.msg = Some(err.message);
        self.status
    }
}
