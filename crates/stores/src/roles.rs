//! Roles store: the role list slice and its actions.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use padron_client::Api;
use padron_client::dto::RoleAssignment;
use padron_core::{ApiError, Role, RoleOption};

use crate::ActionOutcome;
use crate::cache::Cache;

const ROLES_KEY: &str = "roles";

/// The two shapes the role list takes, depending on which read path ran
/// last: raw records, or label/value pairs for selection widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleList {
    Records(Vec<Role>),
    Options(Vec<RoleOption>),
}

pub struct RolesStore {
    api: Arc<Api>,
    cache: Cache,
    pub roles: Option<RoleList>,
    pub msg: Option<String>,
    pub loading: bool,
}

impl RolesStore {
    pub fn new(api: Arc<Api>, cache: Cache) -> Self {
        let roles = cache.get_item(ROLES_KEY);
        Self {
            api,
            cache,
            roles,
            msg: None,
            loading: false,
        }
    }

    pub async fn get_roles(&mut self) -> ActionOutcome<Vec<Role>> {
        match self.api.get_roles().await {
            Ok(body) => {
                let roles = body.roles;
                self.persist(&RoleList::Records(roles.clone()));
                self.roles = Some(RoleList::Records(roles.clone()));
                self.loading = true;
                Ok(roles)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Same endpoint, selection-widget shape.
    ///
    /// Writes the SAME cache key as [`get_roles`](Self::get_roles), so
    /// whichever read path ran last owns the cached value.
    pub async fn get_roles_combo_box(&mut self) -> ActionOutcome<Vec<RoleOption>> {
        match self.api.get_roles().await {
            Ok(body) => {
                let options: Vec<RoleOption> = body.data.iter().map(RoleOption::from).collect();
                self.persist(&RoleList::Options(options.clone()));
                self.roles = Some(RoleList::Options(options.clone()));
                self.loading = true;
                Ok(options)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    pub async fn assign_role(&mut self, payload: &RoleAssignment) -> ActionOutcome<String> {
        match self.api.assign_role(payload).await {
            Ok(body) => {
                self.msg = Some(body.message.clone());
                Ok(body.message)
            }
            Err(err) => {
                let status = err.status_code;
                self.msg = Some(err.message);
                Err(status)
            }
        }
    }

    pub async fn update_role(&mut self, payload: &Role) -> ActionOutcome<String> {
        match self.api.update_role(payload).await {
            Ok(body) => {
                self.msg = Some(body.message.clone());
                Ok(body.message)
            }
            Err(err) => {
                let status = err.status_code;
                self.msg = Some(err.message);
                Err(status)
            }
        }
    }

    fn persist(&self, roles: &RoleList) {
        if let Err(err) = self.cache.set_item(ROLES_KEY, roles) {
            tracing::warn!(%err, "failed to persist role list");
        }
    }

    fn fail(&mut self, err: ApiError) -> Option<u16> {
        tracing::debug!(message = %err.message, status = ?err.status_code, "roles action failed");
        let status = err.status_code;
        self.msg = Some(err.message);
        self.roles = None;
        status
    }
}
