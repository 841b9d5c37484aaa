//! `padron-stores` — state containers for the admin data layer.
//!
//! Each store owns one slice of application state (auth session, user
//! list, role list), exposes the actions that mutate it, and persists the
//! slice to a shared file-backed cache. Actions call the endpoint table,
//! never the transport directly.

use std::path::PathBuf;
use std::sync::Arc;

use padron_client::{Api, ClientConfig, Http, SharedToken};

pub mod auth;
pub mod cache;
pub mod nav;
pub mod roles;
pub mod users;

pub use auth::AuthStore;
pub use cache::{Cache, CacheError};
pub use nav::{Navigator, NoopNavigator};
pub use roles::{RoleList, RolesStore};
pub use users::UsersStore;

/// Result shape shared by every store action: the data on success, the
/// HTTP status (when one exists) on failure. Actions never re-throw the
/// normalized error; its message lands in the store's `msg` field.
pub type ActionOutcome<T> = Result<T, Option<u16>>;

/// The full data layer wired together: one transport, one cache
/// namespace, three stores sharing them.
pub struct AdminStores {
    pub auth: AuthStore,
    pub users: UsersStore,
    pub roles: RolesStore,
}

impl AdminStores {
    pub fn new(config: &ClientConfig, cache_dir: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let token = SharedToken::new();
        let http = Http::new(config, Arc::new(token.clone()));
        let api = Arc::new(Api::new(http));
        let cache = Cache::new(cache_dir)?;

        Ok(Self {
            auth: AuthStore::new(api.clone(), cache.clone(), token),
            users: UsersStore::new(api.clone(), cache.clone()),
            roles: RolesStore::new(api, cache),
        })
    }
}
