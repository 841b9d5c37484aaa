//! Auth store: the session slice and its actions.

use std::sync::Arc;

use padron_client::dto::Credentials;
use padron_client::{Api, SharedToken};
use padron_core::{ApiError, Session};

use crate::ActionOutcome;
use crate::cache::Cache;
use crate::nav::{LOGIN_ROUTE, Navigator, NoopNavigator};

/// Role shown before any session exists.
pub const GUEST_ROLE: &str = "Invitado";

const USER_KEY: &str = "user";

/// Owns the session slice: the logged-in user, the mirrored bearer token,
/// and the last action's message.
pub struct AuthStore {
    api: Arc<Api>,
    cache: Cache,
    token: SharedToken,
    navigator: Arc<dyn Navigator>,
    pub user: Option<Session>,
    pub msg: Option<String>,
    pub role: String,
    pub return_url: String,
    pub session: bool,
    pub loading: bool,
}

impl AuthStore {
    pub fn new(api: Arc<Api>, cache: Cache, token: SharedToken) -> Self {
        Self::with_navigator(api, cache, token, Arc::new(NoopNavigator))
    }

    /// Hydrates the session from the cache and publishes any cached token
    /// to the transport so requests made before the first login still
    /// carry it.
    pub fn with_navigator(
        api: Arc<Api>,
        cache: Cache,
        token: SharedToken,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let user: Option<Session> = cache.get_item(USER_KEY);
        if let Some(session) = &user {
            token.set(Some(session.access_token.clone()));
        }

        Self {
            api,
            cache,
            token,
            navigator,
            user,
            msg: None,
            role: GUEST_ROLE.to_string(),
            return_url: String::new(),
            session: false,
            loading: false,
        }
    }

    /// Pure accessor for the current bearer token.
    pub fn token(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.access_token.as_str())
    }

    pub async fn login(&mut self, payload: &Credentials) -> ActionOutcome<Session> {
        match self.api.login(payload).await {
            Ok(session) => Ok(self.enter_session(session)),
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Logout is authoritative regardless of what the server said in the
    /// body: the ENTIRE cache namespace is wiped, not just the session
    /// key, and the login route is pushed.
    pub async fn logout(&mut self) -> ActionOutcome<String> {
        match self.api.logout().await {
            Ok(body) => {
                self.msg = Some(body.message.clone());
                if let Err(err) = self.cache.clean_all() {
                    tracing::warn!(%err, "failed to clear cache on logout");
                }
                self.user = None;
                self.session = false;
                self.token.set(None);
                self.navigator.push(LOGIN_ROUTE);
                Ok(body.message)
            }
            Err(err) => {
                self.msg = Some(err.message);
                Err(err.status_code)
            }
        }
    }

    pub async fn me(&mut self) -> ActionOutcome<Session> {
        match self.api.me().await {
            Ok(envelope) => Ok(self.enter_session(envelope.data)),
            Err(err) => Err(self.fail(err)),
        }
    }

    fn enter_session(&mut self, session: Session) -> Session {
        if let Err(err) = self.cache.set_item(USER_KEY, &session) {
            tracing::warn!(%err, "failed to persist session");
        }
        self.token.set(Some(session.access_token.clone()));
        self.user = Some(session.clone());
        self.session = true;
        self.loading = true;
        session
    }

    fn fail(&mut self, err: ApiError) -> Option<u16> {
        tracing::debug!(message = %err.message, status = ?err.status_code, "auth action failed");
        let status = err.status_code;
        self.msg = Some(err.message);
        self.user = None;
        self.session = false;
        self.token.set(None);
        status
    }
}
