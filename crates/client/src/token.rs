//! Token accessor seam between the auth store and the transport.

use std::sync::{Arc, RwLock};

/// Read side of the current bearer token.
///
/// The transport only ever reads through this; whoever owns the session
/// decides what the current token is.
pub trait TokenSource: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Shared token cell: written by the auth store, read by the transport.
#[derive(Debug, Clone, Default)]
pub struct SharedToken {
    inner: Arc<RwLock<Option<String>>>,
}

impl SharedToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, token: Option<String>) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = token;
        }
    }
}

impl TokenSource for SharedToken {
    fn token(&self) -> Option<String> {
        self.inner.read().ok().and_then(|guard| guard.clone())
    }
}
