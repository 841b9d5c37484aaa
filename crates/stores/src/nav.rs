//! Navigation seam for the logout redirect.

/// Named route pushed after a successful logout.
pub const LOGIN_ROUTE: &str = "login";

/// Receiver of named-route pushes.
///
/// The UI router implements this; the default does nothing so the data
/// layer stays usable headless.
pub trait Navigator: Send + Sync {
    fn push(&self, route: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn push(&self, _route: &str) {}
}
