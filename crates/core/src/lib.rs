//! `padron-core` — shared domain types for the padron client data layer.
//!
//! Pure data: backend records, the normalized error envelope, and the
//! stateless input validators. No I/O in this crate.

pub mod error;
pub mod role;
pub mod session;
pub mod user;
pub mod validate;

pub use error::ApiError;
pub use role::{Role, RoleOption};
pub use session::Session;
pub use user::{Company, UserRecord, UNASSIGNED};
