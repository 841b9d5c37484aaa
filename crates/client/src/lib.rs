//! `padron-client` — transport and endpoint table for the admin backend.
//!
//! One configured HTTP client, bearer-token injection on the way out,
//! envelope unwrapping and error normalization on the way back, and a flat
//! table mapping logical operations to verb + path.

pub mod config;
pub mod dto;
pub mod endpoints;
pub mod http;
pub mod token;

pub use config::{ClientConfig, ConfigError, REQUEST_TIMEOUT};
pub use endpoints::Api;
pub use http::Http;
pub use token::{SharedToken, TokenSource};
