//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` port:
//!
//! - `http_validator` - Resolves tokens through the auth service
//! - `mock` - Test implementation without external services

mod http_validator;
mod mock;

pub use http_validator::{HttpAuthConfig, HttpSessionValidator};
pub use mock::MockSessionValidator;
