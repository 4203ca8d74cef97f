//! Adapters - Implementations of port interfaces.
//!
//! - `ai` - Generative backends (Mistral-compatible HTTP, mock)
//! - `auth` - Session validators (HTTP auth service, mock)
//! - `http` - axum routes, handlers and middleware
//! - `project_service` - Project storage (HTTP project service, in-memory)

pub mod ai;
pub mod auth;
pub mod http;
pub mod project_service;

pub use ai::{MistralConfig, MistralProvider, MockAIProvider};
pub use auth::{HttpAuthConfig, HttpSessionValidator, MockSessionValidator};
pub use project_service::{HttpProjectStorage, InMemoryProjectStorage, ProjectServiceConfig};
