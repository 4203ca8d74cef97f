//! Project service adapters.
//!
//! Implementations of the `ProjectStorage` port:
//!
//! - `HttpProjectStorage` - REST client for the project service
//! - `InMemoryProjectStorage` - Test and local implementation

mod http_storage;
mod in_memory;

pub use http_storage::{HttpProjectStorage, ProjectServiceConfig};
pub use in_memory::InMemoryProjectStorage;
