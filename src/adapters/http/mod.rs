//! HTTP adapters - REST API implementations.

pub mod assistant;
pub mod middleware;
mod router;

pub use assistant::{assistant_routes, AssistantHandlers};
pub use router::{build_app_router, build_cors_layer};
