//! Project Assistant - chat-driven project-creation wizard.
//!
//! A stateless HTTP service: each turn carries the full conversation
//! context, the engine advances it one step, and the caller stores it for
//! the next turn.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
