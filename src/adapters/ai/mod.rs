//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port.
//!
//! ## Available Adapters
//!
//! - `MistralProvider` - OpenAI-compatible chat completions (Mistral by default)
//! - `MockAIProvider` - Configurable mock for testing

mod mistral_provider;
mod mock_provider;

pub use mistral_provider::{MistralConfig, MistralProvider};
pub use mock_provider::{MockAIProvider, MockError, MockResponse, DEFAULT_MOCK_CONTENT};
