//! Action-dispatch proxy for the NGO Nexus AI Studio
//!
//! Exposes a single endpoint that forwards poster generation, photo editing,
//! photo analysis, grounded search, and assistant requests to the Gemini API
//! and reshapes each response into the small JSON contract the studio UI
//! consumes. Also ships the typed client invoker the UI-side code calls.

pub mod ai;
pub mod client;
pub mod data_uri;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod prompts;
pub mod server;

pub use error::{Error, Result};
