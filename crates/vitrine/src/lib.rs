//! The shared library for Vitrine, a Yew front-end for browsing an NFT collection.
//!
//! This library holds everything that does not depend on the UI framework: the process-wide
//! content cell, the collection data model and its state transitions, an explicit state owner
//! with subscriptions, error types and logging setup.

pub mod content;
pub mod data;
pub mod errors;
pub mod log;
pub mod store;

pub use content::{DEFAULT_CONTENT, get_content, reset_content, set_content};
pub use serde;
pub use tracing;
pub use tracing::{debug, error, info, trace, warn};
