//! Rewrite Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by the other Rewrite crates:
//! - Client configuration persisted as TOML (secret, base URL, retry budget)
//! - The unified error type covering configuration, transport and decode failures
//! - Structured logging with tracing
//! - Platform directory lookup
//! - API constants (default origin, version prefix, backoff tuning)

pub mod config;
pub mod error;
pub mod logging;
pub mod platform;
pub mod constants;

// Re-export commonly used items at the crate root
pub use config::AppConfig;
pub use error::{RwError, RwResult};
pub use logging::init_logging;
