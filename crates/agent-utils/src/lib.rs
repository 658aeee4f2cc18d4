//! Shared utilities for the finance agent toolkit
//!
//! Logging setup and environment helpers used by the library and CLI crates.

pub mod env;
pub mod logging;

pub use env::{load_env_file, normalize_secret, secret_from_env};
pub use logging::{init_tracing, init_tracing_with_default};
