//! Core types for the finance agent toolkit
//!
//! Every tool in the workspace reports failures through the [`Error`] type
//! defined here, so an orchestration layer only has to handle one error shape.

pub mod error;

pub use error::{Error, Result};
