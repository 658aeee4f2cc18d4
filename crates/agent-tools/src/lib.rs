//! Tool management and execution framework
//!
//! This crate provides the seam between the finance tools and whatever
//! orchestration layer drives them: a [`Tool`] trait, a [`ToolRegistry`],
//! and [`ToolDefinition`] descriptors that can be handed to an LLM provider.

pub mod definition;
pub mod registry;
pub mod tool;

pub use definition::{ToolDefinition, schema};
pub use registry::ToolRegistry;
pub use tool::Tool;
