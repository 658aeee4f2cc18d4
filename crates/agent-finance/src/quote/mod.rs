//! Price lookup with ordered fallback across sources

pub mod resolver;
pub mod result;
pub mod source;

pub use resolver::QuoteResolver;
pub use result::{Quote, QuoteError, SourceAttempt, render};
pub use source::QuoteSource;
