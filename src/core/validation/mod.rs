//! Validation system
//!
//! Requests are checked by ordered [`Pipeline`]s of named checks before any
//! handler touches the store. Generic checks live in [`validators`]; the
//! resource-specific ones live next to their entity.

pub mod extractor;
pub mod pipeline;
pub mod validators;

pub use extractor::Envelope;
pub use pipeline::{Pipeline, RequestContext};
