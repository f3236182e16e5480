//! Core module containing the error types, record storage primitives and
//! request validation shared by every resource

pub mod error;
pub mod id;
pub mod store;
pub mod validation;

pub use error::{ApiError, ApiResult, ConfigError, ErrorResponse};
pub use id::{IdGenerator, UuidGenerator};
pub use store::{Record, Records};
pub use validation::{Envelope, Pipeline, RequestContext};
