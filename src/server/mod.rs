//! Server module for building the HTTP server
//!
//! `ServerBuilder` wires the stores into the dish and order resources,
//! collects their routes in an `EntityRegistry` and adds health checks,
//! the 404 fallback and request tracing.

pub mod builder;
pub mod entity_registry;
pub mod router;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
