//! # GrubDash
//!
//! A small REST API for a food-delivery storefront: a catalog of dishes and
//! the customer orders placed against it.
//!
//! ## Features
//!
//! - **Dishes**: list, create, read and update at `/dishes`
//! - **Orders**: full lifecycle at `/orders`, with status rules
//!   (delivered orders are locked, only pending orders can be deleted)
//! - **Validation Pipelines**: every write runs an ordered, fail-fast list
//!   of named checks; the first failure becomes a 400 or 404
//! - **In-Memory Storage**: records live in process memory, optionally
//!   seeded from a JSON file
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use grubdash::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = AppConfig::load()?;
//!     ServerBuilder::new().serve(&config.bind_address).await
//! }
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ApiError, ApiResult, ConfigError, ErrorResponse},
        id::{IdGenerator, UuidGenerator},
        store::{Record, Records},
        validation::{Envelope, Pipeline, RequestContext},
    };

    // === Macros ===
    pub use crate::impl_record;

    // === Entities ===
    pub use crate::entities::{Dish, Order, OrderStatus};

    // === Storage ===
    pub use crate::storage::{InMemoryStore, SeedData};

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use serde::{Deserialize, Serialize};

    // === Axum ===
    pub use axum::{
        Router,
        extract::{Path, State},
        routing::{delete, get, post, put},
    };
}
