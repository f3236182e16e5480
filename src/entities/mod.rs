//! Entities module - the dish and order resources

pub mod macros;

pub mod dish;
pub mod order;

// Re-export models for convenience
pub use dish::Dish;
pub use order::{Order, OrderStatus};
