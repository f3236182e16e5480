//! Order entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod validation;

pub use descriptor::OrderDescriptor;
pub use handlers::*;
pub use model::{DishLine, Order, OrderFields, OrderStatus};
