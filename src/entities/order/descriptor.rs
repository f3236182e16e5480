//! Entity descriptor for Order

use super::handlers::{
    OrderAppState, create_order, delete_order, get_order, list_orders, update_order,
};
use super::model::Order;
use crate::core::id::IdGenerator;
use crate::server::EntityDescriptor;
use crate::storage::InMemoryStore;
use axum::{Router, routing::get};
use std::sync::Arc;

/// Descriptor for the Order entity
pub struct OrderDescriptor {
    pub state: OrderAppState,
}

impl OrderDescriptor {
    pub fn new(store: InMemoryStore<Order>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            state: OrderAppState::new(store, ids),
        }
    }
}

impl EntityDescriptor for OrderDescriptor {
    fn entity_type(&self) -> &str {
        "order"
    }

    fn plural(&self) -> &str {
        "orders"
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route("/orders", get(list_orders).post(create_order))
            .route(
                "/orders/{order_id}",
                get(get_order).put(update_order).delete(delete_order),
            )
            .with_state(self.state.clone())
    }
}
