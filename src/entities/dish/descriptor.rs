//! Entity descriptor for Dish

use super::handlers::{DishAppState, create_dish, get_dish, list_dishes, update_dish};
use super::model::Dish;
use crate::core::id::IdGenerator;
use crate::server::EntityDescriptor;
use crate::storage::InMemoryStore;
use axum::{Router, routing::get};
use std::sync::Arc;

/// Descriptor for the Dish entity
///
/// Dishes are never deleted, so the member route has no DELETE method.
pub struct DishDescriptor {
    pub state: DishAppState,
}

impl DishDescriptor {
    pub fn new(store: InMemoryStore<Dish>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            state: DishAppState::new(store, ids),
        }
    }
}

impl EntityDescriptor for DishDescriptor {
    fn entity_type(&self) -> &str {
        "dish"
    }

    fn plural(&self) -> &str {
        "dishes"
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route("/dishes", get(list_dishes).post(create_dish))
            .route("/dishes/{dish_id}", get(get_dish).put(update_dish))
            .with_state(self.state.clone())
    }
}
