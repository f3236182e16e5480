//! Order HTTP handlers

use super::model::{DishLine, Order, OrderFields};
use super::validation::{create_pipeline, delete_pipeline, order_not_found, update_pipeline};
use crate::core::error::{ApiError, ApiResult};
use crate::core::id::IdGenerator;
use crate::core::store::Record;
use crate::core::validation::validators::{find_existing, find_existing_mut};
use crate::core::validation::{Envelope, Pipeline, RequestContext};
use crate::storage::InMemoryStore;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{Value, json};
use std::sync::Arc;

/// Pipelines for the order routes, built once per router
pub struct OrderPipelines {
    pub create: Pipeline<Order>,
    pub update: Pipeline<Order>,
    pub delete: Pipeline<Order>,
}

impl Default for OrderPipelines {
    fn default() -> Self {
        Self {
            create: create_pipeline(),
            update: update_pipeline(),
            delete: delete_pipeline(),
        }
    }
}

/// Order-specific AppState
#[derive(Clone)]
pub struct OrderAppState {
    pub store: InMemoryStore<Order>,
    pub ids: Arc<dyn IdGenerator>,
    pub pipelines: Arc<OrderPipelines>,
}

impl OrderAppState {
    pub fn new(store: InMemoryStore<Order>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store,
            ids,
            pipelines: Arc::new(OrderPipelines::default()),
        }
    }
}

pub async fn list_orders(State(state): State<OrderAppState>) -> ApiResult<Json<Value>> {
    let orders = state.store.snapshot()?;
    Ok(Json(json!({ "data": orders })))
}

pub async fn create_order(
    State(state): State<OrderAppState>,
    body: Envelope,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let data = body.data();
    state.pipelines.create.run(&RequestContext::collection(data))?;
    let fields = OrderFields::from_data(data)?;

    let order = state.store.write(|records| {
        let id = records.next_id(state.ids.as_ref());
        Ok(records.append(Order::new(id, fields)).clone())
    })?;

    tracing::info!(order_id = %order.id, status = %order.status, "order created");
    tracing::debug!(
        order_id = %order.id,
        dish_ids = ?order.dishes.iter().filter_map(DishLine::dish_id).collect::<Vec<_>>(),
        "order dishes"
    );
    Ok((StatusCode::CREATED, Json(json!({ "data": order }))))
}

pub async fn get_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
) -> ApiResult<Json<Value>> {
    let order = state
        .store
        .read(|records| Ok(find_existing(records, &order_id, order_not_found)?.clone()))?;
    Ok(Json(json!({ "data": order })))
}

pub async fn update_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
    body: Envelope,
) -> ApiResult<Json<Value>> {
    let data = body.data();

    let order = state.store.write(|records| {
        let order = find_existing_mut(records, &order_id, order_not_found)?;
        state
            .pipelines
            .update
            .run(&RequestContext::member(&order_id, data, &*order))?;
        order.apply(OrderFields::from_data(data)?);
        Ok(order.clone())
    })?;

    tracing::info!(order_id = %order.id, status = %order.status, "order updated");
    Ok(Json(json!({ "data": order })))
}

/// Delete a pending order
///
/// The lookup matches ids loosely but deletion requires the found order's id
/// to equal the route id exactly; a loose-only match removes nothing and
/// answers 404. The removed record is always the one the pending guard saw.
pub async fn delete_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
) -> ApiResult<StatusCode> {
    let no_body = Value::Null;

    state.store.write(|records| {
        let order = find_existing(records, &order_id, order_not_found)?;
        if order.id() != order_id {
            tracing::warn!(
                order_id = %order_id,
                matched = %order.id(),
                "order matched only by numeric id, refusing to delete"
            );
            return Err(ApiError::not_found(order_not_found(&order_id)));
        }
        state
            .pipelines
            .delete
            .run(&RequestContext::member(&order_id, &no_body, order))?;

        let checked_id = order.id().to_string();
        records
            .remove(&checked_id)
            .map(|_| ())
            .ok_or_else(|| ApiError::not_found(order_not_found(&order_id)))
    })?;

    tracing::info!(order_id = %order_id, "order deleted");
    Ok(StatusCode::NO_CONTENT)
}
