//! Dish HTTP handlers

use super::model::{Dish, DishFields};
use super::validation::{create_pipeline, dish_not_found, update_pipeline};
use crate::core::error::ApiResult;
use crate::core::id::IdGenerator;
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

/// Pipelines for the dish routes, built once per router
pub struct DishPipelines {
    pub create: Pipeline<Dish>,
    pub update: Pipeline<Dish>,
}

impl Default for DishPipelines {
    fn default() -> Self {
        Self {
            create: create_pipeline(),
            update: update_pipeline(),
        }
    }
}

/// Dish-specific AppState
#[derive(Clone)]
pub struct DishAppState {
    pub store: InMemoryStore<Dish>,
    pub ids: Arc<dyn IdGenerator>,
    pub pipelines: Arc<DishPipelines>,
}

impl DishAppState {
    pub fn new(store: InMemoryStore<Dish>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store,
            ids,
            pipelines: Arc::new(DishPipelines::default()),
        }
    }
}

pub async fn list_dishes(State(state): State<DishAppState>) -> ApiResult<Json<Value>> {
    let dishes = state.store.snapshot()?;
    Ok(Json(json!({ "data": dishes })))
}

pub async fn create_dish(
    State(state): State<DishAppState>,
    body: Envelope,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let data = body.data();
    state.pipelines.create.run(&RequestContext::collection(data))?;
    let fields = DishFields::from_data(data)?;

    let dish = state.store.write(|records| {
        let id = records.next_id(state.ids.as_ref());
        Ok(records.append(Dish::new(id, fields)).clone())
    })?;

    tracing::info!(dish_id = %dish.id, "dish created");
    Ok((StatusCode::CREATED, Json(json!({ "data": dish }))))
}

pub async fn get_dish(
    State(state): State<DishAppState>,
    Path(dish_id): Path<String>,
) -> ApiResult<Json<Value>> {
    let dish = state
        .store
        .read(|records| Ok(find_existing(records, &dish_id, dish_not_found)?.clone()))?;
    Ok(Json(json!({ "data": dish })))
}

pub async fn update_dish(
    State(state): State<DishAppState>,
    Path(dish_id): Path<String>,
    body: Envelope,
) -> ApiResult<Json<Value>> {
    let data = body.data();

    let dish = state.store.write(|records| {
        let dish = find_existing_mut(records, &dish_id, dish_not_found)?;
        state
            .pipelines
            .update
            .run(&RequestContext::member(&dish_id, data, &*dish))?;
        dish.apply(DishFields::from_data(data)?);
        Ok(dish.clone())
    })?;

    tracing::info!(dish_id = %dish.id, "dish updated");
    Ok(Json(json!({ "data": dish })))
}
