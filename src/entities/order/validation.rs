//! Order request checks, state-transition guards and pipelines

use super::model::{Order, OrderStatus, STATUS_MESSAGE};
use crate::core::error::{ApiError, ApiResult};
use crate::core::validation::validators::{
    as_positive_integer, body_data_has, id_matches_route, is_truthy,
};
use crate::core::validation::{Pipeline, RequestContext};
use serde_json::Value;

const RESOURCE: &str = "Order";

pub fn order_not_found(id: &str) -> String {
    format!("Order id not found: {}", id)
}

fn order_id_mismatch(body_id: &str, route_id: &str) -> String {
    format!(
        "Order id does not match route id. Order: {}, Route: {}.",
        body_id, route_id
    )
}

/// Check: `data.dishes` is a non-empty array
pub fn dishes_not_empty(ctx: &RequestContext<'_, Order>) -> ApiResult<()> {
    let dishes = ctx.field("dishes");
    if !is_truthy(dishes) {
        return Err(ApiError::invalid("Order must include a dish"));
    }
    match dishes.as_array() {
        Some(lines) if !lines.is_empty() => Ok(()),
        _ => Err(ApiError::invalid("Order must include at least one dish")),
    }
}

/// Check: every dish line carries an integer quantity greater than zero
///
/// Lines are inspected in order and the first offending index is reported.
/// Expects [`dishes_not_empty`] to have run first.
pub fn validate_dish_quantity(ctx: &RequestContext<'_, Order>) -> ApiResult<()> {
    let lines = ctx.field("dishes").as_array().map(Vec::as_slice).unwrap_or_default();
    match lines
        .iter()
        .position(|line| line.get("quantity").and_then(as_positive_integer).is_none())
    {
        Some(index) => Err(ApiError::invalid(format!(
            "dish {} must have a quantity that is an integer greater than 0",
            index
        ))),
        None => Ok(()),
    }
}

fn is_valid_status(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| s.parse::<OrderStatus>().is_ok())
}

/// Check: `data.status` is one of the canonical statuses
pub fn validate_status(ctx: &RequestContext<'_, Order>) -> ApiResult<()> {
    if is_valid_status(ctx.field("status")) {
        Ok(())
    } else {
        Err(ApiError::invalid(STATUS_MESSAGE))
    }
}

/// Check: a supplied `data.status` is canonical; absence is allowed
pub fn validate_status_if_present(ctx: &RequestContext<'_, Order>) -> ApiResult<()> {
    if is_truthy(ctx.field("status")) {
        validate_status(ctx)
    } else {
        Ok(())
    }
}

/// Guard: the stored order has not been delivered yet
pub fn validate_delivered_status(ctx: &RequestContext<'_, Order>) -> ApiResult<()> {
    if ctx.stored()?.status.is_mutable() {
        Ok(())
    } else {
        Err(ApiError::invalid("A delivered order cannot be changed"))
    }
}

/// Guard: the stored order is still pending
pub fn validate_pending_status(ctx: &RequestContext<'_, Order>) -> ApiResult<()> {
    if ctx.stored()?.status.is_deletable() {
        Ok(())
    } else {
        Err(ApiError::invalid(
            "An order cannot be deleted unless it is pending.",
        ))
    }
}

/// Checks for `POST /orders`
pub fn create_pipeline() -> Pipeline<Order> {
    Pipeline::new("order.create")
        .check("deliverTo", body_data_has(RESOURCE, "deliverTo"))
        .check("mobileNumber", body_data_has(RESOURCE, "mobileNumber"))
        .check("dishes_not_empty", dishes_not_empty)
        .check("dish_quantity", validate_dish_quantity)
        .check("status_if_present", validate_status_if_present)
}

/// Checks for `PUT /orders/{orderId}`, run after the existence lookup
pub fn update_pipeline() -> Pipeline<Order> {
    Pipeline::new("order.update")
        .check("id_matches_route", id_matches_route(order_id_mismatch))
        .check("deliverTo", body_data_has(RESOURCE, "deliverTo"))
        .check("mobileNumber", body_data_has(RESOURCE, "mobileNumber"))
        .check("status", body_data_has(RESOURCE, "status"))
        .check("status_value", validate_status)
        .check("not_delivered", validate_delivered_status)
        .check("dishes_not_empty", dishes_not_empty)
        .check("dish_quantity", validate_dish_quantity)
}

/// Checks for `DELETE /orders/{orderId}`, run after the existence lookup
pub fn delete_pipeline() -> Pipeline<Order> {
    Pipeline::new("order.delete").check("pending_only", validate_pending_status)
}
