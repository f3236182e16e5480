//! Dish request checks and pipelines

use super::model::Dish;
use crate::core::error::{ApiError, ApiResult};
use crate::core::validation::validators::{
    as_positive_integer, body_data_has, id_matches_route, is_truthy,
};
use crate::core::validation::{Pipeline, RequestContext};

const RESOURCE: &str = "Dish";

pub fn dish_not_found(id: &str) -> String {
    format!("Dish does not exist: {}.", id)
}

fn dish_id_mismatch(body_id: &str, route_id: &str) -> String {
    format!("Dish id {} does not match route id {}.", body_id, route_id)
}

/// Check: `data.price` is present and an integer greater than zero
///
/// Any number, zero included, counts as present and goes to the integer check.
pub fn price_is_valid_number(ctx: &RequestContext<'_, Dish>) -> ApiResult<()> {
    let price = ctx.field("price");
    if !price.is_number() && !is_truthy(price) {
        return Err(ApiError::invalid("Dish must include a price"));
    }
    if as_positive_integer(price).is_none() {
        return Err(ApiError::invalid(
            "Dish must have a price that is an integer greater than 0",
        ));
    }
    Ok(())
}

fn with_field_checks(pipeline: Pipeline<Dish>) -> Pipeline<Dish> {
    pipeline
        .check("name", body_data_has(RESOURCE, "name"))
        .check("description", body_data_has(RESOURCE, "description"))
        .check("image_url", body_data_has(RESOURCE, "image_url"))
        .check("price", price_is_valid_number)
}

/// Checks for `POST /dishes`
pub fn create_pipeline() -> Pipeline<Dish> {
    with_field_checks(Pipeline::new("dish.create"))
}

/// Checks for `PUT /dishes/{dishId}`, run after the existence lookup
pub fn update_pipeline() -> Pipeline<Dish> {
    with_field_checks(
        Pipeline::new("dish.update").check("id_matches_route", id_matches_route(dish_id_mismatch)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn taco() -> Value {
        json!({ "name": "Taco", "description": "d", "price": 6, "image_url": "u" })
    }

    fn stored() -> Dish {
        Dish {
            id: "d1".to_string(),
            name: "Old".to_string(),
            description: "old".to_string(),
            price: 1,
            image_url: "o".to_string(),
        }
    }

    fn create_error(data: Value) -> ApiError {
        create_pipeline()
            .run(&RequestContext::collection(&data))
            .unwrap_err()
    }

    #[test]
    fn test_valid_dish_passes() {
        let data = taco();
        assert!(create_pipeline().run(&RequestContext::collection(&data)).is_ok());
    }

    #[test]
    fn test_missing_price() {
        let mut data = taco();
        data.as_object_mut().unwrap().remove("price");
        assert_eq!(create_error(data), ApiError::invalid("Dish must include a price"));
    }

    #[test]
    fn test_empty_price_reads_as_missing() {
        for price in [json!(null), json!(""), json!(false)] {
            let mut data = taco();
            data["price"] = price;
            assert_eq!(create_error(data), ApiError::invalid("Dish must include a price"));
        }
    }

    #[test]
    fn test_invalid_prices() {
        for price in [json!(0), json!(-5), json!(3.5), json!("6"), json!(true)] {
            let mut data = taco();
            data["price"] = price.clone();
            assert_eq!(
                create_error(data),
                ApiError::invalid("Dish must have a price that is an integer greater than 0"),
                "price {price}"
            );
        }
    }

    #[test]
    fn test_fields_checked_in_declared_order() {
        assert_eq!(
            create_error(json!({ "price": 0 })),
            ApiError::invalid("Dish must include a name")
        );
        assert_eq!(
            create_error(json!({ "name": "Taco", "image_url": "" })),
            ApiError::invalid("Dish must include a description")
        );
        assert_eq!(
            create_error(json!({ "name": "Taco", "description": "d" })),
            ApiError::invalid("Dish must include a image_url")
        );
    }

    #[test]
    fn test_update_pipeline_order() {
        assert_eq!(
            update_pipeline().step_names(),
            vec!["id_matches_route", "name", "description", "image_url", "price"]
        );
    }

    #[test]
    fn test_update_rejects_mismatched_id_first() {
        let dish = stored();
        let data = json!({ "id": "other", "price": -1 });
        let err = update_pipeline()
            .run(&RequestContext::member("d1", &data, &dish))
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::invalid("Dish id other does not match route id d1.")
        );
    }

    #[test]
    fn test_update_accepts_matching_id() {
        let dish = stored();
        let mut data = taco();
        data["id"] = json!("d1");
        assert!(
            update_pipeline()
                .run(&RequestContext::member("d1", &data, &dish))
                .is_ok()
        );
    }
}
