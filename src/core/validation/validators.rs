//! Reusable checks shared by every resource
//!
//! Value helpers follow JSON-client truthiness: `null`, `false`, `0` and the
//! empty string are "missing"; arrays and objects always count as present.

use super::pipeline::RequestContext;
use crate::core::error::{ApiError, ApiResult};
use crate::core::store::{Record, Records};
use serde_json::Value;

/// Whether a JSON value counts as present
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The value as an integer greater than zero
///
/// Floats with no fractional part (`6.0`) are integers; strings never are.
pub fn as_positive_integer(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return (n > 0).then_some(n);
    }
    let f = value.as_f64()?;
    if f > 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}

/// Render a value for an error message (strings without quotes)
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Read `data.<field>` as text once its presence check has passed
pub fn text_field(resource: &str, data: &Value, field: &str) -> ApiResult<String> {
    match data.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(ApiError::invalid(format!(
            "{} {} must be a string",
            resource, field
        ))),
    }
}

/// Check: `data.<field>` is present
///
/// Fails with `"<resource> must include a <field>"`.
pub fn body_data_has<R: 'static>(
    resource: &'static str,
    field: &'static str,
) -> impl Fn(&RequestContext<'_, R>) -> ApiResult<()> + Send + Sync + Clone + 'static {
    move |ctx: &RequestContext<'_, R>| {
        if is_truthy(ctx.field(field)) {
            Ok(())
        } else {
            Err(ApiError::invalid(format!(
                "{} must include a {}",
                resource, field
            )))
        }
    }
}

/// Check: a present `data.id` equals the route identifier
///
/// Comparison is strict: only a JSON string identical to the route id passes.
/// `mismatch` renders the message from the body id and the route id.
pub fn id_matches_route<R: 'static>(
    mismatch: fn(&str, &str) -> String,
) -> impl Fn(&RequestContext<'_, R>) -> ApiResult<()> + Send + Sync + Clone + 'static {
    move |ctx: &RequestContext<'_, R>| {
        let body_id = ctx.field("id");
        if !is_truthy(body_id) {
            return Ok(());
        }
        let route_id = ctx.route_id.unwrap_or_default();
        match body_id.as_str() {
            Some(id) if id == route_id => Ok(()),
            _ => Err(ApiError::invalid(mismatch(
                &display_value(body_id),
                route_id,
            ))),
        }
    }
}

/// Existence lookup: resolve a route identifier to a stored record
///
/// `missing` renders the not-found message from the requested id.
pub fn find_existing<'a, T: Record>(
    records: &'a Records<T>,
    id: &str,
    missing: fn(&str) -> String,
) -> ApiResult<&'a T> {
    records
        .get(id)
        .ok_or_else(|| ApiError::not_found(missing(id)))
}

/// Mutable variant of [`find_existing`]
pub fn find_existing_mut<'a, T: Record>(
    records: &'a mut Records<T>,
    id: &str,
    missing: fn(&str) -> String,
) -> ApiResult<&'a mut T> {
    records
        .get_mut(id)
        .ok_or_else(|| ApiError::not_found(missing(id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mismatch(body: &str, route: &str) -> String {
        format!("id {} != {}", body, route)
    }

    // === is_truthy() ===

    #[test]
    fn test_falsy_values() {
        for value in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(&value), "{value} should be falsy");
        }
    }

    #[test]
    fn test_truthy_values() {
        for value in [json!(true), json!(-1), json!(0.5), json!("x"), json!([]), json!({})] {
            assert!(is_truthy(&value), "{value} should be truthy");
        }
    }

    // === as_positive_integer() ===

    #[test]
    fn test_positive_integer_accepts_whole_numbers() {
        assert_eq!(as_positive_integer(&json!(6)), Some(6));
        assert_eq!(as_positive_integer(&json!(6.0)), Some(6));
    }

    #[test]
    fn test_positive_integer_rejects_others() {
        for value in [json!(0), json!(-5), json!(3.5), json!("6"), json!(true), json!(null)] {
            assert_eq!(as_positive_integer(&value), None, "{value} should be rejected");
        }
    }

    // === text_field() ===

    #[test]
    fn test_text_field_reads_strings() {
        let data = json!({ "name": "Taco" });
        assert_eq!(text_field("Dish", &data, "name").unwrap(), "Taco");
    }

    #[test]
    fn test_text_field_rejects_non_strings() {
        let data = json!({ "name": 12 });
        let err = text_field("Dish", &data, "name").unwrap_err();
        assert_eq!(err, ApiError::invalid("Dish name must be a string"));
    }

    // === body_data_has() ===

    #[test]
    fn test_body_data_has_present_field() {
        let check = body_data_has::<()>("Dish", "name");
        let data = json!({ "name": "Taco" });
        assert!(check(&RequestContext::collection(&data)).is_ok());
    }

    #[test]
    fn test_body_data_has_missing_field() {
        let check = body_data_has::<()>("Dish", "name");
        let data = json!({});
        let err = check(&RequestContext::collection(&data)).unwrap_err();
        assert_eq!(err, ApiError::invalid("Dish must include a name"));
    }

    #[test]
    fn test_body_data_has_empty_string() {
        let check = body_data_has::<()>("Order", "deliverTo");
        let data = json!({ "deliverTo": "" });
        let err = check(&RequestContext::collection(&data)).unwrap_err();
        assert_eq!(err.to_string(), "Order must include a deliverTo");
    }

    #[test]
    fn test_body_data_has_non_object_data() {
        let check = body_data_has::<()>("Dish", "name");
        let data = json!("just a string");
        assert!(check(&RequestContext::collection(&data)).is_err());
    }

    // === id_matches_route() ===

    #[test]
    fn test_id_matches_route_absent_id() {
        let check = id_matches_route::<()>(mismatch);
        let data = json!({ "name": "x" });
        assert!(check(&RequestContext::member("abc", &data, &())).is_ok());
    }

    #[test]
    fn test_id_matches_route_empty_id() {
        let check = id_matches_route::<()>(mismatch);
        let data = json!({ "id": "" });
        assert!(check(&RequestContext::member("abc", &data, &())).is_ok());
    }

    #[test]
    fn test_id_matches_route_same_id() {
        let check = id_matches_route::<()>(mismatch);
        let data = json!({ "id": "abc" });
        assert!(check(&RequestContext::member("abc", &data, &())).is_ok());
    }

    #[test]
    fn test_id_matches_route_different_id() {
        let check = id_matches_route::<()>(mismatch);
        let data = json!({ "id": "xyz" });
        let err = check(&RequestContext::member("abc", &data, &())).unwrap_err();
        assert_eq!(err, ApiError::invalid("id xyz != abc"));
    }

    #[test]
    fn test_id_matches_route_numeric_id_is_strict() {
        let check = id_matches_route::<()>(mismatch);
        let data = json!({ "id": 7 });
        let err = check(&RequestContext::member("7", &data, &())).unwrap_err();
        assert_eq!(err, ApiError::invalid("id 7 != 7"));
    }
}
