//! Order entity model and status lifecycle

use crate::core::error::{ApiError, ApiResult};
use crate::core::validation::validators::{as_positive_integer, is_truthy, text_field};
use crate::impl_record;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Where an order is in its delivery lifecycle
///
/// Any status may follow any other while the order is not delivered;
/// `Delivered` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// Whether the order's fields may still change
    pub fn is_mutable(&self) -> bool {
        *self != OrderStatus::Delivered
    }

    /// Whether the order may be deleted
    pub fn is_deletable(&self) -> bool {
        *self == OrderStatus::Pending
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ApiError::invalid(STATUS_MESSAGE))
    }
}

pub(crate) const STATUS_MESSAGE: &str =
    "Order must have a status of pending, preparing, out-for-delivery, delivered";

/// One entry of an order's dish list
///
/// `quantity` is typed; every other member the client sent (usually the dish
/// id, name, description, image_url and price) is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishLine {
    pub quantity: u64,
    #[serde(flatten)]
    pub dish: Map<String, Value>,
}

impl DishLine {
    /// Identifier of the referenced dish, when the client sent a string id
    pub fn dish_id(&self) -> Option<&str> {
        self.dish.get("id").and_then(Value::as_str)
    }

    /// Build from one element of a validated `data.dishes` array
    pub fn from_value(index: usize, value: &Value) -> ApiResult<Self> {
        let invalid = || {
            ApiError::invalid(format!(
                "dish {} must have a quantity that is an integer greater than 0",
                index
            ))
        };
        let object = value.as_object().ok_or_else(invalid)?;
        let quantity = object
            .get("quantity")
            .and_then(as_positive_integer)
            .ok_or_else(invalid)?;

        let mut dish = object.clone();
        dish.remove("quantity");
        Ok(Self { quantity, dish })
    }
}

/// A delivery order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<DishLine>,
}

impl_record!(Order, "order");

/// The mutable fields of an order, read from a validated request body
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFields {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<DishLine>,
}

impl OrderFields {
    /// Build from the `data` object of a request that passed its pipeline
    ///
    /// A missing status reads as `pending`; update pipelines require one.
    pub fn from_data(data: &Value) -> ApiResult<Self> {
        let status = match data.get("status") {
            Some(value) if is_truthy(value) => value
                .as_str()
                .ok_or_else(|| ApiError::invalid(STATUS_MESSAGE))?
                .parse()?,
            _ => OrderStatus::Pending,
        };

        let dishes = data
            .get("dishes")
            .and_then(Value::as_array)
            .filter(|lines| !lines.is_empty())
            .ok_or_else(|| ApiError::invalid("Order must include at least one dish"))?
            .iter()
            .enumerate()
            .map(|(index, line)| DishLine::from_value(index, line))
            .collect::<ApiResult<Vec<_>>>()?;

        Ok(Self {
            deliver_to: text_field("Order", data, "deliverTo")?,
            mobile_number: text_field("Order", data, "mobileNumber")?,
            status,
            dishes,
        })
    }
}

impl Order {
    pub fn new(id: String, fields: OrderFields) -> Self {
        Self {
            id,
            deliver_to: fields.deliver_to,
            mobile_number: fields.mobile_number,
            status: fields.status,
            dishes: fields.dishes,
        }
    }

    /// Overwrite every mutable field; the id never changes
    pub fn apply(&mut self, fields: OrderFields) {
        self.deliver_to = fields.deliver_to;
        self.mobile_number = fields.mobile_number;
        self.status = fields.status;
        self.dishes = fields.dishes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order_data() -> Value {
        json!({
            "deliverTo": "308 Negra Arroyo Lane",
            "mobileNumber": "(505) 143-3369",
            "status": "preparing",
            "dishes": [
                { "id": "d1", "name": "Taco", "price": 6, "quantity": 2 }
            ]
        })
    }

    #[test]
    fn test_status_round_trips_through_wire_names() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
            assert_eq!(
                serde_json::to_value(status).unwrap(),
                json!(status.as_str())
            );
        }
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let err = "cancelled".parse::<OrderStatus>().unwrap_err();
        assert_eq!(err, ApiError::invalid(STATUS_MESSAGE));
    }

    #[test]
    fn test_lifecycle_predicates() {
        assert!(OrderStatus::Pending.is_mutable());
        assert!(OrderStatus::OutForDelivery.is_mutable());
        assert!(!OrderStatus::Delivered.is_mutable());

        assert!(OrderStatus::Pending.is_deletable());
        assert!(!OrderStatus::Preparing.is_deletable());
        assert!(!OrderStatus::Delivered.is_deletable());
    }

    #[test]
    fn test_fields_from_data() {
        let fields = OrderFields::from_data(&order_data()).unwrap();
        assert_eq!(fields.deliver_to, "308 Negra Arroyo Lane");
        assert_eq!(fields.status, OrderStatus::Preparing);
        assert_eq!(fields.dishes.len(), 1);
        assert_eq!(fields.dishes[0].quantity, 2);
        assert_eq!(fields.dishes[0].dish_id(), Some("d1"));
        assert!(!fields.dishes[0].dish.contains_key("quantity"));
    }

    #[test]
    fn test_missing_status_defaults_to_pending() {
        let mut data = order_data();
        data.as_object_mut().unwrap().remove("status");
        let fields = OrderFields::from_data(&data).unwrap();
        assert_eq!(fields.status, OrderStatus::Pending);
    }

    #[test]
    fn test_order_serializes_camel_case_and_flat_lines() {
        let order = Order::new("o1".to_string(), OrderFields::from_data(&order_data()).unwrap());
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["id"], "o1");
        assert_eq!(json["deliverTo"], "308 Negra Arroyo Lane");
        assert_eq!(json["mobileNumber"], "(505) 143-3369");
        assert_eq!(json["status"], "preparing");
        assert_eq!(
            json["dishes"][0],
            json!({ "id": "d1", "name": "Taco", "price": 6, "quantity": 2 })
        );
    }

    #[test]
    fn test_order_deserializes_from_wire_form() {
        let order: Order = serde_json::from_value(json!({
            "id": "o2",
            "deliverTo": "here",
            "mobileNumber": "555",
            "status": "out-for-delivery",
            "dishes": [{ "id": "d1", "quantity": 1 }]
        }))
        .unwrap();

        assert_eq!(order.status, OrderStatus::OutForDelivery);
        assert_eq!(order.dishes[0].dish_id(), Some("d1"));
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut order =
            Order::new("o1".to_string(), OrderFields::from_data(&order_data()).unwrap());
        let mut data = order_data();
        data["status"] = json!("delivered");
        data["deliverTo"] = json!("elsewhere");

        order.apply(OrderFields::from_data(&data).unwrap());

        assert_eq!(order.id, "o1");
        assert_eq!(order.deliver_to, "elsewhere");
        assert_eq!(order.status, OrderStatus::Delivered);
    }
}
