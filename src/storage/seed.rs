//! Seed data loaded into the stores at startup

use crate::core::error::ConfigError;
use crate::core::store::Record;
use crate::entities::{Dish, Order};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Initial dishes and orders
///
/// ```json
/// { "dishes": [{ "id": "...", "name": "...", ... }], "orders": [] }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub dishes: Vec<Dish>,

    #[serde(default)]
    pub orders: Vec<Order>,
}

impl SeedData {
    /// Load seed data from a JSON file
    pub fn from_json_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Load seed data from a JSON string
    ///
    /// Records must satisfy the same invariants the API enforces.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let seed: Self = serde_json::from_str(json)?;
        seed.validate()?;
        Ok(seed)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        ensure_unique_ids(&self.dishes)?;
        ensure_unique_ids(&self.orders)?;

        for dish in &self.dishes {
            if dish.price == 0 {
                return Err(invalid(dish, "price", "0", "price must be greater than 0"));
            }
            for (field, value) in [
                ("name", &dish.name),
                ("description", &dish.description),
                ("image_url", &dish.image_url),
            ] {
                if value.is_empty() {
                    return Err(invalid(dish, field, "", "must not be empty"));
                }
            }
        }

        for order in &self.orders {
            if order.dishes.is_empty() {
                return Err(invalid(order, "dishes", "[]", "must include at least one dish"));
            }
            if let Some(index) = order.dishes.iter().position(|line| line.quantity == 0) {
                return Err(invalid(
                    order,
                    "dishes",
                    &index.to_string(),
                    "quantity must be greater than 0",
                ));
            }
            for (field, value) in [
                ("deliverTo", &order.deliver_to),
                ("mobileNumber", &order.mobile_number),
            ] {
                if value.is_empty() {
                    return Err(invalid(order, field, "", "must not be empty"));
                }
            }
        }

        Ok(())
    }
}

fn invalid<T: Record>(record: &T, field: &str, value: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: format!("{} {}.{}", T::KIND, record.id(), field),
        value: value.to_string(),
        message: message.to_string(),
    }
}

fn ensure_unique_ids<T: Record>(records: &[T]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id()) {
            return Err(ConfigError::InvalidValue {
                field: format!("{}.id", T::KIND),
                value: record.id().to_string(),
                message: "duplicate id".to_string(),
            });
        }
    }
    Ok(())
}
