//! Dish entity model

use crate::core::error::{ApiError, ApiResult};
use crate::core::validation::validators::{as_positive_integer, text_field};
use crate::impl_record;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A dish on the menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

impl_record!(Dish, "dish");

/// The mutable fields of a dish, read from a validated request body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishFields {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

impl DishFields {
    /// Build from the `data` object of a request that passed its pipeline
    pub fn from_data(data: &Value) -> ApiResult<Self> {
        let price = data
            .get("price")
            .and_then(as_positive_integer)
            .ok_or_else(|| {
                ApiError::invalid("Dish must have a price that is an integer greater than 0")
            })?;

        Ok(Self {
            name: text_field("Dish", data, "name")?,
            description: text_field("Dish", data, "description")?,
            price,
            image_url: text_field("Dish", data, "image_url")?,
        })
    }
}

impl Dish {
    pub fn new(id: String, fields: DishFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            image_url: fields.image_url,
        }
    }

    /// Overwrite every mutable field; the id never changes
    pub fn apply(&mut self, fields: DishFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.image_url = fields.image_url;
    }
}
