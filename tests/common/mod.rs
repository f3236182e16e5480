//! Shared helpers for the REST integration tests

#![allow(dead_code)]

use axum_test::TestServer;
use grubdash::prelude::*;
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Deterministic ids: `id-1`, `id-2`, ...
#[derive(Default)]
pub struct SequenceIds {
    next: AtomicUsize,
}

impl IdGenerator for SequenceIds {
    fn generate(&self) -> String {
        format!("id-{}", self.next.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

pub fn server() -> TestServer {
    TestServer::new(ServerBuilder::new().build())
}

pub fn server_with(builder: ServerBuilder) -> TestServer {
    TestServer::new(builder.build())
}

pub fn taco() -> Value {
    json!({
        "name": "Taco",
        "description": "d",
        "price": 6,
        "image_url": "u"
    })
}

pub fn order_body(status: &str) -> Value {
    json!({
        "deliverTo": "308 Negra Arroyo Lane",
        "mobileNumber": "(505) 143-3369",
        "status": status,
        "dishes": [{ "id": "d1", "name": "Taco", "price": 6, "quantity": 2 }]
    })
}

/// Seed with one order per status, ids equal to the status name
pub fn seeded_orders() -> SeedData {
    let orders: Vec<Value> = ["pending", "preparing", "out-for-delivery", "delivered"]
        .iter()
        .map(|status| {
            let mut order = order_body(status);
            order["id"] = json!(status);
            order
        })
        .collect();
    SeedData::from_json_str(&json!({ "orders": orders }).to_string()).unwrap()
}

pub fn message(body: &Value) -> &str {
    body["message"].as_str().unwrap_or_default()
}
