//! Entity registry collecting the routers of each resource

use axum::Router;
use std::collections::BTreeMap;

/// Describes how to mount one resource
///
/// Each resource (dish, order) implements this trait to provide its routes.
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g. "order")
    fn entity_type(&self) -> &str;

    /// The collection segment (e.g. "orders")
    fn plural(&self) -> &str;

    /// Build the routes for this entity, already bound to their state
    ///
    /// Typically:
    /// - GET/POST /{plural}
    /// - GET/PUT[/DELETE] /{plural}/{id}
    fn build_routes(&self) -> Router;
}

/// Registry for all resources in the application
///
/// Registering a second descriptor for the same entity type replaces the
/// first.
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: BTreeMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: BTreeMap::new(),
        }
    }

    /// Register an entity descriptor
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let entity_type = descriptor.entity_type().to_string();
        if self.descriptors.contains_key(&entity_type) {
            tracing::warn!(entity_type = %entity_type, "replacing registered entity");
        }
        self.descriptors.insert(entity_type, descriptor);
    }

    /// Merge every registered entity's routes into one router
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .values()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes())
            })
    }

    /// Registered entity types, sorted
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }

    /// Collection paths of the registered entities (e.g. "/dishes")
    pub fn collection_paths(&self) -> Vec<String> {
        self.descriptors
            .values()
            .map(|descriptor| format!("/{}", descriptor.plural()))
            .collect()
    }
}
