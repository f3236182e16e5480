//! ServerBuilder for fluent API to build HTTP servers

use super::entity_registry::EntityRegistry;
use super::router::build_router;
use crate::core::id::{IdGenerator, UuidGenerator};
use crate::entities::dish::DishDescriptor;
use crate::entities::order::OrderDescriptor;
use crate::entities::{Dish, Order};
use crate::storage::{InMemoryStore, SeedData};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the GrubDash HTTP server
///
/// Stores and the id generator are injected; anything not supplied starts
/// empty (stores) or random (ids).
///
/// # Example
///
/// ```ignore
/// let dishes = InMemoryStore::new();
/// let app = ServerBuilder::new()
///     .with_dish_store(dishes.clone())
///     .with_seed(seed)
///     .build();
/// ```
pub struct ServerBuilder {
    dish_store: InMemoryStore<Dish>,
    order_store: InMemoryStore<Order>,
    id_generator: Arc<dyn IdGenerator>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            dish_store: InMemoryStore::new(),
            order_store: InMemoryStore::new(),
            id_generator: Arc::new(UuidGenerator),
            custom_routes: Vec::new(),
        }
    }

    /// Use an existing dish store (shared with the caller)
    pub fn with_dish_store(mut self, store: InMemoryStore<Dish>) -> Self {
        self.dish_store = store;
        self
    }

    /// Use an existing order store (shared with the caller)
    pub fn with_order_store(mut self, store: InMemoryStore<Order>) -> Self {
        self.order_store = store;
        self
    }

    /// Replace the identifier source for created records
    pub fn with_id_generator(mut self, generator: impl IdGenerator + 'static) -> Self {
        self.id_generator = Arc::new(generator);
        self
    }

    /// Start from fresh stores holding the seed records
    pub fn with_seed(mut self, seed: SeedData) -> Self {
        tracing::info!(
            dishes = seed.dishes.len(),
            orders = seed.orders.len(),
            "loading seed data"
        );
        self.dish_store = InMemoryStore::with_records(seed.dishes);
        self.order_store = InMemoryStore::with_records(seed.orders);
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Registry holding the dish and order descriptors
    pub fn build_registry(&self) -> EntityRegistry {
        let mut registry = EntityRegistry::new();
        registry.register(Box::new(DishDescriptor::new(
            self.dish_store.clone(),
            self.id_generator.clone(),
        )));
        registry.register(Box::new(OrderDescriptor::new(
            self.order_store.clone(),
            self.id_generator.clone(),
        )));
        registry
    }

    /// Build the final REST router
    pub fn build(self) -> Router {
        let registry = self.build_registry();
        build_router(&registry, self.custom_routes)
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to `addr`, serves until SIGTERM or Ctrl+C, then drains.
    pub async fn serve(self, addr: &str) -> Result<()> {
        let registry = self.build_registry();
        let app = build_router(&registry, self.custom_routes);
        let listener = TcpListener::bind(addr).await?;

        tracing::info!(
            resources = ?registry.collection_paths(),
            "Server listening on {}",
            addr
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
