use prometheus_client::registry::Registry;
use std::sync::Arc;

use crate::{
    config::ConnectionPool,
    utils::{DependenciesInject, Metrics},
};

#[derive(Clone, Debug)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub di_container: DependenciesInject,
    pub api_key: String,
}

impl AppState {
    pub fn new(pool: ConnectionPool, api_key: impl Into<String>) -> Self {
        let mut registry = Registry::default();

        let metrics = Metrics::new();
        metrics.register(&mut registry);

        let registry = Arc::new(registry);

        let di_container = DependenciesInject::new(pool, metrics);

        Self {
            registry,
            di_container,
            api_key: api_key.into(),
        }
    }
}
