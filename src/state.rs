//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use reqwest::Client;
use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::config::environment::EnvironmentConfig;
use crate::services::forecast_service::ForecastCache;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub http_client: Client,
    /// Cache de sesión del pronóstico procesado. Se reasigna entero en
    /// cada fetch exitoso y se limpia antes de iniciar uno nuevo; nunca
    /// hay actualizaciones parciales.
    pub forecast_cache: Arc<RwLock<Option<ForecastCache>>>,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            pool,
            config,
            http_client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            forecast_cache: Arc::new(RwLock::new(None)),
        }
    }
}
