mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};

use config::environment::EnvironmentConfig;
use middleware::cors::cors_middleware;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Garaje Inteligente - Backend");
    info!("================================");

    let config = EnvironmentConfig::from_env();

    // Inicializar base de datos
    let pool = match database::connection::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    database::connection::init_schema(&pool).await?;
    database::seed::seed_initial_data(&pool).await?;

    // Crear router de la API
    let app_state = AppState::new(pool, config.clone());

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/garaje/vehiculos", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/garaje", routes::catalog_routes::create_catalog_router())
        .nest("/api/garaje", routes::alert_routes::create_alert_router())
        .nest("/api/consejos", routes::catalog_routes::create_tips_router())
        .nest("/api/detalles-extra", routes::catalog_routes::create_extra_details_router())
        .nest("/api", routes::forecast_routes::create_forecast_router())
        .layer(cors_middleware())
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚗 Endpoints - Vehículos:");
    info!("   POST /api/garaje/vehiculos - Crear vehículo");
    info!("   GET  /api/garaje/vehiculos - Listar vehículos");
    info!("   GET  /api/garaje/vehiculos/:id - Obtener vehículo");
    info!("   PUT  /api/garaje/vehiculos/:id - Actualizar vehículo");
    info!("   DELETE /api/garaje/vehiculos/:id - Eliminar vehículo");
    info!("   POST /api/garaje/vehiculos/:id/mantenimientos - Agendar mantenimiento");
    info!("   DELETE /api/garaje/vehiculos/:id/mantenimientos - Vaciar historial");
    info!("🔔 Endpoints - Alertas:");
    info!("   GET  /api/garaje/alertas - Alertas de licencia y mantenimiento");
    info!("   GET  /api/garaje/agenda - Agenda de mantenimientos futuros");
    info!("📚 Endpoints - Catálogo:");
    info!("   GET  /api/garaje/vehiculos-destaque - Vehículos en destaque");
    info!("   GET  /api/garaje/servicios - Servicios ofrecidos");
    info!("   GET  /api/garaje/servicios/:id - Servicio por id");
    info!("   GET  /api/consejos - Consejos generales");
    info!("   GET  /api/consejos/:categoria - Consejos por tipo de vehículo");
    info!("   GET  /api/detalles-extra/:vehiculo_id - Detalles extra");
    info!("   PUT  /api/detalles-extra/:vehiculo_id - Upsert de detalles extra");
    info!("🌤️ Endpoints - Clima:");
    info!("   GET  /api/prevision/:ciudad?dias=N - Previsión resumida por día");
    info!("   GET  /api/prevision-cache?dias=N - Filtrar el cache de previsión");

    if config.openweather_api_key.is_none() {
        warn!("⚠️ Clave de la API OpenWeatherMap no configurada; /api/prevision responderá error");
    } else {
        info!("🔑 Clave de la API OpenWeatherMap cargada");
    }

    // Iniciar servidor
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de health check
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "garaje-backend",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
