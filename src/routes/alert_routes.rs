//! Rutas de alertas y agenda
//!
//! Vistas derivadas calculadas en cada request sobre un snapshot fresco
//! de la garaje; nunca se persisten.

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;

use crate::dto::alert_dto::{AlertsResponse, ScheduleEntry};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::alert_service;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_alert_router() -> Router<AppState> {
    Router::new()
        .route("/alertas", get(get_alerts))
        .route("/agenda", get(get_schedule))
}

/// Alertas de licencia y de mantenimiento próximo (hoy/mañana)
async fn get_alerts(State(state): State<AppState>) -> Result<Json<AlertsResponse>, AppError> {
    let repository = VehicleRepository::new(state.pool.clone());
    let vehicles = repository.list_all().await?;

    let now = Utc::now();
    let response = AlertsResponse {
        license_alerts: alert_service::license_alerts(&vehicles, now.date_naive()),
        maintenance_alerts: alert_service::upcoming_maintenance_alerts(&vehicles, now),
    };
    Ok(Json(response))
}

/// Agenda de mantenimientos futuros; lista vacía cuando no hay ninguno
async fn get_schedule(State(state): State<AppState>) -> Result<Json<Vec<ScheduleEntry>>, AppError> {
    let repository = VehicleRepository::new(state.pool.clone());
    let vehicles = repository.list_all().await?;

    Ok(Json(alert_service::future_schedule(&vehicles, Utc::now())))
}
