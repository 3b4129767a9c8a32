//! DTOs de alertas y agenda
//!
//! Vistas derivadas: se regeneran en cada request y nunca se persisten.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// Estado de la licencia de conducir de un vehículo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseStatus {
    Expired,
    ExpiringSoon,
}

/// Alerta de vencimiento de licencia
#[derive(Debug, Clone, Serialize)]
pub struct LicenseAlert {
    pub vehicle_id: String,
    pub vehicle_model: String,
    pub license_plate: Option<String>,
    pub expires_on: NaiveDate,
    /// Días hasta el vencimiento; negativo si ya venció
    pub days_until: i64,
    pub status: LicenseStatus,
}

/// Alerta de mantenimiento próximo (hoy o mañana)
#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceAlert {
    pub vehicle_id: String,
    pub vehicle_model: String,
    pub event_type: String,
    pub scheduled_for: DateTime<Utc>,
    pub is_today: bool,
}

/// Entrada de la agenda de mantenimientos futuros
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleEntry {
    pub vehicle_id: String,
    pub vehicle_model: String,
    pub event_type: String,
    pub scheduled_for: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Decimal>,
}

/// Response combinada del endpoint de alertas
#[derive(Debug, Serialize)]
pub struct AlertsResponse {
    pub license_alerts: Vec<LicenseAlert>,
    pub maintenance_alerts: Vec<MaintenanceAlert>,
}
