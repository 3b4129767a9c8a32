//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle de la garaje y sus tipos
//! asociados. El historial de mantenimiento y la variante del vehículo
//! viven en columnas JSONB, al estilo documento.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Variante del vehículo - conjunto cerrado de tipos con su payload específico
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VehicleKind {
    /// Carro base, sin campos extra
    Base,
    /// Deportivo con turbo
    Sports { turbo_active: bool },
    /// Camión con capacidad y carga actual en kg
    Truck { cargo_capacity: f64, current_load: f64 },
}

impl VehicleKind {
    /// Nombre corto de la variante, usado para cruzar con los consejos
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleKind::Base => "base",
            VehicleKind::Sports { .. } => "sports",
            VehicleKind::Truck { .. } => "truck",
        }
    }
}

/// Un registro de mantenimiento (realizado o agendado) de un vehículo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaintenanceEvent {
    /// Fecha y hora del servicio
    pub date: DateTime<Utc>,
    /// Tipo de servicio (ej. "Troca de óleo"); nunca vacío
    pub event_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Vehicle principal - mapea a la tabla vehicles
///
/// El id es un string provisto por el cliente (ej. "carro1") y hace de
/// clave primaria.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub model: String,
    pub color: Option<String>,
    pub image_url: Option<String>,
    pub license_plate: Option<String>,
    pub year: Option<i32>,
    /// Vencimiento de la licencia de conducir asociada al vehículo
    pub license_expiry: Option<NaiveDate>,
    #[serde(flatten)]
    pub kind: VehicleKind,
    pub maintenance_history: Vec<MaintenanceEvent>,
    pub created_at: DateTime<Utc>,
}
