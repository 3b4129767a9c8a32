//! Modelos de las colecciones de catálogo
//!
//! Consejos de mantenimiento, vehículos en destaque, servicios ofrecidos
//! y detalles extra por vehículo. Son colecciones estáticas que se
//! siembran en el primer arranque.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Categoría de un consejo de mantenimiento
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipCategory {
    General,
    Base,
    Sports,
    Truck,
}

impl TipCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipCategory::General => "general",
            TipCategory::Base => "base",
            TipCategory::Sports => "sports",
            TipCategory::Truck => "truck",
        }
    }

    /// Parsear desde texto (path param o columna); None si no es una categoría conocida
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "general" => Some(TipCategory::General),
            "base" => Some(TipCategory::Base),
            "sports" => Some(TipCategory::Sports),
            "truck" => Some(TipCategory::Truck),
            _ => None,
        }
    }
}

/// Consejo de mantenimiento
#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceTip {
    pub id: i32,
    pub tip: String,
    pub category: TipCategory,
}

/// Vehículo en destaque para la vitrina de la página principal
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FeaturedVehicle {
    pub id: i32,
    pub model: String,
    pub year: i32,
    pub highlight: String,
    pub image_url: String,
}

/// Servicio ofrecido por la garaje
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OfferedService {
    pub id: String,
    pub name: String,
    pub description: String,
    pub estimated_price: String,
}

/// Detalles extra de un vehículo (documento con upsert por vehicle_id)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VehicleExtraDetails {
    pub vehicle_id: String,
    pub market_value: Decimal,
    pub recall_pending: bool,
    pub recall_reason: Option<String>,
    pub maintenance_tip: Option<String>,
    pub next_service_due: Option<NaiveDate>,
}
