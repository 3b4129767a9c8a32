//! DTOs de vehículos

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::models::vehicle::VehicleKind;
use crate::utils::validation::{validate_license_plate, validate_vehicle_id};

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(custom = "validate_vehicle_id")]
    pub id: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    pub color: Option<String>,

    pub image_url: Option<String>,

    #[validate(custom = "validate_license_plate")]
    pub license_plate: Option<String>,

    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,

    pub license_expiry: Option<NaiveDate>,

    #[serde(flatten)]
    pub kind: VehicleKind,
}

// Request para actualizar un vehículo (parcial, estilo COALESCE)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    pub color: Option<String>,

    pub image_url: Option<String>,

    #[validate(custom = "validate_license_plate")]
    pub license_plate: Option<String>,

    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,

    pub license_expiry: Option<NaiveDate>,

    /// Reemplaza la variante completa cuando viene presente
    pub kind: Option<VehicleKind>,
}

// Request para agendar un mantenimiento
#[derive(Debug, Deserialize, Validate)]
pub struct ScheduleMaintenanceRequest {
    pub date: DateTime<Utc>,

    #[validate(length(min = 1, max = 100))]
    pub event_type: String,

    pub cost: Option<Decimal>,

    pub notes: Option<String>,
}
