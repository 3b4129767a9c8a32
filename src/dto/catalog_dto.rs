//! DTOs de las colecciones de catálogo

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

// Request de upsert de detalles extra (parcial, estilo $set)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateExtraDetailsRequest {
    pub market_value: Option<Decimal>,
    pub recall_pending: Option<bool>,
    #[validate(length(max = 500))]
    pub recall_reason: Option<String>,
    #[validate(length(max = 500))]
    pub maintenance_tip: Option<String>,
    pub next_service_due: Option<NaiveDate>,
}
