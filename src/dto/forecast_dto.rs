//! DTOs del pronóstico del tiempo
//!
//! Structs crudos de la API de OpenWeatherMap (forecast 5 días / 3 horas)
//! y el resumen diario que produce el backend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Response cruda de la API de forecast
#[derive(Debug, Deserialize)]
pub struct ForecastApiResponse {
    #[serde(default)]
    pub list: Vec<ForecastSample>,
    pub city: Option<ForecastCity>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastCity {
    pub name: String,
}

/// Una lectura cruda del proveedor (cada 3 horas)
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastSample {
    /// Timestamp en texto "YYYY-MM-DD HH:MM:SS"
    pub dt_txt: String,
    pub main: SampleMain,
    #[serde(default)]
    pub weather: Vec<SampleWeather>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SampleMain {
    pub temp: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SampleWeather {
    pub description: String,
    pub icon: String,
}

/// Body de error del proveedor ({"cod": "...", "message": "..."})
#[derive(Debug, Deserialize)]
pub struct ProviderError {
    pub message: Option<String>,
}

/// Resumen de un día de pronóstico
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub temp_min: f64,
    pub temp_max: f64,
    pub description: String,
    pub icon: String,
}

/// Response del endpoint de previsión
#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub city: String,
    /// Cantidad de días efectivamente devuelta (tras clamp del filtro)
    pub effective_days: usize,
    pub days: Vec<DailySummary>,
}
