//! Rutas de previsión del tiempo
//!
//! `GET /api/prevision/:ciudad` trae el forecast del proveedor, lo
//! resume por día, lo cachea en el estado y devuelve la vista filtrada.
//! `GET /api/prevision-cache` re-filtra el cache sin volver a consultar.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::dto::forecast_dto::ForecastResponse;
use crate::services::forecast_service::{self, ForecastCache};
use crate::services::weather_service::WeatherService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_forecast_router() -> Router<AppState> {
    Router::new()
        .route("/prevision/:ciudad", get(get_forecast))
        .route("/prevision-cache", get(get_cached_forecast))
}

async fn get_forecast(
    State(state): State<AppState>,
    Path(ciudad): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ForecastResponse>, AppError> {
    let city = ciudad.trim();
    if city.is_empty() {
        return Err(AppError::BadRequest("Nombre de la ciudad es obligatorio".to_string()));
    }

    let Some(api_key) = state.config.openweather_api_key.clone() else {
        return Err(AppError::Internal(
            "Clave de la API de clima no configurada en el servidor".to_string(),
        ));
    };

    // Invalidación eager: el cache se limpia antes de iniciar el fetch,
    // así un filtro nunca mezcla resúmenes viejos con nuevos
    {
        let mut cache = state.forecast_cache.write().await;
        *cache = None;
    }

    let weather = WeatherService::new(api_key, state.http_client.clone());
    let raw = weather
        .get_forecast(city)
        .await
        .map_err(|e| AppError::ExternalApi(e.to_string()))?;

    let resolved_city = raw
        .city
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| city.to_string());

    let Some(summaries) = forecast_service::summarize_forecast(&raw.list) else {
        // sin datos utilizables: resultado neutro, no error
        return Ok(Json(ForecastResponse {
            city: resolved_city,
            effective_days: 0,
            days: Vec::new(),
        }));
    };

    {
        let mut cache = state.forecast_cache.write().await;
        *cache = Some(ForecastCache {
            city: resolved_city.clone(),
            days: summaries.clone(),
        });
    }

    let (days, effective_days) = forecast_service::filter_days(&summaries, params.get("dias").map(String::as_str));
    Ok(Json(ForecastResponse {
        city: resolved_city,
        effective_days,
        days,
    }))
}

async fn get_cached_forecast(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ForecastResponse>, AppError> {
    let cache = state.forecast_cache.read().await;
    let Some(cached) = cache.as_ref() else {
        return Err(AppError::NotFound(
            "No hay pronóstico en caché; consultá primero una ciudad".to_string(),
        ));
    };

    let (days, effective_days) = forecast_service::filter_days(&cached.days, params.get("dias").map(String::as_str));
    Ok(Json(ForecastResponse {
        city: cached.city.clone(),
        effective_days,
        days,
    }))
}
