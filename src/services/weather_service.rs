//! Servicio de clima
//!
//! Cliente HTTP hacia la API de forecast de OpenWeatherMap (5 días /
//! 3 horas). Solo trae los datos crudos; el resumen por día lo hace
//! `forecast_service`.

use anyhow::{anyhow, Result};

use crate::dto::forecast_dto::{ForecastApiResponse, ProviderError};

const FORECAST_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

pub struct WeatherService {
    api_key: String,
    client: reqwest::Client,
}

impl WeatherService {
    pub fn new(api_key: String, client: reqwest::Client) -> Self {
        Self { api_key, client }
    }

    /// Traer el forecast crudo para una ciudad
    ///
    /// Un fallo del proveedor se devuelve como error descriptivo único;
    /// no hay reintentos.
    pub async fn get_forecast(&self, city: &str) -> Result<ForecastApiResponse> {
        log::info!("🌤️ Buscando forecast para ciudad: {}", city);

        let encoded_city = urlencoding::encode(city);
        let url = format!(
            "{}?q={}&appid={}&units=metric&lang=pt_br",
            FORECAST_BASE_URL, encoded_city, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Error de red consultando OpenWeatherMap: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let provider_message = response
                .json::<ProviderError>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| "Error al buscar datos de OpenWeatherMap".to_string());
            log::warn!("❌ OpenWeatherMap respondió {}: {}", status, provider_message);
            return Err(anyhow!("{} ({})", provider_message, status));
        }

        let forecast = response
            .json::<ForecastApiResponse>()
            .await
            .map_err(|e| anyhow!("Respuesta inválida de OpenWeatherMap: {}", e))?;

        log::info!("✅ Forecast recibido: {} lecturas", forecast.list.len());
        Ok(forecast)
    }
}
