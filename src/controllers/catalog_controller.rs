//! Controller del catálogo
//!
//! Consejos, destaque, servicios y detalles extra.

use sqlx::PgPool;
use validator::Validate;

use crate::dto::catalog_dto::UpdateExtraDetailsRequest;
use crate::models::catalog::{
    FeaturedVehicle, MaintenanceTip, OfferedService, TipCategory, VehicleExtraDetails,
};
use crate::repositories::catalog_repository::CatalogRepository;
use crate::utils::errors::AppError;

pub struct CatalogController {
    repository: CatalogRepository,
}

impl CatalogController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CatalogRepository::new(pool),
        }
    }

    /// Consejos generales de mantenimiento
    pub async fn general_tips(&self) -> Result<Vec<MaintenanceTip>, AppError> {
        self.repository.tips_by_category(TipCategory::General).await
    }

    /// Consejos para una categoría de vehículo; 404 si no hay ninguno
    pub async fn tips_for_category(&self, raw: &str) -> Result<Vec<MaintenanceTip>, AppError> {
        let category = TipCategory::parse(raw).ok_or_else(|| {
            AppError::NotFound(format!("Ningún consejo encontrado para el tipo: {}", raw))
        })?;

        let tips = self.repository.tips_by_category(category).await?;
        if tips.is_empty() {
            return Err(AppError::NotFound(format!(
                "Ningún consejo encontrado para el tipo: {}",
                raw
            )));
        }
        Ok(tips)
    }

    pub async fn featured_vehicles(&self) -> Result<Vec<FeaturedVehicle>, AppError> {
        self.repository.list_featured().await
    }

    pub async fn offered_services(&self) -> Result<Vec<OfferedService>, AppError> {
        self.repository.list_services().await
    }

    pub async fn service_by_id(&self, id: &str) -> Result<OfferedService, AppError> {
        self.repository
            .find_service(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Servicio no encontrado".to_string()))
    }

    pub async fn extra_details(&self, vehicle_id: &str) -> Result<VehicleExtraDetails, AppError> {
        self.repository
            .find_extra_details(vehicle_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("Ningún detalle extra encontrado para este vehículo".to_string())
            })
    }

    pub async fn update_extra_details(
        &self,
        vehicle_id: &str,
        request: UpdateExtraDetailsRequest,
    ) -> Result<VehicleExtraDetails, AppError> {
        request.validate()?;

        self.repository
            .upsert_extra_details(
                vehicle_id,
                request.market_value,
                request.recall_pending,
                request.recall_reason,
                request.maintenance_tip,
                request.next_service_due,
            )
            .await
    }
}
