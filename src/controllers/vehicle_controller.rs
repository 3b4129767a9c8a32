//! Controller de vehículos
//!
//! Validación y orquestación entre las rutas y el repositorio.

use sqlx::PgPool;
use validator::Validate;

use crate::dto::vehicle_dto::{
    CreateVehicleRequest, ScheduleMaintenanceRequest, UpdateVehicleRequest,
};
use crate::dto::ApiResponse;
use crate::models::vehicle::{MaintenanceEvent, Vehicle};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<Vehicle>, AppError> {
        request.validate()?;

        let id = request.id.trim().to_string();
        if self.repository.exists(&id).await? {
            return Err(conflict_error("Vehículo", "id", &id));
        }

        log::info!(
            "🚗 Creando vehículo '{}' ({}, tipo {})",
            request.model,
            id,
            request.kind.as_str()
        );
        let vehicle = self
            .repository
            .create(
                id,
                request.model,
                request.color,
                request.image_url,
                request.license_plate,
                request.year,
                request.license_expiry,
                request.kind,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle,
            "Vehículo guardado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Vehicle, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehículo", id))
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        self.repository.list_all().await
    }

    pub async fn update(
        &self,
        id: &str,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<Vehicle>, AppError> {
        request.validate()?;

        let vehicle = self
            .repository
            .update(
                id,
                request.model,
                request.color,
                request.image_url,
                request.license_plate,
                request.year,
                request.license_expiry,
                request.kind,
            )
            .await?
            .ok_or_else(|| not_found_error("Vehículo", id))?;

        Ok(ApiResponse::success_with_message(
            vehicle,
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(not_found_error("Vehículo", id));
        }
        log::info!("🗑️ Vehículo '{}' eliminado", id);
        Ok(())
    }

    /// Agendar un mantenimiento: agrega un evento al historial
    pub async fn schedule_maintenance(
        &self,
        id: &str,
        request: ScheduleMaintenanceRequest,
    ) -> Result<ApiResponse<Vehicle>, AppError> {
        request.validate()?;

        let event = MaintenanceEvent {
            date: request.date,
            event_type: request.event_type.trim().to_string(),
            cost: request.cost,
            notes: request.notes,
        };

        let vehicle = self
            .repository
            .append_maintenance(id, event)
            .await?
            .ok_or_else(|| not_found_error("Vehículo", id))?;

        Ok(ApiResponse::success_with_message(
            vehicle,
            "Mantenimiento agendado exitosamente".to_string(),
        ))
    }

    pub async fn clear_maintenance(&self, id: &str) -> Result<(), AppError> {
        let cleared = self.repository.clear_maintenance(id).await?;
        if !cleared {
            return Err(not_found_error("Vehículo", id));
        }
        Ok(())
    }
}
