use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};

use crate::controllers::catalog_controller::CatalogController;
use crate::dto::catalog_dto::UpdateExtraDetailsRequest;
use crate::models::catalog::{
    FeaturedVehicle, MaintenanceTip, OfferedService, VehicleExtraDetails,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas bajo /api/garaje (destaque y servicios)
pub fn create_catalog_router() -> Router<AppState> {
    Router::new()
        .route("/vehiculos-destaque", get(featured_vehicles))
        .route("/servicios", get(offered_services))
        .route("/servicios/:id", get(service_by_id))
}

/// Rutas bajo /api/consejos
pub fn create_tips_router() -> Router<AppState> {
    Router::new()
        .route("/", get(general_tips))
        .route("/:categoria", get(tips_by_category))
}

/// Rutas bajo /api/detalles-extra
pub fn create_extra_details_router() -> Router<AppState> {
    Router::new()
        .route("/:vehiculo_id", get(extra_details))
        .route("/:vehiculo_id", put(update_extra_details))
}

async fn featured_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<FeaturedVehicle>>, AppError> {
    let controller = CatalogController::new(state.pool.clone());
    Ok(Json(controller.featured_vehicles().await?))
}

async fn offered_services(
    State(state): State<AppState>,
) -> Result<Json<Vec<OfferedService>>, AppError> {
    let controller = CatalogController::new(state.pool.clone());
    Ok(Json(controller.offered_services().await?))
}

async fn service_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OfferedService>, AppError> {
    let controller = CatalogController::new(state.pool.clone());
    Ok(Json(controller.service_by_id(&id).await?))
}

async fn general_tips(
    State(state): State<AppState>,
) -> Result<Json<Vec<MaintenanceTip>>, AppError> {
    let controller = CatalogController::new(state.pool.clone());
    Ok(Json(controller.general_tips().await?))
}

async fn tips_by_category(
    State(state): State<AppState>,
    Path(categoria): Path<String>,
) -> Result<Json<Vec<MaintenanceTip>>, AppError> {
    let controller = CatalogController::new(state.pool.clone());
    Ok(Json(controller.tips_for_category(&categoria).await?))
}

async fn extra_details(
    State(state): State<AppState>,
    Path(vehiculo_id): Path<String>,
) -> Result<Json<VehicleExtraDetails>, AppError> {
    let controller = CatalogController::new(state.pool.clone());
    Ok(Json(controller.extra_details(&vehiculo_id).await?))
}

async fn update_extra_details(
    State(state): State<AppState>,
    Path(vehiculo_id): Path<String>,
    Json(request): Json<UpdateExtraDetailsRequest>,
) -> Result<Json<VehicleExtraDetails>, AppError> {
    let controller = CatalogController::new(state.pool.clone());
    Ok(Json(controller.update_extra_details(&vehiculo_id, request).await?))
}
