//! Repositorio de las colecciones de catálogo
//!
//! Consejos, vehículos en destaque, servicios ofrecidos y detalles
//! extra. Consultas simples; los detalles extra usan upsert de un solo
//! documento (ON CONFLICT sobre vehicle_id).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::catalog::{
    FeaturedVehicle, MaintenanceTip, OfferedService, TipCategory, VehicleExtraDetails,
};
use crate::utils::errors::AppError;

#[derive(Debug, sqlx::FromRow)]
struct TipRow {
    id: i32,
    tip: String,
    category: String,
}

pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Consejos por categoría; filas con categoría desconocida se saltan
    pub async fn tips_by_category(
        &self,
        category: TipCategory,
    ) -> Result<Vec<MaintenanceTip>, AppError> {
        let rows = sqlx::query_as::<_, TipRow>(
            "SELECT id, tip, category FROM maintenance_tips WHERE category = $1 ORDER BY id",
        )
        .bind(category.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let category = TipCategory::parse(&row.category)?;
                Some(MaintenanceTip {
                    id: row.id,
                    tip: row.tip,
                    category,
                })
            })
            .collect())
    }

    pub async fn list_featured(&self) -> Result<Vec<FeaturedVehicle>, AppError> {
        let featured = sqlx::query_as::<_, FeaturedVehicle>(
            "SELECT id, model, year, highlight, image_url FROM featured_vehicles ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(featured)
    }

    pub async fn list_services(&self) -> Result<Vec<OfferedService>, AppError> {
        let services = sqlx::query_as::<_, OfferedService>(
            "SELECT id, name, description, estimated_price FROM offered_services ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(services)
    }

    pub async fn find_service(&self, id: &str) -> Result<Option<OfferedService>, AppError> {
        let service = sqlx::query_as::<_, OfferedService>(
            "SELECT id, name, description, estimated_price FROM offered_services WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(service)
    }

    pub async fn find_extra_details(
        &self,
        vehicle_id: &str,
    ) -> Result<Option<VehicleExtraDetails>, AppError> {
        let details = sqlx::query_as::<_, VehicleExtraDetails>(
            r#"
            SELECT vehicle_id, market_value, recall_pending, recall_reason,
                   maintenance_tip, next_service_due
            FROM vehicle_extra_details WHERE vehicle_id = $1
            "#,
        )
        .bind(vehicle_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(details)
    }

    /// Upsert parcial de los detalles extra de un vehículo
    pub async fn upsert_extra_details(
        &self,
        vehicle_id: &str,
        market_value: Option<Decimal>,
        recall_pending: Option<bool>,
        recall_reason: Option<String>,
        maintenance_tip: Option<String>,
        next_service_due: Option<NaiveDate>,
    ) -> Result<VehicleExtraDetails, AppError> {
        let details = sqlx::query_as::<_, VehicleExtraDetails>(
            r#"
            INSERT INTO vehicle_extra_details
                (vehicle_id, market_value, recall_pending, recall_reason,
                 maintenance_tip, next_service_due)
            VALUES ($1, COALESCE($2, 0), COALESCE($3, FALSE), $4, $5, $6)
            ON CONFLICT (vehicle_id) DO UPDATE SET
                market_value = COALESCE($2, vehicle_extra_details.market_value),
                recall_pending = COALESCE($3, vehicle_extra_details.recall_pending),
                recall_reason = COALESCE($4, vehicle_extra_details.recall_reason),
                maintenance_tip = COALESCE($5, vehicle_extra_details.maintenance_tip),
                next_service_due = COALESCE($6, vehicle_extra_details.next_service_due)
            RETURNING vehicle_id, market_value, recall_pending, recall_reason,
                      maintenance_tip, next_service_due
            "#,
        )
        .bind(vehicle_id)
        .bind(market_value)
        .bind(recall_pending)
        .bind(recall_reason)
        .bind(maintenance_tip)
        .bind(next_service_due)
        .fetch_one(&self.pool)
        .await?;

        Ok(details)
    }
}
