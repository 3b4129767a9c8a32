//! Repositorio de vehículos
//!
//! Acceso a la tabla `vehicles`. La variante y el historial de
//! mantenimiento viven en columnas JSONB, así que las filas se leen
//! con un struct intermedio que envuelve esos campos en `Json<_>`.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::vehicle::{MaintenanceEvent, Vehicle, VehicleKind};
use crate::utils::errors::AppError;

#[derive(Debug, sqlx::FromRow)]
struct VehicleRow {
    id: String,
    model: String,
    color: Option<String>,
    image_url: Option<String>,
    license_plate: Option<String>,
    year: Option<i32>,
    license_expiry: Option<NaiveDate>,
    kind: Json<VehicleKind>,
    maintenance_history: Json<Vec<MaintenanceEvent>>,
    created_at: DateTime<Utc>,
}

impl From<VehicleRow> for Vehicle {
    fn from(row: VehicleRow) -> Self {
        Vehicle {
            id: row.id,
            model: row.model,
            color: row.color,
            image_url: row.image_url,
            license_plate: row.license_plate,
            year: row.year,
            license_expiry: row.license_expiry,
            kind: row.kind.0,
            maintenance_history: row.maintenance_history.0,
            created_at: row.created_at,
        }
    }
}

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        id: String,
        model: String,
        color: Option<String>,
        image_url: Option<String>,
        license_plate: Option<String>,
        year: Option<i32>,
        license_expiry: Option<NaiveDate>,
        kind: VehicleKind,
    ) -> Result<Vehicle, AppError> {
        let row = sqlx::query_as::<_, VehicleRow>(
            r#"
            INSERT INTO vehicles
                (id, model, color, image_url, license_plate, year, license_expiry,
                 kind, maintenance_history, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, '[]'::jsonb, $9)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(model)
        .bind(color)
        .bind(image_url)
        .bind(license_plate)
        .bind(year)
        .bind(license_expiry)
        .bind(Json(kind))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Vehicle>, AppError> {
        let row = sqlx::query_as::<_, VehicleRow>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Vehicle::from))
    }

    /// Listar todos los vehículos en orden de inserción
    ///
    /// El orden ascendente por created_at es el desempate final que
    /// asumen las agregaciones de alertas.
    pub async fn list_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let rows = sqlx::query_as::<_, VehicleRow>(
            "SELECT * FROM vehicles ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Vehicle::from).collect())
    }

    pub async fn exists(&self, id: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vehicles WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    /// Update parcial: los campos ausentes conservan su valor
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: &str,
        model: Option<String>,
        color: Option<String>,
        image_url: Option<String>,
        license_plate: Option<String>,
        year: Option<i32>,
        license_expiry: Option<NaiveDate>,
        kind: Option<VehicleKind>,
    ) -> Result<Option<Vehicle>, AppError> {
        let row = sqlx::query_as::<_, VehicleRow>(
            r#"
            UPDATE vehicles SET
                model = COALESCE($2, model),
                color = COALESCE($3, color),
                image_url = COALESCE($4, image_url),
                license_plate = COALESCE($5, license_plate),
                year = COALESCE($6, year),
                license_expiry = COALESCE($7, license_expiry),
                kind = COALESCE($8, kind)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(model)
        .bind(color)
        .bind(image_url)
        .bind(license_plate)
        .bind(year)
        .bind(license_expiry)
        .bind(kind.map(Json))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Vehicle::from))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Agregar un evento al historial de mantenimiento
    pub async fn append_maintenance(
        &self,
        id: &str,
        event: MaintenanceEvent,
    ) -> Result<Option<Vehicle>, AppError> {
        let Some(mut vehicle) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        vehicle.maintenance_history.push(event);

        let row = sqlx::query_as::<_, VehicleRow>(
            "UPDATE vehicles SET maintenance_history = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(Json(&vehicle.maintenance_history))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Vehicle::from))
    }

    /// Vaciar el historial de mantenimiento
    pub async fn clear_maintenance(&self, id: &str) -> Result<bool, AppError> {
        let result =
            sqlx::query("UPDATE vehicles SET maintenance_history = '[]'::jsonb WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}
