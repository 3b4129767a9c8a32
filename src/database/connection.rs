//! Configuración de conexión a PostgreSQL
//!
//! Este módulo maneja el pool de conexiones y el bootstrap del schema.

use anyhow::Result;
use sqlx::PgPool;

/// Crear un pool de conexiones a la base de datos
pub async fn create_pool(database_url: Option<&str>) -> Result<PgPool> {
    let database_url = match database_url {
        Some(url) => url.to_string(),
        None => std::env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set in environment variables"),
    };

    let pool = PgPool::connect(&database_url).await?;

    Ok(pool)
}

/// Crear las tablas si no existen
///
/// Schema estilo documento: la variante del vehículo y su historial de
/// mantenimiento viven en columnas JSONB.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS vehicles (
            id TEXT PRIMARY KEY,
            model TEXT NOT NULL,
            color TEXT,
            image_url TEXT,
            license_plate TEXT,
            year INTEGER,
            license_expiry DATE,
            kind JSONB NOT NULL,
            maintenance_history JSONB NOT NULL DEFAULT '[]'::jsonb,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS maintenance_tips (
            id INTEGER PRIMARY KEY,
            tip TEXT NOT NULL,
            category TEXT NOT NULL DEFAULT 'general'
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS featured_vehicles (
            id INTEGER PRIMARY KEY,
            model TEXT NOT NULL,
            year INTEGER NOT NULL,
            highlight TEXT NOT NULL,
            image_url TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS offered_services (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL,
            estimated_price TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS vehicle_extra_details (
            vehicle_id TEXT PRIMARY KEY,
            market_value NUMERIC NOT NULL DEFAULT 0,
            recall_pending BOOLEAN NOT NULL DEFAULT FALSE,
            recall_reason TEXT,
            maintenance_tip TEXT,
            next_service_due DATE
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
