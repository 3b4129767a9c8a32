//! Datos iniciales del catálogo
//!
//! Se insertan solo en el primer arranque, cuando las colecciones
//! están vacías.

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

async fn count_rows(pool: &PgPool, table: &str) -> Result<i64> {
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Sembrar las colecciones de catálogo si están vacías
pub async fn seed_initial_data(pool: &PgPool) -> Result<()> {
    if count_rows(pool, "maintenance_tips").await? == 0 {
        let tips: &[(i32, &str, &str)] = &[
            (1, "Verificá el nivel de aceite regularmente.", "general"),
            (2, "Calibrá los neumáticos cada semana para un andar más suave.", "general"),
            (3, "Revisá el líquido refrigerante del motor.", "general"),
            (4, "Mantené faros y luces limpios para ver bien de noche.", "general"),
            (10, "Rotá los neumáticos cada 10.000 km para un desgaste parejo.", "base"),
            (11, "Revisá alineación y balanceo si el volante vibra.", "base"),
            (15, "Usá siempre combustible de alto octanaje para rendir al máximo.", "sports"),
            (16, "Vigilá el desgaste de los frenos: los deportivos los exigen más.", "sports"),
            (20, "Controlá el sistema de frenos de aire con frecuencia.", "truck"),
            (21, "Lubricá los pernos y articulaciones del chasis periódicamente.", "truck"),
        ];
        for (id, tip, category) in tips {
            sqlx::query("INSERT INTO maintenance_tips (id, tip, category) VALUES ($1, $2, $3)")
                .bind(id)
                .bind(tip)
                .bind(category)
                .execute(pool)
                .await?;
        }
        info!("💡 Consejos de mantenimiento insertados en la base de datos");
    }

    if count_rows(pool, "featured_vehicles").await? == 0 {
        let featured: &[(i32, &str, i32, &str, &str)] = &[
            (10, "Coupé Aurora GT", 2024, "Perfecto para paseos de fin de semana.", "https://example.com/img/aurora-gt.jpg"),
            (11, "Van Familiar Cometa", 2023, "Lleva a todos los amigos.", "https://example.com/img/cometa-van.jpg"),
            (12, "Convertible Estelar", 2025, "Brilla más que el cielo de noche.", "https://example.com/img/estelar.jpg"),
        ];
        for (id, model, year, highlight, image_url) in featured {
            sqlx::query(
                "INSERT INTO featured_vehicles (id, model, year, highlight, image_url) VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(id)
            .bind(model)
            .bind(year)
            .bind(highlight)
            .bind(image_url)
            .execute(pool)
            .await?;
        }
        info!("⭐ Vehículos en destaque insertados en la base de datos");
    }

    if count_rows(pool, "offered_services").await? == 0 {
        let services: &[(&str, &str, &str, &str)] = &[
            ("svc001", "Lavado premium con encerado", "Deja la pintura brillante y protegida.", "R$ 150,00"),
            ("svc002", "Alineación y balanceo", "Para una dirección más segura.", "R$ 120,00"),
            ("svc003", "Cambio de aceite y filtro", "Mantiene el motor funcionando suave.", "R$ 200,00"),
            ("svc004", "Check-up completo", "Revisamos todos los ítems del vehículo.", "R$ 250,00"),
        ];
        for (id, name, description, price) in services {
            sqlx::query(
                "INSERT INTO offered_services (id, name, description, estimated_price) VALUES ($1, $2, $3, $4)",
            )
            .bind(id)
            .bind(name)
            .bind(description)
            .bind(price)
            .execute(pool)
            .await?;
        }
        info!("🔧 Servicios de la garaje insertados en la base de datos");
    }

    if count_rows(pool, "vehicle_extra_details").await? == 0 {
        sqlx::query(
            r#"
            INSERT INTO vehicle_extra_details
                (vehicle_id, market_value, recall_pending, recall_reason, maintenance_tip, next_service_due)
            VALUES
                ('carro1', 35000.50, FALSE, NULL, 'Verificar nivel de aceite cada 1000 km.', '2026-12-15'),
                ('carro2', 85000.00, TRUE, 'Revisar el sistema de inyección.', 'Usar siempre combustible aditivado.', '2027-05-20')
            "#,
        )
        .execute(pool)
        .await?;
        info!("📋 Detalles extra de vehículos insertados en la base de datos");
    }

    Ok(())
}
