//! Servicio de alertas
//!
//! Agregaciones puras sobre un snapshot en memoria de los vehículos:
//! alertas de licencia vencida/por vencer, alertas de mantenimiento
//! próximo (hoy/mañana) y la agenda de mantenimientos futuros.
//!
//! Ninguna función de este módulo hace I/O. El orden de entrada (orden
//! de inserción de los vehículos) se preserva como desempate final: los
//! sorts de la librería estándar son estables.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use crate::dto::alert_dto::{
    LicenseAlert, LicenseStatus, MaintenanceAlert, ScheduleEntry,
};
use crate::models::vehicle::Vehicle;

/// Días de anticipación con los que una licencia cuenta como "por vencer"
const LICENSE_WARNING_WINDOW_DAYS: i64 = 30;

/// Diferencia en días enteros entre dos fechas de calendario
///
/// `days_until(d, d) == 0`; negativo cuando `target` ya pasó.
pub fn days_until(target: NaiveDate, reference: NaiveDate) -> i64 {
    target.signed_duration_since(reference).num_days()
}

/// Test de rango inclusivo sobre timestamps
pub fn is_within(target: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    target >= start && target <= end
}

/// Alertas de mantenimiento dentro de [inicio de hoy, fin de mañana]
///
/// Los eventos de hoy van antes que los de mañana; dentro del mismo día,
/// ascendente por horario.
pub fn upcoming_maintenance_alerts(vehicles: &[Vehicle], now: DateTime<Utc>) -> Vec<MaintenanceAlert> {
    let start_of_today = now.date_naive().and_time(NaiveTime::MIN).and_utc();
    let end_of_tomorrow = start_of_today + Duration::days(2) - Duration::milliseconds(1);

    let mut alerts: Vec<MaintenanceAlert> = Vec::new();
    for vehicle in vehicles {
        for event in &vehicle.maintenance_history {
            if !is_within(event.date, start_of_today, end_of_tomorrow) {
                continue;
            }
            alerts.push(MaintenanceAlert {
                vehicle_id: vehicle.id.clone(),
                vehicle_model: vehicle.model.clone(),
                event_type: event.event_type.clone(),
                scheduled_for: event.date,
                is_today: event.date.date_naive() == now.date_naive(),
            });
        }
    }

    // Prioridad 0 = hoy, 1 = mañana; luego por horario
    alerts.sort_by_key(|a| (if a.is_today { 0u8 } else { 1u8 }, a.scheduled_for));
    alerts
}

/// Alertas de licencia: vencidas (prioridad 1) y por vencer en 30 días (prioridad 2)
///
/// Vehículos sin fecha de vencimiento quedan fuera; el resto se ordena
/// de más a menos urgente.
pub fn license_alerts(vehicles: &[Vehicle], today: NaiveDate) -> Vec<LicenseAlert> {
    let mut alerts: Vec<LicenseAlert> = Vec::new();
    for vehicle in vehicles {
        let Some(expires_on) = vehicle.license_expiry else {
            continue;
        };
        let days = days_until(expires_on, today);
        let status = if days < 0 {
            LicenseStatus::Expired
        } else if days <= LICENSE_WARNING_WINDOW_DAYS {
            LicenseStatus::ExpiringSoon
        } else {
            continue;
        };
        alerts.push(LicenseAlert {
            vehicle_id: vehicle.id.clone(),
            vehicle_model: vehicle.model.clone(),
            license_plate: vehicle.license_plate.clone(),
            expires_on,
            days_until: days,
            status,
        });
    }

    alerts.sort_by_key(|a| {
        let priority: u8 = match a.status {
            LicenseStatus::Expired => 1,
            LicenseStatus::ExpiringSoon => 2,
        };
        (priority, a.days_until)
    });
    alerts
}

/// Agenda de mantenimientos estrictamente posteriores a `now`, sin tope superior
pub fn future_schedule(vehicles: &[Vehicle], now: DateTime<Utc>) -> Vec<ScheduleEntry> {
    let mut entries: Vec<ScheduleEntry> = Vec::new();
    for vehicle in vehicles {
        for event in &vehicle.maintenance_history {
            if event.date <= now {
                continue;
            }
            entries.push(ScheduleEntry {
                vehicle_id: vehicle.id.clone(),
                vehicle_model: vehicle.model.clone(),
                event_type: event.event_type.clone(),
                scheduled_for: event.date,
                cost: event.cost,
            });
        }
    }

    entries.sort_by_key(|e| e.scheduled_for);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::{MaintenanceEvent, VehicleKind};
    use chrono::TimeZone;

    fn vehicle(id: &str, expiry: Option<NaiveDate>, history: Vec<MaintenanceEvent>) -> Vehicle {
        Vehicle {
            id: id.to_string(),
            model: format!("Modelo {}", id),
            color: None,
            image_url: None,
            license_plate: Some("ABC-1234".to_string()),
            year: Some(2020),
            license_expiry: expiry,
            kind: VehicleKind::Base,
            maintenance_history: history,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn event(at: DateTime<Utc>) -> MaintenanceEvent {
        MaintenanceEvent {
            date: at,
            event_type: "Revisión".to_string(),
            cost: None,
            notes: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_until_identidad() {
        let d = date(2026, 6, 15);
        assert_eq!(days_until(d, d), 0);
        assert_eq!(days_until(date(2026, 6, 20), d), 5);
        assert_eq!(days_until(date(2026, 6, 10), d), -5);
    }

    #[test]
    fn test_is_within_inclusivo() {
        let start = Utc.with_ymd_and_hms(2026, 6, 15, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 6, 16, 23, 59, 59).unwrap();
        assert!(is_within(start, start, end));
        assert!(is_within(end, start, end));
        assert!(!is_within(start - Duration::seconds(1), start, end));
        assert!(!is_within(end + Duration::seconds(1), start, end));
    }

    #[test]
    fn test_mantenimiento_hoy_antes_que_manana() {
        let now = Utc.with_ymd_and_hms(2026, 6, 15, 10, 0, 0).unwrap();
        let manana_temprano = Utc.with_ymd_and_hms(2026, 6, 16, 8, 0, 0).unwrap();
        let hoy_tarde = Utc.with_ymd_and_hms(2026, 6, 15, 18, 0, 0).unwrap();
        let vehicles = vec![
            vehicle("a", None, vec![event(manana_temprano)]),
            vehicle("b", None, vec![event(hoy_tarde)]),
        ];

        let alerts = upcoming_maintenance_alerts(&vehicles, now);
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].vehicle_id, "b");
        assert!(alerts[0].is_today);
        assert_eq!(alerts[1].vehicle_id, "a");
        assert!(!alerts[1].is_today);
    }

    #[test]
    fn test_mantenimiento_fuera_de_ventana() {
        let now = Utc.with_ymd_and_hms(2026, 6, 15, 10, 0, 0).unwrap();
        let ayer = Utc.with_ymd_and_hms(2026, 6, 14, 23, 59, 0).unwrap();
        let pasado_manana = Utc.with_ymd_and_hms(2026, 6, 17, 0, 0, 0).unwrap();
        let vehicles = vec![vehicle("a", None, vec![event(ayer), event(pasado_manana)])];

        assert!(upcoming_maintenance_alerts(&vehicles, now).is_empty());
    }

    #[test]
    fn test_historiales_vacios_no_fallan() {
        let now = Utc.with_ymd_and_hms(2026, 6, 15, 10, 0, 0).unwrap();
        let vehicles = vec![vehicle("a", None, vec![]), vehicle("b", None, vec![])];
        assert!(upcoming_maintenance_alerts(&vehicles, now).is_empty());
        assert!(future_schedule(&vehicles, now).is_empty());
    }

    #[test]
    fn test_licencia_vencida_antes_que_por_vencer() {
        // Vehículo A vence en 5 días, vehículo B venció ayer:
        // B (expired) debe salir antes que A (expiring_soon)
        let today = date(2026, 6, 15);
        let vehicles = vec![
            vehicle("a", Some(date(2026, 6, 20)), vec![]),
            vehicle("b", Some(date(2026, 6, 14)), vec![]),
        ];

        let alerts = license_alerts(&vehicles, today);
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].vehicle_id, "b");
        assert_eq!(alerts[0].status, LicenseStatus::Expired);
        assert_eq!(alerts[0].days_until, -1);
        assert_eq!(alerts[1].vehicle_id, "a");
        assert_eq!(alerts[1].status, LicenseStatus::ExpiringSoon);
        assert_eq!(alerts[1].days_until, 5);
    }

    #[test]
    fn test_licencia_lejana_o_ausente_excluida() {
        let today = date(2026, 6, 15);
        let vehicles = vec![
            vehicle("a", Some(date(2026, 12, 1)), vec![]),
            vehicle("b", None, vec![]),
            // justo en el borde de los 30 días: sí alerta
            vehicle("c", Some(date(2026, 7, 15)), vec![]),
        ];

        let alerts = license_alerts(&vehicles, today);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].vehicle_id, "c");
        assert_eq!(alerts[0].days_until, 30);
    }

    #[test]
    fn test_licencias_orden_estable_en_empate() {
        // Mismo days_until: se preserva el orden de inserción
        let today = date(2026, 6, 15);
        let vehicles = vec![
            vehicle("x", Some(date(2026, 6, 20)), vec![]),
            vehicle("y", Some(date(2026, 6, 20)), vec![]),
        ];

        let alerts = license_alerts(&vehicles, today);
        assert_eq!(alerts[0].vehicle_id, "x");
        assert_eq!(alerts[1].vehicle_id, "y");
    }

    #[test]
    fn test_agenda_futura_ordenada_y_estricta() {
        let now = Utc.with_ymd_and_hms(2026, 6, 15, 10, 0, 0).unwrap();
        let en_una_hora = now + Duration::hours(1);
        let en_un_mes = now + Duration::days(30);
        let vehicles = vec![
            vehicle("a", None, vec![event(en_un_mes), event(now)]),
            vehicle("b", None, vec![event(en_una_hora)]),
        ];

        let entries = future_schedule(&vehicles, now);
        // el evento exactamente en `now` no es futuro
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].vehicle_id, "b");
        assert_eq!(entries[1].vehicle_id, "a");
        assert!(entries.windows(2).all(|w| w[0].scheduled_for <= w[1].scheduled_for));
    }
}
