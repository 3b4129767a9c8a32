//! Servicio de resumen de pronóstico
//!
//! Convierte las lecturas crudas de 3 horas del proveedor en un resumen
//! por día de calendario, y filtra el resumen cacheado a una cantidad
//! de días pedida. Todo es computación pura sobre datos ya traídos.

use std::collections::BTreeMap;

use chrono::{NaiveDateTime, NaiveTime, Timelike};

use crate::dto::forecast_dto::{DailySummary, ForecastSample};

/// Cache de sesión del pronóstico procesado
///
/// Se limpia entero antes de iniciar un fetch nuevo y se reasigna entero
/// en un fetch exitoso; nunca se actualiza parcialmente.
#[derive(Debug, Clone)]
pub struct ForecastCache {
    pub city: String,
    pub days: Vec<DailySummary>,
}

struct DayEntry {
    time: NaiveTime,
    description: String,
    icon: String,
}

#[derive(Default)]
struct DayAccum {
    temps: Vec<f64>,
    entries: Vec<DayEntry>,
}

/// Agrupar las lecturas crudas por día y resumirlas
///
/// Devuelve `None` cuando no hay datos utilizables (lista vacía o todas
/// las lecturas malformadas): ausencia, no error. Las lecturas con
/// `dt_txt` no parseable o sin bloque `weather` se saltan en silencio.
pub fn summarize_forecast(samples: &[ForecastSample]) -> Option<Vec<DailySummary>> {
    if samples.is_empty() {
        log::warn!("Datos de forecast vacíos, nada que procesar");
        return None;
    }

    // BTreeMap ordena por fecha parseada; el orden de encuentro dentro
    // de cada día se preserva en los Vec
    let mut by_day: BTreeMap<chrono::NaiveDate, DayAccum> = BTreeMap::new();
    for sample in samples {
        let Ok(stamp) = NaiveDateTime::parse_from_str(&sample.dt_txt, "%Y-%m-%d %H:%M:%S") else {
            log::warn!("Lectura con dt_txt inválido, se salta: '{}'", sample.dt_txt);
            continue;
        };
        let Some(weather) = sample.weather.first() else {
            continue;
        };
        let accum = by_day.entry(stamp.date()).or_default();
        accum.temps.push(sample.main.temp);
        accum.entries.push(DayEntry {
            time: stamp.time(),
            description: weather.description.clone(),
            icon: weather.icon.clone(),
        });
    }

    if by_day.is_empty() {
        return None;
    }

    let mut summaries = Vec::with_capacity(by_day.len());
    for (date, accum) in by_day {
        let temp_min = accum.temps.iter().copied().fold(f64::INFINITY, f64::min);
        let temp_max = accum.temps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let representative = representative_entry(&accum.entries);
        summaries.push(DailySummary {
            date,
            temp_min: round_one_decimal(temp_min),
            temp_max: round_one_decimal(temp_max),
            description: capitalize_first(&representative.description),
            icon: representative.icon.clone(),
        });
    }
    Some(summaries)
}

/// Elegir la lectura representativa del día para descripción e ícono
///
/// Preferimos la de las 12:00:00 exactas; si no hay, la de hora más
/// cercana al mediodía. La reducción usa comparación estricta, con lo
/// cual en empate exacto gana la lectura anterior en el orden original.
fn representative_entry(entries: &[DayEntry]) -> &DayEntry {
    let noon = NaiveTime::from_hms_opt(12, 0, 0).expect("hora válida");
    if let Some(exact) = entries.iter().find(|e| e.time == noon) {
        return exact;
    }

    let mut best = &entries[0];
    for entry in &entries[1..] {
        let candidate = (entry.time.hour() as i64 - 12).abs();
        let current = (best.time.hour() as i64 - 12).abs();
        if candidate < current {
            best = entry;
        }
    }
    best
}

/// Filtrar el resumen cacheado a `requested` días
///
/// Pedidos no numéricos, no positivos o ausentes devuelven la secuencia
/// completa (fallback defensivo); pedidos mayores al largo disponible
/// hacen clamp al total. Devuelve también la cantidad efectiva de días,
/// para que la UI marque el control de filtro correcto.
pub fn filter_days(cached: &[DailySummary], requested: Option<&str>) -> (Vec<DailySummary>, usize) {
    let parsed = requested.and_then(|s| s.trim().parse::<i64>().ok()).unwrap_or(0);
    if parsed <= 0 || parsed as usize >= cached.len() {
        return (cached.to_vec(), cached.len());
    }
    let count = parsed as usize;
    (cached[..count].to_vec(), count)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Primera letra en mayúscula, seguro para UTF-8 (descripciones vienen en pt_BR)
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::forecast_dto::{SampleMain, SampleWeather};
    use chrono::NaiveDate;

    fn sample(dt_txt: &str, temp: f64, description: &str, icon: &str) -> ForecastSample {
        ForecastSample {
            dt_txt: dt_txt.to_string(),
            main: SampleMain { temp },
            weather: vec![SampleWeather {
                description: description.to_string(),
                icon: icon.to_string(),
            }],
        }
    }

    /// 8 lecturas por día (00:00 a 21:00 cada 3 horas), 5 días = 40 lecturas
    fn five_day_fixture() -> Vec<ForecastSample> {
        let mut samples = Vec::new();
        for day in 10..15 {
            for slot in 0..8 {
                let hour = slot * 3;
                samples.push(sample(
                    &format!("2026-07-{:02} {:02}:00:00", day, hour),
                    15.0 + slot as f64,
                    "céu limpo",
                    "01d",
                ));
            }
        }
        samples
    }

    #[test]
    fn test_cinco_dias_cuarenta_lecturas() {
        let summaries = summarize_forecast(&five_day_fixture()).unwrap();
        assert_eq!(summaries.len(), 5);
        for (i, summary) in summaries.iter().enumerate() {
            assert_eq!(summary.date, NaiveDate::from_ymd_opt(2026, 7, 10 + i as u32).unwrap());
            assert!(summary.temp_min <= summary.temp_max);
            assert_eq!(summary.temp_min, 15.0);
            assert_eq!(summary.temp_max, 22.0);
        }
    }

    #[test]
    fn test_entrada_vacia_es_ausencia() {
        assert!(summarize_forecast(&[]).is_none());
    }

    #[test]
    fn test_lecturas_malformadas_se_saltan() {
        let samples = vec![
            sample("no es una fecha", 10.0, "nublado", "04d"),
            sample("2026-07-10 09:00:00", 18.0, "nublado", "04d"),
        ];
        let summaries = summarize_forecast(&samples).unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].temp_min, 18.0);
        assert_eq!(summaries[0].temp_max, 18.0);
    }

    #[test]
    fn test_todo_malformado_es_ausencia() {
        let samples = vec![sample("xxx", 10.0, "nublado", "04d")];
        assert!(summarize_forecast(&samples).is_none());
    }

    #[test]
    fn test_representativa_mediodia_exacto() {
        let samples = vec![
            sample("2026-07-10 09:00:00", 18.0, "chuva leve", "10d"),
            sample("2026-07-10 12:00:00", 24.0, "céu limpo", "01d"),
            sample("2026-07-10 18:00:00", 20.0, "nublado", "04d"),
        ];
        let summaries = summarize_forecast(&samples).unwrap();
        assert_eq!(summaries[0].description, "Céu limpo");
        assert_eq!(summaries[0].icon, "01d");
    }

    #[test]
    fn test_representativa_mas_cercana_al_mediodia() {
        let samples = vec![
            sample("2026-07-10 08:00:00", 18.0, "chuva leve", "10d"),
            sample("2026-07-10 11:00:00", 22.0, "nublado", "04d"),
        ];
        let summaries = summarize_forecast(&samples).unwrap();
        assert_eq!(summaries[0].description, "Nublado");
        assert_eq!(summaries[0].icon, "04d");
    }

    #[test]
    fn test_representativa_empate_gana_la_primera() {
        // 10:00 y 14:00 empatan a distancia 2 del mediodía: la reducción
        // estricta conserva la primera en orden original
        let samples = vec![
            sample("2026-07-10 10:00:00", 18.0, "garoa", "09d"),
            sample("2026-07-10 14:00:00", 25.0, "céu limpo", "01d"),
        ];
        let summaries = summarize_forecast(&samples).unwrap();
        assert_eq!(summaries[0].description, "Garoa");
        assert_eq!(summaries[0].icon, "09d");
    }

    #[test]
    fn test_redondeo_a_un_decimal() {
        let samples = vec![
            sample("2026-07-10 09:00:00", 18.04, "nublado", "04d"),
            sample("2026-07-10 12:00:00", 24.96, "nublado", "04d"),
        ];
        let summaries = summarize_forecast(&samples).unwrap();
        assert_eq!(summaries[0].temp_min, 18.0);
        assert_eq!(summaries[0].temp_max, 25.0);
    }

    #[test]
    fn test_orden_cronologico_no_de_encuentro() {
        let samples = vec![
            sample("2026-07-12 12:00:00", 20.0, "nublado", "04d"),
            sample("2026-07-10 12:00:00", 18.0, "céu limpo", "01d"),
            sample("2026-07-11 12:00:00", 19.0, "garoa", "09d"),
        ];
        let summaries = summarize_forecast(&samples).unwrap();
        let dates: Vec<_> = summaries.iter().map(|s| s.date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2026, 7, 10).unwrap(),
                NaiveDate::from_ymd_opt(2026, 7, 11).unwrap(),
                NaiveDate::from_ymd_opt(2026, 7, 12).unwrap(),
            ]
        );
    }

    #[test]
    fn test_capitalizacion_utf8() {
        assert_eq!(capitalize_first("céu limpo"), "Céu limpo");
        assert_eq!(capitalize_first("água"), "Água");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_filtro_recorta_los_primeros_dias() {
        let cached = summarize_forecast(&five_day_fixture()).unwrap();
        let (days, effective) = filter_days(&cached, Some("3"));
        assert_eq!(effective, 3);
        assert_eq!(days.len(), 3);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2026, 7, 10).unwrap());
        assert_eq!(days[2].date, NaiveDate::from_ymd_opt(2026, 7, 12).unwrap());
    }

    #[test]
    fn test_filtro_clamp_y_fallback() {
        let cached = summarize_forecast(&five_day_fixture()).unwrap();

        // pide más de lo disponible: clamp al total
        let (days, effective) = filter_days(&cached, Some("10"));
        assert_eq!(days.len(), 5);
        assert_eq!(effective, 5);

        // no numérico: secuencia completa
        let (days, effective) = filter_days(&cached, Some("abc"));
        assert_eq!(days.len(), 5);
        assert_eq!(effective, 5);

        // sin parámetro: secuencia completa
        let (days, effective) = filter_days(&cached, None);
        assert_eq!(days.len(), 5);
        assert_eq!(effective, 5);

        // no positivo: secuencia completa
        let (days, effective) = filter_days(&cached, Some("-2"));
        assert_eq!(days.len(), 5);
        assert_eq!(effective, 5);
    }
}
