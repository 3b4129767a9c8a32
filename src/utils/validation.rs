//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! usadas por los DTOs de entrada.

use validator::ValidationError;

/// Validar el identificador de un vehículo
///
/// Los ids vienen del cliente (estilo documento, ej. "carro1"), así que
/// solo aceptamos caracteres seguros para rutas y claves primarias.
pub fn validate_vehicle_id(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        let mut error = ValidationError::new("vehicle_id");
        error.add_param("message".into(), &"el id no puede estar vacío");
        return Err(error);
    }
    let valid = trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        let mut error = ValidationError::new("vehicle_id");
        error.add_param("value".into(), &value.to_string());
        error.add_param("message".into(), &"solo se permiten alfanuméricos, '-' y '_'");
        return Err(error);
    }
    Ok(())
}

/// Validar una matrícula (formato laxo: alfanuméricos, espacios y guiones)
pub fn validate_license_plate(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.len() > 20 {
        let mut error = ValidationError::new("license_plate");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    let valid = trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == ' ');
    if !valid {
        let mut error = ValidationError::new("license_plate");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_id_valido() {
        assert!(validate_vehicle_id("carro1").is_ok());
        assert!(validate_vehicle_id("camion_2-b").is_ok());
    }

    #[test]
    fn test_vehicle_id_invalido() {
        assert!(validate_vehicle_id("").is_err());
        assert!(validate_vehicle_id("   ").is_err());
        assert!(validate_vehicle_id("a/b").is_err());
    }

    #[test]
    fn test_license_plate() {
        assert!(validate_license_plate("ABC-1234").is_ok());
        assert!(validate_license_plate("").is_err());
        assert!(validate_license_plate("PLACA#1").is_err());
    }
}
