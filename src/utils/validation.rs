//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos.

use uuid::Uuid;
use validator::ValidationError;

/// Validar y convertir string a UUID
pub fn validate_uuid(value: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(value).map_err(|_| {
        let mut error = ValidationError::new("uuid");
        error.add_param("value".into(), &value.to_string());
        error
    })
}

/// Validar formato de teléfono (básico)
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let clean_phone = value.chars().filter(|c| c.is_digit(10)).collect::<String>();
    if clean_phone.len() < 10 || clean_phone.len() > 15 {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar el flag de términos y condiciones ("true" o "false")
pub fn validate_terms_flag(value: &str) -> Result<(), ValidationError> {
    if value != "true" && value != "false" {
        let mut error = ValidationError::new("terms");
        error.add_param("value".into(), &value.to_string());
        error.add_param("allowed_values".into(), &"true, false".to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_uuid() {
        let valid_uuid = "550e8400-e29b-41d4-a716-446655440000";
        assert!(validate_uuid(valid_uuid).is_ok());

        let invalid_uuid = "invalid-uuid";
        assert!(validate_uuid(invalid_uuid).is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("07123456789").is_ok());
        assert!(validate_phone("+44 7123 456 789").is_ok());
        assert!(validate_phone("123").is_err());
        assert!(validate_phone("1234567890123456").is_err());
    }

    #[test]
    fn test_validate_terms_flag() {
        assert!(validate_terms_flag("true").is_ok());
        assert!(validate_terms_flag("false").is_ok());
        assert!(validate_terms_flag("yes").is_err());
        assert!(validate_terms_flag("").is_err());
    }
}
