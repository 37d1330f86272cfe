//! DTOs del flujo de reserva y del boletín

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

/// Request para crear una reserva (paso final del formulario multi-step)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(custom = "crate::utils::validation::validate_phone")]
    pub mobile: String,

    /// Flag textual del checkbox de términos: "true" o "false"
    #[validate(custom = "crate::utils::validation::validate_terms_flag")]
    pub terms: String,

    /// Fecha y hora de entrega elegidas en el paso 2
    pub date: DateTime<Utc>,

    pub slug: String,
}

/// Request para suscribirse al boletín
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

/// Pasos del formulario multi-step de reserva
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReserveStep {
    Welcome = 1,
    SelectDate = 2,
    SubmitDetails = 3,
}

impl ReserveStep {
    /// Resolver el parámetro ?step=N a un paso conocido
    pub fn from_number(step: i64) -> Option<Self> {
        match step {
            1 => Some(Self::Welcome),
            2 => Some(Self::SelectDate),
            3 => Some(Self::SubmitDetails),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserve_step_from_number() {
        assert_eq!(ReserveStep::from_number(1), Some(ReserveStep::Welcome));
        assert_eq!(ReserveStep::from_number(2), Some(ReserveStep::SelectDate));
        assert_eq!(ReserveStep::from_number(3), Some(ReserveStep::SubmitDetails));
        assert_eq!(ReserveStep::from_number(0), None);
        assert_eq!(ReserveStep::from_number(4), None);
    }

    #[test]
    fn test_create_customer_request_validation() {
        let request = CreateCustomerRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            mobile: "07123456789".to_string(),
            terms: "true".to_string(),
            date: chrono::Utc::now(),
            slug: "bmw-m3-2020".to_string(),
        };
        assert!(validator::Validate::validate(&request).is_ok());

        let invalid = CreateCustomerRequest {
            email: "not-an-email".to_string(),
            ..request
        };
        assert!(validator::Validate::validate(&invalid).is_err());
    }

    #[test]
    fn test_terms_flag_must_be_known_literal() {
        let request = CreateCustomerRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            mobile: "07123456789".to_string(),
            terms: "maybe".to_string(),
            date: chrono::Utc::now(),
            slug: "bmw-m3-2020".to_string(),
        };
        assert!(validator::Validate::validate(&request).is_err());
    }
}
