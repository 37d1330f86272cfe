//! DTOs compartidos entre endpoints

use serde::{Deserialize, Serialize};

/// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

/// Resultado plano de un formulario
///
/// Los formularios públicos (reserva, boletín) siempre responden 200
/// con este shape, reservando los códigos de error para fallos de sistema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormResult {
    pub success: bool,
    pub message: String,
}

impl FormResult {
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    pub fn fail(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}
