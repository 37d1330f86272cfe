//! Identidad anónima del visitante
//!
//! El frontend genera un UUID por visitante y lo manda en cada request
//! como header X-Source-Id. Ese id es la clave del set de favoritos.

use axum::http::HeaderMap;
use uuid::Uuid;

use crate::utils::validation::validate_uuid;

pub const SOURCE_ID_HEADER: &str = "x-source-id";

/// Extrae el source id del visitante; None si falta o no es un UUID
pub fn source_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get(SOURCE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| validate_uuid(raw).ok())
}
