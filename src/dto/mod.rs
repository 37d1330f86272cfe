//! DTOs de la API
//!
//! Requests y responses serializables de cada recurso.

pub mod auth_dto;
pub mod classified_dto;
pub mod common;
pub mod customer_dto;
pub mod favourite_dto;
pub mod taxonomy_dto;
