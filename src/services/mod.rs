//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación:
//! sincronización de taxonomía, favoritos de visitantes y autenticación.

pub mod auth_service;
pub mod favourites_service;
pub mod taxonomy_sync_service;
