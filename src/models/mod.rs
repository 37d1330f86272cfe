//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod classified;
pub mod customer;
pub mod taxonomy;
pub mod user;
