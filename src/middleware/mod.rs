//! Middleware del sistema
//!
//! Este módulo contiene el middleware de autenticación por sesión, CORS
//! y la extracción de la identidad anónima del visitante.

pub mod auth;
pub mod cors;
pub mod source_id;
