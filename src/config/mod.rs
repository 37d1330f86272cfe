//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de base de datos, variables de entorno
//! y otras configuraciones del sistema.

pub mod database;
pub mod environment;
