//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

/// Duración por defecto de una sesión de administrador (7 días)
const DEFAULT_SESSION_MAX_AGE_SECS: i64 = 7 * 24 * 60 * 60;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    /// Vigencia de las sesiones de administrador en segundos
    pub session_max_age: i64,
    /// Fuente CSV para la sincronización de taxonomía
    pub taxonomy_csv_path: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            session_max_age: env::var("SESSION_MAX_AGE")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(DEFAULT_SESSION_MAX_AGE_SECS),
            taxonomy_csv_path: env::var("TAXONOMY_CSV_PATH")
                .unwrap_or_else(|_| "taxonomy.csv".to_string()),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
