//! Configuración de variables de entorno
//!
//! Este módulo construye la configuración de la aplicación una sola vez al
//! arrancar el proceso. El resultado es inmutable y viaja dentro de `AppState`.

use std::env;
use thiserror::Error;

/// Errores al leer la configuración del entorno
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a valid number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    /// Subruta bajo la que se publica la app (p.ej. un Space de Hugging Face)
    pub app_subpath: String,
    pub static_dir: String,
    pub log_level: tracing::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 7860,
            database_url: "sqlite://tractor.db".to_string(),
            db_max_connections: 5,
            app_subpath: String::new(),
            static_dir: "static".to_string(),
            log_level: tracing::Level::INFO,
        }
    }
}

impl AppConfig {
    /// Leer la configuración desde variables de entorno
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Construir la configuración a partir de una función de búsqueda.
    /// Las variables ausentes toman el valor por defecto.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => parse_number("PORT", &value)?,
            None => defaults.port,
        };
        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(value) => parse_number("DB_MAX_CONNECTIONS", &value)?,
            None => defaults.db_max_connections,
        };
        // Un nivel de log desconocido no debe impedir el arranque
        let log_level = lookup("LOG_LEVEL")
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(defaults.log_level);

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            db_max_connections,
            app_subpath: lookup("SPACE_ID")
                .map(|s| s.trim().trim_matches('/').to_string())
                .unwrap_or(defaults.app_subpath),
            static_dir: lookup("STATIC_DIR").unwrap_or(defaults.static_dir),
            log_level,
        })
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Prefijar la subruta configurada a una ruta de la app
    pub fn url_for(&self, path: &str) -> String {
        if self.app_subpath.is_empty() {
            path.to_string()
        } else {
            format!("/{}{}", self.app_subpath, path)
        }
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        name,
        value: value.to_string(),
    })
}
