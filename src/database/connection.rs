//! Conexión a SQLite
//!
//! Este módulo abre la base de datos basada en archivo y deja el esquema listo.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::info;

use crate::config::DatabaseConfig;
use super::schema::init_schema;

/// Pool de conexiones ya inicializado
pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    /// Abrir la base de datos (creando el archivo si falta) y crear el esquema
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        info!("🗄️  Abriendo base de datos {}", config.url);

        let pool = config
            .create_pool()
            .await
            .with_context(|| format!("no se pudo abrir {}", config.url))?;

        init_schema(&pool)
            .await
            .context("no se pudo crear el esquema")?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
