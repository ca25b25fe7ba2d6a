//! Esquema de la base de datos
//!
//! Las tres tablas del registro de tractores. Se crean al arrancar si no
//! existen; ejecutar `init_schema` varias veces no tiene efecto.

use sqlx::SqlitePool;

const CREATE_TRACTOR_DETAILS: &str = r#"
    CREATE TABLE IF NOT EXISTS tractor_details (
        date TEXT NOT NULL,
        vehicle_name TEXT NOT NULL,
        vehicle_number TEXT PRIMARY KEY,
        showroom_cost REAL NOT NULL
    )
"#;

const CREATE_UPDATED_COST: &str = r#"
    CREATE TABLE IF NOT EXISTS updated_cost (
        vehicle_number TEXT PRIMARY KEY,
        updated_cost REAL NOT NULL,
        FOREIGN KEY(vehicle_number) REFERENCES tractor_details(vehicle_number)
    )
"#;

const CREATE_TOTAL_COST: &str = r#"
    CREATE TABLE IF NOT EXISTS total_cost (
        vehicle_number TEXT PRIMARY KEY,
        showroom_cost REAL NOT NULL,
        updated_cost REAL NOT NULL DEFAULT 0,
        total_cost REAL NOT NULL DEFAULT 0,
        FOREIGN KEY(vehicle_number) REFERENCES tractor_details(vehicle_number)
    )
"#;

/// Crear las tablas si no existen
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for statement in [CREATE_TRACTOR_DETAILS, CREATE_UPDATED_COST, CREATE_TOTAL_COST] {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    tracing::debug!("Esquema verificado: tractor_details, updated_cost, total_cost");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;

    async fn table_names(pool: &SqlitePool) -> Vec<String> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
        )
        .fetch_all(pool)
        .await
        .unwrap();
        rows.into_iter().map(|(name,)| name).collect()
    }

    #[tokio::test]
    async fn test_init_schema_creates_tables() {
        let pool = DatabaseConfig::create_test_pool().await.unwrap();
        init_schema(&pool).await.unwrap();

        assert_eq!(
            table_names(&pool).await,
            vec!["total_cost", "tractor_details", "updated_cost"]
        );
    }

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let pool = DatabaseConfig::create_test_pool().await.unwrap();
        init_schema(&pool).await.unwrap();

        sqlx::query("INSERT INTO tractor_details VALUES ('2024-01-01', 'ModelX', 'V1', 10.0)")
            .execute(&pool)
            .await
            .unwrap();

        init_schema(&pool).await.unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tractor_details")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_total_cost_requires_existing_vehicle() {
        let pool = DatabaseConfig::create_test_pool().await.unwrap();
        init_schema(&pool).await.unwrap();

        let result = sqlx::query(
            "INSERT INTO total_cost (vehicle_number, showroom_cost) VALUES ('GHOST', 1.0)",
        )
        .execute(&pool)
        .await;
        assert!(result.is_err());
    }
}
