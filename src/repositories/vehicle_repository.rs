use crate::models::vehicle::{
    AdjustmentOutcome, NewVehicle, SalesReportRow, TotalCost, VehicleDetail,
};
use crate::utils::errors::{AppError, AppResult};
use sqlx::SqlitePool;

pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insertar tractor_details y su fila de total_cost en una sola transacción.
    /// La clave primaria detecta el duplicado; el drop de `tx` hace rollback.
    pub async fn create(&self, vehicle: &NewVehicle) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        // Sin lectura previa: la primera sentencia ya toma el lock de escritura
        // y las transacciones concurrentes esperan en busy_timeout.
        sqlx::query(
            r#"
            INSERT INTO tractor_details (date, vehicle_name, vehicle_number, showroom_cost)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&vehicle.date)
        .bind(&vehicle.vehicle_name)
        .bind(&vehicle.vehicle_number)
        .bind(vehicle.showroom_cost)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::from_insert(e, &vehicle.vehicle_number))?;

        sqlx::query(
            r#"
            INSERT INTO total_cost (vehicle_number, showroom_cost, updated_cost, total_cost)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&vehicle.vehicle_number)
        .bind(vehicle.showroom_cost)
        .bind(0.0_f64)
        .bind(vehicle.showroom_cost)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::from_insert(e, &vehicle.vehicle_number))?;

        tx.commit().await?;
        Ok(())
    }

    /// Upsert de updated_cost y recálculo de total_cost.
    /// Si el vehículo no existe no se escribe nada.
    pub async fn upsert_cost_adjustment(
        &self,
        vehicle_number: &str,
        updated_cost: f64,
    ) -> AppResult<AdjustmentOutcome> {
        let mut tx = self.pool.begin().await?;

        // Sin lectura previa: el upsert solo inserta si el vehículo existe
        let upserted = sqlx::query(
            r#"
            INSERT INTO updated_cost (vehicle_number, updated_cost)
            SELECT ?, ?
            WHERE EXISTS (SELECT 1 FROM tractor_details WHERE vehicle_number = ?)
            ON CONFLICT(vehicle_number) DO UPDATE SET updated_cost = excluded.updated_cost
            "#,
        )
        .bind(vehicle_number)
        .bind(updated_cost)
        .bind(vehicle_number)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if upserted == 0 {
            return Ok(AdjustmentOutcome { applied: false });
        }

        sqlx::query(
            r#"
            UPDATE total_cost
            SET updated_cost = ?, total_cost = showroom_cost + ?
            WHERE vehicle_number = ?
            "#,
        )
        .bind(updated_cost)
        .bind(updated_cost)
        .bind(vehicle_number)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(AdjustmentOutcome { applied: true })
    }

    pub async fn find_by_number(&self, vehicle_number: &str) -> AppResult<Option<VehicleDetail>> {
        let vehicle = sqlx::query_as::<_, VehicleDetail>(
            r#"
            SELECT date, vehicle_name, vehicle_number, showroom_cost
            FROM tractor_details
            WHERE vehicle_number = ?
            "#,
        )
        .bind(vehicle_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    #[cfg(test)]
    pub async fn find_cost_adjustment(
        &self,
        vehicle_number: &str,
    ) -> AppResult<Option<crate::models::vehicle::CostAdjustment>> {
        let adjustment = sqlx::query_as::<_, crate::models::vehicle::CostAdjustment>(
            "SELECT vehicle_number, updated_cost FROM updated_cost WHERE vehicle_number = ?",
        )
        .bind(vehicle_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(adjustment)
    }

    /// Filas de total_cost en orden de inserción.
    /// total_cost se recalcula en la lectura.
    pub async fn list_total_costs(&self) -> AppResult<Vec<TotalCost>> {
        let rows = sqlx::query_as::<_, TotalCost>(
            r#"
            SELECT vehicle_number, showroom_cost, updated_cost,
                   showroom_cost + updated_cost AS total_cost
            FROM total_cost
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Todos los tractor_details, con o sin fila en total_cost
    pub async fn sales_report(&self) -> AppResult<Vec<SalesReportRow>> {
        let rows = sqlx::query_as::<_, SalesReportRow>(
            r#"
            SELECT td.date, td.vehicle_name, td.vehicle_number, td.showroom_cost,
                   COALESCE(tc.updated_cost, 0.0) AS updated_cost,
                   COALESCE(tc.total_cost, td.showroom_cost) AS total_cost
            FROM tractor_details td
            LEFT JOIN total_cost tc ON td.vehicle_number = tc.vehicle_number
            ORDER BY td.rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Borrar el vehículo de las tres tablas. Devuelve las filas eliminadas.
    pub async fn delete(&self, vehicle_number: &str) -> AppResult<u64> {
        let mut tx = self.pool.begin().await?;
        let mut removed = 0;

        // Hijas primero: las claves foráneas están activas
        for statement in [
            "DELETE FROM updated_cost WHERE vehicle_number = ?",
            "DELETE FROM total_cost WHERE vehicle_number = ?",
            "DELETE FROM tractor_details WHERE vehicle_number = ?",
        ] {
            removed += sqlx::query(statement)
                .bind(vehicle_number)
                .execute(&mut *tx)
                .await?
                .rows_affected();
        }

        tx.commit().await?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::database::init_schema;

    async fn repository() -> VehicleRepository {
        let pool = DatabaseConfig::create_test_pool().await.unwrap();
        init_schema(&pool).await.unwrap();
        VehicleRepository::new(pool)
    }

    fn tractor(number: &str, cost: f64) -> NewVehicle {
        NewVehicle {
            date: "2024-01-01".to_string(),
            vehicle_name: "ModelX".to_string(),
            vehicle_number: number.to_string(),
            showroom_cost: cost,
        }
    }

    #[tokio::test]
    async fn test_create_writes_detail_and_total() {
        let repo = repository().await;
        repo.create(&tractor("V100", 500000.0)).await.unwrap();

        let detail = repo.find_by_number("V100").await.unwrap().unwrap();
        assert_eq!(detail.vehicle_name, "ModelX");

        let totals = repo.list_total_costs().await.unwrap();
        assert_eq!(
            totals,
            vec![TotalCost {
                vehicle_number: "V100".to_string(),
                showroom_cost: 500000.0,
                updated_cost: 0.0,
                total_cost: 500000.0,
            }]
        );
    }

    #[tokio::test]
    async fn test_duplicate_create_leaves_first_row_untouched() {
        let repo = repository().await;
        repo.create(&tractor("V100", 500000.0)).await.unwrap();

        let mut second = tractor("V100", 1.0);
        second.vehicle_name = "Other".to_string();
        let err = repo.create(&second).await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateKey(ref n) if n == "V100"));

        let detail = repo.find_by_number("V100").await.unwrap().unwrap();
        assert_eq!(detail.vehicle_name, "ModelX");
        assert_eq!(detail.showroom_cost, 500000.0);
        assert_eq!(repo.list_total_costs().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_adjustment_replaces_previous_value() {
        let repo = repository().await;
        repo.create(&tractor("V1", 1000.0)).await.unwrap();

        repo.upsert_cost_adjustment("V1", 200.0).await.unwrap();
        let outcome = repo.upsert_cost_adjustment("V1", 50.0).await.unwrap();
        assert!(outcome.applied);

        let adjustment = repo.find_cost_adjustment("V1").await.unwrap().unwrap();
        assert_eq!(adjustment.updated_cost, 50.0);

        let totals = repo.list_total_costs().await.unwrap();
        assert_eq!(totals[0].updated_cost, 50.0);
        assert_eq!(totals[0].total_cost, 1050.0);
    }

    #[tokio::test]
    async fn test_adjustment_for_unknown_vehicle_writes_nothing() {
        let repo = repository().await;

        let outcome = repo.upsert_cost_adjustment("GHOST", 10.0).await.unwrap();
        assert!(!outcome.applied);
        assert!(repo.find_cost_adjustment("GHOST").await.unwrap().is_none());
        assert!(repo.list_total_costs().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sales_report_defaults_missing_total_row() {
        let repo = repository().await;
        repo.create(&tractor("V1", 300.0)).await.unwrap();
        // Un detalle sin total_cost (datos previos a la app)
        sqlx::query("INSERT INTO tractor_details VALUES ('2023-05-05', 'Legacy', 'V0', 700.0)")
            .execute(&repo.pool)
            .await
            .unwrap();

        let report = repo.sales_report().await.unwrap();
        assert_eq!(report.len(), 2);

        let legacy = report.iter().find(|r| r.vehicle_number == "V0").unwrap();
        assert_eq!(legacy.updated_cost, 0.0);
        assert_eq!(legacy.total_cost, 700.0);
    }

    #[tokio::test]
    async fn test_delete_removes_all_rows_and_is_idempotent() {
        let repo = repository().await;
        repo.create(&tractor("V1", 300.0)).await.unwrap();
        repo.upsert_cost_adjustment("V1", 20.0).await.unwrap();

        assert_eq!(repo.delete("V1").await.unwrap(), 3);
        assert!(repo.find_by_number("V1").await.unwrap().is_none());
        assert!(repo.find_cost_adjustment("V1").await.unwrap().is_none());
        assert!(repo.list_total_costs().await.unwrap().is_empty());

        assert_eq!(repo.delete("V1").await.unwrap(), 0);
    }
}
