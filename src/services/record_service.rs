//! Servicio de registros de tractores
//!
//! Operaciones de alto nivel sobre las tres tablas: alta de un tractor,
//! coste adicional, reportes y borrado. Cada operación toma su propia
//! conexión del pool y la libera al terminar, también en caso de error.

use sqlx::SqlitePool;
use tracing::{error, info, warn};

use crate::models::vehicle::{
    AdjustmentOutcome, NewVehicle, SalesReportRow, TotalCostReport, VehicleDetail,
};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct RecordService {
    repository: VehicleRepository,
}

impl RecordService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    /// Registrar un tractor nuevo. Falla con `DuplicateKey` si el número ya existe.
    pub async fn create_vehicle(&self, vehicle: NewVehicle) -> AppResult<()> {
        match self.repository.create(&vehicle).await {
            Ok(()) => {
                info!(
                    vehicle_number = %vehicle.vehicle_number,
                    showroom_cost = vehicle.showroom_cost,
                    "🚜 Tractor registrado"
                );
                Ok(())
            }
            Err(AppError::DuplicateKey(number)) => {
                warn!(vehicle_number = %number, "⚠️ Número de vehículo duplicado, alta rechazada");
                Err(AppError::DuplicateKey(number))
            }
            Err(e) => {
                error!(vehicle_number = %vehicle.vehicle_number, "❌ Error registrando tractor: {}", e);
                Err(e)
            }
        }
    }

    /// Fijar el coste adicional de un tractor (el último valor gana)
    pub async fn set_cost_adjustment(
        &self,
        vehicle_number: &str,
        updated_cost: f64,
    ) -> AppResult<AdjustmentOutcome> {
        let outcome = self
            .repository
            .upsert_cost_adjustment(vehicle_number, updated_cost)
            .await
            .inspect_err(|e| error!(vehicle_number, "❌ Error actualizando coste: {}", e))?;

        if outcome.applied {
            info!(vehicle_number, updated_cost, "💰 Coste adicional actualizado");
        } else {
            warn!(vehicle_number, "⚠️ Coste adicional para un vehículo inexistente, sin cambios");
        }
        Ok(outcome)
    }

    pub async fn get_total_costs(&self) -> AppResult<TotalCostReport> {
        let rows = self.repository.list_total_costs().await?;
        Ok(TotalCostReport::from_rows(rows))
    }

    pub async fn get_sales_report(&self) -> AppResult<Vec<SalesReportRow>> {
        self.repository.sales_report().await
    }

    pub async fn find_vehicle(&self, vehicle_number: &str) -> AppResult<Option<VehicleDetail>> {
        self.repository.find_by_number(vehicle_number).await
    }

    /// Borrar un tractor de las tres tablas. Borrar un número inexistente no es error.
    pub async fn delete_vehicle(&self, vehicle_number: &str) -> AppResult<u64> {
        let removed = self
            .repository
            .delete(vehicle_number)
            .await
            .inspect_err(|e| error!(vehicle_number, "❌ Error borrando tractor: {}", e))?;

        info!(vehicle_number, removed, "🗑️ Registro eliminado");
        Ok(removed)
    }
}
