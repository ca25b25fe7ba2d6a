//! Modelo de Vehicle
//!
//! Este módulo contiene los structs que mapean las tablas `tractor_details`,
//! `updated_cost` y `total_cost`, más las dos vistas de reporte.
//! Todas comparten la clave natural `vehicle_number`.

use serde::Serialize;
use sqlx::FromRow;

/// Datos de compra de un tractor - tabla tractor_details.
/// Se crea una vez y no se modifica después.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct VehicleDetail {
    pub date: String,
    pub vehicle_name: String,
    pub vehicle_number: String,
    pub showroom_cost: f64,
}

/// Coste adicional posterior a la compra - tabla updated_cost.
/// Como máximo una fila por vehículo; el último valor gana.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct CostAdjustment {
    pub vehicle_number: String,
    pub updated_cost: f64,
}

/// Agregado redundante - tabla total_cost
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct TotalCost {
    pub vehicle_number: String,
    pub showroom_cost: f64,
    pub updated_cost: f64,
    pub total_cost: f64,
}

/// Fila del reporte de ventas (tractor_details LEFT JOIN total_cost)
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct SalesReportRow {
    pub date: String,
    pub vehicle_name: String,
    pub vehicle_number: String,
    pub showroom_cost: f64,
    pub updated_cost: f64,
    pub total_cost: f64,
}

/// Todas las filas de total_cost más la suma global
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalCostReport {
    pub rows: Vec<TotalCost>,
    pub grand_total: f64,
}

impl TotalCostReport {
    pub fn from_rows(rows: Vec<TotalCost>) -> Self {
        let grand_total = rows.iter().map(|row| row.total_cost).sum();
        Self { rows, grand_total }
    }
}

/// Datos de entrada para registrar un tractor
#[derive(Debug, Clone, PartialEq)]
pub struct NewVehicle {
    pub date: String,
    pub vehicle_name: String,
    pub vehicle_number: String,
    pub showroom_cost: f64,
}

/// Resultado de registrar un coste adicional.
/// `applied` es false cuando el vehículo no existe y no se escribió nada.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjustmentOutcome {
    pub applied: bool,
}
