//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para convertir los campos de
//! formulario (siempre texto) a los tipos del dominio.

use validator::ValidationError;

use super::errors::{bad_request_error, AppResult};

/// Convertir un campo de coste a número.
/// No se valida el signo: solo que sea un número finito.
pub fn parse_cost(field: &str, value: &str) -> AppResult<f64> {
    match value.trim().parse::<f64>() {
        Ok(cost) if cost.is_finite() => Ok(cost),
        _ => Err(bad_request_error(&format!("{} must be a number, got '{}'", field, value))),
    }
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}
