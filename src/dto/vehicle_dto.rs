use serde::Deserialize;
use validator::Validate;

use crate::models::vehicle::NewVehicle;
use crate::utils::errors::AppResult;
use crate::utils::validation::{parse_cost, validate_not_empty};

// Formulario de alta de tractor (POST /tractor_entry)
#[derive(Debug, Deserialize, Validate)]
pub struct TractorEntryForm {
    #[validate(custom = "validate_not_empty")]
    pub date: String,

    #[validate(custom = "validate_not_empty")]
    pub vehicle_name: String,

    #[validate(custom = "validate_not_empty", length(max = 64))]
    pub vehicle_number: String,

    pub showroom_cost: String,
}

impl TractorEntryForm {
    pub fn into_new_vehicle(self) -> AppResult<NewVehicle> {
        self.validate()?;
        let showroom_cost = parse_cost("showroom_cost", &self.showroom_cost)?;

        Ok(NewVehicle {
            date: self.date.trim().to_string(),
            vehicle_name: self.vehicle_name.trim().to_string(),
            vehicle_number: self.vehicle_number.trim().to_string(),
            showroom_cost,
        })
    }
}

// Formulario de coste adicional (POST /update_cost)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCostForm {
    #[validate(custom = "validate_not_empty")]
    pub vehicle_number: String,

    pub updated_cost: String,
}

impl UpdateCostForm {
    /// Devuelve (vehicle_number, updated_cost) ya validados
    pub fn parse(self) -> AppResult<(String, f64)> {
        self.validate()?;
        let updated_cost = parse_cost("updated_cost", &self.updated_cost)?;
        Ok((self.vehicle_number.trim().to_string(), updated_cost))
    }
}

// Formulario de borrado (POST /delete_sale)
#[derive(Debug, Deserialize)]
pub struct DeleteSaleForm {
    pub vehicle_number: String,
}

// Query string con el mensaje flash tras un redirect
#[derive(Debug, Default, Deserialize)]
pub struct FlashQuery {
    pub flash: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;

    fn entry(number: &str, cost: &str) -> TractorEntryForm {
        TractorEntryForm {
            date: "2024-01-01".to_string(),
            vehicle_name: " ModelX ".to_string(),
            vehicle_number: number.to_string(),
            showroom_cost: cost.to_string(),
        }
    }

    #[test]
    fn test_entry_form_converts_and_trims() {
        let vehicle = entry("V100", "500000").into_new_vehicle().unwrap();
        assert_eq!(vehicle.vehicle_name, "ModelX");
        assert_eq!(vehicle.vehicle_number, "V100");
        assert_eq!(vehicle.showroom_cost, 500000.0);
    }

    #[test]
    fn test_entry_form_rejects_blank_number() {
        let err = entry("  ", "10").into_new_vehicle().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_entry_form_rejects_malformed_cost() {
        let err = entry("V1", "ten").into_new_vehicle().unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_update_form_accepts_zero() {
        let form = UpdateCostForm {
            vehicle_number: "V1".to_string(),
            updated_cost: "0".to_string(),
        };
        assert_eq!(form.parse().unwrap(), ("V1".to_string(), 0.0));
    }
}
