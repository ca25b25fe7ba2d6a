//! Mensajes flash
//!
//! Sin sesión en servidor: el mensaje viaja como `?flash=<código>` en el
//! redirect y la página lo pinta como banner.

/// Mensajes que los handlers pueden dejar tras un POST
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    VehicleAdded,
    DuplicateVehicle,
    CostUpdated,
    RecordDeleted,
    InvalidInput,
}

impl Flash {
    pub fn code(self) -> &'static str {
        match self {
            Flash::VehicleAdded => "vehicle_added",
            Flash::DuplicateVehicle => "duplicate_vehicle",
            Flash::CostUpdated => "cost_updated",
            Flash::RecordDeleted => "record_deleted",
            Flash::InvalidInput => "invalid_input",
        }
    }

    /// Códigos desconocidos se ignoran
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "vehicle_added" => Some(Flash::VehicleAdded),
            "duplicate_vehicle" => Some(Flash::DuplicateVehicle),
            "cost_updated" => Some(Flash::CostUpdated),
            "record_deleted" => Some(Flash::RecordDeleted),
            "invalid_input" => Some(Flash::InvalidInput),
            _ => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Flash::VehicleAdded => "Tractor details added successfully!",
            Flash::DuplicateVehicle => "Error: Vehicle number already exists!",
            Flash::CostUpdated => "Updated cost added successfully!",
            Flash::RecordDeleted => "Record deleted successfully!",
            Flash::InvalidInput => "Error: Please fill in every field with a valid value.",
        }
    }

    pub fn category(self) -> &'static str {
        match self {
            Flash::DuplicateVehicle | Flash::InvalidInput => "error",
            _ => "success",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_query() {
        for flash in [Flash::VehicleAdded, Flash::DuplicateVehicle, Flash::RecordDeleted] {
            assert_eq!(Flash::from_code(flash.code()), Some(flash));
        }
        assert_eq!(Flash::from_code("<script>"), None);
    }

    #[test]
    fn test_error_flashes_use_error_category() {
        assert_eq!(Flash::DuplicateVehicle.category(), "error");
        assert_eq!(Flash::CostUpdated.category(), "success");
    }
}
