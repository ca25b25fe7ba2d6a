//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación.
//! Los handlers HTTP solo hablan con estos servicios.

pub mod record_service;

pub use record_service::RecordService;
