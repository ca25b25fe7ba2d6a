//! Payloads de formularios y query strings
pub mod vehicle_dto;
