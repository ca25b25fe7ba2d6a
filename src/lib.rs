//! Registro de compras de tractores
//!
//! Alta de tractores, costes adicionales posteriores a la compra y reportes
//! de coste total sobre una base SQLite.

pub mod config;
pub mod database;
pub mod dto;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

pub use routes::create_app_router;
pub use state::AppState;
