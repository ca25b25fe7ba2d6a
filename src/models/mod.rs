//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean el schema SQLite.

pub mod vehicle;
