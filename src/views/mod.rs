//! Capa de presentación
//!
//! Render de páginas HTML y mensajes flash.

pub mod flash;
pub mod pages;

pub use flash::Flash;
