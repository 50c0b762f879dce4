//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación,
//! fechas de vencimiento y paletas de colores.

pub mod dates;
pub mod errors;
pub mod theme;
pub mod validation;
