//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean
//! a las tablas PostgreSQL del schema de la garaje.

pub mod catalog;
pub mod vehicle;
