//! Módulo de base de datos
//!
//! Maneja la conexión a PostgreSQL, el bootstrap del schema y la
//! siembra inicial del catálogo.

pub mod connection;
pub mod seed;
