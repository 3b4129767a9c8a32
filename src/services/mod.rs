//! Servicios del sistema
//!
//! Lógica de negocio pura (alertas, resumen de pronóstico) y el cliente
//! del proveedor de clima.

pub mod alert_service;
pub mod forecast_service;
pub mod weather_service;
