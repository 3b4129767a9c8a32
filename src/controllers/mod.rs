//! Controllers (capa MVC entre rutas y repositorios)

pub mod catalog_controller;
pub mod vehicle_controller;
