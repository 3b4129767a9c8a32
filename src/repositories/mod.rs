//! Repositorios de acceso a datos

pub mod catalog_repository;
pub mod vehicle_repository;
