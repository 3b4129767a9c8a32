pub mod alert_routes;
pub mod catalog_routes;
pub mod forecast_routes;
pub mod vehicle_routes;
