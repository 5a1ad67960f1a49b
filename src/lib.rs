pub mod config;
pub mod error;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod smoke;
pub mod state;
pub mod store;
pub mod telemetry;
