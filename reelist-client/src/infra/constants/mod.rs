//! Constants module for centralized configuration values

pub mod messages;
pub mod routes;
