// Infrastructure layer - External dependencies and adapters
pub mod chronograf_repository;
pub mod config;
pub mod influx_repository;
pub mod logging;
