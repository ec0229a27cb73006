// Infrastructure layer - Configuration, data sources, and HTTP encoding
pub mod config;
pub mod http_response;
pub mod static_tables;
pub mod synthetic_repository;
