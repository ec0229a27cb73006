// Application layer - Use cases over the in-memory dataset
pub mod dashboard_service;
pub mod employee_repository;
pub mod headcount_service;
pub mod projections;
