// Domain layer - Employee records, filters, and chart descriptions
pub mod chart;
pub mod dashboard;
pub mod employee;
pub mod filter;
pub mod headcount;
