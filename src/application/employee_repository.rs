// Repository trait for employee data access
use crate::domain::employee::Employee;
use async_trait::async_trait;

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Load the full employee table. Called once at startup; the result is
    /// shared read-only for the rest of the process.
    async fn load_employees(&self) -> anyhow::Result<Vec<Employee>>;
}
