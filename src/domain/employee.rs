// Employee domain model
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub department: String,
    pub position: String,
    pub salary: u32,
    pub age: u32,
    pub tenure: u32,
    pub location: String,
    pub gender: String,
    pub performance_rating: u8,
    pub engagement_score: u8,
}

/// Table columns in record order, as (field id, display label).
pub const EMPLOYEE_COLUMNS: [(&str, &str); 11] = [
    ("id", "Employee ID"),
    ("name", "Name"),
    ("department", "Department"),
    ("position", "Position"),
    ("salary", "Salary"),
    ("age", "Age"),
    ("tenure", "Tenure"),
    ("location", "Location"),
    ("gender", "Gender"),
    ("performance_rating", "Performance Rating"),
    ("engagement_score", "Engagement Score"),
];

/// The employee table loaded at startup.
///
/// There is no way to add, remove, or edit records once a dataset is built;
/// every filtered view is derived from a fresh pass over `employees()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    employees: Vec<Employee>,
}

impl Dataset {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

/// One row of the simplified deployment table (department, salary, age).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalarySample {
    pub department: String,
    pub salary: u32,
    pub age: u32,
}

impl SalarySample {
    pub fn new(department: &str, salary: u32, age: u32) -> Self {
        Self {
            department: department.to_string(),
            salary,
            age,
        }
    }
}
