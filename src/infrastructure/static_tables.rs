// Fixed sample tables for the minimal endpoint and the simplified deployment
use crate::domain::employee::SalarySample;
use crate::domain::headcount::HeadcountSummary;

const HEADCOUNTS: [(&str, u32); 5] = [
    ("HR", 20),
    ("Finance", 15),
    ("Engineering", 30),
    ("Marketing", 10),
    ("Sales", 25),
];

const SIMPLE_DEPARTMENTS: [&str; 5] = ["HR", "Finance", "Engineering", "Marketing", "Sales"];
const SIMPLE_SALARIES: [u32; 5] = [50_000, 60_000, 70_000, 55_000, 65_000];
const SIMPLE_AGES: [u32; 5] = [30, 35, 28, 40, 32];
const SIMPLE_REPEATS: usize = 5;

pub fn department_headcounts() -> HeadcountSummary {
    HeadcountSummary::from_pairs(HEADCOUNTS)
}

/// The five department rows repeated five times (25 rows).
pub fn simplified_salary_table() -> Vec<SalarySample> {
    (0..SIMPLE_REPEATS)
        .flat_map(|_| {
            SIMPLE_DEPARTMENTS
                .into_iter()
                .zip(SIMPLE_SALARIES)
                .zip(SIMPLE_AGES)
                .map(|((department, salary), age)| SalarySample::new(department, salary, age))
        })
        .collect()
}
