// Synthetic employee repository - Uniformly random sample data
use crate::application::employee_repository::EmployeeRepository;
use crate::domain::employee::Employee;
use anyhow::Result;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub const DEPARTMENTS: [&str; 5] = ["HR", "Finance", "Engineering", "Marketing", "Sales"];
pub const POSITIONS: [&str; 5] = ["Manager", "Associate", "Director", "VP", "Intern"];
pub const LOCATIONS: [&str; 5] = ["New York", "London", "Tokyo", "San Francisco", "Berlin"];
pub const GENDERS: [&str; 2] = ["Male", "Female"];

#[derive(Debug, Clone)]
pub struct SyntheticEmployeeRepository {
    size: usize,
    seed: Option<u64>,
}

impl SyntheticEmployeeRepository {
    pub fn new(size: usize, seed: Option<u64>) -> Self {
        Self { size, seed }
    }

    /// Employees `1..=size`, every field drawn uniformly:
    /// salary in [40000, 150000), age in [22, 65), tenure in [1, 15),
    /// rating in [1, 6), engagement in [1, 101).
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Vec<Employee> {
        (1..=size as u32)
            .map(|id| Employee {
                id,
                name: format!("Employee {}", id),
                department: pick(rng, &DEPARTMENTS),
                position: pick(rng, &POSITIONS),
                salary: rng.gen_range(40_000..150_000),
                age: rng.gen_range(22..65),
                tenure: rng.gen_range(1..15),
                location: pick(rng, &LOCATIONS),
                gender: pick(rng, &GENDERS),
                performance_rating: rng.gen_range(1..6),
                engagement_score: rng.gen_range(1..101),
            })
            .collect()
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, choices: &[&str]) -> String {
    choices.choose(rng).copied().unwrap_or_default().to_string()
}

#[async_trait]
impl EmployeeRepository for SyntheticEmployeeRepository {
    async fn load_employees(&self) -> Result<Vec<Employee>> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let employees = Self::generate(&mut rng, self.size);
        tracing::debug!(
            count = employees.len(),
            seed = ?self.seed,
            "Generated synthetic employees"
        );
        Ok(employees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_generates_requested_size_with_unique_ids() {
        let employees = SyntheticEmployeeRepository::new(100, Some(7))
            .load_employees()
            .await
            .unwrap();

        assert_eq!(employees.len(), 100);
        let ids: HashSet<u32> = employees.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 100);
        assert_eq!(employees[0].id, 1);
        assert_eq!(employees[0].name, "Employee 1");
        assert_eq!(employees[99].name, "Employee 100");
    }

    #[tokio::test]
    async fn test_fields_stay_within_ranges() {
        let employees = SyntheticEmployeeRepository::new(500, Some(11))
            .load_employees()
            .await
            .unwrap();

        for e in &employees {
            assert!(DEPARTMENTS.contains(&e.department.as_str()));
            assert!(POSITIONS.contains(&e.position.as_str()));
            assert!(LOCATIONS.contains(&e.location.as_str()));
            assert!(GENDERS.contains(&e.gender.as_str()));
            assert!((40_000..150_000).contains(&e.salary));
            assert!((22..65).contains(&e.age));
            assert!((1..15).contains(&e.tenure));
            assert!((1..=5).contains(&e.performance_rating));
            assert!((1..=100).contains(&e.engagement_score));
        }
    }

    #[tokio::test]
    async fn test_same_seed_same_dataset() {
        let first = SyntheticEmployeeRepository::new(50, Some(3))
            .load_employees()
            .await
            .unwrap();
        let second = SyntheticEmployeeRepository::new(50, Some(3))
            .load_employees()
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_zero_size_is_empty() {
        let employees = SyntheticEmployeeRepository::new(0, None)
            .load_employees()
            .await
            .unwrap();
        assert!(employees.is_empty());
    }
}
