// Chart projections - Each turns a filtered snapshot into one chart spec
use crate::domain::chart::{
    BarMode, BarSeries, BoxGroup, BoxSeries, BoxStats, ChartBody, ChartSpec, CountSeries,
    HistogramBin, ScatterPoint, ScatterSeries,
};
use crate::domain::employee::{Employee, SalarySample};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("histogram needs at least one bin")]
    NoBins,
}

/// Distinct values in order of first appearance.
pub(crate) fn distinct<'a, T: 'a>(
    items: &'a [T],
    key: impl Fn(&'a T) -> &'a str,
) -> Vec<String> {
    let mut seen = Vec::<&str>::new();
    for item in items {
        let value = key(item);
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen.into_iter().map(str::to_string).collect()
}

/// Salary histogram with one series per department over shared bin edges.
pub fn salary_distribution(
    records: &[Employee],
    bins: usize,
) -> Result<ChartSpec, ProjectionError> {
    if bins == 0 {
        return Err(ProjectionError::NoBins);
    }

    let mut edges = Vec::new();
    let mut series = Vec::new();

    let min = records.iter().map(|e| e.salary).min();
    let max = records.iter().map(|e| e.salary).max();
    if let (Some(min), Some(max)) = (min, max) {
        let min = min as f64;
        let span = (max as f64 - min).max(1.0);
        let width = span / bins as f64;

        edges = (0..bins)
            .map(|i| HistogramBin {
                start: min + width * i as f64,
                end: min + width * (i + 1) as f64,
            })
            .collect();

        for department in distinct(records, |e| e.department.as_str()) {
            let mut counts = vec![0u32; bins];
            for employee in records.iter().filter(|e| e.department == department) {
                let idx = ((employee.salary as f64 - min) / width).floor() as usize;
                counts[idx.min(bins - 1)] += 1;
            }
            series.push(CountSeries {
                name: department,
                counts,
            });
        }
    }

    Ok(ChartSpec::new(
        "salary-distribution",
        "Salary Distribution by Department",
        "Salary",
        "Count",
        ChartBody::Histogram {
            bins: edges,
            series,
        },
    ))
}

/// Age against tenure, one point per employee, sized by salary and grouped by position.
pub fn age_tenure_scatter(records: &[Employee]) -> ChartSpec {
    let series = distinct(records, |e| e.position.as_str())
        .into_iter()
        .map(|position| {
            let points = records
                .iter()
                .filter(|e| e.position == position)
                .map(|e| ScatterPoint {
                    x: e.age as f64,
                    y: e.tenure as f64,
                    size: e.salary as f64,
                    label: e.name.clone(),
                })
                .collect();
            ScatterSeries {
                name: position,
                points,
            }
        })
        .collect();

    ChartSpec::new(
        "age-tenure-scatter",
        "Age vs Tenure (Size by Salary)",
        "Age",
        "Tenure",
        ChartBody::Scatter { series },
    )
}

/// Average salary per (department, position). Pairs with no employees stay `None`.
pub fn department_position_heatmap(records: &[Employee]) -> ChartSpec {
    let departments = distinct(records, |e| e.department.as_str());
    let positions = distinct(records, |e| e.position.as_str());

    let mut totals: HashMap<(&str, &str), (u64, u32)> = HashMap::new();
    for employee in records {
        let entry = totals
            .entry((employee.department.as_str(), employee.position.as_str()))
            .or_default();
        entry.0 += employee.salary as u64;
        entry.1 += 1;
    }

    let cells = positions
        .iter()
        .map(|position| {
            departments
                .iter()
                .map(|department| match totals.get(&(department.as_str(), position.as_str())) {
                    Some(&(sum, count)) if count > 0 => Some(sum as f64 / count as f64),
                    _ => None,
                })
                .collect()
        })
        .collect();

    ChartSpec::new(
        "dept-position-heatmap",
        "Average Salary by Department and Position",
        "Department",
        "Position",
        ChartBody::Heatmap {
            x_categories: departments,
            y_categories: positions,
            cells,
        },
    )
}

/// Employee counts per performance rating, one grouped bar series per gender.
pub fn performance_by_gender(records: &[Employee]) -> ChartSpec {
    let mut counts: BTreeMap<(&str, u8), u32> = BTreeMap::new();
    for employee in records {
        *counts
            .entry((employee.gender.as_str(), employee.performance_rating))
            .or_default() += 1;
    }

    let mut ratings: Vec<u8> = counts.keys().map(|(_, rating)| *rating).collect();
    ratings.sort_unstable();
    ratings.dedup();

    let mut genders: Vec<&str> = counts.keys().map(|(gender, _)| *gender).collect();
    genders.dedup();

    let series = genders
        .into_iter()
        .map(|gender| BarSeries {
            name: gender.to_string(),
            values: ratings
                .iter()
                .map(|rating| counts.get(&(gender, *rating)).copied().unwrap_or(0) as f64)
                .collect(),
        })
        .collect();

    ChartSpec::new(
        "performance-gender-bar",
        "Performance Rating Distribution by Gender",
        "Performance Rating",
        "Count",
        ChartBody::Bar {
            mode: BarMode::Group,
            categories: ratings.iter().map(u8::to_string).collect(),
            series,
        },
    )
}

/// Engagement score spread per location, one box series per department.
pub fn engagement_by_location(records: &[Employee]) -> ChartSpec {
    let locations = distinct(records, |e| e.location.as_str());

    let series = distinct(records, |e| e.department.as_str())
        .into_iter()
        .map(|department| {
            let boxes = locations
                .iter()
                .filter_map(|location| {
                    let scores: Vec<f64> = records
                        .iter()
                        .filter(|e| e.department == department && &e.location == location)
                        .map(|e| e.engagement_score as f64)
                        .collect();
                    BoxStats::from_values(&scores).map(|stats| BoxGroup {
                        category: location.clone(),
                        stats,
                    })
                })
                .collect();
            BoxSeries {
                name: department,
                boxes,
            }
        })
        .collect();

    ChartSpec::new(
        "engagement-location-box",
        "Engagement Score by Location and Department",
        "Location",
        "Engagement Score",
        ChartBody::Box {
            categories: locations,
            series,
        },
    )
}

/// Single bar chart of the simplified deployment: each department's bar stacks
/// the salaries of its rows, so its height is their sum.
pub fn salary_by_department(samples: &[SalarySample]) -> ChartSpec {
    let departments = distinct(samples, |s| s.department.as_str());
    let values = departments
        .iter()
        .map(|department| {
            samples
                .iter()
                .filter(|s| &s.department == department)
                .map(|s| s.salary as f64)
                .sum::<f64>()
        })
        .collect();

    let series = if samples.is_empty() {
        Vec::new()
    } else {
        vec![BarSeries {
            name: "Salary".to_string(),
            values,
        }]
    };

    ChartSpec::new(
        "salary-chart",
        "Salary by Department",
        "Department",
        "Salary",
        ChartBody::Bar {
            mode: BarMode::Stack,
            categories: departments,
            series,
        },
    )
}
