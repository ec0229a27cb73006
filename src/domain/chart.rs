// Renderer-agnostic chart descriptions
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub id: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    #[serde(flatten)]
    pub body: ChartBody,
}

impl ChartSpec {
    pub fn new(id: &str, title: &str, x_label: &str, y_label: &str, body: ChartBody) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            body,
        }
    }

    /// True when the chart has nothing to draw.
    pub fn is_empty(&self) -> bool {
        match &self.body {
            ChartBody::Histogram { series, .. } => series.is_empty(),
            ChartBody::Scatter { series } => series.is_empty(),
            ChartBody::Heatmap { cells, .. } => cells.iter().flatten().all(Option::is_none),
            ChartBody::Bar { series, .. } => series.is_empty(),
            ChartBody::Box { series, .. } => series.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartBody {
    /// Bin edges are shared by every series; `counts[i]` belongs to `bins[i]`.
    Histogram {
        bins: Vec<HistogramBin>,
        series: Vec<CountSeries>,
    },
    Scatter {
        series: Vec<ScatterSeries>,
    },
    /// `cells[y][x]`; `None` marks a category pair without records.
    Heatmap {
        x_categories: Vec<String>,
        y_categories: Vec<String>,
        cells: Vec<Vec<Option<f64>>>,
    },
    /// `values[i]` belongs to `categories[i]`.
    Bar {
        mode: BarMode,
        categories: Vec<String>,
        series: Vec<BarSeries>,
    },
    Box {
        categories: Vec<String>,
        series: Vec<BoxSeries>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarMode {
    Group,
    Stack,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountSeries {
    pub name: String,
    pub counts: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub name: String,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxSeries {
    pub name: String,
    pub boxes: Vec<BoxGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxGroup {
    pub category: String,
    #[serde(flatten)]
    pub stats: BoxStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxStats {
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
}

impl BoxStats {
    /// Five-number summary with linearly interpolated quartiles.
    /// Returns `None` for an empty sample.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;

        Some(Self {
            count,
            min: sorted[0],
            q1: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q3: quantile(&sorted, 0.75),
            max: sorted[count - 1],
            mean,
        })
    }
}

fn quantile(sorted: &[f64], p: f64) -> f64 {
    let rank = p * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}
