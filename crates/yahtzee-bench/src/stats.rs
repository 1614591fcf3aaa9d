use serde::Serialize;
use statrs::statistics::{Data, Distribution, Max, Median, Min};

const CONFIDENCE_Z: f64 = 1.96; // 95% CI

/// Descriptive statistics over final game totals.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreStats {
    pub games: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub ci95: (f64, f64),
}

impl ScoreStats {
    pub fn from_totals(totals: &[u32]) -> Option<Self> {
        if totals.is_empty() {
            return None;
        }
        let values: Vec<f64> = totals.iter().map(|&total| f64::from(total)).collect();
        let games = values.len();
        let data = Data::new(values);

        let mean = data.mean().unwrap_or(0.0);
        let std_dev = data.std_dev().unwrap_or(0.0);
        let margin = CONFIDENCE_Z * std_dev / (games as f64).sqrt();

        Some(Self {
            games,
            mean,
            median: data.median(),
            std_dev,
            min: data.min(),
            max: data.max(),
            ci95: (mean - margin, mean + margin),
        })
    }
}
