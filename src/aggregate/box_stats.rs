use serde::Serialize;

/// Five-number summary of one monthly bucket, as drawn by a box trace.
///
/// Missing readings are excluded from every statistic and only counted in
/// `missing`. Quartiles use linear interpolation between order statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxStats {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
    /// Number of readings the statistics were computed from.
    pub count: usize,
    pub missing: usize,
}

impl BoxStats {
    /// Summarises `values`, or returns `None` if no value is present.
    pub fn from_values(values: &[Option<f64>]) -> Option<Self> {
        let mut present: Vec<f64> = values
            .iter()
            .flatten()
            .copied()
            .filter(|v| !v.is_nan())
            .collect();
        if present.is_empty() {
            return None;
        }
        present.sort_by(f64::total_cmp);

        let count = present.len();
        let mean = present.iter().sum::<f64>() / count as f64;
        Some(Self {
            min: present[0],
            q1: quantile(&present, 0.25),
            median: quantile(&present, 0.5),
            q3: quantile(&present, 0.75),
            max: present[count - 1],
            mean,
            count,
            missing: values.len() - count,
        })
    }

    /// `q3 - q1`.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

// `sorted` must be non-empty and ascending.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}
