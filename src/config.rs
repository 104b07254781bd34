use std::ops::RangeInclusive;
use std::path::PathBuf;

/// File the dashboard opens at startup, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "Watchlist - SC - Yearly.csv";

// ---------------------------------------------------------------------------
// Dashboard configuration (compiled-in defaults, no env / CLI overrides)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    /// Bounds of the two-ended P/E slider.
    pub pe_bounds: RangeInclusive<f64>,
    /// Initial P/E selection.
    pub default_pe: (f64, f64),
    /// Bounds of the minimum RoE slider.
    pub roe_bounds: RangeInclusive<f64>,
    pub default_min_roe: f64,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            pe_bounds: 0.0..=100.0,
            default_pe: (0.0, 50.0),
            roe_bounds: 0.0..=100.0,
            default_min_roe: 10.0,
            window_size: [1280.0, 860.0],
            min_window_size: [720.0, 480.0],
        }
    }
}
