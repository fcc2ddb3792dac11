use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Compile-time defaults
// ---------------------------------------------------------------------------

/// Dataset loaded at startup, relative to the working directory.
pub const DEFAULT_DATASET: &str = "spacex_launch_dash.csv";

/// Domain and tick layout of the payload range control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub mark_every: f64,
}

impl Default for SliderSpec {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10_000.0,
            step: 1_000.0,
            mark_every: 2_500.0,
        }
    }
}

impl SliderSpec {
    /// Tick values from `min` to `max` inclusive.
    pub fn marks(&self) -> Vec<f64> {
        if self.mark_every <= 0.0 {
            return vec![self.min, self.max];
        }
        let n = ((self.max - self.min) / self.mark_every).floor() as usize;
        (0..=n)
            .map(|i| self.min + i as f64 * self.mark_every)
            .collect()
    }
}

/// Everything the dashboard needs to start.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub dataset_path: PathBuf,
    pub window_title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    pub payload_slider: SliderSpec,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET),
            window_title: "SpaceX Launch Records Dashboard".to_string(),
            window_size: [1200.0, 900.0],
            min_window_size: [640.0, 480.0],
            payload_slider: SliderSpec::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_marks() {
        assert_eq!(
            SliderSpec::default().marks(),
            vec![0.0, 2500.0, 5000.0, 7500.0, 10000.0]
        );
    }

    #[test]
    fn test_default_dataset_path() {
        let config = DashboardConfig::default();
        assert_eq!(config.dataset_path, PathBuf::from("spacex_launch_dash.csv"));
        assert_eq!(config.payload_slider.step, 1000.0);
    }
}
