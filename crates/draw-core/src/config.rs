use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawConfig {
    pub num_stones: usize,
    pub total_ends: usize,
    pub min_per_end: f64,
    pub countdown_min: f64,
    pub elapsed_min: f64,
    pub zero_message: String,
    pub max_min: Option<f64>,
    pub max_message: String,
    pub progress_update_percentage: i64,
    pub elapsed_min_out_file: Option<PathBuf>,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            num_stones: 16,
            total_ends: 8,
            min_per_end: 15.0,
            countdown_min: 105.0,
            elapsed_min: 0.0,
            zero_message: "FINISH THIS END".to_string(),
            max_min: None,
            max_message: "TIME'S UP".to_string(),
            progress_update_percentage: 5,
            elapsed_min_out_file: None,
        }
    }
}

impl DrawConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_yaml(&raw).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.num_stones >= 2, "num_stones must be at least 2");
        anyhow::ensure!(
            self.num_stones % 2 == 0,
            "num_stones must be even (two teams)"
        );
        anyhow::ensure!(self.total_ends >= 1, "total_ends must be at least 1");
        anyhow::ensure!(self.min_per_end > 0.0, "min_per_end must be positive");
        anyhow::ensure!(self.countdown_min > 0.0, "countdown_min must be positive");
        anyhow::ensure!(
            self.progress_update_percentage >= 1,
            "progress_update_percentage must be at least 1"
        );
        Ok(())
    }

    pub fn duration_s(&self) -> i64 {
        (self.countdown_min * 60.0) as i64
    }

    pub fn s_per_end(&self) -> i64 {
        (self.min_per_end * 60.0) as i64
    }

    /// Fractional: an end does not have to divide evenly between stones.
    pub fn s_per_stone(&self) -> f64 {
        self.s_per_end() as f64 / self.num_stones as f64
    }

    pub fn elapsed_offset_s(&self) -> i64 {
        (self.elapsed_min * 60.0) as i64
    }

    pub fn max_s(&self) -> Option<i64> {
        self.max_min.map(|m| m as i64 * 60)
    }
}
