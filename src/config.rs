use crate::error::{Result, TrajectoryError};
use serde::{Deserialize, Serialize};

/// Knobs of the selection and reconstruction pipeline.
///
/// Deserializes from JSON with every field optional, e.g.
/// `{"n_people": 2, "center_priority": false}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrajectoryConfig {
    /// Weight box area together with distance to the image center when
    /// ranking tracks. When false, tracks are ranked by summed area only.
    pub center_priority: bool,
    /// Number of subjects reconstructed by `get_n_tracks`.
    pub n_people: usize,
    /// Moving-average window, in frames.
    pub window_size: usize,
    /// How many times the moving average is applied.
    pub smooth_passes: usize,
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            center_priority: true,
            n_people: 1,
            window_size: 5,
            smooth_passes: 2,
        }
    }
}

impl TrajectoryConfig {
    pub fn with_center_priority(mut self, center_priority: bool) -> Self {
        self.center_priority = center_priority;
        self
    }

    pub fn with_n_people(mut self, n_people: usize) -> Self {
        self.n_people = n_people;
        self
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_smooth_passes(mut self, smooth_passes: usize) -> Self {
        self.smooth_passes = smooth_passes;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.n_people == 0 {
            return Err(TrajectoryError::InvalidConfig(
                "n_people must be at least 1".to_string(),
            ));
        }
        if self.window_size == 0 {
            return Err(TrajectoryError::InvalidConfig(
                "window_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
