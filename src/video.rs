use crate::error::{Result, TrajectoryError};
use serde::{Deserialize, Serialize};

/// Frame count and frame size reported by the video metadata reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub num_frames: usize,
    pub width: u32,
    pub height: u32,
}

impl VideoInfo {
    pub fn new(num_frames: usize, width: u32, height: u32) -> Result<Self> {
        let info = Self {
            num_frames,
            width,
            height,
        };
        info.validate()?;
        Ok(info)
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_frames == 0 {
            return Err(TrajectoryError::InvalidVideoInfo(
                "num_frames must be positive".to_string(),
            ));
        }
        if self.width == 0 || self.height == 0 {
            return Err(TrajectoryError::InvalidVideoInfo(format!(
                "frame size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn image_area(&self) -> f32 {
        self.width as f32 * self.height as f32
    }

    #[inline]
    pub fn image_center(&self) -> (f32, f32) {
        (self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    #[inline]
    pub fn diagonal(&self) -> f32 {
        (self.width as f32).hypot(self.height as f32)
    }
}
