use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrajectoryError {
    #[error("no track found: the video has no detections")]
    NoTrackFound,
    #[error(
        "incomplete trajectory for identity {identity}: frames {frames:?} could not be interpolated"
    )]
    IncompleteTrajectory { identity: usize, frames: Vec<usize> },
    #[error("invalid track for identity {identity}: {reason}")]
    InvalidTrack { identity: usize, reason: String },
    #[error("invalid video info: {0}")]
    InvalidVideoInfo(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TrajectoryError>;
