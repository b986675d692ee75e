pub mod config;
pub mod detection;
pub mod error;
pub mod rect;
pub mod scorer;
pub mod selector;
pub mod subject_tracker;
pub mod track_history;
pub mod trajectory;
pub mod video;

#[cfg(test)]
mod test_scorer;

pub use config::TrajectoryConfig;
pub use detection::Detection;
pub use error::{Result, TrajectoryError};
pub use rect::Rect;
pub use scorer::{TrackScore, TrackScorer};
pub use selector::TrackSelector;
pub use subject_tracker::{Ranking, SubjectTracker, SubjectTrajectory};
pub use track_history::{Track, TrackHistory};
pub use trajectory::{Trajectory, TrajectoryReconstructor};
pub use video::VideoInfo;
