//! Main subject selection pipeline
//!
//! `SubjectTracker` takes the per-frame output of a multi-object tracker,
//! ranks every identity it saw and rebuilds a continuous box trajectory for
//! the best one (`get_one_track`) or the best `n_people` (`get_n_tracks`).

use crate::{
    config::TrajectoryConfig,
    detection::Detection,
    error::{Result, TrajectoryError},
    scorer::{TrackScore, TrackScorer},
    selector::TrackSelector,
    track_history::TrackHistory,
    trajectory::{Trajectory, TrajectoryReconstructor},
    video::VideoInfo,
};
use log::debug;

/// Trajectory of one selected identity.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectTrajectory {
    pub identity: usize,
    pub score: TrackScore,
    /// `(num_frames, 4)` xyxy boxes.
    pub boxes: Trajectory,
}

/// Aggregated tracks together with their scores, best first.
#[derive(Debug, Clone)]
pub struct Ranking {
    pub history: TrackHistory,
    pub scores: Vec<TrackScore>,
}

impl Ranking {
    pub fn sorted_ids(&self) -> Vec<usize> {
        self.scores.iter().map(|s| s.identity).collect()
    }
}

#[derive(Debug, Clone)]
pub struct SubjectTracker {
    config: TrajectoryConfig,
    scorer: TrackScorer,
    reconstructor: TrajectoryReconstructor,
}

impl SubjectTracker {
    /// Create a tracker from a validated config.
    ///
    /// # Example
    /// ```
    /// use trajtrack_rs::{SubjectTracker, TrajectoryConfig};
    /// let tracker = SubjectTracker::new(TrajectoryConfig::default()).unwrap();
    /// assert!(tracker.config().center_priority);
    /// ```
    pub fn new(config: TrajectoryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: TrajectoryConfig) -> Self {
        Self {
            config,
            scorer: TrackScorer::new(config.center_priority),
            reconstructor: TrajectoryReconstructor::new(
                config.window_size,
                config.smooth_passes,
            ),
        }
    }

    pub fn config(&self) -> &TrajectoryConfig {
        &self.config
    }

    /// Group detections by identity and rank the identities.
    pub fn rank(
        &self,
        frames: &[Vec<Detection>],
        video: &VideoInfo,
    ) -> Result<Ranking> {
        video.validate()?;
        if frames.len() > video.num_frames {
            return Err(TrajectoryError::InvalidVideoInfo(format!(
                "{} frames of detections for a video of {} frames",
                frames.len(),
                video.num_frames
            )));
        }

        let history = TrackHistory::from_frames(frames);
        let scores = self.scorer.rank(&history, video);
        debug!(
            "ranked {} identities over {} frames: {:?}",
            scores.len(),
            frames.len(),
            scores.iter().map(|s| s.identity).collect::<Vec<_>>()
        );
        Ok(Ranking { history, scores })
    }

    /// Trajectory of the highest ranked identity.
    pub fn get_one_track(
        &self,
        frames: &[Vec<Detection>],
        video: &VideoInfo,
    ) -> Result<SubjectTrajectory> {
        let ranking = self.rank(frames, video)?;
        let identity = TrackSelector::select_one(&ranking.sorted_ids())?;
        self.build(&ranking, identity, video)
    }

    /// Trajectories of the `n_people` highest ranked identities, best first.
    ///
    /// Fails on the first selected identity that cannot be reconstructed.
    /// The trajectories already built for higher ranked identities are
    /// dropped in that case; call [`SubjectTracker::rank`] and
    /// [`TrajectoryReconstructor::reconstruct`] per identity to keep them.
    pub fn get_n_tracks(
        &self,
        frames: &[Vec<Detection>],
        video: &VideoInfo,
    ) -> Result<Vec<SubjectTrajectory>> {
        let ranking = self.rank(frames, video)?;
        let selected = TrackSelector::select_top(
            &ranking.sorted_ids(),
            self.config.n_people,
        )?;
        debug!("selected identities {:?}", selected);

        selected
            .into_iter()
            .map(|identity| self.build(&ranking, identity, video))
            .collect()
    }

    fn build(
        &self,
        ranking: &Ranking,
        identity: usize,
        video: &VideoInfo,
    ) -> Result<SubjectTrajectory> {
        let (track, score) = ranking
            .history
            .get(identity)
            .zip(ranking.scores.iter().find(|s| s.identity == identity))
            .ok_or(TrajectoryError::NoTrackFound)?;
        let boxes = self.reconstructor.reconstruct(track, video.num_frames)?;
        Ok(SubjectTrajectory {
            identity,
            score: *score,
            boxes,
        })
    }
}

impl Default for SubjectTracker {
    fn default() -> Self {
        Self::from_config(TrajectoryConfig::default())
    }
}
