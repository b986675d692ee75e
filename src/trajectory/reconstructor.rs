use super::{
    interpolate::interpolate_missing,
    mask::{frame_ids_to_mask, missing_runs, scatter_by_frame},
    smooth::cascaded_smooth,
};
use crate::{
    error::{Result, TrajectoryError},
    track_history::Track,
};
use log::debug;
use ndarray::Array2;

/// Dense `(num_frames, 4)` xyxy boxes, one row per frame.
pub type Trajectory = Array2<f32>;

/*-----------------------------------------------------------------------------
TrajectoryReconstructor
-----------------------------------------------------------------------------*/

/// Turns one sparse track into a gap-free, smoothed per-frame trajectory.
#[derive(Debug, Clone, Copy)]
pub struct TrajectoryReconstructor {
    window_size: usize,
    smooth_passes: usize,
}

impl TrajectoryReconstructor {
    pub fn new(window_size: usize, smooth_passes: usize) -> Self {
        Self {
            window_size,
            smooth_passes,
        }
    }

    pub fn reconstruct(
        &self,
        track: &Track,
        num_frames: usize,
    ) -> Result<Trajectory> {
        let filled = Self::fill_gaps(track, num_frames)?;
        Ok(cascaded_smooth(&filled, self.window_size, self.smooth_passes))
    }

    /// Scatter the track over `num_frames` and interpolate every interior
    /// gap. Gaps touching either end of the video cannot be bridged and
    /// fail with [`TrajectoryError::IncompleteTrajectory`].
    pub fn fill_gaps(track: &Track, num_frames: usize) -> Result<Trajectory> {
        Self::check_track(track, num_frames)?;

        let mask = frame_ids_to_mask(&track.frame_ids, num_frames);
        let mut boxes =
            scatter_by_frame(&track.frame_ids, &track.rects, num_frames);
        let gaps = missing_runs(&mask);
        debug!(
            "identity {}: {} of {} frames present, {} gaps",
            track.identity,
            track.len(),
            num_frames,
            gaps.len()
        );

        let mut holes = vec![false; num_frames];
        for gap in interpolate_missing(&mut boxes, &gaps) {
            holes[gap].iter_mut().for_each(|h| *h = true);
        }
        // a detected all-zero box is indistinguishable from a hole
        for (i, row) in boxes.outer_iter().enumerate() {
            if row.iter().all(|&v| v == 0.0) {
                holes[i] = true;
            }
        }
        let frames = holes
            .iter()
            .enumerate()
            .filter_map(|(i, &hole)| hole.then_some(i))
            .collect::<Vec<_>>();
        if !frames.is_empty() {
            return Err(TrajectoryError::IncompleteTrajectory {
                identity: track.identity,
                frames,
            });
        }
        Ok(boxes)
    }

    fn check_track(track: &Track, num_frames: usize) -> Result<()> {
        let invalid = |reason: String| TrajectoryError::InvalidTrack {
            identity: track.identity,
            reason,
        };
        if track.frame_ids.len() != track.rects.len() {
            return Err(invalid(format!(
                "{} frame ids but {} boxes",
                track.frame_ids.len(),
                track.rects.len()
            )));
        }
        if track.frame_ids.windows(2).any(|w| w[0] >= w[1]) {
            return Err(invalid(
                "frame ids are not strictly increasing".to_string(),
            ));
        }
        if let Some(last) = track.last_frame() {
            if last >= num_frames {
                return Err(invalid(format!(
                    "frame {last} is outside a video of {num_frames} frames"
                )));
            }
        }
        Ok(())
    }
}

impl Default for TrajectoryReconstructor {
    fn default() -> Self {
        Self::new(5, 2)
    }
}
