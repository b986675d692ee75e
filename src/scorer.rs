//! Ranking of candidate tracks.
//!
//! A track's score grows with how long and how large the subject is on
//! screen. With center priority enabled the summed area is normalized
//! against the largest track and blended with the mean distance of the box
//! center to the image center, so a shorter but large, centered track can
//! outrank a long, small one at the edge of the frame.

use crate::{
    track_history::{Track, TrackHistory},
    video::VideoInfo,
};
use log::trace;
use serde::{Deserialize, Serialize};

const AREA_WEIGHT: f32 = 0.6;
const CENTER_WEIGHT: f32 = 0.4;

/// Per-identity ranking terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackScore {
    pub identity: usize,
    /// Number of frames with a detection.
    pub length: usize,
    /// Sum over detections of box area divided by image area.
    pub area_sum: f32,
    /// Mean center-to-center distance divided by the image diagonal.
    pub avg_center_dist: f32,
    pub score: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct TrackScorer {
    center_priority: bool,
}

impl TrackScorer {
    pub fn new(center_priority: bool) -> Self {
        Self { center_priority }
    }

    pub fn center_priority(&self) -> bool {
        self.center_priority
    }

    /// Score every track and return them best first.
    ///
    /// The sort is stable, so tracks with equal scores keep their order of
    /// first appearance.
    pub fn rank(
        &self,
        history: &TrackHistory,
        video: &VideoInfo,
    ) -> Vec<TrackScore> {
        let mut scores = history
            .iter()
            .map(|track| Self::measure(track, video))
            .collect::<Vec<_>>();

        if self.center_priority {
            let max_area = scores
                .iter()
                .map(|s| s.area_sum)
                .fold(0.0f32, f32::max);
            for s in scores.iter_mut() {
                let area_norm = if max_area > 0.0 {
                    s.area_sum / max_area
                } else {
                    0.0
                };
                s.score = AREA_WEIGHT * area_norm
                    + CENTER_WEIGHT * (1.0 - s.avg_center_dist);
            }
        } else {
            for s in scores.iter_mut() {
                s.score = s.area_sum;
            }
        }

        scores.sort_by(|a, b| b.score.total_cmp(&a.score));
        for s in scores.iter() {
            trace!(
                "identity {}: length={} area_sum={:.4} dist={:.4} score={:.4}",
                s.identity,
                s.length,
                s.area_sum,
                s.avg_center_dist,
                s.score
            );
        }
        scores
    }

    /// Identities ordered by score, best first.
    pub fn sorted_ids(
        &self,
        history: &TrackHistory,
        video: &VideoInfo,
    ) -> Vec<usize> {
        self.rank(history, video)
            .iter()
            .map(|s| s.identity)
            .collect()
    }

    fn measure(track: &Track, video: &VideoInfo) -> TrackScore {
        let image_area = video.image_area();
        let (cx_img, cy_img) = video.image_center();
        let diagonal = video.diagonal();

        let mut area_sum = 0.0f32;
        let mut dist_sum = 0.0f32;
        for rect in track.rects.iter() {
            area_sum += rect.area() / image_area;
            let (cx, cy) = rect.center();
            dist_sum += (cx - cx_img).hypot(cy - cy_img) / diagonal;
        }
        let avg_center_dist = if track.is_empty() {
            0.0
        } else {
            dist_sum / track.len() as f32
        };

        TrackScore {
            identity: track.identity,
            length: track.len(),
            area_sum,
            avg_center_dist,
            score: 0.0,
        }
    }
}

impl Default for TrackScorer {
    fn default() -> Self {
        Self::new(true)
    }
}
