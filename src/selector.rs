use crate::error::{Result, TrajectoryError};

/// Picks the leading identities out of a score-sorted list.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackSelector;

impl TrackSelector {
    /// First `n` identities of `sorted_ids`, or all of them when fewer exist.
    pub fn select_top(sorted_ids: &[usize], n: usize) -> Result<Vec<usize>> {
        if sorted_ids.is_empty() {
            return Err(TrajectoryError::NoTrackFound);
        }
        Ok(sorted_ids.iter().take(n).copied().collect())
    }

    /// Single-subject form of [`TrackSelector::select_top`].
    pub fn select_one(sorted_ids: &[usize]) -> Result<usize> {
        sorted_ids
            .first()
            .copied()
            .ok_or(TrajectoryError::NoTrackFound)
    }
}
