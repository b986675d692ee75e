use crate::rect::Rect;
use ndarray::{Array1, Array2};
use std::ops::Range;

/// `true` on every frame where the identity was detected.
pub type PresenceMask = Array1<bool>;

/// Build a presence mask of `num_frames` entries from detected frame ids.
///
/// Ids at or beyond `num_frames` are ignored; callers validate them first.
pub fn frame_ids_to_mask(
    frame_ids: &[usize],
    num_frames: usize,
) -> PresenceMask {
    let mut mask = Array1::from_elem(num_frames, false);
    for &frame_id in frame_ids.iter() {
        if let Some(present) = mask.get_mut(frame_id) {
            *present = true;
        }
    }
    mask
}

/// Maximal runs of consecutive `true` entries, as frame ranges.
///
/// Pass an inverted presence mask to get the gaps of a track.
pub fn frame_id_runs(mask: &[bool]) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut start = None;
    for (i, &set) in mask.iter().enumerate() {
        match (set, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                runs.push(s..i);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push(s..mask.len());
    }
    runs
}

/// Gaps of a presence mask: maximal runs of frames without a detection.
pub fn missing_runs(mask: &PresenceMask) -> Vec<Range<usize>> {
    let missing = mask.iter().map(|&present| !present).collect::<Vec<_>>();
    frame_id_runs(&missing)
}

/// Scatter `rects` into a `(num_frames, 4)` xyxy array at `frame_ids`.
///
/// Frames without a detection are left as the all-zero box.
pub fn scatter_by_frame(
    frame_ids: &[usize],
    rects: &[Rect<f32>],
    num_frames: usize,
) -> Array2<f32> {
    let mut boxes = Array2::<f32>::zeros((num_frames, 4));
    for (&frame_id, rect) in frame_ids.iter().zip(rects.iter()) {
        if frame_id >= num_frames {
            continue;
        }
        for (j, v) in rect.get_xyxy().iter().enumerate() {
            boxes[[frame_id, j]] = *v;
        }
    }
    boxes
}
