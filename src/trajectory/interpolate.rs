use ndarray::Array2;
use std::ops::Range;

/// Fill each gap in `data` by linear interpolation along the frame axis.
///
/// For a gap of `L` frames bounded by known rows `prev` and `next`, the
/// `k`-th missing frame (1-based) becomes `prev + (next - prev) * k / (L + 1)`,
/// independently per column. A gap touching the first or last frame has no
/// endpoint on one side; it is left untouched and returned.
pub fn interpolate_missing(
    data: &mut Array2<f32>,
    gaps: &[Range<usize>],
) -> Vec<Range<usize>> {
    let num_frames = data.nrows();
    let mut unfilled = Vec::new();

    for gap in gaps.iter() {
        if gap.is_empty() {
            continue;
        }
        if gap.start == 0 || gap.end >= num_frames {
            unfilled.push(gap.clone());
            continue;
        }

        let prev = data.row(gap.start - 1).to_owned();
        let next = data.row(gap.end).to_owned();
        let steps = (gap.len() + 1) as f32;
        for (k, frame) in gap.clone().enumerate() {
            let t = (k + 1) as f32 / steps;
            let mut row = data.row_mut(frame);
            for (j, v) in row.iter_mut().enumerate() {
                *v = prev[j] + (next[j] - prev[j]) * t;
            }
        }
    }

    unfilled
}
