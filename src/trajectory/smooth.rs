use ndarray::Array2;

/// Moving average along the frame axis, per column.
///
/// Frame `i` averages the rows `[i - (w-1)/2, i + w/2]` clipped to the
/// sequence, so frames near either end use a shorter window instead of
/// padding. For odd `w` the window is centered. `window_size` of 0 or 1
/// returns the input unchanged.
pub fn moving_average_smooth(
    data: &Array2<f32>,
    window_size: usize,
) -> Array2<f32> {
    let num_frames = data.nrows();
    if window_size <= 1 || num_frames == 0 {
        return data.clone();
    }
    let before = (window_size - 1) / 2;
    let after = window_size / 2;

    let mut smoothed = Array2::<f32>::zeros(data.raw_dim());
    for i in 0..num_frames {
        let lo = i.saturating_sub(before);
        let hi = (i + after).min(num_frames - 1);
        let count = (hi - lo + 1) as f64;
        for j in 0..data.ncols() {
            // f64 accumulation keeps constant inputs exact
            let sum: f64 = (lo..=hi).map(|k| data[[k, j]] as f64).sum();
            smoothed[[i, j]] = (sum / count) as f32;
        }
    }
    smoothed
}

/// Apply [`moving_average_smooth`] `passes` times, each pass on the output
/// of the previous one.
pub fn cascaded_smooth(
    data: &Array2<f32>,
    window_size: usize,
    passes: usize,
) -> Array2<f32> {
    let mut out = data.clone();
    for _ in 0..passes {
        out = moving_average_smooth(&out, window_size);
    }
    out
}
