mod interpolate;
mod mask;
mod reconstructor;
mod smooth;

#[cfg(test)]
mod test_reconstructor;

pub use interpolate::interpolate_missing;
pub use mask::{
    frame_id_runs, frame_ids_to_mask, missing_runs, scatter_by_frame,
    PresenceMask,
};
pub use reconstructor::{Trajectory, TrajectoryReconstructor};
pub use smooth::{cascaded_smooth, moving_average_smooth};
