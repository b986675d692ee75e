/*-----------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------------*/
use super::reconstructor::TrajectoryReconstructor;
use crate::{error::TrajectoryError, rect::Rect, track_history::Track};
use nearly_eq::assert_nearly_eq;

// Box moving right and growing by a fixed step per frame.
fn linear_box(frame: usize) -> [f32; 4] {
    let f = frame as f32;
    [10.0 + 4.0 * f, 20.0 + 2.0 * f, 60.0 + 6.0 * f, 140.0 + 3.0 * f]
}

fn linear_track(identity: usize, frames: &[usize]) -> Track {
    let mut track = Track::new(identity);
    for &frame in frames.iter() {
        track.push(frame, Rect::from_xyxy(linear_box(frame)));
    }
    track
}

#[test]
fn test_interior_gap_recovers_linear_motion() {
    let track = linear_track(1, &[0, 1, 2, 6, 7, 8]);
    let filled = TrajectoryReconstructor::fill_gaps(&track, 9).unwrap();

    assert_eq!(filled.shape(), &[9, 4]);
    for frame in 0..9 {
        for (j, expected) in linear_box(frame).iter().enumerate() {
            assert_nearly_eq!(filled[[frame, j]], *expected, 1e-4);
        }
    }
}

#[test]
fn test_smoothing_preserves_linear_motion_inside() {
    let track = linear_track(1, &[0, 1, 2, 6, 7, 8]);
    let trajectory = TrajectoryReconstructor::default()
        .reconstruct(&track, 9)
        .unwrap();

    // a symmetric window leaves a straight line untouched away from the ends
    for (j, expected) in linear_box(4).iter().enumerate() {
        assert_nearly_eq!(trajectory[[4, j]], *expected, 1e-3);
    }
    assert!(trajectory
        .outer_iter()
        .all(|row| row.iter().any(|&v| v != 0.0)));
}

#[test]
fn test_boundary_gaps_are_rejected() {
    let track = linear_track(4, &[3, 4, 5]);
    let err = TrajectoryReconstructor::default()
        .reconstruct(&track, 9)
        .unwrap_err();

    assert_eq!(
        err,
        TrajectoryError::IncompleteTrajectory {
            identity: 4,
            frames: vec![0, 1, 2, 6, 7, 8],
        }
    );
}

#[test]
fn test_trailing_gap_is_rejected() {
    let track = linear_track(2, &[0, 1, 2]);
    let err = TrajectoryReconstructor::fill_gaps(&track, 4).unwrap_err();

    assert_eq!(
        err,
        TrajectoryError::IncompleteTrajectory {
            identity: 2,
            frames: vec![3],
        }
    );
}

#[test]
fn test_detected_zero_box_is_rejected() {
    let mut track = Track::new(5);
    track.push(0, Rect::new(1.0, 1.0, 2.0, 2.0));
    track.push(1, Rect::zero());
    track.push(2, Rect::new(1.0, 1.0, 2.0, 2.0));

    let err = TrajectoryReconstructor::fill_gaps(&track, 3).unwrap_err();
    assert_eq!(
        err,
        TrajectoryError::IncompleteTrajectory {
            identity: 5,
            frames: vec![1],
        }
    );
}

#[test]
fn test_frame_out_of_range() {
    let track = linear_track(3, &[0, 1, 9]);
    let err = TrajectoryReconstructor::fill_gaps(&track, 9).unwrap_err();
    assert!(matches!(
        err,
        TrajectoryError::InvalidTrack { identity: 3, .. }
    ));
}

#[test]
fn test_unordered_frames() {
    let track = linear_track(3, &[0, 2, 2]);
    let err = TrajectoryReconstructor::fill_gaps(&track, 4).unwrap_err();
    assert!(matches!(
        err,
        TrajectoryError::InvalidTrack { identity: 3, .. }
    ));
}

#[test]
fn test_constant_track_is_unchanged() {
    let mut track = Track::new(0);
    let rect = Rect::new(100.5, 50.25, 180.75, 300.125);
    for frame in [0, 1, 4, 5, 6, 9] {
        track.push(frame, rect);
    }

    let trajectory = TrajectoryReconstructor::default()
        .reconstruct(&track, 10)
        .unwrap();
    for row in trajectory.outer_iter() {
        assert_eq!(row.to_vec(), rect.get_xyxy().to_vec());
    }
}

#[test]
fn test_deterministic() {
    let track = linear_track(1, &[0, 2, 3, 7, 8]);
    let reconstructor = TrajectoryReconstructor::default();
    let a = reconstructor.reconstruct(&track, 9).unwrap();
    let b = reconstructor.reconstruct(&track, 9).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_long_leading_and_trailing_gaps() {
    let num_frames = 200_000;
    let track = linear_track(6, &[150_000, 150_001, 150_002]);
    let err = TrajectoryReconstructor::fill_gaps(&track, num_frames)
        .unwrap_err();

    match err {
        TrajectoryError::IncompleteTrajectory { identity, frames } => {
            assert_eq!(identity, 6);
            assert_eq!(frames.len(), num_frames - 3);
            assert_eq!(frames[0], 0);
            assert_eq!(frames[149_999], 149_999);
            assert_eq!(frames[150_000], 150_003);
            assert_eq!(frames.last(), Some(&(num_frames - 1)));
            assert!(frames.windows(2).all(|w| w[0] < w[1]));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_zero_box_next_to_boundary_gap_reported_once() {
    let mut track = Track::new(7);
    track.push(2, Rect::zero());
    track.push(3, Rect::new(1.0, 1.0, 2.0, 2.0));
    track.push(4, Rect::new(1.0, 1.0, 2.0, 2.0));

    let err = TrajectoryReconstructor::fill_gaps(&track, 5).unwrap_err();
    assert_eq!(
        err,
        TrajectoryError::IncompleteTrajectory {
            identity: 7,
            frames: vec![0, 1, 2],
        }
    );
}
