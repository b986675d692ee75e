/*-----------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------------*/
use crate::{
    detection::Detection, scorer::TrackScorer, track_history::TrackHistory,
    video::VideoInfo,
};
use nearly_eq::assert_nearly_eq;

fn video() -> VideoInfo {
    VideoInfo::new(3, 100, 100).unwrap()
}

// 20x20 boxes: one in the top-left corner, one in the middle of the image.
const CORNER: [f32; 4] = [0.0, 0.0, 20.0, 20.0];
const CENTER: [f32; 4] = [40.0, 40.0, 60.0, 60.0];

fn history(tracks: &[(usize, [f32; 4], usize)]) -> TrackHistory {
    let num_frames = tracks.iter().map(|t| t.2).max().unwrap_or(0);
    let frames = (0..num_frames)
        .map(|frame| {
            tracks
                .iter()
                .filter(|t| frame < t.2)
                .map(|t| Detection::from_xyxy(t.0, t.1))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    TrackHistory::from_frames(&frames)
}

#[test]
fn test_measures() {
    let history = history(&[(1, CORNER, 3), (2, CENTER, 2)]);
    let scores = TrackScorer::new(true).rank(&history, &video());

    let corner = scores.iter().find(|s| s.identity == 1).unwrap();
    assert_eq!(corner.length, 3);
    assert_nearly_eq!(corner.area_sum, 0.12, 1e-6);
    // center (10, 10) is sqrt(2) * 40 away, the diagonal is sqrt(2) * 100
    assert_nearly_eq!(corner.avg_center_dist, 0.4, 1e-6);
    assert_nearly_eq!(corner.score, 0.6 * 1.0 + 0.4 * 0.6, 1e-6);

    let center = scores.iter().find(|s| s.identity == 2).unwrap();
    assert_eq!(center.length, 2);
    assert_nearly_eq!(center.area_sum, 0.08, 1e-6);
    assert_nearly_eq!(center.avg_center_dist, 0.0, 1e-6);
    assert_nearly_eq!(center.score, 0.6 * (0.08 / 0.12) + 0.4, 1e-6);
}

#[test]
fn test_centered_track_wins_with_center_priority() {
    let history = history(&[(1, CORNER, 3), (2, CENTER, 3)]);

    let ids = TrackScorer::new(true).sorted_ids(&history, &video());
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn test_area_only_ties_keep_first_appearance() {
    let history = history(&[(1, CORNER, 3), (2, CENTER, 3)]);

    let scores = TrackScorer::new(false).rank(&history, &video());
    assert_eq!(scores[0].identity, 1);
    assert_eq!(scores[1].identity, 2);
    assert_eq!(scores[0].score, scores[1].score);
    assert_nearly_eq!(scores[0].score, 0.12, 1e-6);
}

#[test]
fn test_full_ties_keep_first_appearance() {
    let history = history(&[(9, CENTER, 3), (4, CENTER, 3), (6, CENTER, 3)]);

    let ids = TrackScorer::new(true).sorted_ids(&history, &video());
    assert_eq!(ids, vec![9, 4, 6]);
}

#[test]
fn test_area_only_prefers_longer_and_larger() {
    let big = [0.0, 0.0, 50.0, 50.0];
    let history = history(&[(1, CORNER, 3), (2, big, 1), (3, CENTER, 2)]);

    let ids = TrackScorer::new(false).sorted_ids(&history, &video());
    // 0.25, 0.12, 0.08
    assert_eq!(ids, vec![2, 1, 3]);
}

#[test]
fn test_degenerate_boxes_do_not_produce_nan() {
    let flat = [10.0, 10.0, 10.0, 30.0];
    let history = history(&[(1, flat, 2)]);

    let scores = TrackScorer::new(true).rank(&history, &video());
    assert!(scores[0].score.is_finite());
}

#[test]
fn test_empty_history() {
    let history = TrackHistory::new();
    assert!(TrackScorer::default().rank(&history, &video()).is_empty());
}
