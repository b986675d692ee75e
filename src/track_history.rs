use crate::{detection::Detection, rect::Rect};
use std::collections::HashMap;

/*----------------------------------------------------------------------------
Track struct
----------------------------------------------------------------------------*/

/// Every detection of one identity, in frame order.
///
/// `frame_ids[i]` is the frame on which `rects[i]` was observed.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub identity: usize,
    pub frame_ids: Vec<usize>,
    pub rects: Vec<Rect<f32>>,
}

impl Track {
    pub fn new(identity: usize) -> Self {
        Self {
            identity,
            frame_ids: Vec::new(),
            rects: Vec::new(),
        }
    }

    pub fn push(&mut self, frame_id: usize, rect: Rect<f32>) {
        self.frame_ids.push(frame_id);
        self.rects.push(rect);
    }

    pub fn len(&self) -> usize {
        self.frame_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frame_ids.is_empty()
    }

    pub fn first_frame(&self) -> Option<usize> {
        self.frame_ids.first().copied()
    }

    pub fn last_frame(&self) -> Option<usize> {
        self.frame_ids.last().copied()
    }
}

/*----------------------------------------------------------------------------
TrackHistory struct
----------------------------------------------------------------------------*/

/// Tracks keyed by identity, kept in order of first appearance.
#[derive(Debug, Clone, Default)]
pub struct TrackHistory {
    tracks: Vec<Track>,
    index: HashMap<usize, usize>,
    num_frames_seen: usize,
}

impl TrackHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group a per-frame detection sequence by identity.
    ///
    /// The position of each list in `frames` is its frame index.
    pub fn from_frames(frames: &[Vec<Detection>]) -> Self {
        let mut history = Self::new();
        for (frame_id, detections) in frames.iter().enumerate() {
            for detection in detections.iter() {
                history.push(frame_id, detection);
            }
        }
        history.num_frames_seen = frames.len();
        history
    }

    /// Append one detection. Frames must be pushed in increasing order for
    /// each identity.
    pub fn push(&mut self, frame_id: usize, detection: &Detection) {
        let slot = match self.index.get(&detection.identity) {
            Some(&slot) => slot,
            None => {
                self.tracks.push(Track::new(detection.identity));
                self.index
                    .insert(detection.identity, self.tracks.len() - 1);
                self.tracks.len() - 1
            }
        };
        self.tracks[slot].push(frame_id, detection.rect);
        self.num_frames_seen = self.num_frames_seen.max(frame_id + 1);
    }

    pub fn get(&self, identity: usize) -> Option<&Track> {
        self.index.get(&identity).map(|&slot| &self.tracks[slot])
    }

    pub fn contains(&self, identity: usize) -> bool {
        self.index.contains_key(&identity)
    }

    /// Tracks in order of first appearance.
    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    pub fn identities(&self) -> Vec<usize> {
        self.tracks.iter().map(|t| t.identity).collect()
    }

    /// `(identity, frame ids)` pairs in order of first appearance.
    pub fn frames_by_id(&self) -> Vec<(usize, &[usize])> {
        self.tracks
            .iter()
            .map(|t| (t.identity, t.frame_ids.as_slice()))
            .collect()
    }

    /// `(identity, boxes)` pairs in order of first appearance, aligned
    /// with [`TrackHistory::frames_by_id`].
    pub fn boxes_by_id(&self) -> Vec<(usize, &[Rect<f32>])> {
        self.tracks
            .iter()
            .map(|t| (t.identity, t.rects.as_slice()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Length of the per-frame sequence this history was built from.
    pub fn num_frames_seen(&self) -> usize {
        self.num_frames_seen
    }
}

impl<'a> IntoIterator for &'a TrackHistory {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
