use crate::rect::Rect;
use serde::{Deserialize, Serialize};

/*------------------------------------------------------------------------------
Detection struct
------------------------------------------------------------------------------*/

/// One identity-tagged box reported by the upstream tracker for a frame.
///
/// The frame index is implicit: it is the position of the enclosing list in
/// the per-frame sequence. The serialized form matches the tracker dump,
/// `{"id": 3, "bbx_xyxy": [x1, y1, x2, y2]}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    #[serde(rename = "id", alias = "identity")]
    pub identity: usize,
    #[serde(rename = "bbx_xyxy", alias = "rect")]
    pub rect: Rect<f32>,
}

impl Detection {
    pub fn new(identity: usize, rect: Rect<f32>) -> Self {
        Self { identity, rect }
    }

    pub fn from_xyxy(identity: usize, xyxy: [f32; 4]) -> Self {
        Self::new(identity, Rect::from_xyxy(xyxy))
    }
}
