//! Segment lookup for the wheel face
//!
//! The wheel face is split into N equal slices. Slice 0 sits under the pointer
//! when the wheel angle is 0; as the wheel turns clockwise (angle decreasing)
//! the slices pass the pointer in ascending order.

use serde::{Deserialize, Serialize};

use crate::consts::FULL_TURN;

/// Why a label list can't be used as a wheel face
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SegmentError {
    #[error("wheel needs at least one segment")]
    Empty,
    #[error("segment {index} has a blank label")]
    BlankLabel { index: usize },
    #[error("segment label {label:?} appears more than once")]
    DuplicateLabel { label: String },
}

/// Index of the segment under the pointer for a wheel angle (degrees)
///
/// Returns `None` when there are no segments.
pub fn resolve_segment(angle: f32, segment_count: usize) -> Option<usize> {
    if segment_count == 0 {
        return None;
    }
    let width = FULL_TURN / segment_count as f32;
    let raw = ((FULL_TURN - angle % FULL_TURN) / width).floor();
    // Negative angles push `raw` past N, so wrap with rem_euclid
    let index = (raw as i64).rem_euclid(segment_count as i64);
    Some(index as usize)
}

/// Ordered, non-empty list of unique labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct SegmentSet {
    labels: Vec<String>,
}

impl SegmentSet {
    pub fn new<I, S>(labels: I) -> Result<Self, SegmentError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(SegmentError::Empty);
        }
        for (index, label) in labels.iter().enumerate() {
            if label.trim().is_empty() {
                return Err(SegmentError::BlankLabel { index });
            }
            if labels[..index].contains(label) {
                return Err(SegmentError::DuplicateLabel {
                    label: label.clone(),
                });
            }
        }
        Ok(Self { labels })
    }

    /// Wheel face from labels already known to be valid
    pub(crate) fn from_trusted(labels: &[&str]) -> Self {
        Self {
            labels: labels.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Angular width of one segment (degrees)
    #[inline]
    pub fn segment_width(&self) -> f32 {
        FULL_TURN / self.labels.len() as f32
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Index of the segment under the pointer
    pub fn index_at(&self, angle: f32) -> usize {
        // Non-empty by construction
        resolve_segment(angle, self.labels.len()).unwrap_or(0)
    }

    /// Label of the segment under the pointer
    pub fn resolve(&self, angle: f32) -> &str {
        &self.labels[self.index_at(angle)]
    }
}

impl TryFrom<Vec<String>> for SegmentSet {
    type Error = SegmentError;

    fn try_from(labels: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(labels)
    }
}

impl From<SegmentSet> for Vec<String> {
    fn from(set: SegmentSet) -> Self {
        set.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn six() -> SegmentSet {
        SegmentSet::new(["A", "B", "C", "D", "E", "F"]).unwrap()
    }

    #[test]
    fn test_zero_angle_is_first_segment() {
        assert_eq!(resolve_segment(0.0, 6), Some(0));
        assert_eq!(six().resolve(0.0), "A");
    }

    #[test]
    fn test_quarter_turn() {
        // floor((360 - 90) / 60) = floor(4.5) = 4
        assert_eq!(resolve_segment(90.0, 6), Some(4));
        assert_eq!(six().resolve(90.0), "E");
    }

    #[test]
    fn test_segment_boundaries() {
        let set = six();
        assert_eq!(set.segment_width(), 60.0);
        // Just past 0 we are already in the last slice
        assert_eq!(set.resolve(0.5), "F");
        assert_eq!(set.resolve(60.0), "F");
        assert_eq!(set.resolve(60.5), "E");
        assert_eq!(set.resolve(300.0), "B");
        assert_eq!(set.resolve(359.5), "A");
    }

    #[test]
    fn test_no_segments() {
        assert_eq!(resolve_segment(45.0, 0), None);
    }

    #[test]
    fn test_single_segment() {
        let set = SegmentSet::new(["Burpees"]).unwrap();
        for angle in [0.0, 12.5, 180.0, 359.9] {
            assert_eq!(set.resolve(angle), "Burpees");
        }
    }

    #[test]
    fn test_rejects_bad_label_lists() {
        assert_eq!(SegmentSet::new(Vec::<String>::new()), Err(SegmentError::Empty));
        assert_eq!(
            SegmentSet::new(["Squats", "  "]),
            Err(SegmentError::BlankLabel { index: 1 })
        );
        assert_eq!(
            SegmentSet::new(["Squats", "Lunges", "Squats"]),
            Err(SegmentError::DuplicateLabel {
                label: "Squats".to_string()
            })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(SegmentError::Empty.to_string(), "wheel needs at least one segment");
        assert_eq!(
            SegmentError::DuplicateLabel {
                label: "Rows".into()
            }
            .to_string(),
            "segment label \"Rows\" appears more than once"
        );
    }

    #[test]
    fn test_serde_validates() {
        let set: SegmentSet = serde_json::from_str(r#"["Rows","Pull-Ups"]"#).unwrap();
        assert_eq!(set.len(), 2);
        assert!(serde_json::from_str::<SegmentSet>("[]").is_err());
        assert!(serde_json::from_str::<SegmentSet>(r#"["Rows","Rows"]"#).is_err());
    }

    proptest! {
        #[test]
        fn prop_resolve_in_range_and_deterministic(angle in -4000.0f32..4000.0, n in 1usize..64) {
            let a = resolve_segment(angle, n).unwrap();
            let b = resolve_segment(angle, n).unwrap();
            prop_assert_eq!(a, b);
            prop_assert!(a < n);
        }
    }
}
