//! Frame reduction: choose the primary subject among detected faces.

use affect_model::{FaceDetection, FrameResult};

/// The detection with the largest bounding area.
///
/// Ties keep the detection listed first, so the choice never depends on
/// how an iterator adapter breaks ties.
pub fn primary_subject(detections: &[FaceDetection]) -> Option<&FaceDetection> {
    let mut best: Option<&FaceDetection> = None;
    for detection in detections {
        match best {
            Some(current) if detection.area() <= current.area() => {}
            _ => best = Some(detection),
        }
    }
    best
}

/// Reduce every detection in one frame to a single frame result.
pub fn reduce(detections: &[FaceDetection]) -> FrameResult {
    match primary_subject(detections) {
        Some(subject) => FrameResult::Subject(subject.emotions.clone()),
        None => FrameResult::NoSubject,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use affect_model::{BoundingBox, Emotion, EmotionDistribution};
    use proptest::prelude::*;

    fn face(w: u32, h: u32, emotion: Emotion) -> FaceDetection {
        FaceDetection::new(
            BoundingBox::new(0, 0, w, h),
            EmotionDistribution::from_pairs([(emotion, 0.9)]).unwrap(),
        )
    }

    #[test]
    fn empty_frame_has_no_subject() {
        assert_eq!(reduce(&[]), FrameResult::NoSubject);
        assert!(primary_subject(&[]).is_none());
    }

    #[test]
    fn largest_face_wins() {
        let faces = vec![
            face(10, 10, Emotion::Sad),
            face(40, 30, Emotion::Happy),
            face(20, 20, Emotion::Fear),
        ];
        assert_eq!(reduce(&faces).dominant(), Some(Emotion::Happy));
    }

    #[test]
    fn equal_areas_keep_first_listed() {
        // 20x10 and 10x20 cover the same area.
        let faces = vec![
            face(5, 5, Emotion::Angry),
            face(20, 10, Emotion::Neutral),
            face(10, 20, Emotion::Surprise),
        ];
        assert_eq!(reduce(&faces).dominant(), Some(Emotion::Neutral));
    }

    #[test]
    fn zero_area_face_is_still_a_subject() {
        let faces = vec![face(0, 12, Emotion::Disgust)];
        assert_eq!(reduce(&faces).dominant(), Some(Emotion::Disgust));
    }

    proptest! {
        #[test]
        fn picks_first_face_of_maximal_area(
            dims in proptest::collection::vec((0u32..64, 0u32..64), 1..12)
        ) {
            let faces: Vec<FaceDetection> = dims
                .iter()
                .map(|(w, h)| face(*w, *h, Emotion::Neutral))
                .collect();

            let max_area = faces.iter().map(FaceDetection::area).max().unwrap();
            let first_max = faces.iter().position(|f| f.area() == max_area).unwrap();

            let chosen = primary_subject(&faces).unwrap();
            prop_assert!(std::ptr::eq(chosen, &faces[first_max]));
            prop_assert!(reduce(&faces).is_subject());
        }
    }
}
