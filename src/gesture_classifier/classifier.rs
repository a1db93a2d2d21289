use crate::domain::{Gesture, GestureObservation, HandLandmarks, Landmark};
use crate::gesture_classifier::pinch_history::PinchHistory;
use tracing::{debug, trace};

const FINGERS: [(Landmark, Landmark); 4] = [
    (Landmark::IndexTip, Landmark::IndexPip),
    (Landmark::MiddleTip, Landmark::MiddlePip),
    (Landmark::RingTip, Landmark::RingPip),
    (Landmark::PinkyTip, Landmark::PinkyPip),
];

/// Minimum number of pinch samples before a zoom can be recognized.
const ZOOM_MIN_SAMPLES: usize = 5;
const ZOOM_THRESHOLD: f64 = 0.05;
const SWIPE_THRESHOLD: f64 = 0.15;
const ROTATION_THRESHOLD_DEG: f64 = 45.0;

/// Turns hand landmarks into a finger count and at most one gesture.
///
/// Only the pinch history survives between frames, so frames must be fed in arrival order.
#[derive(Debug, Default)]
pub struct GestureClassifier {
    pinch_history: PinchHistory,
}

impl GestureClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classify(&mut self, landmarks: Option<&HandLandmarks>) -> GestureObservation {
        let Some(landmarks) = landmarks else {
            trace!("No hand in frame");
            return GestureObservation::no_hand();
        };

        let finger_count = count_fingers(landmarks);
        let pinch = self.detect_pinch(landmarks);
        let swipe = detect_swipe(landmarks);
        let rotation = detect_rotation(landmarks);

        let gesture = swipe.or(pinch.filter(|gesture| *gesture != Gesture::PinchHold)).or(rotation);

        trace!(finger_count, ?pinch, ?swipe, ?rotation, "Classified frame");
        if let Some(gesture) = gesture {
            debug!(finger_count, "✋ Recognized gesture '{}'", gesture);
        }

        GestureObservation::hand(finger_count, gesture)
    }

    fn detect_pinch(&mut self, landmarks: &HandLandmarks) -> Option<Gesture> {
        let distance = landmarks[Landmark::ThumbTip].distance_to(&landmarks[Landmark::IndexTip]);
        self.pinch_history.push(distance);

        if self.pinch_history.len() < ZOOM_MIN_SAMPLES {
            return Some(Gesture::PinchHold);
        }

        let (Some(oldest), Some(newest)) = (self.pinch_history.oldest(), self.pinch_history.newest()) else {
            return Some(Gesture::PinchHold);
        };

        if newest < oldest - ZOOM_THRESHOLD {
            Some(Gesture::ZoomIn)
        } else if newest > oldest + ZOOM_THRESHOLD {
            Some(Gesture::ZoomOut)
        } else {
            Some(Gesture::PinchHold)
        }
    }
}

/// The thumb test assumes a right hand seen through a mirrored camera.
fn count_fingers(landmarks: &HandLandmarks) -> u8 {
    let thumb = landmarks[Landmark::ThumbTip].x < landmarks[Landmark::ThumbIp].x;
    let fingers = FINGERS.iter().filter(|(tip, pip)| landmarks[*tip].y < landmarks[*pip].y).count() as u8;

    u8::from(thumb) + fingers
}

fn detect_swipe(landmarks: &HandLandmarks) -> Option<Gesture> {
    let dx = landmarks[Landmark::MiddleMcp].x - landmarks[Landmark::Wrist].x;

    if dx.abs() > SWIPE_THRESHOLD {
        Some(if dx > 0.0 { Gesture::SwipeRight } else { Gesture::SwipeLeft })
    } else {
        None
    }
}

fn detect_rotation(landmarks: &HandLandmarks) -> Option<Gesture> {
    let wrist = landmarks[Landmark::Wrist];
    let middle = landmarks[Landmark::MiddleMcp];
    let angle = (middle.y - wrist.y).atan2(middle.x - wrist.x).to_degrees();

    if angle > ROTATION_THRESHOLD_DEG {
        Some(Gesture::RotateUp)
    } else if angle < -ROTATION_THRESHOLD_DEG {
        Some(Gesture::RotateDown)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keypoint::HandLandmarksBuilder;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// A neutral hand whose thumb and index tips are `distance` apart.
    fn pinch(distance: f64) -> HandLandmarks {
        HandLandmarksBuilder::new()
            .at(Landmark::ThumbTip, 0.5, 0.5)
            .at(Landmark::IndexTip, 0.5 + distance, 0.5)
            .build()
    }

    fn feed(classifier: &mut GestureClassifier, distances: &[f64]) -> Vec<GestureObservation> {
        distances.iter().map(|distance| classifier.classify(Some(&pinch(*distance)))).collect()
    }

    #[test]
    fn reports_no_hand() {
        let mut classifier = GestureClassifier::new();

        let observation = classifier.classify(None);

        assert_eq!(observation, GestureObservation::no_hand());
        assert_eq!(classifier.pinch_history.len(), 0);
    }

    #[test]
    fn frames_without_a_hand_leave_the_history_untouched() {
        let mut classifier = GestureClassifier::new();
        feed(&mut classifier, &[0.3, 0.3]);

        classifier.classify(None);
        classifier.classify(None);

        assert_eq!(classifier.pinch_history.len(), 2);
    }

    #[rstest]
    #[case(HandLandmarksBuilder::new().build(), 0)]
    #[case(HandLandmarksBuilder::new().at(Landmark::ThumbTip, 0.4, 0.5).at(Landmark::ThumbIp, 0.45, 0.5).build(), 1)]
    #[case(HandLandmarksBuilder::new().at(Landmark::ThumbTip, 0.6, 0.5).at(Landmark::ThumbIp, 0.45, 0.5).build(), 0)]
    #[case(HandLandmarksBuilder::new().at(Landmark::IndexTip, 0.5, 0.3).at(Landmark::IndexPip, 0.5, 0.4).build(), 1)]
    #[case(HandLandmarksBuilder::new().at(Landmark::IndexTip, 0.5, 0.45).at(Landmark::MiddleTip, 0.5, 0.45).build(), 2)]
    #[case(
        HandLandmarksBuilder::new()
            .at(Landmark::IndexTip, 0.5, 0.3)
            .at(Landmark::MiddleTip, 0.5, 0.3)
            .at(Landmark::RingTip, 0.5, 0.3)
            .build(),
        3
    )]
    #[case(
        HandLandmarksBuilder::new()
            .at(Landmark::IndexTip, 0.5, 0.3)
            .at(Landmark::MiddleTip, 0.5, 0.3)
            .at(Landmark::RingTip, 0.5, 0.3)
            .at(Landmark::PinkyTip, 0.5, 0.3)
            .build(),
        4
    )]
    #[case(
        HandLandmarksBuilder::new()
            .at(Landmark::ThumbTip, 0.3, 0.5)
            .at(Landmark::IndexTip, 0.5, 0.3)
            .at(Landmark::MiddleTip, 0.5, 0.3)
            .at(Landmark::RingTip, 0.5, 0.3)
            .at(Landmark::PinkyTip, 0.5, 0.3)
            .build(),
        5
    )]
    #[case(HandLandmarksBuilder::new().at(Landmark::RingTip, 0.5, 0.7).at(Landmark::PinkyTip, 0.5, 0.9).build(), 0)]
    fn counts_extended_fingers(#[case] landmarks: HandLandmarks, #[case] expected: u8) {
        assert_eq!(count_fingers(&landmarks), expected);
    }

    #[test]
    fn finger_count_does_not_depend_on_earlier_frames() {
        let open_hand = HandLandmarksBuilder::new()
            .at(Landmark::IndexTip, 0.5, 0.3)
            .at(Landmark::MiddleTip, 0.5, 0.3)
            .build();
        let mut classifier = GestureClassifier::new();
        feed(&mut classifier, &[0.4, 0.3, 0.2, 0.1, 0.05]);

        let observation = classifier.classify(Some(&open_hand));

        assert_eq!(observation.finger_count, 2);
        assert_eq!(observation.finger_count, GestureClassifier::new().classify(Some(&open_hand)).finger_count);
    }

    #[test]
    fn waits_for_five_samples_before_zooming() {
        let mut classifier = GestureClassifier::new();

        let observations = feed(&mut classifier, &[0.30, 0.28, 0.26, 0.24]);

        assert!(observations.iter().all(|observation| observation.gesture.is_none()));
        assert_eq!(classifier.detect_pinch(&pinch(0.24)), Some(Gesture::ZoomIn));
    }

    #[test]
    fn shrinking_distance_zooms_in() {
        let mut classifier = GestureClassifier::new();

        let observations = feed(&mut classifier, &[0.30, 0.28, 0.26, 0.24, 0.22]);

        assert_eq!(observations.last().unwrap().gesture, Some(Gesture::ZoomIn));
    }

    #[test]
    fn growing_distance_zooms_out() {
        let mut classifier = GestureClassifier::new();

        let observations = feed(&mut classifier, &[0.10, 0.12, 0.14, 0.16, 0.18]);

        assert_eq!(observations.last().unwrap().gesture, Some(Gesture::ZoomOut));
    }

    #[test]
    fn steady_distance_holds_the_pinch_without_reporting_a_gesture() {
        let mut classifier = GestureClassifier::new();

        let observations = feed(&mut classifier, &[0.2, 0.2, 0.2, 0.2, 0.2, 0.2]);

        assert_eq!(classifier.detect_pinch(&pinch(0.2)), Some(Gesture::PinchHold));
        assert!(observations.iter().all(|observation| observation.gesture.is_none()));
    }

    #[test]
    fn compares_against_the_oldest_sample_still_in_the_history() {
        let mut classifier = GestureClassifier::new();
        feed(&mut classifier, &[0.5, 0.2, 0.2, 0.2, 0.2, 0.2, 0.2, 0.2, 0.2, 0.2]);

        // 0.5 is evicted by this sample, the oldest is now 0.2
        let observation = classifier.classify(Some(&pinch(0.2)));

        assert_eq!(observation.gesture, None);
    }

    #[rstest]
    #[case(0.7, Some(Gesture::SwipeRight))]
    #[case(0.3, Some(Gesture::SwipeLeft))]
    #[case(0.6, None)]
    #[case(0.4, None)]
    fn detects_horizontal_swipes(#[case] middle_mcp_x: f64, #[case] expected: Option<Gesture>) {
        let landmarks = HandLandmarksBuilder::new().at(Landmark::MiddleMcp, middle_mcp_x, 0.5).build();

        assert_eq!(detect_swipe(&landmarks), expected);
    }

    #[rstest]
    #[case(0.5, 0.7, Some(Gesture::RotateUp))]
    #[case(0.5, 0.3, Some(Gesture::RotateDown))]
    #[case(0.6, 0.55, None)]
    #[case(0.6, 0.45, None)]
    fn detects_rotation(#[case] middle_mcp_x: f64, #[case] middle_mcp_y: f64, #[case] expected: Option<Gesture>) {
        let landmarks = HandLandmarksBuilder::new().at(Landmark::MiddleMcp, middle_mcp_x, middle_mcp_y).build();

        assert_eq!(detect_rotation(&landmarks), expected);
    }

    #[test]
    fn swipe_takes_precedence_over_zoom() {
        let mut classifier = GestureClassifier::new();
        feed(&mut classifier, &[0.30, 0.28, 0.26, 0.24]);
        let landmarks = HandLandmarksBuilder::new()
            .at(Landmark::ThumbTip, 0.5, 0.5)
            .at(Landmark::IndexTip, 0.72, 0.5)
            .at(Landmark::MiddleMcp, 0.7, 0.5)
            .build();

        let observation = classifier.classify(Some(&landmarks));

        assert_eq!(observation.gesture, Some(Gesture::SwipeRight));
    }

    #[test]
    fn zoom_takes_precedence_over_rotation() {
        let mut classifier = GestureClassifier::new();
        feed(&mut classifier, &[0.30, 0.28, 0.26, 0.24]);
        let landmarks = HandLandmarksBuilder::new()
            .at(Landmark::ThumbTip, 0.5, 0.5)
            .at(Landmark::IndexTip, 0.72, 0.5)
            .at(Landmark::MiddleMcp, 0.5, 0.7)
            .build();

        let observation = classifier.classify(Some(&landmarks));

        assert_eq!(observation.gesture, Some(Gesture::ZoomIn));
    }

    #[test]
    fn a_held_pinch_does_not_mask_rotation() {
        let mut classifier = GestureClassifier::new();
        let landmarks = HandLandmarksBuilder::new().at(Landmark::MiddleMcp, 0.5, 0.3).build();

        let observation = classifier.classify(Some(&landmarks));

        assert_eq!(observation, GestureObservation::hand(0, Some(Gesture::RotateDown)));
    }
}
