use serde::Serialize;
use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    ZoomIn,
    ZoomOut,
    PinchHold,
    SwipeLeft,
    SwipeRight,
    RotateUp,
    RotateDown,
}

impl Gesture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gesture::ZoomIn => "zoom_in",
            Gesture::ZoomOut => "zoom_out",
            Gesture::PinchHold => "pinch_hold",
            Gesture::SwipeLeft => "swipe_left",
            Gesture::SwipeRight => "swipe_right",
            Gesture::RotateUp => "rotate_up",
            Gesture::RotateDown => "rotate_down",
        }
    }
}

impl Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the classifier made of a single frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GestureObservation {
    pub hand_detected: bool,
    pub finger_count: u8,
    pub gesture: Option<Gesture>,
}

impl GestureObservation {
    pub fn no_hand() -> Self {
        GestureObservation {
            hand_detected: false,
            finger_count: 0,
            gesture: None,
        }
    }

    pub fn hand(finger_count: u8, gesture: Option<Gesture>) -> Self {
        GestureObservation {
            hand_detected: true,
            finger_count,
            gesture,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn serializes_a_missing_gesture_as_null() -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(GestureObservation::no_hand())?;

        assert_eq!(value, json!({ "hand_detected": false, "finger_count": 0, "gesture": null }));
        Ok(())
    }

    #[test]
    fn serializes_gestures_in_snake_case() -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(GestureObservation::hand(2, Some(Gesture::SwipeRight)))?;

        assert_eq!(value, json!({ "hand_detected": true, "finger_count": 2, "gesture": "swipe_right" }));
        assert_eq!(Gesture::RotateDown.to_string(), "rotate_down");
        Ok(())
    }
}
