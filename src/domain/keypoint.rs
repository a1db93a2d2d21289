use serde::Deserialize;
use std::ops::Index;
use thiserror::Error;

pub const LANDMARK_COUNT: usize = 21;

/// A tracked point in image-relative coordinates, both axes in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Keypoint {
    pub x: f64,
    pub y: f64,
}

impl Keypoint {
    #[cfg(test)]
    pub fn new(x: f64, y: f64) -> Self {
        Keypoint { x, y }
    }

    pub fn distance_to(&self, other: &Keypoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Skeletal layout of a single hand, in the order the tracking provider reports it.
#[allow(dead_code)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Landmark {
    Wrist = 0,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexMcp,
    IndexPip,
    IndexDip,
    IndexTip,
    MiddleMcp,
    MiddlePip,
    MiddleDip,
    MiddleTip,
    RingMcp,
    RingPip,
    RingDip,
    RingTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

/// Exactly [`LANDMARK_COUNT`] keypoints of one detected hand.
#[derive(Clone, Debug, PartialEq)]
pub struct HandLandmarks {
    points: [Keypoint; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Keypoint; LANDMARK_COUNT]) -> Self {
        HandLandmarks { points }
    }
}

impl Index<Landmark> for HandLandmarks {
    type Output = Keypoint;

    fn index(&self, landmark: Landmark) -> &Self::Output {
        &self.points[landmark as usize]
    }
}

impl TryFrom<Vec<Keypoint>> for HandLandmarks {
    type Error = LandmarkError;

    fn try_from(points: Vec<Keypoint>) -> Result<Self, Self::Error> {
        let count = points.len();
        let points: [Keypoint; LANDMARK_COUNT] = points.try_into().map_err(|_| LandmarkError::WrongCount(count))?;
        Ok(HandLandmarks::new(points))
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum LandmarkError {
    #[error("expected {expected} keypoints, got {0}", expected = LANDMARK_COUNT)]
    WrongCount(usize),
}

#[cfg(test)]
pub struct HandLandmarksBuilder {
    points: [Keypoint; LANDMARK_COUNT],
}

#[cfg(test)]
impl HandLandmarksBuilder {
    /// Every keypoint starts on the same spot: no finger extended, no swipe, no rotation.
    pub fn new() -> Self {
        HandLandmarksBuilder {
            points: [Keypoint::new(0.5, 0.5); LANDMARK_COUNT],
        }
    }

    pub fn at(mut self, landmark: Landmark, x: f64, y: f64) -> Self {
        self.points[landmark as usize] = Keypoint::new(x, y);
        self
    }

    pub fn build(self) -> HandLandmarks {
        HandLandmarks::new(self.points)
    }
}
