use crate::domain::keypoint::HandLandmarks;
use tokio::time::Instant;

#[derive(Debug)]
pub enum Event {
    /// One decoded frame from the hand-tracking provider, `None` when no hand was found.
    Frame { landmarks: Option<HandLandmarks>, at: Instant },
    Tick { at: Instant },
}
