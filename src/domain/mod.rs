pub mod attribute;
pub mod device;
pub mod events;
pub mod gesture;
pub mod keypoint;

pub use device::{DeviceId, DeviceMap};
pub use gesture::{Gesture, GestureObservation};
pub use keypoint::{HandLandmarks, Keypoint, Landmark};
