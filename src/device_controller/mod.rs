mod controller;
mod snapshot;

pub use controller::DeviceController;
pub use snapshot::{ControllerSnapshot, Mode};
