use crate::domain::{DeviceId, DeviceMap};
use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    SelectDevice,
    ControlDevice,
}

/// Read-only view of the controller, timer fields excluded.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ControllerSnapshot {
    pub mode: Mode,
    pub selected_device: Option<DeviceId>,
    pub devices: DeviceMap,
}
