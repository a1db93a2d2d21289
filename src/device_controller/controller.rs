use crate::device_controller::snapshot::{ControllerSnapshot, Mode};
use crate::domain::attribute::ValidatedValue;
use crate::domain::device::default_devices;
use crate::domain::{DeviceId, DeviceMap, GestureObservation};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ControllerState {
    SelectDevice,
    ControlDevice(DeviceId),
}

/// Two-mode state machine mapping gesture observations onto the appliances.
///
/// Starts in device selection, where the finger count picks an appliance. Once an appliance
/// is selected, a fist toggles its power and gestures adjust it while it is on. Going longer
/// than `timeout` without seeing a hand drops back to selection.
#[derive(Debug)]
pub struct DeviceController {
    state: ControllerState,
    last_gesture_time: Instant,
    timeout: Duration,
    devices: DeviceMap,
}

impl DeviceController {
    pub fn new(timeout: Duration, now: Instant) -> Self {
        DeviceController {
            state: ControllerState::SelectDevice,
            last_gesture_time: now,
            timeout,
            devices: default_devices(),
        }
    }

    #[cfg(test)]
    pub fn with_devices(devices: DeviceMap, timeout: Duration, now: Instant) -> Self {
        DeviceController {
            devices,
            ..Self::new(timeout, now)
        }
    }

    pub fn advance(&mut self, observation: &GestureObservation, now: Instant) -> ControllerSnapshot {
        if !observation.hand_detected {
            self.tick(now);
            return self.snapshot();
        }

        self.last_gesture_time = now;

        match self.state {
            ControllerState::SelectDevice => self.select_device(observation.finger_count),
            ControllerState::ControlDevice(device_id) => self.control_device(device_id, observation),
        }

        self.snapshot()
    }

    /// Applies the inactivity timeout without touching the gesture timer. Returns whether the
    /// controller fell back to device selection.
    pub fn tick(&mut self, now: Instant) -> bool {
        let ControllerState::ControlDevice(device_id) = self.state else {
            return false;
        };

        let idle = now.saturating_duration_since(self.last_gesture_time);
        if idle <= self.timeout {
            return false;
        }

        self.state = ControllerState::SelectDevice;
        info!(device_id, idle = ?idle, "⏳ No hand for {:?}, back to device selection", self.timeout);
        true
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        let (mode, selected_device) = match self.state {
            ControllerState::SelectDevice => (Mode::SelectDevice, None),
            ControllerState::ControlDevice(device_id) => (Mode::ControlDevice, Some(device_id)),
        };

        ControllerSnapshot {
            mode,
            selected_device,
            devices: self.devices.clone(),
        }
    }

    fn select_device(&mut self, finger_count: u8) {
        let Some(device) = self.devices.get(&finger_count) else {
            return;
        };

        info!(device_id = device.id, "🎯 Selected device '{}'", device.label);
        self.state = ControllerState::ControlDevice(device.id);
    }

    fn control_device(&mut self, device_id: DeviceId, observation: &GestureObservation) {
        let Some(device) = self.devices.get_mut(&device_id) else {
            warn!(device_id, "⚠️ Selected device is not registered");
            return;
        };

        if observation.finger_count == 0 {
            device.power = !device.power;
            info!(device_id, "🔌 Turned '{}' {}", device.label, if device.power { "on" } else { "off" });
            return;
        }

        if !device.power {
            return;
        }

        let Some(gesture) = observation.gesture else {
            return;
        };

        let Some(direction) = device.kind.direction_for(gesture) else {
            debug!(device_id, "Device '{}' ignores gesture '{}'", device.label, gesture);
            return;
        };

        let previous_value = device.attribute.value_string();
        if let ValidatedValue::Clamped(_, reason) = device.attribute.adjust(direction) {
            debug!(device_id, "Clamped '{}' of '{}': {}", device.attribute.name(), device.label, reason);
        }

        info!(
            device_id,
            "🟢 Updated device '{}', set '{}' to '{}', was '{}'",
            device.label,
            device.attribute.name(),
            device.attribute.value_string(),
            previous_value
        );
    }

    #[cfg(test)]
    fn apply(&mut self, finger_count: u8, gesture: Option<crate::domain::Gesture>, now: Instant) -> ControllerSnapshot {
        self.advance(&GestureObservation::hand(finger_count, gesture), now)
    }
}
