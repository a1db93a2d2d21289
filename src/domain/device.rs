use crate::domain::attribute::{Attribute, Direction, Unit};
use crate::domain::gesture::Gesture;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

pub type DeviceId = u8;

pub type DeviceMap = BTreeMap<DeviceId, Device>;

#[derive(Clone, PartialEq, Debug)]
pub struct Device {
    pub id: DeviceId,
    pub kind: DeviceKind,
    pub label: String,
    pub power: bool,
    pub attribute: Attribute,
}

impl Device {
    pub fn new(id: DeviceId, kind: DeviceKind, label: impl Into<String>, attribute: Attribute) -> Self {
        Device {
            id,
            kind,
            label: label.into(),
            power: false,
            attribute,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DeviceKind {
    AirConditioner,
    Fan,
    Tv,
    Light,
}

impl DeviceKind {
    pub fn name(&self) -> &'static str {
        match self {
            DeviceKind::AirConditioner => "ac",
            DeviceKind::Fan => "fan",
            DeviceKind::Tv => "tv",
            DeviceKind::Light => "light",
        }
    }

    /// Which way a gesture moves this kind of device, if it reacts to it at all.
    pub fn direction_for(&self, gesture: Gesture) -> Option<Direction> {
        match (self, gesture) {
            (DeviceKind::Light | DeviceKind::Fan, Gesture::ZoomIn) => Some(Direction::Increase),
            (DeviceKind::Light | DeviceKind::Fan, Gesture::ZoomOut) => Some(Direction::Decrease),
            (DeviceKind::AirConditioner, Gesture::RotateUp) => Some(Direction::Increase),
            (DeviceKind::AirConditioner, Gesture::RotateDown) => Some(Direction::Decrease),
            (DeviceKind::Tv, Gesture::SwipeRight) => Some(Direction::Increase),
            (DeviceKind::Tv, Gesture::SwipeLeft) => Some(Direction::Decrease),
            _ => None,
        }
    }
}

/// The fixed appliance set, keyed by the finger count that selects each one.
pub fn default_devices() -> DeviceMap {
    [
        Device::new(
            1,
            DeviceKind::AirConditioner,
            "Air conditioner",
            Attribute::new("temperature", Unit::DegreesCelsius, 25, 16, 30, 1),
        ),
        Device::new(2, DeviceKind::Fan, "Fan", Attribute::new("speed", Unit::Unitless, 1, 1, 3, 1)),
        Device::new(3, DeviceKind::Tv, "TV", Attribute::new("channel", Unit::Unitless, 1, 1, 99, 1)),
        Device::new(4, DeviceKind::Light, "Light", Attribute::new("brightness", Unit::Percentage, 50, 0, 100, 5)),
    ]
    .into_iter()
    .map(|device| (device.id, device))
    .collect()
}

impl Serialize for Device {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(7))?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("name", self.name())?;
        map.serialize_entry("label", &self.label)?;
        map.serialize_entry("power", &self.power)?;
        map.serialize_entry(self.attribute.name(), &self.attribute.value())?;
        map.serialize_entry("min", &self.attribute.minimum())?;
        map.serialize_entry("max", &self.attribute.maximum())?;
        map.end()
    }
}
