use std::fmt::Display;
use thiserror::Error;

/// The single adjustable, bounded value every appliance exposes.
#[derive(Clone, PartialEq, Debug)]
pub struct Attribute {
    name: &'static str,
    unit: Unit,
    value: i64,
    minimum: i64,
    maximum: i64,
    step: i64,
}

impl Attribute {
    pub fn new(name: &'static str, unit: Unit, value: i64, minimum: i64, maximum: i64, step: i64) -> Self {
        Attribute {
            name,
            unit,
            value,
            minimum,
            maximum,
            step,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn minimum(&self) -> i64 {
        self.minimum
    }

    pub fn maximum(&self) -> i64 {
        self.maximum
    }

    pub fn validate_value(&self, value: i64) -> ValidatedValue {
        if value < self.minimum {
            return ValidatedValue::Clamped(self.minimum, AttributeError::ValueTooSmall);
        }

        if value > self.maximum {
            return ValidatedValue::Clamped(self.maximum, AttributeError::ValueTooLarge);
        }

        ValidatedValue::Valid(value)
    }

    /// Moves the value one step in `direction`, never leaving `[minimum, maximum]`.
    pub fn adjust(&mut self, direction: Direction) -> ValidatedValue {
        let target = match direction {
            Direction::Increase => self.value.saturating_add(self.step),
            Direction::Decrease => self.value.saturating_sub(self.step),
        };

        let validated = self.validate_value(target);
        self.value = match validated {
            ValidatedValue::Valid(value) | ValidatedValue::Clamped(value, _) => value,
        };
        validated
    }

    pub fn value_string(&self) -> String {
        format!("{}{}", self.value, self.unit.symbol())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Increase,
    Decrease,
}

#[derive(PartialEq, Debug)]
pub enum ValidatedValue {
    Valid(i64),
    Clamped(i64, AttributeError),
}

#[derive(Error, Debug, PartialEq)]
pub enum AttributeError {
    #[error("value is below the minimum")]
    ValueTooSmall,
    #[error("value is above the maximum")]
    ValueTooLarge,
}

#[derive(Clone, PartialEq, Debug)]
pub enum Unit {
    DegreesCelsius,
    Unitless,
    Percentage,
}

impl Unit {
    pub fn symbol(&self) -> &str {
        match self {
            Unit::DegreesCelsius => "°C",
            Unit::Unitless => "",
            Unit::Percentage => "%",
        }
    }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.value_string())
    }
}
