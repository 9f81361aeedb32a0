use std::fmt;

use serde::Serialize;

/// Category of vital sign recognized in free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VitalType {
    HeartRate,
    BloodPressure,
    Temperature,
}

impl VitalType {
    pub const ALL: [VitalType; 3] = [
        VitalType::HeartRate,
        VitalType::BloodPressure,
        VitalType::Temperature,
    ];

    /// Key of this category in the printed mapping.
    pub fn as_str(self) -> &'static str {
        match self {
            VitalType::HeartRate => "heart_rate",
            VitalType::BloodPressure => "blood_pressure",
            VitalType::Temperature => "temperature",
        }
    }
}

/// Scale a temperature pattern reads its value in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    /// Scale is taken from the unit letter captured by the pattern (`c` or `f`).
    FromUnit,
}

impl TemperatureScale {
    /// Resolve a unit letter such as `"C"` or `"f"`. Anything else reads as Celsius.
    pub fn from_unit(unit: &str) -> Self {
        if unit.eq_ignore_ascii_case("f") {
            TemperatureScale::Fahrenheit
        } else {
            TemperatureScale::Celsius
        }
    }

    /// Convert a reading on this scale to degrees Celsius.
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            TemperatureScale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            TemperatureScale::Celsius | TemperatureScale::FromUnit => value,
        }
    }
}

/// Vitals found in one piece of text. Each field is absent when no pattern
/// of its category matched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Vitals {
    /// Beats per minute.
    pub heart_rate: Option<u32>,
    /// "systolic/diastolic", or the captured reading verbatim.
    pub blood_pressure: Option<String>,
    /// Degrees Celsius, one decimal.
    pub temperature: Option<f64>,
}

impl Vitals {
    pub fn is_empty(&self) -> bool {
        self.heart_rate.is_none() && self.blood_pressure.is_none() && self.temperature.is_none()
    }

    /// Categories with a value present, in field order.
    pub fn found(&self) -> Vec<VitalType> {
        VitalType::ALL
            .into_iter()
            .filter(|vt| match vt {
                VitalType::HeartRate => self.heart_rate.is_some(),
                VitalType::BloodPressure => self.blood_pressure.is_some(),
                VitalType::Temperature => self.temperature.is_some(),
            })
            .collect()
    }
}

impl fmt::Display for Vitals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
