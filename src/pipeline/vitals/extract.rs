use regex::Captures;

use crate::models::{TemperatureScale, Vitals};

use super::patterns::{
    TemperaturePattern, VitalPattern, BLOOD_PRESSURE_PATTERNS, HEART_RATE_PATTERNS,
    TEMPERATURE_PATTERNS,
};

/// Extract heart rate, blood pressure and temperature from free text.
///
/// Each category is resolved independently: its patterns are tried in
/// priority order and the first one that matches anywhere in the text
/// decides the value. A category with no match stays `None`.
pub fn extract_vitals(text: &str) -> Vitals {
    let vitals = Vitals {
        heart_rate: extract_heart_rate(text),
        blood_pressure: extract_blood_pressure(text),
        temperature: extract_temperature(text),
    };

    let found: Vec<&str> = vitals.found().into_iter().map(|vt| vt.as_str()).collect();
    tracing::debug!(?found, "Vitals extraction complete");
    vitals
}

/// Blood pressure as "systolic/diastolic", or the single captured group verbatim.
pub fn extract_blood_pressure(text: &str) -> Option<String> {
    let (vp, caps) = first_match(&BLOOD_PRESSURE_PATTERNS, text)?;
    tracing::debug!(pattern = vp.description, "Blood pressure matched");

    if vp.regex.captures_len() == 3 {
        Some(format!("{}/{}", caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    } else {
        caps.get(1).map(|m| m.as_str().to_string())
    }
}

/// Heart rate in beats per minute.
pub fn extract_heart_rate(text: &str) -> Option<u32> {
    let (vp, caps) = first_match(&HEART_RATE_PATTERNS, text)?;
    tracing::debug!(pattern = vp.description, "Heart rate matched");

    let raw = caps.get(1)?.as_str();
    match raw.parse::<u32>() {
        Ok(rate) => Some(rate),
        Err(e) => {
            tracing::debug!(value = raw, "Heart rate not representable: {e}");
            None
        }
    }
}

/// Temperature in degrees Celsius, rounded to one decimal.
pub fn extract_temperature(text: &str) -> Option<f64> {
    let (tp, caps) = first_temperature_match(text)?;
    tracing::debug!(pattern = tp.description, "Temperature matched");

    let raw = caps.get(1)?.as_str();
    let value = match raw.parse::<f64>() {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!(value = raw, "Temperature not parseable: {e}");
            return None;
        }
    };

    let scale = match tp.scale {
        TemperatureScale::FromUnit => caps
            .get(2)
            .map(|m| TemperatureScale::from_unit(m.as_str()))
            .unwrap_or(TemperatureScale::Celsius),
        scale => scale,
    };

    Some(round_one_decimal(scale.to_celsius(value)))
}

fn first_match<'p, 't>(
    patterns: &'p [VitalPattern],
    text: &'t str,
) -> Option<(&'p VitalPattern, Captures<'t>)> {
    patterns
        .iter()
        .find_map(|vp| vp.regex.captures(text).map(|caps| (vp, caps)))
}

fn first_temperature_match(text: &str) -> Option<(&'static TemperaturePattern, Captures<'_>)> {
    TEMPERATURE_PATTERNS
        .iter()
        .find_map(|tp| tp.regex.captures(text).map(|caps| (tp, caps)))
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
