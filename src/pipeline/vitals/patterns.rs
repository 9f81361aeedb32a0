use std::sync::LazyLock;

use regex::Regex;

use crate::models::TemperatureScale;

/// A compiled vitals pattern with a short label for logs.
pub struct VitalPattern {
    pub regex: Regex,
    pub description: &'static str,
}

/// A temperature pattern and the scale its captured value is read in.
pub struct TemperaturePattern {
    pub regex: Regex,
    pub scale: TemperatureScale,
    pub description: &'static str,
}

// Digits are `[0-9]`, not `\d`: captures must parse with `str::parse`.

/// Blood pressure patterns, highest priority first.
/// Two capture groups read as systolic/diastolic; one group is used verbatim.
pub static BLOOD_PRESSURE_PATTERNS: LazyLock<Vec<VitalPattern>> = LazyLock::new(|| {
    vec![
        pattern(
            r"(?i)([0-9]+) ?/ ?([0-9]+) (?:mm ?hg|hg/mm|millimeters of mercury|mercury)",
            "Reading with unit: '120/80 mmHg'",
        ),
        pattern(
            r"(?i)(?:systolic|diastolic) ([0-9]+) (?:over|mmHg)",
            "Keyword: 'systolic 120 over'",
        ),
        pattern(r"(?i)bp ([0-9]+ ?/ ?[0-9]+)", "Label: 'bp 120/80'"),
        pattern(
            r"(?i)(?:blood ?pressure|bp) (?:is|was|of) ([0-9]+ ?/ ?[0-9]+)",
            "Phrase: 'blood pressure is 120/80'",
        ),
        pattern(
            r"(?i)(?:my|his|her|the patient's) (?:blood ?pressure|bp) (?:is|was) ([0-9]+)(?: and| over) ([0-9]+)",
            "Possessive phrase: 'her bp was 120 over 80'",
        ),
        pattern(r"(?i)([0-9]+) ?(?:over|/) ?([0-9]+)", "Generic: '120/80' or '120 over 80'"),
        pattern(r"(?i)bp is ([0-9]+) ([0-9]+)", "Space separated: 'bp is 120 80'"),
    ]
});

/// Heart rate patterns. Group 1 is always the rate.
pub static HEART_RATE_PATTERNS: LazyLock<Vec<VitalPattern>> = LazyLock::new(|| {
    vec![
        pattern(
            r"(?i)([0-9]+) (bpm|beats per minute|beats/minute|heartrate|rate)",
            "Suffix: '72 bpm'",
        ),
        pattern(r"(?i)heart rate ([0-9]+)", "Prefix: 'heart rate 72'"),
    ]
});

/// Temperature patterns. Group 1 is the value; `FromUnit` patterns capture
/// the unit letter in group 2.
pub static TEMPERATURE_PATTERNS: LazyLock<Vec<TemperaturePattern>> = LazyLock::new(|| {
    vec![
        temperature(
            r"(?i)([0-9]+(?:\.[0-9]+)?) (?:degrees )?c",
            TemperatureScale::Celsius,
            "Celsius: '38.5 degrees C'",
        ),
        temperature(
            r"(?i)([0-9]+(?:\.[0-9]+)?) (?:degrees )?f",
            TemperatureScale::Fahrenheit,
            "Fahrenheit: '98.6 F'",
        ),
        temperature(
            r"(?i)(?:temp|temperature) (?:is|was|of) ([0-9]+(?:\.[0-9]+)?)",
            TemperatureScale::Celsius,
            "Phrase: 'temp is 37.2'",
        ),
        temperature(
            r"(?i)([0-9]+(?:\.[0-9]+)?) (?:degrees|deg|°)(c|f)",
            TemperatureScale::FromUnit,
            "Degree symbol: '101 °F'",
        ),
        temperature(
            r"(?i)fever of ([0-9]+(?:\.[0-9]+)?)",
            TemperatureScale::Fahrenheit,
            "Fever: 'fever of 101'",
        ),
    ]
});

fn pattern(regex_str: &str, description: &'static str) -> VitalPattern {
    VitalPattern {
        regex: Regex::new(regex_str).expect("Invalid vitals regex pattern"),
        description,
    }
}

fn temperature(
    regex_str: &str,
    scale: TemperatureScale,
    description: &'static str,
) -> TemperaturePattern {
    TemperaturePattern {
        regex: Regex::new(regex_str).expect("Invalid temperature regex pattern"),
        scale,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_patterns_compile() {
        assert_eq!(BLOOD_PRESSURE_PATTERNS.len(), 7);
        assert_eq!(HEART_RATE_PATTERNS.len(), 2);
        assert_eq!(TEMPERATURE_PATTERNS.len(), 5);
    }

    #[test]
    fn patterns_are_case_insensitive() {
        assert!(BLOOD_PRESSURE_PATTERNS[0].regex.is_match("120/80 MMHG"));
        assert!(HEART_RATE_PATTERNS[0].regex.is_match("72 BPM"));
        assert!(TEMPERATURE_PATTERNS[4].regex.is_match("FEVER OF 101"));
    }

    #[test]
    fn from_unit_patterns_capture_the_unit() {
        for tp in TEMPERATURE_PATTERNS.iter() {
            if tp.scale == TemperatureScale::FromUnit {
                assert_eq!(tp.regex.captures_len(), 3, "{}", tp.description);
            }
        }
    }

    #[test]
    fn temperature_scales_in_priority_order() {
        let scales: Vec<_> = TEMPERATURE_PATTERNS.iter().map(|tp| tp.scale).collect();
        assert_eq!(
            scales,
            vec![
                TemperatureScale::Celsius,
                TemperatureScale::Fahrenheit,
                TemperatureScale::Celsius,
                TemperatureScale::FromUnit,
                TemperatureScale::Fahrenheit,
            ]
        );
    }

    #[test]
    fn generic_bp_pattern_accepts_over() {
        let caps = BLOOD_PRESSURE_PATTERNS[5]
            .regex
            .captures("bp as 200 over 100")
            .unwrap();
        assert_eq!(&caps[1], "200");
        assert_eq!(&caps[2], "100");
    }

    #[test]
    fn non_ascii_digits_do_not_match() {
        assert!(!HEART_RATE_PATTERNS[0].regex.is_match("\u{667}\u{662} bpm"));
        assert!(!TEMPERATURE_PATTERNS[0].regex.is_match("\u{663}\u{668} C"));
    }
}
