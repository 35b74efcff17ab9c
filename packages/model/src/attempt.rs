use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged drive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attempt {
    pub date: DateTime<Utc>,
    /// Distance in meters
    pub value: f64,
}

impl Attempt {
    pub fn new(date: DateTime<Utc>, value: f64) -> Self {
        Self { date, value }
    }
}

/// Format meters with one or two fraction digits
pub fn format_distance(meters: f64) -> String {
    let formatted = format!("{:.2}", meters);
    match formatted.strip_suffix('0') {
        Some(trimmed) if !trimmed.ends_with('.') => trimmed.to_string(),
        _ => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(250.0, "250.0")]
    #[case(250.5, "250.5")]
    #[case(250.25, "250.25")]
    #[case(250.257, "250.26")]
    #[case(0.0, "0.0")]
    #[case(99.999, "100.0")]
    fn test_format_distance(#[case] meters: f64, #[case] expected: &str) {
        assert_eq!(format_distance(meters), expected);
    }
}
