//! Reference-range classification for lab results.
//!
//! A test value is compared against the free-text normal range stored with
//! the test. Unparseable ranges never raise; they classify as
//! [`Status::Normal`].

mod range;

pub use range::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a value falls relative to its reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Normal,
    Low,
    High,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Normal => "Normal",
            Status::Low => "Low",
            Status::High => "High",
        }
    }

    /// Low or High.
    pub fn is_abnormal(&self) -> bool {
        !matches!(self, Status::Normal)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify `value` against a free-text reference range.
///
/// Rules, first match wins:
/// 1. `LOW-HIGH`: `Low` below `low`, `High` above `high`, inclusive bounds.
/// 2. `<HIGH`: `High` when `value >= high`.
/// 3. `Up to HIGH`: `High` when `value > high`.
/// 4. Anything else: `Normal`.
pub fn classify(value: f64, range_expr: &str) -> Status {
    ReferenceRange::parse(range_expr).classify(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_scenarios() {
        assert_eq!(classify(30.0, "32-36"), Status::Low);
        assert_eq!(classify(36.0, "32-36"), Status::Normal);
        assert_eq!(classify(37.0, "32-36"), Status::High);
    }

    #[test]
    fn test_below_scenarios() {
        assert_eq!(classify(1.1, "<1.1"), Status::High);
        assert_eq!(classify(1.09, "<1.1"), Status::Normal);
    }

    #[test]
    fn test_up_to_scenarios() {
        assert_eq!(classify(60.0, "Up to 60"), Status::Normal);
        assert_eq!(classify(60.1, "Up to 60"), Status::High);
        assert_eq!(classify(60.1, "upto 60"), Status::High);
    }

    #[test]
    fn test_en_dash_and_spacing() {
        assert_eq!(classify(31.0, "32 \u{2013} 36"), classify(31.0, "32-36"));
        assert_eq!(classify(34.0, "32 \u{2013} 36"), Status::Normal);
    }

    #[test]
    fn test_fallback_to_normal() {
        assert_eq!(classify(1000.0, "garbage text"), Status::Normal);
        assert_eq!(classify(0.0, "M: 13-16; F: 11.5-14.5"), Status::Normal);
        assert_eq!(classify(-100.0, "-5-5"), Status::Normal);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::High.to_string(), "High");
        assert!(Status::Low.is_abnormal());
        assert!(!Status::Normal.is_abnormal());
    }

    #[test]
    fn test_status_serializes_as_label() {
        assert_eq!(serde_json::to_string(&Status::Low).unwrap(), "\"Low\"");
    }
}
