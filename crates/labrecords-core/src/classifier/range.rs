//! Reference range expression parser.
//!
//! Accepted shapes, after normalization:
//! - `LOW-HIGH` (inclusive bounded range)
//! - `<HIGH` (value must stay strictly below HIGH; HIGH is any float literal)
//! - `Up to HIGH` / `Upto HIGH` (value may equal HIGH)
//!
//! Everything else parses to [`ReferenceRange::Unrecognized`].

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::Status;

/// Dash variants folded to a plain hyphen before matching.
///
/// The second entry is an en-dash whose UTF-8 bytes were decoded as
/// Windows-1252 somewhere upstream.
const DASH_VARIANTS: [&str; 2] = ["\u{2013}", "\u{00e2}\u{20ac}\u{201c}"];

/// Whole-string `number-number`.
static BOUNDED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+(?:\.[0-9]+)?)-([0-9]+(?:\.[0-9]+)?)$").expect("bounded range pattern")
});

/// First unsigned decimal anywhere in the string.
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("number pattern"));

const UP_TO_PREFIX: &str = "upto";

/// Parsed shape of a free-text reference range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ReferenceRange {
    /// `LOW-HIGH`, both ends inclusive.
    Bounded { low: f64, high: f64 },
    /// `<HIGH`, high when `value >= high`.
    Below { high: f64 },
    /// `Up to HIGH`, high when `value > high`.
    UpTo { high: f64 },
    /// Any other text, including multi-range and qualitative ranges.
    Unrecognized,
}

impl ReferenceRange {
    /// Parse a reference range expression. Never fails.
    pub fn parse(expr: &str) -> Self {
        let normalized = normalize(expr);

        if let Some((low, high)) = parse_bounded(&normalized) {
            return Self::Bounded { low, high };
        }

        if let Some(rest) = normalized.strip_prefix('<') {
            return rest
                .parse::<f64>()
                .ok()
                .map(|high| Self::Below { high })
                .unwrap_or(Self::Unrecognized);
        }

        if normalized.to_lowercase().starts_with(UP_TO_PREFIX) {
            return first_number(&normalized)
                .map(|high| Self::UpTo { high })
                .unwrap_or(Self::Unrecognized);
        }

        Self::Unrecognized
    }

    /// Classify a value against this range.
    pub fn classify(&self, value: f64) -> Status {
        match *self {
            Self::Bounded { low, high } => {
                if value < low {
                    Status::Low
                } else if value > high {
                    Status::High
                } else {
                    Status::Normal
                }
            }
            Self::Below { high } if value >= high => Status::High,
            Self::UpTo { high } if value > high => Status::High,
            _ => Status::Normal,
        }
    }

    /// Whether the expression matched one of the known shapes.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized)
    }
}

/// Fold dash variants to `-` and strip all whitespace.
pub fn normalize(expr: &str) -> String {
    let mut folded = expr.to_string();
    for dash in DASH_VARIANTS {
        if folded.contains(dash) {
            folded = folded.replace(dash, "-");
        }
    }
    folded.chars().filter(|c| !c.is_whitespace()).collect()
}

fn parse_bounded(normalized: &str) -> Option<(f64, f64)> {
    let caps = BOUNDED.captures(normalized)?;
    let low = caps.get(1)?.as_str().parse::<f64>().ok()?;
    let high = caps.get(2)?.as_str().parse::<f64>().ok()?;
    Some((low, high))
}

fn first_number(normalized: &str) -> Option<f64> {
    NUMBER.find(normalized)?.as_str().parse::<f64>().ok()
}
