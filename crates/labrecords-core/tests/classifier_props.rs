//! Property tests for reference-range classification.

use labrecords_core::{classify, Status};
use proptest::prelude::*;

/// Bound rendered the way ranges are typed: integer or one-to-three decimals.
fn bound() -> impl Strategy<Value = f64> {
    prop_oneof![
        (0u32..10_000).prop_map(f64::from),
        (0u32..1_000_000).prop_map(|n| f64::from(n) / 1000.0),
    ]
}

fn render(x: f64) -> String {
    let s = format!("{x:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

proptest! {
    #[test]
    fn bounded_range_matches_inclusive_interval(
        a in bound(),
        b in bound(),
        value in -100.0f64..20_000.0,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let range = format!("{}-{}", render(low), render(high));
        let status = classify(value, &range);

        prop_assert_eq!(status == Status::Low, value < low);
        prop_assert_eq!(status == Status::High, value > high);
        prop_assert_eq!(status == Status::Normal, low <= value && value <= high);
    }

    #[test]
    fn below_is_high_at_or_above_bound(high in bound(), value in -100.0f64..20_000.0) {
        let range = format!("<{}", render(high));
        let expected = if value >= high { Status::High } else { Status::Normal };
        prop_assert_eq!(classify(value, &range), expected);
        prop_assert_eq!(classify(high, &range), Status::High);
    }

    #[test]
    fn below_accepts_bare_fraction_bounds(frac in 1u32..1000, value in -10.0f64..10.0) {
        let range = format!("<.{frac:03}");
        let high = f64::from(frac) / 1000.0;
        let expected = if value >= high { Status::High } else { Status::Normal };
        prop_assert_eq!(classify(value, &range), expected);
    }

    #[test]
    fn up_to_is_high_only_above_bound(high in bound(), value in -100.0f64..20_000.0) {
        let spaced = format!("Up to {}", render(high));
        let joined = format!("upto {}", render(high));
        let expected = if value > high { Status::High } else { Status::Normal };

        prop_assert_eq!(classify(value, &spaced), expected);
        prop_assert_eq!(classify(value, &joined), expected);
        prop_assert_eq!(classify(high, &spaced), Status::Normal);
    }

    #[test]
    fn en_dash_and_whitespace_are_insignificant(
        a in bound(),
        b in bound(),
        value in -100.0f64..20_000.0,
        pad in "[ \t]{0,3}",
    ) {
        let plain = format!("{}-{}", render(a), render(b));
        let fancy = format!("{pad}{}{pad}\u{2013}{pad}{}{pad}", render(a), render(b));
        prop_assert_eq!(classify(value, &plain), classify(value, &fancy));
    }

    #[test]
    fn classification_is_deterministic(value in any::<f64>(), range in ".{0,40}") {
        prop_assert_eq!(classify(value, &range), classify(value, &range));
    }

    #[test]
    fn text_without_digits_is_normal(value in any::<f64>(), range in "[a-zA-Z:; -]{0,40}") {
        prop_assert_eq!(classify(value, &range), Status::Normal);
    }
}
