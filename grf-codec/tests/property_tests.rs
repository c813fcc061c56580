#![expect(
    clippy::expect_used,
    reason = "property tests use expect for readable failures"
)]

//! Property-based tests for text rendering and policy remapping.
//!
//! # Invariants tested
//!
//! - **Six digits:** every finite number renders with exactly six fractional
//!   digits and a period separator.
//! - **Length clamp:** lengths below the display minimum never render as a
//!   number.
//! - **Deterministic remap:** the U-turn remap depends only on the policy.
//! - **Total decoding:** arbitrary geometry text never panics and never
//!   yields a coordinate from an error.

use grf_codec::format::{format_length, format_number, format_time, minutes_to_days};
use grf_codec::geometry::decode_compressed_geometry;
use grf_codec::{BacktrackPolicy, ExportOptions, UnitSystem};
use grf_core::UTurnPolicy;
use proptest::prelude::*;

fn uturn_policy() -> impl Strategy<Value = UTurnPolicy> {
    prop_oneof![
        Just(UTurnPolicy::Nowhere),
        Just(UTurnPolicy::AtDeadEnds),
        Just(UTurnPolicy::AtDeadEndsAndIntersections),
    ]
}

fn unit_system() -> impl Strategy<Value = UnitSystem> {
    prop_oneof![Just(UnitSystem::Metric), Just(UnitSystem::UsCustomary)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: numeric text always carries six fractional digits.
    #[test]
    fn numbers_have_six_fractional_digits(value in -1.0e9_f64..1.0e9_f64) {
        let text = format_number(value);
        let (whole, fraction) = text.split_once('.').expect("decimal point present");
        prop_assert_eq!(fraction.len(), 6);
        prop_assert!(fraction.chars().all(|ch| ch.is_ascii_digit()));
        prop_assert!(!whole.is_empty());
        prop_assert!(!text.contains(','));
        prop_assert_ne!(text.as_str(), "-0.000000");
    }

    /// Property: lengths under the display minimum are shown as "< 0.1".
    #[test]
    fn short_lengths_are_clamped(miles in 0.0_f64..0.06_f64, units in unit_system()) {
        let options = ExportOptions::new(units);
        let text = format_length(miles, &options);
        prop_assert!(text.starts_with("< 0.1 "), "unexpected length text {}", text);
    }

    /// Property: time text is never empty and never mentions zero units.
    #[test]
    fn time_text_omits_zero_clauses(minutes in 0.0_f64..10_000.0_f64) {
        let text = format_time(minutes_to_days(minutes), &ExportOptions::default());
        prop_assert!(!text.is_empty());
        prop_assert!(!text.starts_with("0 "));
        prop_assert!(!text.contains(" 0 "));
    }

    /// Property: the remap is a pure function of the policy.
    #[test]
    fn uturn_remap_is_deterministic(policy in uturn_policy()) {
        let first = BacktrackPolicy::from_uturn(policy);
        let second = BacktrackPolicy::from_uturn(policy);
        prop_assert_eq!(first, second);
        if policy == UTurnPolicy::AtDeadEndsAndIntersections {
            prop_assert_eq!(first.as_str(), "allow");
            prop_assert!(!BacktrackPolicy::is_exact_for(policy));
        }
    }

    /// Property: decoding arbitrary text terminates without panicking.
    #[test]
    fn decoding_arbitrary_text_is_total(encoded in "[+\\-0-9a-vA-Z|]{0,40}") {
        if let Ok(points) = decode_compressed_geometry(&encoded) {
            prop_assert!(!points.is_empty());
            prop_assert!(points.iter().all(|point| point.x.is_finite() && point.y.is_finite()));
        }
    }
}
