//! Property-based tests for numbering schemes.

use proptest::prelude::*;

use super::scheme::NumberingScheme;

/// Strategy to generate a prefix that does not end in a digit.
fn prefix() -> impl Strategy<Value = String> {
    "[A-Z]{1,5}"
}

/// Strategy to generate a pad length in the allowed settings range.
fn pad_length() -> impl Strategy<Value = u32> {
    4u32..=10u32
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Rendering a sequence and scanning the result yields the next
    /// sequence, for any prefix that does not end in a digit.
    #[test]
    fn prop_render_scan_round_trip(
        prefix in prefix(),
        pad in pad_length(),
        sequence in 1u64..1_000_000_000u64,
    ) {
        let scheme = NumberingScheme::new(prefix, pad);
        let rendered = scheme.render(sequence);
        prop_assert_eq!(scheme.next_after(Some(&rendered)), sequence + 1);
    }

    /// Rendered numbers keep the prefix and respect the minimum width.
    #[test]
    fn prop_rendered_length_honors_padding(
        prefix in prefix(),
        pad in pad_length(),
        sequence in 1u64..u64::MAX,
    ) {
        let scheme = NumberingScheme::new(prefix.clone(), pad);
        let rendered = scheme.render(sequence);
        prop_assert!(rendered.starts_with(&prefix));
        prop_assert!(rendered.len() >= prefix.len() + pad as usize);
    }

    /// The sequence is recoverable from the rendered digits, so padding
    /// never drops information.
    #[test]
    fn prop_sequence_survives_rendering(
        prefix in prefix(),
        pad in pad_length(),
        sequence in 1u64..u64::MAX,
    ) {
        let scheme = NumberingScheme::new(prefix.clone(), pad);
        let rendered = scheme.render(sequence);
        let digits = &rendered[prefix.len()..];
        prop_assert_eq!(digits.parse::<u64>().unwrap(), sequence);
    }
}
