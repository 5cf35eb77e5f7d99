use crate::collectors::text::normalize;
use proptest::prelude::*;

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_normalize_steps() {
        // "  a b  c   d  " after line breaks, " a b c d " after collapsing
        assert_eq!(normalize("  a\nb\t\tc   d  "), "a b c d");
    }

    #[test]
    fn test_normalize_line_breaks() {
        assert_eq!(normalize("Line 1\r\nLine 2"), "Line 1 Line 2");
        assert_eq!(normalize("\tindented"), "indented");
        assert_eq!(normalize("trailing\n"), "trailing");
    }

    #[test]
    fn test_normalize_empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" "), "");
        assert_eq!(normalize("     "), "");
        assert_eq!(normalize("\n\t\r"), "");
    }

    #[test]
    fn test_normalize_only_touches_ascii_space() {
        // Non-breaking spaces are not collapsed
        assert_eq!(normalize("a\u{a0}\u{a0}b"), "a\u{a0}\u{a0}b");

        // Trim is bounded to one space character at each end, so other
        // whitespace in front of it stops the trim
        assert_eq!(normalize("\u{0c} x \u{0c}"), "\u{0c} x \u{0c}");
    }

    #[test]
    fn test_normalize_keeps_punctuation() {
        assert_eq!(normalize("a | b"), "a | b");
        assert_eq!(
            normalize("Visit https://example.com/path?q=1  now."),
            "Visit https://example.com/path?q=1 now."
        );
    }

    #[test]
    fn test_normalize_is_idempotent_on_samples() {
        let samples = [
            "",
            " ",
            "plain",
            "  a\nb\t\tc   d  ",
            "\r\n\r\nx\r\n\r\n",
            " \t mixed \n\n whitespace \t ",
            "a\u{a0} b",
            "\u{0c}  y  ",
        ];

        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "input {:?}", sample);
        }
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;

    fn assert_collapsed(output: &str) -> Result<(), TestCaseError> {
        prop_assert!(!output.contains(['\r', '\n', '\t']), "line break left in {:?}", output);
        prop_assert!(!output.contains("  "), "double space left in {:?}", output);
        Ok(())
    }

    proptest! {
        #[test]
        fn test_normalize_is_idempotent(input in any::<String>()) {
            let once = normalize(&input);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn test_normalize_is_idempotent_on_whitespace(input in "[ \t\r\na]*") {
            let once = normalize(&input);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn test_normalize_leaves_no_line_breaks_or_double_spaces(input in any::<String>()) {
            assert_collapsed(&normalize(&input))?;
        }

        #[test]
        fn test_normalize_collapses_whitespace_runs(input in "[ \t\r\na]*") {
            let output = normalize(&input);
            assert_collapsed(&output)?;
            prop_assert!(!output.starts_with(' ') && !output.ends_with(' '));
            prop_assert_eq!(output.matches('a').count(), input.matches('a').count());
        }
    }
}
