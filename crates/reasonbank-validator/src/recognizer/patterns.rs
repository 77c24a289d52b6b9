use std::sync::OnceLock;

use regex::Regex;

use reasonbank_core::model::Family;

use super::{int, int_list, pattern, Recognizer};

/// A "sequence" followed by a numeric list, asserting a doubling rule.
///
/// Matches anywhere in the text. Texts that name a sequence without claiming
/// it doubles are declined.
pub struct DoublingSequence;

impl Recognizer for DoublingSequence {
    fn name(&self) -> &'static str {
        "doubling-sequence"
    }

    fn family(&self) -> Family {
        Family::Patterns
    }

    fn recompute(&self, text: &str) -> Option<bool> {
        static SEQUENCE: OnceLock<Regex> = OnceLock::new();
        static DOUBLING: OnceLock<Regex> = OnceLock::new();

        let caps = pattern(&SEQUENCE, r"(?i)\bsequence\s+(-?\d+(?:\s*,\s*-?\d+)*)")
            .captures(text)?;
        if !pattern(&DOUBLING, r"(?i)\bdoubles each step\b").is_match(text) {
            return None;
        }

        let values = int_list(caps.get(1)?.as_str())?;
        if values.len() < 2 {
            return None;
        }
        let mut doubles = true;
        for pair in values.windows(2) {
            doubles &= pair[0].checked_mul(2)? == pair[1];
        }
        Some(doubles)
    }
}

/// "In the pattern T1, T2, ..., the next number is N."
///
/// Needs at least two evenly spaced terms to infer the step.
pub struct ArithmeticSequence;

impl Recognizer for ArithmeticSequence {
    fn name(&self) -> &'static str {
        "arithmetic-sequence"
    }

    fn family(&self) -> Family {
        Family::Patterns
    }

    fn recompute(&self, text: &str) -> Option<bool> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let caps = pattern(
            &PATTERN,
            r"(?i)^in the pattern (-?\d+(?:, -?\d+)*), the next number is (-?\d+)\.$",
        )
        .captures(text)?;

        let terms = int_list(caps.get(1)?.as_str())?;
        let proposal = int(&caps, 2)?;
        if terms.len() < 2 {
            return None;
        }
        let step = terms[1].checked_sub(terms[0])?;
        for pair in terms.windows(2) {
            if pair[1].checked_sub(pair[0])? != step {
                return None;
            }
        }
        let next = terms.last()?.checked_add(step)?;
        Some(next == proposal)
    }
}

/// "In the repeating pattern 'BLOCK', position P is 'S'."
///
/// Positions are 1-indexed. Symbols compare case-sensitively.
pub struct RepeatingPattern;

impl Recognizer for RepeatingPattern {
    fn name(&self) -> &'static str {
        "repeating-pattern"
    }

    fn family(&self) -> Family {
        Family::Patterns
    }

    fn recompute(&self, text: &str) -> Option<bool> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let caps = pattern(
            &PATTERN,
            r"(?i)^in the repeating pattern '([a-z0-9]+)', position (\d+) is '([a-z0-9])'\.$",
        )
        .captures(text)?;

        let block = caps.get(1)?.as_str().as_bytes();
        let position: u64 = caps.get(2)?.as_str().parse().ok()?;
        let symbol = caps.get(3)?.as_str().as_bytes()[0];
        if position == 0 {
            return None;
        }
        let index = usize::try_from((position - 1) % block.len() as u64).ok()?;
        Some(block[index] == symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reasonbank_core::generator::patterns;

    #[test]
    fn doubling_sequences() {
        assert_eq!(
            DoublingSequence.recompute("The sequence 2, 4, 8, 16 doubles each step."),
            Some(true)
        );
        assert_eq!(
            DoublingSequence.recompute("The sequence 2, 4, 9 doubles each step."),
            Some(false)
        );
        assert_eq!(
            DoublingSequence.recompute("This sequence -3,-6, -12 doubles each step"),
            Some(true)
        );
        assert_eq!(
            DoublingSequence.recompute("The sequence 0, 0, 0 doubles each step."),
            Some(true)
        );
    }

    #[test]
    fn doubling_declines_without_rule_or_terms() {
        // No doubling claim.
        assert_eq!(DoublingSequence.recompute("The sequence 2, 4, 8 grows."), None);
        assert_eq!(DoublingSequence.recompute("The sequence 2, 4, 8 keeps doubling."), None);
        // A single number says nothing about doubling.
        assert_eq!(DoublingSequence.recompute("The sequence 7 doubles each step."), None);
        assert_eq!(DoublingSequence.recompute("Numbers 2, 4, 8 double."), None);
    }

    #[test]
    fn arithmetic_sequences() {
        assert_eq!(
            ArithmeticSequence.recompute("In the pattern 3, 5, 7, the next number is 9."),
            Some(true)
        );
        assert_eq!(
            ArithmeticSequence.recompute("In the pattern 3, 5, 7, the next number is 10."),
            Some(false)
        );
        assert_eq!(
            ArithmeticSequence.recompute("In the pattern 10, 7, 4, the next number is 1."),
            Some(true)
        );
        // Uneven spacing and single terms are not this template.
        assert_eq!(
            ArithmeticSequence.recompute("In the pattern 1, 2, 4, the next number is 8."),
            None
        );
        assert_eq!(
            ArithmeticSequence.recompute("In the pattern 5, the next number is 8."),
            None
        );
    }

    #[test]
    fn repeating_patterns() {
        assert_eq!(
            RepeatingPattern.recompute("In the repeating pattern 'AB', position 3 is 'A'."),
            Some(true)
        );
        assert_eq!(
            RepeatingPattern.recompute("In the repeating pattern 'AB', position 4 is 'A'."),
            Some(false)
        );
        assert_eq!(
            RepeatingPattern.recompute("In the repeating pattern 'AB', position 1 is 'a'."),
            Some(false)
        );
        assert_eq!(
            RepeatingPattern.recompute("In the repeating pattern 'AB', position 0 is 'A'."),
            None
        );
    }

    #[test]
    fn agrees_with_generators() {
        for (start, step, length, proposal) in [(3, 2, 4, 11), (3, 2, 4, 12), (-5, 0, 3, -5)] {
            let item =
                patterns::next_in_arithmetic_sequence(start, step, length, proposal).unwrap();
            assert_eq!(ArithmeticSequence.recompute(&item.text), Some(item.answer));
        }
        for values in [&[1, 2, 4][..], &[5, 10, 21], &[-1, -2]] {
            let item = patterns::doubling_sequence(values).unwrap();
            assert_eq!(DoublingSequence.recompute(&item.text), Some(item.answer));
        }
        for (position, proposal) in [(1, 'x'), (5, 'y'), (6, 'z'), (6, 'x')] {
            let item = patterns::repeating_block("xyz", position, proposal).unwrap();
            assert_eq!(RepeatingPattern.recompute(&item.text), Some(item.answer));
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn doubling_matches_generator(values in prop::collection::vec(-1000i64..1000, 2..8)) {
                let item = patterns::doubling_sequence(&values).unwrap();
                prop_assert_eq!(DoublingSequence.recompute(&item.text), Some(item.answer));
            }

            #[test]
            fn repeating_matches_generator(
                block in "[a-zA-Z0-9]{1,6}",
                position in 1u64..500,
                proposal in prop::char::range('a', 'e'),
            ) {
                let item = patterns::repeating_block(&block, position, proposal).unwrap();
                prop_assert_eq!(RepeatingPattern.recompute(&item.text), Some(item.answer));
            }
        }
    }
}
