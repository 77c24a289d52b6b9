//! Pattern items: arithmetic sequences, repeating blocks and doubling runs.

use crate::error::{GenerateError, Result};
use crate::generator::{checked_item, comma_list};
use crate::lint::ESL_MAX_WORDS;
use crate::model::{Family, Item};

pub const FAMILY: Family = Family::Patterns;

/// "In the pattern {preview}, the next number is {proposal}."
///
/// The preview shows the first `length` terms `start, start + step, ...`;
/// the true next term is `start + step * length`.
pub fn next_in_arithmetic_sequence(
    start: i64,
    step: i64,
    length: usize,
    proposal: i64,
) -> Result<Item> {
    if length == 0 {
        return Err(GenerateError::EmptySequence);
    }
    if length > ESL_MAX_WORDS {
        return Err(GenerateError::TooManyTerms(length));
    }

    let term = |i: usize| i128::from(start) + i128::from(step) * i as i128;
    let preview = comma_list((0..length).map(term));
    let text = format!("In the pattern {preview}, the next number is {proposal}.");
    checked_item(text, i128::from(proposal) == term(length), FAMILY)
}

/// "In the repeating pattern '{block}', position {position} is '{proposal}'."
///
/// Positions are 1-indexed and wrap around the block.
pub fn repeating_block(block: &str, position: u64, proposal: char) -> Result<Item> {
    if block.is_empty() {
        return Err(GenerateError::EmptyBlock);
    }
    if position == 0 {
        return Err(GenerateError::InvalidPosition(position));
    }
    if let Some(bad) = block
        .chars()
        .chain(std::iter::once(proposal))
        .find(|c| !c.is_ascii_alphanumeric())
    {
        return Err(GenerateError::InvalidSymbol(bad));
    }

    let symbols = block.as_bytes();
    let index = ((position - 1) % symbols.len() as u64) as usize;
    let expected = char::from(symbols[index]);

    let text = format!("In the repeating pattern '{block}', position {position} is '{proposal}'.");
    checked_item(text, proposal == expected, FAMILY)
}

/// "The sequence {values} doubles each step."
pub fn doubling_sequence(values: &[i64]) -> Result<Item> {
    if values.len() < 2 {
        return Err(GenerateError::SequenceTooShort(values.len()));
    }
    if values.len() > ESL_MAX_WORDS {
        return Err(GenerateError::TooManyTerms(values.len()));
    }

    let answer = values
        .windows(2)
        .all(|pair| i128::from(pair[1]) == 2 * i128::from(pair[0]));
    let text = format!("The sequence {} doubles each step.", comma_list(values));
    checked_item(text, answer, FAMILY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::test_support::assert_clean_text;
    use crate::lint::TextViolation;

    #[test]
    fn arithmetic_sequence() {
        let item = next_in_arithmetic_sequence(2, 3, 4, 14).unwrap();
        assert_eq!(item.text, "In the pattern 2, 5, 8, 11, the next number is 14.");
        assert!(item.answer);
        assert!(!next_in_arithmetic_sequence(2, 3, 4, 13).unwrap().answer);
        assert!(next_in_arithmetic_sequence(10, -4, 3, -2).unwrap().answer);
        assert_clean_text(&item);
    }

    #[test]
    fn arithmetic_sequence_single_term() {
        let item = next_in_arithmetic_sequence(7, 5, 1, 12).unwrap();
        assert_eq!(item.text, "In the pattern 7, the next number is 12.");
        assert!(item.answer);
    }

    #[test]
    fn arithmetic_sequence_preconditions() {
        assert_eq!(
            next_in_arithmetic_sequence(1, 1, 0, 1).unwrap_err(),
            GenerateError::EmptySequence
        );
        assert_eq!(
            next_in_arithmetic_sequence(1, 1, 100, 101).unwrap_err(),
            GenerateError::TooManyTerms(100)
        );
        // 8 template words plus 18 terms overflows the ESL limit.
        let err = next_in_arithmetic_sequence(1, 1, 18, 19).unwrap_err();
        assert!(matches!(
            err.text_violation(),
            Some(TextViolation::TooLong { words: 26, .. })
        ));
        assert!(next_in_arithmetic_sequence(1, 1, 17, 18).is_ok());
    }

    #[test]
    fn repeating_block_scenario() {
        let item = repeating_block("AB", 3, 'A').unwrap();
        assert_eq!(
            item.text,
            "In the repeating pattern 'AB', position 3 is 'A'."
        );
        assert!(item.answer);
        assert!(!repeating_block("AB", 3, 'B').unwrap().answer);
        assert!(repeating_block("AB", 2, 'B').unwrap().answer);
        assert!(repeating_block("XYZ", 1, 'X').unwrap().answer);
        assert!(repeating_block("XYZ", 9, 'Z').unwrap().answer);
        assert_clean_text(&item);
    }

    #[test]
    fn repeating_block_preconditions() {
        assert_eq!(
            repeating_block("", 1, 'A').unwrap_err(),
            GenerateError::EmptyBlock
        );
        assert_eq!(
            repeating_block("AB", 0, 'A').unwrap_err(),
            GenerateError::InvalidPosition(0)
        );
        assert_eq!(
            repeating_block("A'B", 1, 'A').unwrap_err(),
            GenerateError::InvalidSymbol('\'')
        );
        assert_eq!(
            repeating_block("AB", 1, '.').unwrap_err(),
            GenerateError::InvalidSymbol('.')
        );
    }

    #[test]
    fn doubling() {
        let item = doubling_sequence(&[3, 6, 12, 24]).unwrap();
        assert_eq!(item.text, "The sequence 3, 6, 12, 24 doubles each step.");
        assert!(item.answer);
        assert!(!doubling_sequence(&[3, 6, 13]).unwrap().answer);
        assert!(doubling_sequence(&[-2, -4, -8]).unwrap().answer);
        assert!(doubling_sequence(&[0, 0]).unwrap().answer);
        assert!(!doubling_sequence(&[i64::MAX, i64::MIN]).unwrap().answer);
        assert_eq!(
            doubling_sequence(&[5]).unwrap_err(),
            GenerateError::SequenceTooShort(1)
        );
        assert_clean_text(&item);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_repeating_block_lookup(
                block in "[A-Z0-9]{1,8}",
                position in 1u64..500,
                proposal in proptest::char::range('A', 'Z'),
            ) {
                let expected = block.as_bytes()[((position - 1) % block.len() as u64) as usize] as char;
                let item = repeating_block(&block, position, proposal).unwrap();
                prop_assert_eq!(item.answer, proposal == expected);
            }

            #[test]
            fn prop_next_term(start in -1_000i64..1_000, step in -50i64..50, length in 1usize..=17, proposal in -2_000i64..2_000) {
                let item = next_in_arithmetic_sequence(start, step, length, proposal).unwrap();
                prop_assert_eq!(item.answer, proposal == start + step * length as i64);
            }
        }
    }
}
