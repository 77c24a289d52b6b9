//! Arithmetic items: sums, product thresholds and whole-number division.
//!
//! Operands are widened to `i128` before combining, so every `i64` input
//! yields the exact answer.

use crate::model::{Family, Item};

pub const FAMILY: Family = Family::Arithmetic;

/// "Adding {a} and {b} gives {proposed_sum}."
pub fn addition_equals(a: i64, b: i64, proposed_sum: i64) -> Item {
    let text = format!("Adding {a} and {b} gives {proposed_sum}.");
    let answer = i128::from(a) + i128::from(b) == i128::from(proposed_sum);
    Item::new(text, answer, FAMILY)
}

/// "{a} + {b} equals {c}."
///
/// Symbolic form of [`addition_equals`].
pub fn sum_equals(a: i64, b: i64, c: i64) -> Item {
    let text = format!("{a} + {b} equals {c}.");
    let answer = i128::from(a) + i128::from(b) == i128::from(c);
    Item::new(text, answer, FAMILY)
}

/// "The product of {a} and {b} is at least {threshold}."
pub fn multiplication_comparison(a: i64, b: i64, threshold: i64) -> Item {
    let text = format!("The product of {a} and {b} is at least {threshold}.");
    let answer = i128::from(a) * i128::from(b) >= i128::from(threshold);
    Item::new(text, answer, FAMILY)
}

/// "{a} divided by {b} is a whole number."
///
/// Division by zero is never whole.
pub fn division_whole(a: i64, b: i64) -> Item {
    let text = format!("{a} divided by {b} is a whole number.");
    let answer = b != 0 && i128::from(a) % i128::from(b) == 0;
    Item::new(text, answer, FAMILY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::test_support::assert_clean_text;

    #[test]
    fn addition_scenarios() {
        let item = addition_equals(2, 3, 5);
        assert_eq!(item.text, "Adding 2 and 3 gives 5.");
        assert!(item.answer);
        assert_eq!(item.family, Family::Arithmetic);
        assert!(!addition_equals(2, 3, 6).answer);
        assert!(addition_equals(-4, 4, 0).answer);
    }

    #[test]
    fn addition_does_not_overflow() {
        assert!(!addition_equals(i64::MAX, 1, i64::MIN).answer);
        assert!(addition_equals(i64::MAX, i64::MIN, -1).answer);
    }

    #[test]
    fn symbolic_sum() {
        let item = sum_equals(7, -2, 5);
        assert_eq!(item.text, "7 + -2 equals 5.");
        assert!(item.answer);
        assert!(!sum_equals(1, 1, 3).answer);
    }

    #[test]
    fn product_threshold() {
        let item = multiplication_comparison(3, 4, 12);
        assert_eq!(item.text, "The product of 3 and 4 is at least 12.");
        assert!(item.answer);
        assert!(!multiplication_comparison(3, 4, 13).answer);
        assert!(multiplication_comparison(i64::MAX, 2, i64::MAX).answer);
    }

    #[test]
    fn division_whole_cases() {
        assert!(division_whole(12, 4).answer);
        assert!(!division_whole(13, 4).answer);
        assert!(!division_whole(5, 0).answer);
        assert!(!division_whole(0, 0).answer);
        assert!(division_whole(0, 7).answer);
        assert!(division_whole(-9, 3).answer);
        assert!(division_whole(i64::MIN, -1).answer);
        assert_eq!(division_whole(12, 4).text, "12 divided by 4 is a whole number.");
    }

    #[test]
    fn texts_follow_rules() {
        for item in [
            addition_equals(i64::MIN, i64::MAX, 0),
            sum_equals(-1, -2, -3),
            multiplication_comparison(-5, 6, -30),
            division_whole(i64::MIN, -1),
        ] {
            assert_clean_text(&item);
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_addition_answer_matches_sum(a in -10_000i64..10_000, b in -10_000i64..10_000, s in -20_000i64..20_000) {
                prop_assert_eq!(addition_equals(a, b, s).answer, a + b == s);
            }

            #[test]
            fn prop_division_answer_matches_remainder(a in any::<i32>(), b in any::<i32>()) {
                let (a, b) = (i64::from(a), i64::from(b));
                let expected = b != 0 && a % b == 0;
                prop_assert_eq!(division_whole(a, b).answer, expected);
            }

            #[test]
            fn prop_generation_is_idempotent(a in any::<i64>(), b in any::<i64>(), t in any::<i64>()) {
                let first = multiplication_comparison(a, b, t);
                let second = multiplication_comparison(a, b, t);
                prop_assert_eq!(&first.text, &second.text);
                prop_assert_eq!(first.answer, second.answer);
                prop_assert_ne!(first.id, second.id);
            }
        }
    }
}
