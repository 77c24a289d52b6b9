//! Propositional logic items over two claims.
//!
//! Each sentence states the truth values of the claims, then asserts that a
//! compound claim is true. The answer is the two-valued evaluation of that
//! compound: `p && q`, `!p`, or `!p || q`.

use crate::generator::truth_word;
use crate::model::{Family, Item};

pub const FAMILY: Family = Family::BasicLogic;

/// "Claim A is {p} and claim B is {q}, so both claims are true."
pub fn conjunction_truth(p: bool, q: bool) -> Item {
    let text = format!(
        "Claim A is {} and claim B is {}, so both claims are true.",
        truth_word(p),
        truth_word(q)
    );
    Item::new(text, p && q, FAMILY)
}

/// "Claim A is {p}, so the negation of claim A is true."
pub fn negation_flip(p: bool) -> Item {
    let text = format!(
        "Claim A is {}, so the negation of claim A is true.",
        truth_word(p)
    );
    Item::new(text, !p, FAMILY)
}

/// "Claim A is {p} and claim B is {q}, so 'if A then B' is true."
pub fn conditional_truth(p: bool, q: bool) -> Item {
    let text = format!(
        "Claim A is {} and claim B is {}, so 'if A then B' is true.",
        truth_word(p),
        truth_word(q)
    );
    Item::new(text, !p || q, FAMILY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::test_support::assert_clean_text;

    const PAIRS: [(bool, bool); 4] = [(true, true), (true, false), (false, true), (false, false)];

    #[test]
    fn conjunction_table() {
        let answers: Vec<bool> = PAIRS
            .iter()
            .map(|&(p, q)| conjunction_truth(p, q).answer)
            .collect();
        assert_eq!(answers, vec![true, false, false, false]);
        assert_eq!(
            conjunction_truth(true, false).text,
            "Claim A is true and claim B is false, so both claims are true."
        );
    }

    #[test]
    fn negation_table() {
        assert!(!negation_flip(true).answer);
        assert!(negation_flip(false).answer);
        assert_eq!(
            negation_flip(false).text,
            "Claim A is false, so the negation of claim A is true."
        );
    }

    #[test]
    fn conditional_table() {
        let answers: Vec<bool> = PAIRS
            .iter()
            .map(|&(p, q)| conditional_truth(p, q).answer)
            .collect();
        assert_eq!(answers, vec![true, false, true, true]);
        assert_eq!(
            conditional_truth(true, false).text,
            "Claim A is true and claim B is false, so 'if A then B' is true."
        );
    }

    #[test]
    fn texts_follow_rules() {
        for (p, q) in PAIRS {
            assert_clean_text(&conjunction_truth(p, q));
            assert_clean_text(&conditional_truth(p, q));
            assert_clean_text(&negation_flip(p));
        }
    }
}
