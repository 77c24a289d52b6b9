use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use reasonbank_core::model::Family;

use super::{pattern, truth, Recognizer};

/// "Claim A is P and claim B is Q, so both claims are true."
pub struct Conjunction;

impl Recognizer for Conjunction {
    fn name(&self) -> &'static str {
        "conjunction"
    }

    fn family(&self) -> Family {
        Family::BasicLogic
    }

    fn recompute(&self, text: &str) -> Option<bool> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let caps = pattern(
            &PATTERN,
            r"(?i)^claim a is (true|false) and claim b is (true|false), so both claims are true\.$",
        )
        .captures(text)?;
        Some(truth(&caps, 1)? && truth(&caps, 2)?)
    }
}

/// "Claim A is P, so the negation of claim A is true."
pub struct Negation;

impl Recognizer for Negation {
    fn name(&self) -> &'static str {
        "negation"
    }

    fn family(&self) -> Family {
        Family::BasicLogic
    }

    fn recompute(&self, text: &str) -> Option<bool> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let caps = pattern(
            &PATTERN,
            r"(?i)^claim a is (true|false), so the negation of claim a is true\.$",
        )
        .captures(text)?;
        Some(!truth(&caps, 1)?)
    }
}

/// "Claim A is P and claim B is Q, so 'if A then B' is true."
pub struct Conditional;

impl Recognizer for Conditional {
    fn name(&self) -> &'static str {
        "conditional"
    }

    fn family(&self) -> Family {
        Family::BasicLogic
    }

    fn recompute(&self, text: &str) -> Option<bool> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let caps = pattern(
            &PATTERN,
            r"(?i)^claim a is (true|false) and claim b is (true|false), so 'if a then b' is true\.$",
        )
        .captures(text)?;
        Some(!truth(&caps, 1)? || truth(&caps, 2)?)
    }
}

/// "The element 'E' is in the set (X, Y)." or "... in the empty set."
///
/// Elements compare case-sensitively.
pub struct SetMembership;

impl Recognizer for SetMembership {
    fn name(&self) -> &'static str {
        "set-membership"
    }

    fn family(&self) -> Family {
        Family::SetsLogic
    }

    fn recompute(&self, text: &str) -> Option<bool> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let caps = pattern(
            &PATTERN,
            r"(?i)^the element '([a-z0-9]+)' is in (?:the set \(([a-z0-9]+(?:, [a-z0-9]+)*)\)|the empty set)\.$",
        )
        .captures(text)?;
        let element = caps.get(1)?.as_str();
        Some(members(&caps, 2).contains(element))
    }
}

/// "The set (X) is a subset of the set (Y)." Either side may be the empty set.
pub struct Subset;

impl Recognizer for Subset {
    fn name(&self) -> &'static str {
        "subset"
    }

    fn family(&self) -> Family {
        Family::SetsLogic
    }

    fn recompute(&self, text: &str) -> Option<bool> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let caps = pattern(
            &PATTERN,
            r"(?i)^(?:the set \(([a-z0-9]+(?:, [a-z0-9]+)*)\)|the empty set) is a subset of (?:the set \(([a-z0-9]+(?:, [a-z0-9]+)*)\)|the empty set)\.$",
        )
        .captures(text)?;
        Some(members(&caps, 1).is_subset(&members(&caps, 2)))
    }
}

/// Elements of a captured set list; an absent group is the empty set.
fn members<'t>(caps: &Captures<'t>, index: usize) -> BTreeSet<&'t str> {
    caps.get(index)
        .map(|list| list.as_str().split(", ").collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reasonbank_core::generator::{basic_logic, sets_logic};

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn truth_tables() {
        for p in [true, false] {
            let item = basic_logic::negation_flip(p);
            assert_eq!(Negation.recompute(&item.text), Some(!p));
            for q in [true, false] {
                let item = basic_logic::conjunction_truth(p, q);
                assert_eq!(Conjunction.recompute(&item.text), Some(p && q));
                assert_eq!(Conditional.recompute(&item.text), None);

                let item = basic_logic::conditional_truth(p, q);
                assert_eq!(Conditional.recompute(&item.text), Some(!p || q));
                assert_eq!(Conjunction.recompute(&item.text), None);
            }
        }
    }

    #[test]
    fn membership() {
        assert_eq!(
            SetMembership.recompute("The element 'kiwi' is in the set (apple, kiwi, pear)."),
            Some(true)
        );
        assert_eq!(
            SetMembership.recompute("The element 'Kiwi' is in the set (apple, kiwi)."),
            Some(false)
        );
        assert_eq!(
            SetMembership.recompute("The element 'kiwi' is in the empty set."),
            Some(false)
        );
        assert_eq!(
            SetMembership.recompute("The element 'kiwi' is in the basket."),
            None
        );
    }

    #[test]
    fn subsets() {
        assert_eq!(
            Subset.recompute("The set (a, b) is a subset of the set (a, b, c)."),
            Some(true)
        );
        assert_eq!(
            Subset.recompute("The set (a, d) is a subset of the set (a, b, c)."),
            Some(false)
        );
        assert_eq!(
            Subset.recompute("The empty set is a subset of the empty set."),
            Some(true)
        );
        assert_eq!(
            Subset.recompute("The set (a) is a subset of the empty set."),
            Some(false)
        );
    }

    #[test]
    fn agrees_with_generators() {
        let cases = [
            (set(&["a", "b"]), set(&["a", "b", "c"])),
            (set(&["c", "d"]), set(&["a", "b", "c"])),
            (set(&[]), set(&["x"])),
            (set(&["x"]), set(&[])),
        ];
        for (left, right) in &cases {
            let item = sets_logic::subset_relation(left, right).unwrap();
            assert_eq!(Subset.recompute(&item.text), Some(item.answer), "{}", item.text);
            let item = sets_logic::element_membership("a", right).unwrap();
            assert_eq!(SetMembership.recompute(&item.text), Some(item.answer), "{}", item.text);
        }
    }
}
