//! Set items: membership and subset claims.
//!
//! Sets are `BTreeSet`s so elements render in sorted order and the same set
//! always produces the same sentence. Braces are not in the item character
//! set, so sets render as a parenthesized list, or "the empty set".

use std::collections::BTreeSet;

use crate::error::{GenerateError, Result};
use crate::generator::{checked_item, comma_list};
use crate::model::{Family, Item};

pub const FAMILY: Family = Family::SetsLogic;

/// "The element '{element}' is in the set ({group})."
pub fn element_membership(element: &str, group: &BTreeSet<String>) -> Result<Item> {
    check_element(element)?;
    for member in group {
        check_element(member)?;
    }

    let text = format!("The element '{element}' is in {}.", render_set(group));
    checked_item(text, group.contains(element), FAMILY)
}

/// "The set ({subset}) is a subset of the set ({superset})."
pub fn subset_relation(subset: &BTreeSet<String>, superset: &BTreeSet<String>) -> Result<Item> {
    for member in subset.iter().chain(superset) {
        check_element(member)?;
    }

    let text = format!(
        "{} is a subset of {}.",
        capitalize(&render_set(subset)),
        render_set(superset)
    );
    checked_item(text, subset.is_subset(superset), FAMILY)
}

fn check_element(element: &str) -> Result<()> {
    if element.is_empty() || !element.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(GenerateError::InvalidSetElement(element.to_string()));
    }
    Ok(())
}

fn render_set(set: &BTreeSet<String>) -> String {
    if set.is_empty() {
        "the empty set".to_string()
    } else {
        format!("the set ({})", comma_list(set))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::test_support::assert_clean_text;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn membership() {
        let item = element_membership("kiwi", &set(&["pear", "apple", "kiwi"])).unwrap();
        assert_eq!(
            item.text,
            "The element 'kiwi' is in the set (apple, kiwi, pear)."
        );
        assert!(item.answer);
        assert_clean_text(&item);

        let item = element_membership("plum", &set(&["apple"])).unwrap();
        assert!(!item.answer);

        let item = element_membership("plum", &set(&[])).unwrap();
        assert_eq!(item.text, "The element 'plum' is in the empty set.");
        assert!(!item.answer);
    }

    #[test]
    fn subset() {
        let item = subset_relation(&set(&["a", "b"]), &set(&["c", "b", "a"])).unwrap();
        assert_eq!(
            item.text,
            "The set (a, b) is a subset of the set (a, b, c)."
        );
        assert!(item.answer);
        assert_clean_text(&item);

        assert!(!subset_relation(&set(&["a", "d"]), &set(&["a", "b"])).unwrap().answer);
        assert!(subset_relation(&set(&["a"]), &set(&["a"])).unwrap().answer);

        let item = subset_relation(&set(&[]), &set(&["x"])).unwrap();
        assert_eq!(item.text, "The empty set is a subset of the set (x).");
        assert!(item.answer);
    }

    #[test]
    fn invalid_elements_fail_fast() {
        assert_eq!(
            element_membership("", &set(&["a"])).unwrap_err(),
            GenerateError::InvalidSetElement(String::new())
        );
        assert_eq!(
            element_membership("a", &set(&["two words"])).unwrap_err(),
            GenerateError::InvalidSetElement("two words".into())
        );
        assert!(subset_relation(&set(&["x.y"]), &set(&[])).is_err());
    }

    #[test]
    fn oversized_sets_are_rejected() {
        let big: BTreeSet<String> = (0..30).map(|i| format!("e{i}")).collect();
        let err = element_membership("e1", &big).unwrap_err();
        assert!(err.text_violation().is_some());
    }

    mod proptests {
        use super::*;
        use proptest::collection::btree_set;
        use proptest::prelude::*;

        fn small_set() -> impl Strategy<Value = BTreeSet<String>> {
            btree_set("[a-f]", 0..5)
        }

        proptest! {
            #[test]
            fn prop_subset_matches_native(a in small_set(), b in small_set()) {
                prop_assert_eq!(subset_relation(&a, &b).unwrap().answer, a.is_subset(&b));
            }

            #[test]
            fn prop_subset_antisymmetric(a in small_set(), b in small_set()) {
                prop_assume!(a != b);
                let forward = subset_relation(&a, &b).unwrap().answer;
                let backward = subset_relation(&b, &a).unwrap().answer;
                prop_assert!(!(forward && backward));
            }

            #[test]
            fn prop_membership_matches_native(e in "[a-f]", group in small_set()) {
                prop_assert_eq!(element_membership(&e, &group).unwrap().answer, group.contains(&e));
            }
        }
    }
}
