//! Family generators.
//!
//! One module per reasoning family. Every generator is a pure function of its
//! domain inputs: it renders exactly one sentence and computes the answer
//! from the same inputs, so the text and the truth value cannot drift apart.
//! Calling a generator twice with the same inputs yields the same `text` and
//! `answer`; only the item `id` differs.
//!
//! Generators over fixed numeric templates return [`Item`] directly. Those
//! whose sentence depends on caller-provided strings or lengths check the
//! rendered text against the [`lint`](crate::lint) rules and return
//! [`Result`].

pub mod arithmetic;
pub mod basic_logic;
pub mod number_properties;
pub mod ordering;
pub mod patterns;
pub mod points_scoring;
pub mod sets_logic;
pub mod transitivity;

use crate::error::{GenerateError, Result};
use crate::lint::{check_text, ESL_MAX_WORDS};
use crate::model::{Family, Item};

/// Build an item after checking the rendered sentence.
pub(crate) fn checked_item(text: String, answer: bool, family: Family) -> Result<Item> {
    if let Err(violation) = check_text(&text, ESL_MAX_WORDS) {
        return Err(GenerateError::Text { text, violation });
    }
    Ok(Item::new(text, answer, family))
}

/// Lowercase truth word used in logic templates.
pub(crate) fn truth_word(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Render values as `a, b, c`.
pub(crate) fn comma_list<T: ToString>(values: impl IntoIterator<Item = T>) -> String {
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::lint::{text_violations, ESL_MAX_WORDS};
    use crate::model::Item;

    /// Assert the item text passes every text rule.
    pub fn assert_clean_text(item: &Item) {
        let violations = text_violations(&item.text, ESL_MAX_WORDS);
        assert!(
            violations.is_empty(),
            "{:?} broke text rules: {violations:?}",
            item.text
        );
    }
}
