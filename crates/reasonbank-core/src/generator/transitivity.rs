//! Transitivity items: chained comparisons.
//!
//! The chain is asserted true only when both premises hold.

use crate::model::{Family, Item};

pub const FAMILY: Family = Family::Transitivity;

/// "If {a} is greater than {b} and {b} is greater than {c}, then {a} is
/// greater than {c}."
pub fn greater_chain(a: i64, b: i64, c: i64) -> Item {
    let text = format!(
        "If {a} is greater than {b} and {b} is greater than {c}, then {a} is greater than {c}."
    );
    Item::new(text, a > b && b > c, FAMILY)
}

/// "Alex is [not] taller than Blair and Blair is [not] taller than Casey, so
/// Alex must be taller than Casey."
///
/// The premises are stated as given, so each input pair renders a distinct
/// sentence.
pub fn height_comparison(a_taller_than_b: bool, b_taller_than_c: bool) -> Item {
    let text = format!(
        "Alex is {} than Blair and Blair is {} than Casey, so Alex must be taller than Casey.",
        taller(a_taller_than_b),
        taller(b_taller_than_c),
    );
    Item::new(text, a_taller_than_b && b_taller_than_c, FAMILY)
}

fn taller(holds: bool) -> &'static str {
    if holds {
        "taller"
    } else {
        "not taller"
    }
}
