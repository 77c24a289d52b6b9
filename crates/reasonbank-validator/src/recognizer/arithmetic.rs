use std::sync::OnceLock;

use regex::Regex;

use reasonbank_core::model::Family;

use super::{int, pattern, Recognizer};

/// "A + B equals C", optionally followed by a period.
pub struct ArithmeticSum;

impl Recognizer for ArithmeticSum {
    fn name(&self) -> &'static str {
        "arithmetic-sum"
    }

    fn family(&self) -> Family {
        Family::Arithmetic
    }

    fn recompute(&self, text: &str) -> Option<bool> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let caps = pattern(&PATTERN, r"(?i)^(-?\d+) \+ (-?\d+) equals (-?\d+)\.?").captures(text)?;
        let (a, b, c) = (int(&caps, 1)?, int(&caps, 2)?, int(&caps, 3)?);
        Some(a.checked_add(b)? == c)
    }
}

/// "Adding A and B gives C."
pub struct AdditionPhrase;

impl Recognizer for AdditionPhrase {
    fn name(&self) -> &'static str {
        "addition-phrase"
    }

    fn family(&self) -> Family {
        Family::Arithmetic
    }

    fn recompute(&self, text: &str) -> Option<bool> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let caps =
            pattern(&PATTERN, r"(?i)^adding (-?\d+) and (-?\d+) gives (-?\d+)\.$").captures(text)?;
        let (a, b, c) = (int(&caps, 1)?, int(&caps, 2)?, int(&caps, 3)?);
        Some(a.checked_add(b)? == c)
    }
}

/// "The product of A and B is at least T."
pub struct ProductAtLeast;

impl Recognizer for ProductAtLeast {
    fn name(&self) -> &'static str {
        "product-at-least"
    }

    fn family(&self) -> Family {
        Family::Arithmetic
    }

    fn recompute(&self, text: &str) -> Option<bool> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let caps = pattern(
            &PATTERN,
            r"(?i)^the product of (-?\d+) and (-?\d+) is at least (-?\d+)\.$",
        )
        .captures(text)?;
        let (a, b, threshold) = (int(&caps, 1)?, int(&caps, 2)?, int(&caps, 3)?);
        Some(a.checked_mul(b)? >= threshold)
    }
}

/// "A divided by B is a whole number."
pub struct DivisionWhole;

impl Recognizer for DivisionWhole {
    fn name(&self) -> &'static str {
        "division-whole"
    }

    fn family(&self) -> Family {
        Family::Arithmetic
    }

    fn recompute(&self, text: &str) -> Option<bool> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let caps = pattern(
            &PATTERN,
            r"(?i)^(-?\d+) divided by (-?\d+) is a whole number\.$",
        )
        .captures(text)?;
        let (a, b) = (int(&caps, 1)?, int(&caps, 2)?);
        // checked_rem only overflows for MIN / -1, which divides evenly.
        Some(b != 0 && a.checked_rem(b).map_or(true, |r| r == 0))
    }
}
