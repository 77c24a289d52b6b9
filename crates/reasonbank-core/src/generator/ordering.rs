//! Ordering items: strict ascending order and line positions.

use crate::model::{Family, Item};

pub const FAMILY: Family = Family::Ordering;

/// "The numbers {a}, {b}, {c} are in ascending order."
///
/// Ascending is strict: equal neighbours do not count.
pub fn ascending_triple(a: i64, b: i64, c: i64) -> Item {
    let text = format!("The numbers {a}, {b}, {c} are in ascending order.");
    Item::new(text, a < b && b < c, FAMILY)
}

/// "Position {position} is within a line of {total} people."
///
/// Positions are 1-indexed.
pub fn position_in_line(position: i64, total: i64) -> Item {
    let text = format!("Position {position} is within a line of {total} people.");
    Item::new(text, (1..=total).contains(&position), FAMILY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::test_support::assert_clean_text;

    #[test]
    fn ascending() {
        let item = ascending_triple(1, 2, 3);
        assert_eq!(item.text, "The numbers 1, 2, 3 are in ascending order.");
        assert!(item.answer);
        assert!(!ascending_triple(1, 2, 2).answer);
        assert!(!ascending_triple(3, 2, 1).answer);
        assert!(ascending_triple(-5, 0, 5).answer);
        assert_clean_text(&item);
    }

    #[test]
    fn positions() {
        let item = position_in_line(3, 5);
        assert_eq!(item.text, "Position 3 is within a line of 5 people.");
        assert!(item.answer);
        assert!(position_in_line(1, 1).answer);
        assert!(position_in_line(5, 5).answer);
        assert!(!position_in_line(0, 5).answer);
        assert!(!position_in_line(6, 5).answer);
        assert!(!position_in_line(-1, 5).answer);
        assert!(!position_in_line(1, 0).answer);
        assert_clean_text(&item);
    }
}
