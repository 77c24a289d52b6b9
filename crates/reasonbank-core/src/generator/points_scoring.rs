//! Points items: match totals and bonus thresholds.

use serde::{Deserialize, Serialize};

use crate::model::{Family, Item};

pub const FAMILY: Family = Family::PointsScoring;

/// Points awarded per event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointWeights {
    pub goal: u32,
    pub assist: u32,
}

impl Default for PointWeights {
    fn default() -> Self {
        Self { goal: 2, assist: 1 }
    }
}

impl PointWeights {
    pub fn total(&self, goals: u32, assists: u32) -> u128 {
        u128::from(goals) * u128::from(self.goal) + u128::from(assists) * u128::from(self.assist)
    }
}

/// "With {goals} goals and {assists} assists, the player earned {reported}
/// points." using the default weights.
pub fn match_points(goals: u32, assists: u32, reported: i64) -> Item {
    match_points_weighted(goals, assists, reported, PointWeights::default())
}

/// Same claim with explicit per-event weights.
///
/// Non-default weights are spelled out in the sentence, since the reader
/// cannot check the total without them.
pub fn match_points_weighted(
    goals: u32,
    assists: u32,
    reported: i64,
    weights: PointWeights,
) -> Item {
    let text = if weights == PointWeights::default() {
        format!("With {goals} goals and {assists} assists, the player earned {reported} points.")
    } else {
        format!(
            "With {goals} goals worth {} points each and {assists} assists worth {} points each, the player earned {reported} points.",
            weights.goal, weights.assist
        )
    };
    let answer = u128::try_from(reported).is_ok_and(|r| r == weights.total(goals, assists));
    Item::new(text, answer, FAMILY)
}

/// "A score of {score} reaches the bonus threshold of {threshold}."
pub fn bonus_threshold(score: i64, threshold: i64) -> Item {
    let text = format!("A score of {score} reaches the bonus threshold of {threshold}.");
    Item::new(text, score >= threshold, FAMILY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::test_support::assert_clean_text;

    #[test]
    fn default_weights() {
        let item = match_points(3, 2, 8);
        assert_eq!(
            item.text,
            "With 3 goals and 2 assists, the player earned 8 points."
        );
        assert!(item.answer);
        assert!(!match_points(3, 2, 9).answer);
        assert!(!match_points(3, 2, -8).answer);
        assert!(match_points(0, 0, 0).answer);
        assert_clean_text(&item);
    }

    #[test]
    fn custom_weights() {
        let weights = PointWeights { goal: 3, assist: 2 };
        let item = match_points_weighted(2, 1, 8, weights);
        assert_eq!(
            item.text,
            "With 2 goals worth 3 points each and 1 assists worth 2 points each, the player earned 8 points."
        );
        assert!(item.answer);
        assert!(!match_points_weighted(2, 1, 7, weights).answer);
        assert_clean_text(&item);
    }

    #[test]
    fn totals_do_not_overflow() {
        let weights = PointWeights {
            goal: u32::MAX,
            assist: u32::MAX,
        };
        let total = weights.total(u32::MAX, u32::MAX);
        assert_eq!(total, 2 * u128::from(u32::MAX) * u128::from(u32::MAX));
        assert!(!match_points_weighted(u32::MAX, u32::MAX, i64::MAX, weights).answer);
    }

    #[test]
    fn bonus() {
        let item = bonus_threshold(80, 75);
        assert_eq!(
            item.text,
            "A score of 80 reaches the bonus threshold of 75."
        );
        assert!(item.answer);
        assert!(bonus_threshold(75, 75).answer);
        assert!(!bonus_threshold(74, 75).answer);
        assert_clean_text(&item);
    }
}
