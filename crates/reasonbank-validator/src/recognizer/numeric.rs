//! Recognizers for comparison-based families: number properties,
//! transitivity, ordering and points.

use std::sync::OnceLock;

use regex::Regex;

use reasonbank_core::model::Family;

use super::{int, pattern, Recognizer};

/// "The number N is even."
pub struct EvenNumber;

impl Recognizer for EvenNumber {
    fn name(&self) -> &'static str {
        "even-number"
    }

    fn family(&self) -> Family {
        Family::NumberProperties
    }

    fn recompute(&self, text: &str) -> Option<bool> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let caps = pattern(&PATTERN, r"(?i)^the number (-?\d+) is even\.$").captures(text)?;
        Some(int(&caps, 1)? % 2 == 0)
    }
}

/// "The number N is a prime number."
pub struct PrimeNumber;

impl Recognizer for PrimeNumber {
    fn name(&self) -> &'static str {
        "prime-number"
    }

    fn family(&self) -> Family {
        Family::NumberProperties
    }

    fn recompute(&self, text: &str) -> Option<bool> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let caps =
            pattern(&PATTERN, r"(?i)^the number (-?\d+) is a prime number\.$").captures(text)?;
        let n = int(&caps, 1)?;
        if n < 2 {
            return Some(false);
        }
        // Beyond u64 trial division is too slow to be worth attempting.
        Some(trial_division(u64::try_from(n).ok()?))
    }
}

fn trial_division(n: u64) -> bool {
    if n < 4 {
        return n >= 2;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut d = 3;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// "A is greater than B."
pub struct GreaterThan;

impl Recognizer for GreaterThan {
    fn name(&self) -> &'static str {
        "greater-than"
    }

    fn family(&self) -> Family {
        Family::NumberProperties
    }

    fn recompute(&self, text: &str) -> Option<bool> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let caps = pattern(&PATTERN, r"(?i)^(-?\d+) is greater than (-?\d+)\.$").captures(text)?;
        Some(int(&caps, 1)? > int(&caps, 2)?)
    }
}

/// "If A is greater than B and B is greater than C, then A is greater than C."
///
/// The operands must repeat consistently; a chain that swaps them is not
/// this template.
pub struct GreaterChain;

impl Recognizer for GreaterChain {
    fn name(&self) -> &'static str {
        "greater-chain"
    }

    fn family(&self) -> Family {
        Family::Transitivity
    }

    fn recompute(&self, text: &str) -> Option<bool> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let caps = pattern(
            &PATTERN,
            r"(?i)^if (-?\d+) is greater than (-?\d+) and (-?\d+) is greater than (-?\d+), then (-?\d+) is greater than (-?\d+)\.$",
        )
        .captures(text)?;

        let (a, b) = (int(&caps, 1)?, int(&caps, 2)?);
        let (b2, c) = (int(&caps, 3)?, int(&caps, 4)?);
        let (a2, c2) = (int(&caps, 5)?, int(&caps, 6)?);
        if b != b2 || a != a2 || c != c2 {
            return None;
        }
        Some(a > b && b > c)
    }
}

/// "Alex is [not] taller than Blair and Blair is [not] taller than Casey, so
/// Alex must be taller than Casey."
pub struct HeightChain;

impl Recognizer for HeightChain {
    fn name(&self) -> &'static str {
        "height-chain"
    }

    fn family(&self) -> Family {
        Family::Transitivity
    }

    fn recompute(&self, text: &str) -> Option<bool> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let caps = pattern(
            &PATTERN,
            r"(?i)^alex is (not )?taller than blair and blair is (not )?taller than casey, so alex must be taller than casey\.$",
        )
        .captures(text)?;
        Some(caps.get(1).is_none() && caps.get(2).is_none())
    }
}

/// "The numbers A, B, C are in ascending order." Strictly ascending.
pub struct AscendingOrder;

impl Recognizer for AscendingOrder {
    fn name(&self) -> &'static str {
        "ascending-order"
    }

    fn family(&self) -> Family {
        Family::Ordering
    }

    fn recompute(&self, text: &str) -> Option<bool> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let caps = pattern(
            &PATTERN,
            r"(?i)^the numbers (-?\d+), (-?\d+), (-?\d+) are in ascending order\.$",
        )
        .captures(text)?;
        let (a, b, c) = (int(&caps, 1)?, int(&caps, 2)?, int(&caps, 3)?);
        Some(a < b && b < c)
    }
}

/// "Position P is within a line of T people." Positions are 1-indexed.
pub struct PositionInLine;

impl Recognizer for PositionInLine {
    fn name(&self) -> &'static str {
        "position-in-line"
    }

    fn family(&self) -> Family {
        Family::Ordering
    }

    fn recompute(&self, text: &str) -> Option<bool> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let caps = pattern(
            &PATTERN,
            r"(?i)^position (-?\d+) is within a line of (-?\d+) people\.$",
        )
        .captures(text)?;
        let (position, total) = (int(&caps, 1)?, int(&caps, 2)?);
        Some((1..=total).contains(&position))
    }
}

/// Match totals, with default (2 per goal, 1 per assist) or stated weights.
pub struct MatchPoints;

impl Recognizer for MatchPoints {
    fn name(&self) -> &'static str {
        "match-points"
    }

    fn family(&self) -> Family {
        Family::PointsScoring
    }

    fn recompute(&self, text: &str) -> Option<bool> {
        static DEFAULT: OnceLock<Regex> = OnceLock::new();
        static WEIGHTED: OnceLock<Regex> = OnceLock::new();

        let (goals, goal_weight, assists, assist_weight, reported) = if let Some(caps) = pattern(
            &DEFAULT,
            r"(?i)^with (\d+) goals and (\d+) assists, the player earned (-?\d+) points\.$",
        )
        .captures(text)
        {
            (int(&caps, 1)?, 2, int(&caps, 2)?, 1, int(&caps, 3)?)
        } else {
            let caps = pattern(
                &WEIGHTED,
                r"(?i)^with (\d+) goals worth (\d+) points each and (\d+) assists worth (\d+) points each, the player earned (-?\d+) points\.$",
            )
            .captures(text)?;
            (
                int(&caps, 1)?,
                int(&caps, 2)?,
                int(&caps, 3)?,
                int(&caps, 4)?,
                int(&caps, 5)?,
            )
        };

        let total = goals
            .checked_mul(goal_weight)?
            .checked_add(assists.checked_mul(assist_weight)?)?;
        Some(total == reported)
    }
}

/// "A score of S reaches the bonus threshold of T."
pub struct BonusThreshold;

impl Recognizer for BonusThreshold {
    fn name(&self) -> &'static str {
        "bonus-threshold"
    }

    fn family(&self) -> Family {
        Family::PointsScoring
    }

    fn recompute(&self, text: &str) -> Option<bool> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let caps = pattern(
            &PATTERN,
            r"(?i)^a score of (-?\d+) reaches the bonus threshold of (-?\d+)\.$",
        )
        .captures(text)?;
        Some(int(&caps, 1)? >= int(&caps, 2)?)
    }
}
