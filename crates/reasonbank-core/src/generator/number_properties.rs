//! Number property items: evenness, primality and comparison.

use crate::model::{Family, Item};

pub const FAMILY: Family = Family::NumberProperties;

/// Primality by trial division up to the integer square root.
///
/// Numbers below 2, negatives included, are never prime.
pub fn is_prime_number(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let n = n as u64;
    let mut divisor = 2u64;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// "The number {n} is even."
pub fn is_even(n: i64) -> Item {
    let text = format!("The number {n} is even.");
    Item::new(text, n % 2 == 0, FAMILY)
}

/// "The number {n} is a prime number."
pub fn is_prime(n: i64) -> Item {
    let text = format!("The number {n} is a prime number.");
    Item::new(text, is_prime_number(n), FAMILY)
}

/// "{a} is greater than {b}."
pub fn greater_than(a: i64, b: i64) -> Item {
    let text = format!("{a} is greater than {b}.");
    Item::new(text, a > b, FAMILY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::test_support::assert_clean_text;

    #[test]
    fn prime_scenarios() {
        assert!(!is_prime(1).answer);
        assert!(is_prime(2).answer);
        assert!(!is_prime(9).answer);
        assert_eq!(is_prime(7).text, "The number 7 is a prime number.");
    }

    #[test]
    fn primality_edges() {
        assert!(!is_prime_number(0));
        assert!(!is_prime_number(-7));
        assert!(!is_prime_number(i64::MIN));
        assert!(is_prime_number(3));
        assert!(!is_prime_number(25));
        assert!(!is_prime_number(49));
        assert!(is_prime_number(97));
        assert!(is_prime_number(7919));
        assert!(!is_prime_number(7917));
        assert!(is_prime_number(1_000_000_007));
    }

    #[test]
    fn evenness() {
        assert!(is_even(4).answer);
        assert!(!is_even(7).answer);
        assert!(is_even(0).answer);
        assert!(is_even(-2).answer);
        assert!(!is_even(-3).answer);
        assert_eq!(is_even(4).text, "The number 4 is even.");
    }

    #[test]
    fn comparison() {
        assert!(greater_than(5, 3).answer);
        assert!(!greater_than(3, 3).answer);
        assert!(!greater_than(-4, 2).answer);
        assert_eq!(greater_than(5, 3).text, "5 is greater than 3.");
    }

    #[test]
    fn texts_follow_rules() {
        for item in [is_even(i64::MIN), is_prime(-1), greater_than(-9, 9)] {
            assert_clean_text(&item);
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn naive_prime(n: i64) -> bool {
            n >= 2 && (2..n).all(|d| n % d != 0)
        }

        proptest! {
            #[test]
            fn prop_prime_matches_naive(n in -50i64..2_000) {
                prop_assert_eq!(is_prime(n).answer, naive_prime(n));
            }
        }
    }
}
