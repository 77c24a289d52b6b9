//! Template recognizers.
//!
//! A recognizer knows one sentence template. Given item text it either
//! declines (`None`: the text does not follow the template) or extracts the
//! operands and recomputes the truth value independently of the stored
//! answer. Declining is never a failure; a corpus may hold phrasings no
//! recognizer was built for. Recognizers only see items of their own family.

mod arithmetic;
mod logic;
mod numeric;
mod patterns;

use std::sync::OnceLock;

use regex::{Captures, Regex};

use reasonbank_core::model::Family;

pub use arithmetic::{AdditionPhrase, ArithmeticSum, DivisionWhole, ProductAtLeast};
pub use logic::{Conditional, Conjunction, Negation, SetMembership, Subset};
pub use numeric::{
    AscendingOrder, BonusThreshold, EvenNumber, GreaterChain, GreaterThan, HeightChain,
    MatchPoints, PositionInLine, PrimeNumber,
};
pub use patterns::{ArithmeticSequence, DoublingSequence, RepeatingPattern};

/// Trait for re-deriving an item's answer from its text.
pub trait Recognizer: Send + Sync {
    /// Stable name used in reports, e.g. `"arithmetic-sum"`.
    fn name(&self) -> &'static str;

    /// The family whose items this recognizer reads.
    fn family(&self) -> Family;

    /// Recompute the truth value, or `None` if the text is not this template.
    fn recompute(&self, text: &str) -> Option<bool>;
}

/// An ordered collection of recognizers.
pub struct RecognizerSet {
    recognizers: Vec<Box<dyn Recognizer>>,
}

impl RecognizerSet {
    /// A set with no recognizers.
    pub fn empty() -> Self {
        Self {
            recognizers: Vec::new(),
        }
    }

    /// Every built-in recognizer.
    pub fn standard() -> Self {
        let mut set = Self::empty();
        set.register(Box::new(ArithmeticSum));
        set.register(Box::new(AdditionPhrase));
        set.register(Box::new(ProductAtLeast));
        set.register(Box::new(DivisionWhole));
        set.register(Box::new(EvenNumber));
        set.register(Box::new(PrimeNumber));
        set.register(Box::new(GreaterThan));
        set.register(Box::new(DoublingSequence));
        set.register(Box::new(ArithmeticSequence));
        set.register(Box::new(RepeatingPattern));
        set.register(Box::new(GreaterChain));
        set.register(Box::new(HeightChain));
        set.register(Box::new(SetMembership));
        set.register(Box::new(Subset));
        set.register(Box::new(AscendingOrder));
        set.register(Box::new(PositionInLine));
        set.register(Box::new(MatchPoints));
        set.register(Box::new(BonusThreshold));
        set.register(Box::new(Conjunction));
        set.register(Box::new(Negation));
        set.register(Box::new(Conditional));
        set
    }

    pub fn register(&mut self, recognizer: Box<dyn Recognizer>) {
        self.recognizers.push(recognizer);
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Recognizer> {
        self.recognizers.iter().map(|r| &**r)
    }

    /// Recognizers for one family, in registration order.
    pub fn for_family(&self, family: Family) -> impl Iterator<Item = &dyn Recognizer> {
        self.iter().filter(move |r| r.family() == family)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.recognizers.iter().map(|r| r.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.recognizers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recognizers.is_empty()
    }
}

impl Default for RecognizerSet {
    fn default() -> Self {
        Self::standard()
    }
}

/// Compile a template pattern once.
pub(crate) fn pattern(cell: &'static OnceLock<Regex>, source: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(source).expect("template pattern must compile"))
}

/// Parse capture group `index` as a signed integer.
///
/// Values too large for `i128` decline rather than guess.
pub(crate) fn int(caps: &Captures<'_>, index: usize) -> Option<i128> {
    caps.get(index)?.as_str().parse().ok()
}

/// Parse a `true`/`false` capture, case-insensitively.
pub(crate) fn truth(caps: &Captures<'_>, index: usize) -> Option<bool> {
    let word = caps.get(index)?.as_str();
    if word.eq_ignore_ascii_case("true") {
        Some(true)
    } else if word.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Parse a comma-separated integer list.
pub(crate) fn int_list(list: &str) -> Option<Vec<i128>> {
    list.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.parse().ok())
        .collect()
}
