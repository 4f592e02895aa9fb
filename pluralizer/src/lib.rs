//! Table-driven English pluralization and singularization.
//!
//! Words are looked up in a table of irregular nouns first, then matched against an
//! ordered list of suffix rewrites, then given the default `s` rule. The result is recased
//! to follow the input, so `"CHILD"` becomes `"CHILDREN"` and `"Mouse"` becomes `"Mice"`.
//!
//! # Example
//!
//! ```
//! use pluralizer::{is_plural_of, pluralize, singularize};
//!
//! assert_eq!(pluralize("child"), "children");
//! assert_eq!(pluralize("Boy"), "Boys");
//! assert_eq!(pluralize("CHURCH"), "CHURCHES");
//! assert_eq!(singularize("indexes"), "index");
//! assert_eq!(singularize("wolves"), "wolf");
//! assert!(is_plural_of("mice", "mouse"));
//! ```
//!
//! # Performance
//!
//! No regex: every call is one hashed lookup plus a scan over a few dozen suffixes. The
//! tables are built once, on first use, and shared read-only by all threads.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod tracing_macros;

mod case;
mod engine;
mod rules;
pub mod tables;

pub use case::{CaseShape, match_case};
pub use rules::{IrregularWord, RuleTable, SuffixRule};

/// Convert a singular English noun to its plural form.
///
/// - Irregular nouns come from [`tables::IRREGULAR_WORDS`] (child → children, ox → oxen)
/// - Otherwise the first matching suffix rule from [`tables::SUFFIX_RULES`] applies
///   (church → churches, city → cities, boy → boys, wolf → wolves)
/// - Otherwise `s` is appended (widget → widgets)
///
/// The casing of the input carries over to the result. Empty input gives empty output.
///
/// # Examples
///
/// ```
/// use pluralizer::pluralize;
///
/// assert_eq!(pluralize("index"), "indices");
/// assert_eq!(pluralize("bison"), "bison");
/// assert_eq!(pluralize("zoo"), "zoos");
/// assert_eq!(pluralize("echo"), "echoes");
/// assert_eq!(pluralize("Child"), "Children");
/// assert_eq!(pluralize("A"), "AS");
/// ```
pub fn pluralize(word: &str) -> String {
    match_case(RuleTable::get().pluralize_raw(word), word)
}

/// Convert a plural English noun to its singular form.
///
/// The mirror image of [`pluralize`]: irregular plurals (either listed form) map back to
/// their singular, suffix rules run in reverse, and a trailing `s` is dropped as a last
/// resort. Words that match nothing come back unchanged.
///
/// # Examples
///
/// ```
/// use pluralizer::singularize;
///
/// assert_eq!(singularize("indices"), "index");
/// assert_eq!(singularize("indexes"), "index");
/// assert_eq!(singularize("Cities"), "City");
/// assert_eq!(singularize("MICE"), "MOUSE");
/// assert_eq!(singularize("sheep"), "sheep");
/// ```
pub fn singularize(word: &str) -> String {
    match_case(RuleTable::get().singularize_raw(word), word)
}

/// Check whether `candidate_plural` is the plural of `candidate_singular`.
///
/// Singularizes `candidate_plural` and compares it with `candidate_singular`, ignoring
/// case on both sides.
///
/// ```
/// use pluralizer::is_plural_of;
///
/// assert!(is_plural_of("mice", "mouse"));
/// assert!(is_plural_of("Cats", "cat"));
/// assert!(!is_plural_of("mouses", "mouse"));
/// ```
pub fn is_plural_of(candidate_plural: &str, candidate_singular: &str) -> bool {
    RuleTable::get().is_plural_of(candidate_plural, candidate_singular)
}

/// Method-call access to the inflection functions on string slices.
///
/// ```
/// use pluralizer::Inflect;
///
/// assert_eq!("Goose".to_plural(), "Geese");
/// assert_eq!("leaves".to_singular(), "leaf");
/// assert!("teeth".is_plural_of("tooth"));
/// ```
pub trait Inflect {
    /// See [`pluralize`].
    fn to_plural(&self) -> String;

    /// See [`singularize`].
    fn to_singular(&self) -> String;

    /// See [`is_plural_of`]; `self` is the candidate plural.
    fn is_plural_of(&self, singular: &str) -> bool;
}

impl Inflect for str {
    fn to_plural(&self) -> String {
        pluralize(self)
    }

    fn to_singular(&self) -> String {
        singularize(self)
    }

    fn is_plural_of(&self, singular: &str) -> bool {
        is_plural_of(self, singular)
    }
}
