//! Rule data types and the shared lookup table built from [`crate::tables`].

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::tracing_macros::debug;
use crate::tables::{IRREGULAR_WORDS, SUFFIX_RULES};

/// A noun with a table-given plural, and sometimes a second accepted plural.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IrregularWord {
    singular: &'static str,
    plural: &'static str,
    plural_alt: Option<&'static str>,
}

impl IrregularWord {
    /// Build an entry from a table row. An empty `plural` means "same as singular",
    /// an empty `plural_alt` means "no alternate".
    pub fn from_row(singular: &'static str, plural: &'static str, plural_alt: &'static str) -> Self {
        Self {
            singular,
            plural: if plural.is_empty() { singular } else { plural },
            plural_alt: (!plural_alt.is_empty()).then_some(plural_alt),
        }
    }

    /// The singular form.
    pub fn singular(&self) -> &'static str {
        self.singular
    }

    /// The plural [`pluralize`](crate::pluralize) produces.
    pub fn plural(&self) -> &'static str {
        self.plural
    }

    /// A second accepted plural, if any.
    pub fn plural_alt(&self) -> Option<&'static str> {
        self.plural_alt
    }

    /// Every plural form, primary first.
    pub fn plurals(&self) -> impl Iterator<Item = &'static str> {
        core::iter::once(self.plural).chain(self.plural_alt)
    }

    /// Whether the primary plural is the singular itself (`bison`, `series`).
    pub fn is_invariant(&self) -> bool {
        self.plural == self.singular
    }
}

/// One reversible suffix rewrite, such as `y` ↔ `ies`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    singular_suffix: &'static str,
    plural_suffix: &'static str,
}

impl SuffixRule {
    /// Build a rule from a table row.
    pub const fn new(singular_suffix: &'static str, plural_suffix: &'static str) -> Self {
        Self {
            singular_suffix,
            plural_suffix,
        }
    }

    /// The ending this rule looks for in singular words.
    pub fn singular_suffix(&self) -> &'static str {
        self.singular_suffix
    }

    /// The ending this rule looks for in plural words.
    pub fn plural_suffix(&self) -> &'static str {
        self.plural_suffix
    }

    /// Rewrite a singular `word`, or `None` if it doesn't end in [`Self::singular_suffix`].
    ///
    /// The matched ending is compared without regard to case and replaced by the literal
    /// plural suffix; the rest of `word` is kept byte for byte.
    ///
    /// ```
    /// use pluralizer::SuffixRule;
    ///
    /// let rule = SuffixRule::new("y", "ies");
    /// assert_eq!(rule.pluralize_suffix("PONY").as_deref(), Some("PONies"));
    /// assert_eq!(rule.pluralize_suffix("pony!"), None);
    /// ```
    pub fn pluralize_suffix(&self, word: &str) -> Option<String> {
        replace_suffix(word, self.singular_suffix, self.plural_suffix)
    }

    /// Rewrite a plural `word`, or `None` if it doesn't end in [`Self::plural_suffix`].
    pub fn singularize_suffix(&self, word: &str) -> Option<String> {
        replace_suffix(word, self.plural_suffix, self.singular_suffix)
    }
}

fn replace_suffix(word: &str, from: &str, to: &str) -> Option<String> {
    let start = suffix_start(word, from)?;
    let mut out = String::with_capacity(start + to.len());
    out.push_str(&word[..start]);
    out.push_str(to);
    Some(out)
}

/// Byte offset where `suffix` begins at the end of `word`, compared case-insensitively.
pub(crate) fn suffix_start(word: &str, suffix: &str) -> Option<usize> {
    let mut tail = word.char_indices().rev();
    let mut start = word.len();
    for expected in suffix.chars().rev() {
        let (index, actual) = tail.next()?;
        if !chars_eq_ignore_case(actual, expected) {
            return None;
        }
        start = index;
    }
    Some(start)
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Case-insensitive string equality, per character.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Lookup key for the irregular maps.
pub(crate) fn fold_case(word: &str) -> String {
    word.chars().flat_map(char::to_lowercase).collect()
}

static RULES: LazyLock<RuleTable> =
    LazyLock::new(|| RuleTable::from_tables(IRREGULAR_WORDS, SUFFIX_RULES));

/// Irregular words indexed both ways, plus the ordered suffix rules.
///
/// The process-wide table is built on first use from [`IRREGULAR_WORDS`] and
/// [`SUFFIX_RULES`] and never changes afterwards.
#[derive(Debug)]
pub struct RuleTable {
    irregulars: Vec<IrregularWord>,
    by_singular: HashMap<String, usize>,
    by_plural: HashMap<String, usize>,
    suffix_rules: Vec<SuffixRule>,
}

impl RuleTable {
    /// The shared table behind [`pluralize`](crate::pluralize) and friends.
    pub fn get() -> &'static RuleTable {
        &RULES
    }

    /// Build a table from literal rows.
    ///
    /// Repeated keys overwrite earlier ones. The built-in tables have none, which their
    /// unit tests check.
    pub fn from_tables(
        irregular_rows: &'static [(&'static str, &'static str, &'static str)],
        suffix_rows: &'static [(&'static str, &'static str)],
    ) -> Self {
        let mut irregulars = Vec::with_capacity(irregular_rows.len());
        let mut by_singular = HashMap::with_capacity(irregular_rows.len());
        let mut by_plural = HashMap::with_capacity(irregular_rows.len() * 2);

        for &(singular, plural, plural_alt) in irregular_rows {
            let entry = IrregularWord::from_row(singular, plural, plural_alt);
            let index = irregulars.len();
            by_singular.insert(fold_case(entry.singular), index);
            for form in entry.plurals() {
                by_plural.insert(fold_case(form), index);
            }
            irregulars.push(entry);
        }

        let suffix_rules: Vec<SuffixRule> = suffix_rows
            .iter()
            .map(|&(singular, plural)| SuffixRule::new(singular, plural))
            .collect();

        debug!(
            singulars = by_singular.len(),
            plurals = by_plural.len(),
            suffix_rules = suffix_rules.len(),
            "built rule table"
        );

        Self {
            irregulars,
            by_singular,
            by_plural,
            suffix_rules,
        }
    }

    /// Find the irregular entry whose singular is `singular`, ignoring case.
    pub fn irregular(&self, singular: &str) -> Option<&IrregularWord> {
        self.by_singular
            .get(&fold_case(singular))
            .map(|&index| &self.irregulars[index])
    }

    /// Find the irregular entry that lists `plural` as either of its plurals, ignoring case.
    pub fn irregular_plural(&self, plural: &str) -> Option<&IrregularWord> {
        self.by_plural
            .get(&fold_case(plural))
            .map(|&index| &self.irregulars[index])
    }

    /// All irregular entries, in table order.
    pub fn irregular_words(&self) -> impl ExactSizeIterator<Item = &IrregularWord> {
        self.irregulars.iter()
    }

    /// The suffix rules, in the order they are tried.
    pub fn suffix_rules(&self) -> &[SuffixRule] {
        &self.suffix_rules
    }
}
