//! The rewrite pipeline: irregular lookup, then suffix rules, then the default rule.
//!
//! Results here carry whatever casing the tables produced; callers that want the input's
//! casing back go through [`crate::pluralize`] and [`crate::singularize`].

use crate::rules::{RuleTable, eq_ignore_case, suffix_start};
use crate::tracing_macros::trace;

impl RuleTable {
    /// Pluralize `word` without restoring its casing.
    ///
    /// ```
    /// use pluralizer::RuleTable;
    ///
    /// let rules = RuleTable::get();
    /// assert_eq!(rules.pluralize_raw("CHILD"), "children");
    /// assert_eq!(rules.pluralize_raw("CHURCH"), "CHURches");
    /// assert_eq!(rules.pluralize_raw("Widget"), "Widgets");
    /// ```
    pub fn pluralize_raw(&self, word: &str) -> String {
        if word.is_empty() {
            return String::new();
        }

        if let Some(entry) = self.irregular(word) {
            trace!(word, plural = entry.plural(), "irregular");
            return entry.plural().to_owned();
        }

        for rule in self.suffix_rules() {
            if let Some(plural) = rule.pluralize_suffix(word) {
                trace!(word, suffix = rule.singular_suffix(), %plural, "suffix rule");
                return plural;
            }
        }

        trace!(word, "default rule");
        let mut plural = String::with_capacity(word.len() + 1);
        plural.push_str(word);
        plural.push('s');
        plural
    }

    /// Singularize `word` without restoring its casing.
    ///
    /// Words that match nothing and don't end in `s` come back unchanged.
    pub fn singularize_raw(&self, word: &str) -> String {
        if word.is_empty() {
            return String::new();
        }

        if let Some(entry) = self.irregular_plural(word) {
            trace!(word, singular = entry.singular(), "irregular");
            return entry.singular().to_owned();
        }

        for rule in self.suffix_rules() {
            if let Some(singular) = rule.singularize_suffix(word) {
                trace!(word, suffix = rule.plural_suffix(), %singular, "suffix rule");
                return singular;
            }
        }

        match suffix_start(word, "s") {
            Some(start) => {
                trace!(word, "default rule");
                word[..start].to_owned()
            }
            None => {
                trace!(word, "no rule");
                word.to_owned()
            }
        }
    }

    /// Whether `candidate_plural` singularizes to `candidate_singular`, ignoring case.
    pub fn is_plural_of(&self, candidate_plural: &str, candidate_singular: &str) -> bool {
        eq_ignore_case(&self.singularize_raw(candidate_plural), candidate_singular)
    }
}
