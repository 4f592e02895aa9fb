//! Casing transfer from an input word onto a rewritten word.
//!
//! The rule tables are all lowercase, so `"CHILD"` first becomes `"children"` and then
//! gets its casing back from the input here.

/// The casing pattern of a word, as far as case transfer cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseShape {
    /// No cased characters at all (digits, punctuation, the empty string).
    Uncased,
    /// Every cased character is lowercase: `"child"`.
    Lower,
    /// Every cased character is uppercase: `"CHILD"`, `"A"`.
    Upper,
    /// Starts uppercase but is not all uppercase: `"Child"`, `"McDonald"`.
    Capitalized,
    /// Starts with something other than an uppercase letter and mixes cases: `"iPhone"`.
    Mixed,
}

impl CaseShape {
    /// Classify `template` by scanning every character.
    ///
    /// `Upper` is checked before `Capitalized`, so a single uppercase letter is `Upper`.
    pub fn of(template: &str) -> Self {
        let mut all_lower = true;
        let mut all_upper = true;
        let mut first_upper = false;
        let mut found_cased = false;

        for (i, c) in template.chars().enumerate() {
            if c.is_uppercase() {
                if i == 0 {
                    first_upper = true;
                }
                all_lower = false;
                found_cased = true;
            } else if c.is_lowercase() {
                all_upper = false;
                found_cased = true;
            }
        }

        if !found_cased {
            CaseShape::Uncased
        } else if all_lower {
            CaseShape::Lower
        } else if all_upper {
            CaseShape::Upper
        } else if first_upper {
            CaseShape::Capitalized
        } else {
            CaseShape::Mixed
        }
    }

    /// Reshape `word` to this casing pattern.
    ///
    /// `Capitalized` only touches the first character; the rest of `word` is kept as is.
    /// `Uncased` and `Mixed` return `word` untouched.
    pub fn apply(self, word: String) -> String {
        match self {
            CaseShape::Uncased | CaseShape::Mixed => word,
            CaseShape::Lower => word.to_lowercase(),
            CaseShape::Upper => word.to_uppercase(),
            CaseShape::Capitalized => capitalize(word),
        }
    }
}

fn capitalize(word: String) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if !first.is_uppercase() => first.to_uppercase().chain(chars).collect(),
        _ => word,
    }
}

/// Give `word` the casing pattern of `template`.
pub fn match_case(word: String, template: &str) -> String {
    CaseShape::of(template).apply(word)
}
