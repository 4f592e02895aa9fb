//! Human-readable output.

use owo_colors::{OwoColorize, Style};
use pluralizer::RuleTable;

fn paint(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_owned()
    }
}

/// Render both rule tables, irregular words first.
///
/// Padding is computed on the plain text, so columns line up with or without color.
pub fn render_tables(table: &RuleTable, color: bool) -> String {
    let heading = Style::new().bold();
    let word = Style::new().green();
    let suffix = Style::new().cyan();
    let note = Style::new().dimmed();

    let mut out = String::new();

    let irregulars = table.irregular_words();
    let count = irregulars.len();
    let width = table
        .irregular_words()
        .map(|w| w.singular().chars().count())
        .max()
        .unwrap_or(0);
    out.push_str(&paint(&format!("Irregular words ({count})"), heading, color));
    out.push('\n');
    for entry in irregulars {
        let singular = format!("{:<width$}", entry.singular());
        let plurals = entry.plurals().collect::<Vec<_>>().join(", ");
        out.push_str("  ");
        out.push_str(&paint(&singular, word, color));
        out.push_str("  ");
        out.push_str(&plurals);
        if entry.is_invariant() {
            out.push(' ');
            out.push_str(&paint("(invariant)", note, color));
        }
        out.push('\n');
    }

    let rules = table.suffix_rules();
    let number_width = rules.len().to_string().len();
    let suffix_width = rules
        .iter()
        .map(|r| r.singular_suffix().chars().count())
        .max()
        .unwrap_or(0);
    out.push('\n');
    out.push_str(&paint(
        &format!("Suffix rules ({}, first match wins)", rules.len()),
        heading,
        color,
    ));
    out.push('\n');
    for (i, rule) in rules.iter().enumerate() {
        let singular = format!("{:<suffix_width$}", rule.singular_suffix());
        out.push_str(&format!("  {:>number_width$}. ", i + 1));
        out.push_str(&paint(&singular, suffix, color));
        out.push_str(" -> ");
        out.push_str(&paint(rule.plural_suffix(), suffix, color));
        out.push('\n');
    }

    out
}

/// One line answering `check`.
pub fn render_check(plural: &str, singular: &str, matches: bool) -> String {
    if matches {
        format!("yes: {plural} is the plural of {singular}")
    } else {
        format!("no: {plural} is not the plural of {singular}")
    }
}
