use std::io::Cursor;

use clap::Parser;
use clap::error::ErrorKind;
use pluralizer::RuleTable;
use pluralizer_cli::{Cli, CliError, Outcome, render_check, render_tables, run};

fn run_to_string(argv: &[&str], stdin: &str) -> (Result<Outcome, CliError>, String) {
    pluralizer_testhelpers::setup();
    let cli = Cli::try_parse_from(std::iter::once("pluralizer").chain(argv.iter().copied())).unwrap();
    let mut out = Vec::new();
    let result = run(&cli.command, Cursor::new(stdin.to_owned()), &mut out, false);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn plural_words_from_arguments() {
    let (result, out) = run_to_string(&["plural", "child", "CHURCH", "Boy", "widget"], "");
    assert_eq!(result.unwrap(), Outcome::Success);
    insta::assert_snapshot!(out.trim_end(), @r"
    children
    CHURCHES
    Boys
    widgets
    ");
}

#[test]
fn singular_words_from_stdin() {
    let (result, out) = run_to_string(&["singular"], "mice  wolves\nIndexes\n\n cats ");
    assert_eq!(result.unwrap(), Outcome::Success);
    insta::assert_snapshot!(out.trim_end(), @r"
    mouse
    wolf
    Index
    cat
    ");
}

#[test]
fn check_reports_and_sets_outcome() {
    let (result, out) = run_to_string(&["check", "mice", "mouse"], "");
    assert_eq!(result.unwrap(), Outcome::Success);
    assert_eq!(out, "yes: mice is the plural of mouse\n");

    let (result, out) = run_to_string(&["check", "mouses", "mouse"], "");
    assert_eq!(result.unwrap(), Outcome::Mismatch);
    assert_eq!(out, "no: mouses is not the plural of mouse\n");
    assert_eq!(Outcome::Mismatch.exit_code(), 1);
}

#[test]
fn tables_render_aligned_columns() {
    pluralizer_testhelpers::setup();
    static IRREGULARS: &[(&str, &str, &str)] = &[
        ("child", "children", ""),
        ("index", "indices", "indexes"),
        ("bison", "", ""),
    ];
    static RULES: &[(&str, &str)] = &[("y", "ies"), ("ox", "oxes")];
    let table = RuleTable::from_tables(IRREGULARS, RULES);

    let plain = render_tables(&table, false);
    insta::assert_snapshot!(plain.trim_end(), @r"
    Irregular words (3)
      child  children
      index  indices, indexes
      bison  bison (invariant)

    Suffix rules (2, first match wins)
      1. y  -> ies
      2. ox -> oxes
    ");

    let colored = render_tables(&table, true);
    assert!(colored.contains("\u{1b}["));
    assert_ne!(colored, plain);
}

#[test]
fn suffix_column_pads_by_characters() {
    pluralizer_testhelpers::setup();
    static RULES: &[(&str, &str)] = &[("ée", "ées"), ("ox", "oxes"), ("y", "ies")];
    let table = RuleTable::from_tables(&[], RULES);

    let plain = render_tables(&table, false);
    insta::assert_snapshot!(plain.trim_end(), @r"
    Irregular words (0)

    Suffix rules (3, first match wins)
      1. ée -> ées
      2. ox -> oxes
      3. y  -> ies
    ");

    let arrows: Vec<usize> = plain
        .lines()
        .filter_map(|line| {
            let at = line.find(" -> ")?;
            Some(line[..at].chars().count())
        })
        .collect();
    assert_eq!(arrows.len(), 3);
    assert!(arrows.iter().all(|&column| column == arrows[0]));
}

#[test]
fn full_tables_list_every_row() {
    let (result, out) = run_to_string(&["tables"], "");
    assert_eq!(result.unwrap(), Outcome::Success);
    let table = RuleTable::get();
    assert!(out.starts_with(&format!(
        "Irregular words ({})",
        table.irregular_words().len()
    )));
    assert!(out.lines().any(|line| {
        line.trim_start().starts_with("index ") && line.ends_with("indices, indexes")
    }));
    assert_eq!(out.lines().filter(|l| l.contains(" -> ")).count(), table.suffix_rules().len());
}

#[test]
fn help_lists_commands() {
    let err = Cli::try_parse_from(["pluralizer", "--help"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    let help = err.to_string();
    for command in ["plural", "singular", "check", "tables"] {
        assert!(help.contains(command), "{command} missing from help");
    }
    assert!(help.contains("--no-color"));
}

#[test]
fn no_arguments_shows_help() {
    let err = Cli::try_parse_from(["pluralizer"]).unwrap_err();
    assert_eq!(
        err.kind(),
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
}

#[test]
fn check_lines() {
    assert_eq!(render_check("oxen", "ox", true), "yes: oxen is the plural of ox");
}
