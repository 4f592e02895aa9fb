#![warn(missing_docs)]
#![forbid(unsafe_code)]
//! Command line front end for the `pluralizer` crate.
//!
//! ```text
//! $ pluralizer plural child church Boy
//! children
//! churches
//! Boys
//! $ echo "mice wolves" | pluralizer singular
//! mouse
//! wolf
//! ```

mod args;
mod error;
mod render;

use std::io::{BufRead, IsTerminal, Write};

use pluralizer::RuleTable;
use tracing::debug;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub use args::{Cli, Command};
pub use error::CliError;
pub use render::{render_check, render_tables};

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Everything went as asked.
    Success,
    /// `check` answered no.
    Mismatch,
}

impl Outcome {
    /// Process exit code.
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::Mismatch => 1,
        }
    }
}

/// Log filter from `--log` / `PLURALIZER_LOG` directives and `--verbose`.
///
/// Valid directives win. Otherwise everything logs at `warn`, or `debug` when verbose.
pub fn log_filter(verbose: bool, directives: Option<&str>) -> Targets {
    if let Some(targets) = directives.and_then(|s| s.parse::<Targets>().ok()) {
        return targets;
    }
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    Targets::new().with_default(level)
}

/// Install a stderr log subscriber filtered by `filter`.
pub fn init_logging(filter: Targets) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .with(filter)
        .try_init()
        .ok();
}

/// Whether stdout output should be colored.
pub fn use_color(no_color: bool, stdout_is_terminal: bool) -> bool {
    !no_color && stdout_is_terminal
}

/// Whether the process stdout is a terminal.
pub fn stdout_is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Run `command`, reading words from `input` when it needs them and got none.
pub fn run(
    command: &Command,
    input: impl BufRead,
    out: &mut impl Write,
    color: bool,
) -> Result<Outcome, CliError> {
    debug!(command = command.name(), "running");
    match command {
        Command::Plural { words } => transform(words, input, out, pluralizer::pluralize)?,
        Command::Singular { words } => transform(words, input, out, pluralizer::singularize)?,
        Command::Check { plural, singular } => {
            let matches = pluralizer::is_plural_of(plural, singular);
            writeln!(out, "{}", render_check(plural, singular, matches))?;
            if !matches {
                out.flush()?;
                return Ok(Outcome::Mismatch);
            }
        }
        Command::Tables => out.write_all(render_tables(RuleTable::get(), color).as_bytes())?,
    }
    out.flush()?;
    Ok(Outcome::Success)
}

fn transform(
    words: &[String],
    input: impl BufRead,
    out: &mut impl Write,
    f: fn(&str) -> String,
) -> Result<(), CliError> {
    if !words.is_empty() {
        for word in words {
            writeln!(out, "{}", f(word))?;
        }
        return Ok(());
    }

    debug!("reading words from stdin");
    for line in input.lines() {
        for word in line?.split_whitespace() {
            writeln!(out, "{}", f(word))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn quiet_by_default() {
        let filter = log_filter(false, None);
        assert!(filter.would_enable("pluralizer", &Level::WARN));
        assert!(!filter.would_enable("pluralizer", &Level::INFO));
    }

    #[test]
    fn verbose_raises_to_debug() {
        let filter = log_filter(true, None);
        assert!(filter.would_enable("pluralizer", &Level::DEBUG));
        assert!(!filter.would_enable("pluralizer", &Level::TRACE));
    }

    #[test]
    fn directives_override_verbosity() {
        let filter = log_filter(false, Some("pluralizer=trace"));
        assert!(filter.would_enable("pluralizer::engine", &Level::TRACE));
        assert!(!filter.would_enable("other", &Level::ERROR));
    }

    #[test]
    fn invalid_directives_fall_back() {
        let filter = log_filter(true, Some("pluralizer=loudest"));
        assert!(filter.would_enable("pluralizer", &Level::DEBUG));
        assert!(!filter.would_enable("pluralizer", &Level::TRACE));
    }

    #[test]
    fn no_color_beats_a_terminal() {
        assert!(use_color(false, true));
        assert!(!use_color(true, true));
        assert!(!use_color(false, false));
    }
}
