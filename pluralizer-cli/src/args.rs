//! Command line definition.

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, Subcommand};

/// Pluralize and singularize English words.
#[derive(Debug, Parser)]
#[command(name = "pluralizer", version, arg_required_else_help = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Command,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Log filter directives, e.g. `pluralizer=trace`
    #[arg(long, global = true, env = "PLURALIZER_LOG", value_name = "DIRECTIVES")]
    pub log: Option<String>,
}

/// What to do.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Pluralize words (reads stdin when none are given)
    #[command(alias = "pluralize")]
    Plural {
        /// Words to pluralize
        words: Vec<String>,
    },

    /// Singularize words (reads stdin when none are given)
    #[command(alias = "singularize")]
    Singular {
        /// Words to singularize
        words: Vec<String>,
    },

    /// Exit 0 if PLURAL is the plural of SINGULAR, 1 otherwise
    Check {
        /// Candidate plural
        plural: String,
        /// Candidate singular
        singular: String,
    },

    /// Print the irregular words and suffix rules
    Tables,
}

impl Command {
    /// The command's name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Plural { .. } => "plural",
            Command::Singular { .. } => "singular",
            Command::Check { .. } => "check",
            Command::Tables => "tables",
        }
    }
}
