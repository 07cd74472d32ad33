pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "small-drills")]
#[command(about = "Small string and number drills")]
pub struct CliConfig {
    /// Path to an optional TOML settings file
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: DrillCommand,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum DrillCommand {
    /// Count the decimal digits of an integer
    Digits {
        #[arg(allow_negative_numbers = true)]
        value: String,
        /// Parse the value as JSON instead of a plain token
        #[arg(long)]
        json: bool,
    },
    /// Convert a string to an integer or a float
    Num {
        #[arg(allow_negative_numbers = true)]
        value: String,
        #[arg(long)]
        json: bool,
    },
    /// Multiply all numbers together
    Product {
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<String>,
    },
    /// Pick the n-th lowest distinct item
    NthLowest {
        #[arg(required = true, allow_negative_numbers = true)]
        items: Vec<String>,
        /// Rank to pick, starting from 1 (defaults to the config value, then 1)
        #[arg(long)]
        rank: Option<usize>,
        /// Treat the items as one string and rank its characters
        #[arg(long)]
        text: bool,
    },
    /// List the substrings of a word, at least two characters long
    Slices { word: String },
    /// Check whether two words differ in at most one character
    OneCharDiff { first: String, second: String },
    /// Check whether the letters of every word are in alphabetical order
    AlphaOrder { text: String },
    /// Max nesting depth of {} in an expression, -1 if malformed
    Braces { expr: String },
    /// Longest word of a local file or a remote document
    LongestWord {
        locator: String,
        #[arg(long)]
        remote: bool,
    },
    /// Print a message centered between two decoration rows
    Greeting {
        msg: String,
        #[arg(long)]
        style_char: Option<char>,
        #[arg(long)]
        fill: Option<usize>,
    },
    /// Run shell commands and report their exit status
    ExitStatus {
        #[arg(required = true)]
        commands: Vec<String>,
    },
}
