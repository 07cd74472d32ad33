pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, DrillCommand};

pub use adapters::{HttpTextSource, LocalTextSource, ShellCommandRunner};
pub use config::TomlConfig;
pub use core::longest_word::LongestWordFinder;
pub use core::{Number, NumberKind, Value};
pub use utils::error::{DrillError, Result};
