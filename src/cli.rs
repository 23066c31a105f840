//! Command-line arguments for the popup driver
//!
//! The driver mounts one adapter headlessly, replays a key sequence against
//! it and prints the resulting rows and commits. Handy for checking config
//! and theme files without a running editor.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which trigger adapter to mount
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdapterKind {
    /// Slash-command menu
    Commands,
    /// Wikilink note references
    Notes,
}

/// Replay keys against a suggestion popup
#[derive(Parser, Debug)]
#[command(name = "notes-suggest", version, about = "Replay keys against a suggestion popup")]
pub struct CliArgs {
    /// Trigger adapter to mount
    #[arg(long, value_enum, default_value_t = AdapterKind::Commands)]
    pub adapter: AdapterKind,

    /// JSON array of candidates (commands or notes). Commands default to the built-in set.
    #[arg(long, value_name = "FILE")]
    pub candidates: Option<PathBuf>,

    /// Title filter applied before mounting
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Key sequence, e.g. "down,down,enter"
    #[arg(short, long, default_value = "")]
    pub keys: String,

    /// Click the row at this candidate index after the keys
    #[arg(long, value_name = "INDEX")]
    pub click: Option<usize>,

    /// Config file (defaults to ~/.config/notes-suggest/config.yaml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
