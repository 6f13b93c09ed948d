//! Command-line interface for slova.

use crate::game::types::Language;
use clap::Parser;
use std::path::PathBuf;

/// Slova - timed two-player word-building duel
#[derive(Parser, Debug)]
#[command(name = "slova")]
#[command(about = "Timed two-player word-building duel for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Session language (ru or en); prompts interactively when omitted
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Write tracing output to this file (the game owns the terminal,
    /// so logs never go to stdout)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
