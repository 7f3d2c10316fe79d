use std::path::PathBuf;

use clap::Parser;

use crate::config::{DisplayConfig, DEFAULT_WIDTH};
use crate::render::ViewMode;

/// Follow a link's redirect chain and show where it really leads.
#[derive(Parser, Debug)]
#[command(name = "hoptrace", version, about)]
pub struct Cli {
    /// URL to trace
    pub url: String,

    /// Output the trace as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Print only the final/clean URL
    #[arg(short = 's', long)]
    pub terse: bool,

    /// Show every hop
    #[arg(short, long)]
    pub verbose: bool,

    /// Width of the URL column; longer URLs wrap here
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Read display settings from this file instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log engine activity at debug level
    #[arg(long)]
    pub debug: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Do not clear the screen before printing
    #[arg(long)]
    pub no_clear: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub mode: ViewMode,
    pub width: usize,
}

impl Cli {
    /// Flags switch options on; the config file supplies the rest.
    pub fn display_options(&self, config: &DisplayConfig) -> DisplayOptions {
        let mode = if self.json || config.use_json {
            ViewMode::Json
        } else if self.terse || config.always_terse {
            ViewMode::Terse
        } else if self.verbose || config.always_verbose {
            ViewMode::Verbose
        } else {
            ViewMode::Short
        };
        let width = self
            .width
            .or(Some(config.width))
            .filter(|width| *width > 0)
            .unwrap_or(DEFAULT_WIDTH);
        DisplayOptions { mode, width }
    }
}
