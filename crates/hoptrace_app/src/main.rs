mod cli;
mod config;
mod logging;
mod render;

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;
use engine_logging::engine_error;
use hoptrace_core::ResolutionOutcome;
use hoptrace_engine::{FetchSettings, TraceEngine};

use crate::cli::Cli;
use crate::render::{Renderer, CLEAR_SCREEN};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::initialize(cli.debug, cli.log_file.clone());

    let loaded = match cli.config.as_deref() {
        Some(path) => config::load_from(path),
        None => config::load_default(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(err) => {
            engine_error!("{}", err);
            eprintln!("Error loading configuration: {err}");
            return ExitCode::FAILURE;
        }
    };
    let options = cli.display_options(&config);

    let engine = match TraceEngine::new(FetchSettings::default()) {
        Ok(engine) => engine,
        Err(err) => {
            engine_error!("{}", err);
            eprintln!("Error tracing URL: {err}");
            return ExitCode::FAILURE;
        }
    };
    let outcome = engine.trace(&cli.url);

    let stdout = io::stdout();
    let interactive = stdout.is_terminal();
    let renderer = Renderer::new(options.mode, options.width, interactive);
    let text = match renderer.render(&outcome) {
        Ok(text) => text,
        Err(err) => {
            engine_error!("Failed to render trace: {}", err);
            eprintln!("Error rendering trace: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut out = stdout.lock();
    let clear = interactive && !cli.no_clear && options.mode.clears_screen();
    let written = if clear {
        write!(out, "{CLEAR_SCREEN}{text}")
    } else {
        write!(out, "{text}")
    };
    if let Err(err) = written.and_then(|()| out.flush()) {
        engine_error!("Failed to write output: {}", err);
        return ExitCode::FAILURE;
    }

    exit_code(&outcome)
}

/// Only internal failures are non-zero; network conditions the user can do
/// nothing about (timeouts, refused connections, bad certificates) exit cleanly.
fn exit_code(outcome: &ResolutionOutcome) -> ExitCode {
    match outcome {
        ResolutionOutcome::Failed { kind, .. } if !kind.is_user_facing() => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}
