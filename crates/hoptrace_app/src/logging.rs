//! Logger setup for the hoptrace binary.
//!
//! Logs go to stderr so stdout only carries the trace output. `--log-file`
//! sends them to a file instead, or to both when `--debug` is also given.

use std::path::PathBuf;

use engine_logging::LogDestination;
use log::LevelFilter;

pub fn initialize(debug: bool, log_file: Option<PathBuf>) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    engine_logging::initialize(destination(debug, log_file), level);
}

fn destination(debug: bool, log_file: Option<PathBuf>) -> LogDestination {
    match log_file {
        Some(path) if debug => LogDestination::Both(path),
        Some(path) => LogDestination::File(path),
        None => LogDestination::Terminal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn log_file_with_debug_also_logs_to_stderr() {
        let path = PathBuf::from("trace.log");
        assert_eq!(
            destination(true, Some(path.clone())),
            LogDestination::Both(path.clone())
        );
        assert_eq!(
            destination(false, Some(path.clone())),
            LogDestination::File(path)
        );
        assert_eq!(destination(true, None), LogDestination::Terminal);
    }
}
