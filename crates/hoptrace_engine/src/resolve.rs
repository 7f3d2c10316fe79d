use engine_logging::{engine_debug, engine_info, engine_warn};
use hoptrace_core::{ResolutionOutcome, Step, Trace};

use crate::Fetcher;

/// Follows the redirect chain starting at `seed`, one request at a time.
pub async fn resolve(fetcher: &dyn Fetcher, seed: &str) -> ResolutionOutcome {
    let mut trace = Trace::new(seed);
    let mut step = trace.start();

    loop {
        let url = match step {
            Step::Fetch(url) => url,
            Step::Finished(outcome) => {
                log_outcome(seed, &outcome);
                return outcome;
            }
        };

        engine_debug!("hop {}: GET {url}", trace.hops().len() + 1);
        step = match fetcher.fetch(&url).await {
            Ok(response) => trace.on_response(response),
            Err(err) => {
                engine_warn!("fetching {url} failed ({}): {}", err.kind, err.message);
                trace.on_fetch_failed(err.kind, err.message)
            }
        };
    }
}

fn log_outcome(seed: &str, outcome: &ResolutionOutcome) {
    match outcome {
        ResolutionOutcome::Success(result) => engine_info!(
            "{seed} resolved to {} after {} hops",
            result.final_url,
            result.hops.len()
        ),
        ResolutionOutcome::LoopDetected(result) => {
            engine_info!("{seed} loops back to {}", result.final_url)
        }
        ResolutionOutcome::Blocked => engine_info!("{seed} is behind anti-bot protection"),
        ResolutionOutcome::Failed { kind, message } => {
            engine_info!("{seed} could not be resolved ({kind}): {message}")
        }
    }
}
