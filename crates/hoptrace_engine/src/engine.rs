use hoptrace_core::ResolutionOutcome;
use tokio::runtime::{Builder, Runtime};

use crate::fetch::{FetchSettings, ReqwestFetcher};
use crate::{resolve, EngineError};

/// Blocking entry point: owns a single-threaded runtime and the HTTP client.
pub struct TraceEngine {
    fetcher: ReqwestFetcher,
    runtime: Runtime,
}

impl TraceEngine {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let fetcher =
            ReqwestFetcher::new(settings).map_err(|err| EngineError::Client(err.message))?;
        Ok(Self { fetcher, runtime })
    }

    pub fn trace(&self, seed: &str) -> ResolutionOutcome {
        self.runtime.block_on(resolve(&self.fetcher, seed))
    }
}
