//! Hoptrace engine: HTTP fetching and the redirect resolution loop.
mod engine;
mod fetch;
mod resolve;
mod types;

pub use engine::TraceEngine;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_USER_AGENT};
pub use resolve::resolve;
pub use types::{EngineError, FetchError};
