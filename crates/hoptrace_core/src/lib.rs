//! Hoptrace core: redirect-chain data model and the pure resolution state machine.
mod error;
mod hop;
mod outcome;
mod relative;
mod trace;
mod unwrap;
mod visited;

pub use error::{ErrorKind, RedirectError};
pub use hop::{clean_url, Hop, StatusClass, TraceResult, LOOP_DETECTED_STATUS};
pub use outcome::ResolutionOutcome;
pub use relative::resolve_location;
pub use trace::{
    HopResponse, Step, Trace, TracePhase, BLOCKING_PROXY_SERVER, SSO_PROVIDER_PREFIX,
};
pub use unwrap::{unwrap_nested_destination, NESTED_DESTINATION_PARAMS};
pub use url::Url;
pub use visited::VisitedSet;
