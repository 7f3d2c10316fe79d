use crate::{ErrorKind, TraceResult};

/// How a resolution ended.
///
/// `LoopDetected` and `Blocked` are regular terminations of the algorithm;
/// only `Failed` represents an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    Success(TraceResult),
    /// The chain revisited a URL; the last hop carries the loop sentinel status.
    LoopDetected(TraceResult),
    /// A redirect without `Location` from an anti-bot proxy.
    Blocked,
    Failed { kind: ErrorKind, message: String },
}

impl ResolutionOutcome {
    pub fn failed(kind: ErrorKind, message: impl Into<String>) -> Self {
        ResolutionOutcome::Failed {
            kind,
            message: message.into(),
        }
    }

    pub fn trace_result(&self) -> Option<&TraceResult> {
        match self {
            ResolutionOutcome::Success(result) | ResolutionOutcome::LoopDetected(result) => {
                Some(result)
            }
            ResolutionOutcome::Blocked | ResolutionOutcome::Failed { .. } => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResolutionOutcome::Failed { .. })
    }
}
