use url::Url;

use crate::{
    resolve_location, unwrap_nested_destination, ErrorKind, Hop, ResolutionOutcome, TraceResult,
    VisitedSet, LOOP_DETECTED_STATUS,
};

/// Redirects into this sign-in service end the trace immediately.
pub const SSO_PROVIDER_PREFIX: &str = "https://outlook.office365.com";

/// `Server` header marker of the anti-bot proxy that answers with bare redirects.
pub const BLOCKING_PROXY_SERVER: &str = "cloudflare";

/// The parts of a response the resolver looks at.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HopResponse {
    pub status: u16,
    pub location: Option<String>,
    pub server: Option<String>,
}

impl HopResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }

    pub fn is_redirect(&self) -> bool {
        (300..=399).contains(&self.status)
    }

    fn from_blocking_proxy(&self) -> bool {
        self.server
            .as_deref()
            .is_some_and(|server| server.to_ascii_lowercase().contains(BLOCKING_PROXY_SERVER))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracePhase {
    Fetching,
    Done,
}

/// What the driver of a [`Trace`] has to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Fetch(Url),
    Finished(ResolutionOutcome),
}

/// Pure redirect-following state machine.
///
/// The trace never performs IO. The driver calls [`Trace::start`], performs
/// the fetch for every [`Step::Fetch`] and feeds the response back through
/// [`Trace::on_response`] (or [`Trace::on_fetch_failed`]) until a
/// [`Step::Finished`] comes out.
#[derive(Debug, Clone)]
pub struct Trace {
    seed: String,
    current: String,
    current_url: Option<Url>,
    previous: Option<Url>,
    number: u32,
    hops: Vec<Hop>,
    visited: VisitedSet,
    phase: TracePhase,
}

impl Trace {
    pub fn new(seed: impl Into<String>) -> Self {
        let seed = seed.into().trim().to_string();
        Self {
            current: seed.clone(),
            seed,
            current_url: None,
            previous: None,
            number: 1,
            hops: Vec::new(),
            visited: VisitedSet::new(),
            phase: TracePhase::Fetching,
        }
    }

    pub fn phase(&self) -> TracePhase {
        self.phase
    }

    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    pub fn start(&mut self) -> Step {
        let seed = self.seed.clone();
        match Url::parse(&seed) {
            Ok(url) => self.enter(seed, url),
            Err(err) => self.finish(ResolutionOutcome::failed(
                ErrorKind::InvalidUrl,
                format!("{seed}: {err}"),
            )),
        }
    }

    pub fn on_response(&mut self, response: HopResponse) -> Step {
        self.hops
            .push(Hop::new(self.number, self.current.clone(), response.status));

        if !response.is_redirect() {
            let result = TraceResult::new(std::mem::take(&mut self.hops), self.current.clone());
            return self.finish(ResolutionOutcome::Success(result));
        }

        let location = match response.location.as_deref().map(str::trim) {
            Some(location) if !location.is_empty() => location.to_string(),
            _ if response.from_blocking_proxy() => {
                return self.finish(ResolutionOutcome::Blocked);
            }
            // A redirect that leads nowhere ends the trace where it stands.
            _ => {
                let result = TraceResult::new(Vec::new(), self.current.clone());
                return self.finish(ResolutionOutcome::Success(result));
            }
        };

        if location.starts_with(SSO_PROVIDER_PREFIX) {
            self.hops.push(Hop::new(self.number + 2, location.clone(), 200));
            let result = TraceResult::new(std::mem::take(&mut self.hops), location);
            return self.finish(ResolutionOutcome::Success(result));
        }

        let next = match resolve_location(
            self.previous.as_ref(),
            &location,
            self.current_url.as_ref(),
        )
        .and_then(unwrap_nested_destination)
        {
            Ok(url) => url,
            Err(err) => return self.finish(ResolutionOutcome::failed(err.kind(), err.to_string())),
        };

        self.number += 1;
        self.previous = Some(next.clone());
        self.enter(next.to_string(), next)
    }

    pub fn on_fetch_failed(&mut self, kind: ErrorKind, message: impl Into<String>) -> Step {
        self.finish(ResolutionOutcome::failed(kind, message))
    }

    fn enter(&mut self, raw: String, url: Url) -> Step {
        if !matches!(url.scheme(), "http" | "https") {
            return self.finish(ResolutionOutcome::failed(
                ErrorKind::InvalidUrl,
                format!("unsupported scheme {:?} in {raw}", url.scheme()),
            ));
        }

        if !self.visited.record(url.as_str()) {
            self.hops
                .push(Hop::new(self.number, raw.clone(), LOOP_DETECTED_STATUS));
            let result = TraceResult::new(std::mem::take(&mut self.hops), raw);
            return self.finish(ResolutionOutcome::LoopDetected(result));
        }

        self.current = raw;
        self.current_url = Some(url.clone());
        self.phase = TracePhase::Fetching;
        Step::Fetch(url)
    }

    fn finish(&mut self, outcome: ResolutionOutcome) -> Step {
        self.phase = TracePhase::Done;
        Step::Finished(outcome)
    }
}
