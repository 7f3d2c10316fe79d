use std::error::Error as StdError;
use std::io;
use std::time::Duration;

use engine_logging::engine_trace;
use hoptrace_core::{ErrorKind, HopResponse, Url};
use reqwest::header::{HeaderName, LOCATION, SERVER};

use crate::FetchError;

/// Desktop browser identification; some shorteners refuse unknown clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    /// Upper bound for the whole request.
    pub request_timeout: Duration,
    /// Upper bound for the time until the response head arrives.
    pub response_header_timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(8),
            response_header_timeout: Duration::from_secs(5),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Performs a single request without following redirects.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<HopResponse, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .user_agent(settings.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|err| FetchError::new(ErrorKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &Url) -> Result<HopResponse, FetchError> {
        let pending = self.client.get(url.clone()).send();
        let response =
            match tokio::time::timeout(self.settings.response_header_timeout, pending).await {
                Ok(result) => result.map_err(map_reqwest_error)?,
                Err(_) => {
                    return Err(FetchError::new(
                        ErrorKind::Timeout,
                        format!(
                            "no response from {url} within {:?}",
                            self.settings.response_header_timeout
                        ),
                    ));
                }
            };

        let hop = HopResponse {
            status: response.status().as_u16(),
            location: header_text(&response, LOCATION),
            server: header_text(&response, SERVER),
        };
        engine_trace!("{url} answered {} (location {:?})", hop.status, hop.location);
        // The body is never read; dropping the response releases the connection.
        drop(response);
        Ok(hop)
    }
}

fn header_text(response: &reqwest::Response, name: HeaderName) -> Option<String> {
    response
        .headers()
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(ErrorKind::Timeout, err.to_string());
    }
    FetchError::new(classify_transport_error(&err), describe_chain(&err))
}

/// Walks the source chain looking for refused connections and TLS trust failures.
fn classify_transport_error(err: &(dyn StdError + 'static)) -> ErrorKind {
    let mut current = Some(err);
    while let Some(source) = current {
        if let Some(io_err) = source.downcast_ref::<io::Error>() {
            if io_err.kind() == io::ErrorKind::ConnectionRefused {
                return ErrorKind::ConnectionRefused;
            }
        }
        let text = source.to_string().to_ascii_lowercase();
        if text.contains("certificate") {
            return ErrorKind::CertificateValidation;
        }
        if text.contains("connection refused") {
            return ErrorKind::ConnectionRefused;
        }
        current = source.source();
    }
    ErrorKind::Network
}

fn describe_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut current = err.source();
    while let Some(source) = current {
        message.push_str(": ");
        message.push_str(&source.to_string());
        current = source.source();
    }
    message
}
