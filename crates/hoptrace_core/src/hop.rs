use std::fmt;

use serde::{Deserialize, Serialize};

/// Status reported for the synthetic hop appended when a URL is revisited.
pub const LOOP_DETECTED_STATUS: u16 = 508;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusClass {
    #[serde(rename = "2xx")]
    Success,
    #[serde(rename = "3xx")]
    Redirection,
    #[serde(rename = "4xx")]
    ClientError,
    #[serde(rename = "5xx")]
    ServerError,
    #[serde(rename = "")]
    Unclassified,
}

impl StatusClass {
    /// Classify by hundreds digit; anything outside 200..=599 is unclassified.
    pub fn from_code(code: u16) -> Self {
        match code {
            200..=299 => StatusClass::Success,
            300..=399 => StatusClass::Redirection,
            400..=499 => StatusClass::ClientError,
            500..=599 => StatusClass::ServerError,
            _ => StatusClass::Unclassified,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusClass::Success => "2xx",
            StatusClass::Redirection => "3xx",
            StatusClass::ClientError => "4xx",
            StatusClass::ServerError => "5xx",
            StatusClass::Unclassified => "",
        }
    }
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request made while following a redirect chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hop {
    pub number: u32,
    pub url: String,
    pub status_code: u16,
    pub status_code_class: StatusClass,
}

impl Hop {
    pub fn new(number: u32, url: impl Into<String>, status_code: u16) -> Self {
        Self {
            number,
            url: url.into(),
            status_code,
            status_code_class: StatusClass::from_code(status_code),
        }
    }

    pub fn is_loop_marker(&self) -> bool {
        self.status_code == LOOP_DETECTED_STATUS
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceResult {
    pub hops: Vec<Hop>,
    #[serde(rename = "finalURL")]
    pub final_url: String,
    #[serde(rename = "cleanURL")]
    pub clean_url: String,
}

impl TraceResult {
    pub fn new(hops: Vec<Hop>, final_url: impl Into<String>) -> Self {
        let final_url = final_url.into();
        let clean_url = clean_url(&final_url).to_string();
        Self {
            hops,
            final_url,
            clean_url,
        }
    }

    pub fn has_tracking_query(&self) -> bool {
        self.clean_url != self.final_url
    }
}

/// Strips everything from the first `?` onward.
pub fn clean_url(url: &str) -> &str {
    match url.split_once('?') {
        Some((head, _)) => head,
        None => url,
    }
}
