use std::borrow::Cow;

use url::{ParseError, Url};

use crate::RedirectError;

/// Turn a `Location` header value into an absolute URL.
///
/// A missing scheme or authority is borrowed from `previous` (the last
/// resolved redirect target) or, failing that, from `request`. The path,
/// query and fragment always come from `location` itself: a bare relative
/// path is rooted at the borrowed authority instead of being merged with the
/// base path.
pub fn resolve_location(
    previous: Option<&Url>,
    location: &str,
    request: Option<&Url>,
) -> Result<Url, RedirectError> {
    let location = location.trim();
    let base = previous.or(request);

    match Url::parse(location) {
        Ok(url) if url.has_host() => Ok(url),
        Ok(mut url) => {
            let base = base.ok_or_else(|| RedirectError::MissingHost {
                location: location.to_string(),
            })?;
            let host = base.host_str().ok_or_else(|| RedirectError::MissingHost {
                location: location.to_string(),
            })?;
            url.set_host(Some(host))
                .map_err(|err| parse_error(location, err))?;
            url.set_port(base.port()).map_err(|()| RedirectError::Parse {
                location: location.to_string(),
                reason: "cannot carry over port".to_string(),
            })?;
            Ok(url)
        }
        Err(ParseError::RelativeUrlWithoutBase) => {
            let base = base.ok_or_else(|| RedirectError::MissingScheme {
                location: location.to_string(),
            })?;
            if location.starts_with("//") {
                return Url::parse(&format!("{}:{}", base.scheme(), location))
                    .map_err(|err| parse_error(location, err));
            }
            if !base.has_host() {
                return Err(RedirectError::MissingHost {
                    location: location.to_string(),
                });
            }
            let rooted: Cow<'_, str> = if location.starts_with('/') {
                Cow::Borrowed(location)
            } else {
                Cow::Owned(format!("/{location}"))
            };
            base.join(&rooted).map_err(|err| parse_error(location, err))
        }
        Err(err) => Err(parse_error(location, err)),
    }
}

fn parse_error(location: &str, err: ParseError) -> RedirectError {
    RedirectError::Parse {
        location: location.to_string(),
        reason: err.to_string(),
    }
}
