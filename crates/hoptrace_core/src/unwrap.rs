use percent_encoding::percent_decode_str;
use url::Url;

use crate::RedirectError;

/// Query parameters known to carry a nested destination, highest priority first.
pub const NESTED_DESTINATION_PARAMS: [&str; 2] = ["returnUri", "redir"];

/// Expose the destination embedded in a wrapper link's query string.
///
/// The first parameter from [`NESTED_DESTINATION_PARAMS`] with a non-empty
/// value becomes the whole query and the fragment is dropped. Wrapper links
/// usually carry the destination encoded twice, so the value is decoded a
/// second time after query parsing; a malformed escape at that point is a
/// [`RedirectError::Parse`]. URLs without such a parameter are returned
/// unchanged.
pub fn unwrap_nested_destination(mut url: Url) -> Result<Url, RedirectError> {
    let Some((name, value)) = find_nested_destination(&url) else {
        return Ok(url);
    };
    let decoded = decode_strict(&value).map_err(|reason| RedirectError::Parse {
        location: url.to_string(),
        reason: format!("{name}: {reason}"),
    })?;
    let decoded = decoded.replace("%3A", ":").replace("%2F", "/");
    url.set_query(Some(&format!("{name}={decoded}")));
    url.set_fragment(None);
    Ok(url)
}

fn find_nested_destination(url: &Url) -> Option<(&'static str, String)> {
    NESTED_DESTINATION_PARAMS.iter().find_map(|&name| {
        url.query_pairs()
            .find(|(key, value)| key == name && !value.is_empty())
            .map(|(_, value)| (name, value.into_owned()))
    })
}

fn decode_strict(value: &str) -> Result<String, String> {
    let bytes = value.as_bytes();
    let is_hex = |index: usize| bytes.get(index).is_some_and(u8::is_ascii_hexdigit);
    if let Some(index) =
        (0..bytes.len()).find(|&i| bytes[i] == b'%' && !(is_hex(i + 1) && is_hex(i + 2)))
    {
        return Err(format!("invalid escape at byte {index}"));
    }
    percent_decode_str(value)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|err| err.to_string())
}
