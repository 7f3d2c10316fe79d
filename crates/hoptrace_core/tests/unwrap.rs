use hoptrace_core::{unwrap_nested_destination, ErrorKind, Url};
use pretty_assertions::assert_eq;

fn unwrap(raw: &str) -> Url {
    unwrap_nested_destination(Url::parse(raw).unwrap()).unwrap()
}

#[test]
fn return_uri_is_decoded_into_sole_parameter() {
    let url = unwrap("https://x/r?returnUri=%2Fhome%3Fid%3D1");
    assert_eq!(url.query(), Some("returnUri=/home?id=1"));
    assert_eq!(url.host_str(), Some("x"));
    assert_eq!(url.path(), "/r");
}

#[test]
fn other_parameters_are_discarded() {
    let url = unwrap("https://sso.example/login?client=abc&returnUri=https%3A%2F%2Fapp.example%2F&state=9");
    assert_eq!(url.query(), Some("returnUri=https://app.example/"));
}

#[test]
fn double_encoded_separators_are_restored() {
    let url = unwrap("https://track.example/c?redir=https%253A%252F%252Fshop.example%252Fitem");
    assert_eq!(url.query(), Some("redir=https://shop.example/item"));
}

#[test]
fn return_uri_wins_over_redir() {
    let url = unwrap("https://x/r?redir=%2Fother&returnUri=%2Fhome");
    assert_eq!(url.query(), Some("returnUri=/home"));
}

#[test]
fn redir_is_used_when_return_uri_is_empty() {
    let url = unwrap("https://x/r?returnUri=&redir=%2Ffallback");
    assert_eq!(url.query(), Some("redir=/fallback"));
}

#[test]
fn urls_without_known_parameters_pass_through() {
    let raw = "https://x/r?utm_source=mail&id=5#frag";
    assert_eq!(unwrap(raw).as_str(), raw);
    assert_eq!(unwrap("https://x/plain").as_str(), "https://x/plain");
}

#[test]
fn double_encoded_nested_query_is_fully_decoded() {
    let url = unwrap(
        "https://t.example/c?redir=https%253A%252F%252Fshop.example%252Fitem%253Fid%253D5",
    );
    assert_eq!(url.query(), Some("redir=https://shop.example/item?id=5"));
}

#[test]
fn malformed_escape_after_first_decode_is_a_parse_failure() {
    let raw = Url::parse("https://t.example/c?redir=%25E0%25A4%25A").unwrap();
    let err = unwrap_nested_destination(raw).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RedirectParseFailure);
}

#[test]
fn invalid_utf8_after_second_decode_is_a_parse_failure() {
    let raw = Url::parse("https://t.example/c?returnUri=%25E0%25A4").unwrap();
    let err = unwrap_nested_destination(raw).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RedirectParseFailure);
}

#[test]
fn fragment_is_dropped_when_unwrapping() {
    let url = unwrap("https://x/r?redir=%2Fhome#section");
    assert_eq!(url.as_str(), "https://x/r?redir=/home");
}
