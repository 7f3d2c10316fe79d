use hoptrace_core::{clean_url, Hop, StatusClass, TraceResult};
use pretty_assertions::assert_eq;

#[test]
fn status_class_follows_hundreds_digit() {
    assert_eq!(StatusClass::from_code(200), StatusClass::Success);
    assert_eq!(StatusClass::from_code(299), StatusClass::Success);
    assert_eq!(StatusClass::from_code(301), StatusClass::Redirection);
    assert_eq!(StatusClass::from_code(404), StatusClass::ClientError);
    assert_eq!(StatusClass::from_code(508), StatusClass::ServerError);
    assert_eq!(StatusClass::from_code(599), StatusClass::ServerError);
}

#[test]
fn status_class_is_empty_outside_known_range() {
    for code in [0, 100, 199, 600, 999] {
        assert_eq!(StatusClass::from_code(code), StatusClass::Unclassified);
        assert_eq!(StatusClass::from_code(code).as_str(), "");
    }
}

#[test]
fn clean_url_drops_query_from_first_question_mark() {
    assert_eq!(
        clean_url("https://example.com/a?utm_source=x&b=?c"),
        "https://example.com/a"
    );
    assert_eq!(clean_url("https://example.com/a"), "https://example.com/a");
    assert_eq!(clean_url("?only"), "");
    assert_eq!(clean_url(""), "");
}

#[test]
fn clean_url_is_idempotent() {
    let samples = [
        "https://example.com/path?x=1",
        "https://example.com/path",
        "https://example.com/?a=1?b=2",
        "no-scheme?q",
        "",
    ];
    for sample in samples {
        let once = clean_url(sample);
        assert_eq!(clean_url(once), once);
    }
}

#[test]
fn trace_result_derives_clean_url() {
    let result = TraceResult::new(Vec::new(), "https://shop.example/item?ref=mail");
    assert_eq!(result.clean_url, "https://shop.example/item");
    assert!(result.has_tracking_query());

    let plain = TraceResult::new(Vec::new(), "https://shop.example/item");
    assert_eq!(plain.clean_url, plain.final_url);
    assert!(!plain.has_tracking_query());
}

#[test]
fn trace_result_serializes_with_public_field_names() {
    let result = TraceResult::new(
        vec![
            Hop::new(1, "http://a/1", 302),
            Hop::new(2, "http://a/b?x=1", 200),
        ],
        "http://a/b?x=1",
    );

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "hops": [
                {"number": 1, "url": "http://a/1", "statusCode": 302, "statusCodeClass": "3xx"},
                {"number": 2, "url": "http://a/b?x=1", "statusCode": 200, "statusCodeClass": "2xx"}
            ],
            "finalURL": "http://a/b?x=1",
            "cleanURL": "http://a/b"
        })
    );
}

#[test]
fn unclassified_status_serializes_as_empty_string() {
    let hop = Hop::new(3, "http://a/", 999);
    let value = serde_json::to_value(&hop).unwrap();
    assert_eq!(value["statusCodeClass"], "");
}
