use field_selection::{everything, parse_selector, Operator, Requirement, Selector, Set};
use serde_json::Value;

#[test]
fn golden_selector_serialization() {
    let selector = parse_selector(r"tier!=cache,app=web,note=a\,b").unwrap();

    let json_str = serde_json::to_string(&selector).unwrap();
    assert_eq!(json_str, r#""app=web,note=a\\,b,tier!=cache""#);

    let roundtrip: Selector = serde_json::from_str(&json_str).unwrap();
    assert_eq!(roundtrip, selector);
}

#[test]
fn invalid_selector_text_fails_deserialization() {
    let result: Result<Selector, _> = serde_json::from_str(r#""x in (a)""#);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("invalid selector"), "{err}");
}

#[test]
fn golden_set_serialization() {
    let set: Set = [("foo", "bar"), ("baz", "qup")].into_iter().collect();

    let json_str = serde_json::to_string(&set).unwrap();
    // BTreeMap ensures lexicographical order of keys
    assert_eq!(json_str, r#"{"baz":"qup","foo":"bar"}"#);

    let parsed: Set = serde_json::from_str(&json_str).unwrap();
    assert_eq!(parsed, set);
}

#[test]
fn golden_requirements_serialization() {
    let selector = parse_selector("b!=2,a=1").unwrap();
    let json = serde_json::to_value(selector.requirements()).unwrap();

    let expected: Value = serde_json::json!([
        { "operator": "Equals", "key": "a", "value": "1" },
        { "operator": "NotEquals", "key": "b", "value": "2" }
    ]);
    assert_eq!(json, expected);

    let back: Vec<Requirement> = serde_json::from_value(json).unwrap();
    assert_eq!(back[1].operator, Operator::NotEquals);
}

#[test]
fn golden_everything_fingerprint() {
    // sha256 of the empty string
    assert_eq!(
        everything().fingerprint(),
        "sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn selectors_embed_in_larger_documents() {
    #[derive(serde::Serialize, serde::Deserialize)]
    struct Query {
        labels: Selector,
        fields: Selector,
    }

    let query: Query =
        serde_json::from_str(r#"{"labels":"app=web","fields":""}"#).unwrap();
    assert!(query.fields.is_empty());
    assert_eq!(query.labels.requires_exact_match("app"), Some("web"));

    let json_str = serde_json::to_string(&query).unwrap();
    assert_eq!(json_str, r#"{"labels":"app=web","fields":""}"#);
}
