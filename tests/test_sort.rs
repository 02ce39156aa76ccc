use serde_json::json;

use payload_sort::error::SortError;
use payload_sort::payload::Payload;
use payload_sort::sort::{sort_payload, Sort};
use payload_sort::strategy::Strategy;

mod common;

#[test]
fn test_sort_strings_and_numbers() -> Result<(), anyhow::Error> {
    common::setup();
    let payload = common::payload(json!({
        "fruits": ["banana", "apple", "orange"],
        "numbers": [1333, 4, 2431, 7],
        "colors": ["red", "blue", "green"],
    }));
    let sorted = sort_payload(&payload, &common::keys(&["fruits", "numbers"]))?;
    assert_eq!(
        sorted,
        common::payload(json!({
            "fruits": ["apple", "banana", "orange"],
            "numbers": [4, 7, 1333, 2431],
            "colors": ["red", "blue", "green"],
        }))
    );
    Ok(())
}

#[test]
fn test_input_is_not_modified() -> Result<(), anyhow::Error> {
    common::setup();
    let payload = common::payload(json!({"fruits": ["banana", "apple"], "numbers": [3, 1, 2]}));
    let original = payload.clone();
    sort_payload(&payload, &common::keys(&["fruits", "numbers"]))?;
    assert_eq!(payload, original);
    Ok(())
}

#[test]
fn test_empty_payload() {
    common::setup();
    let error = sort_payload(&Payload::new(), &common::keys(&["fruits"])).unwrap_err();
    assert!(matches!(error, SortError::InvalidInput(_)));
    assert!(error.is_client_error());
}

#[test]
fn test_empty_sort_keys() {
    common::setup();
    let payload = common::payload(json!({"fruits": ["b", "a"]}));
    let error = sort_payload(&payload, &[]).unwrap_err();
    assert!(matches!(error, SortError::InvalidInput(_)));
}

#[test]
fn test_unsupported_type() {
    common::setup();
    let payload = common::payload(json!({"fruits": [true, false]}));
    let error = sort_payload(&payload, &common::keys(&["fruits"])).unwrap_err();
    match &error {
        SortError::UnsupportedType { key, .. } => assert_eq!(key, "fruits"),
        other => panic!("unexpected error: {}", other),
    }
    assert!(!error.is_client_error());
    assert!(error.to_string().starts_with("error sorting key fruits: unsupported type for key fruits"));
}

#[test]
fn test_mixed_array_is_rejected() {
    common::setup();
    let payload = common::payload(json!({"mixed": [1, "two", 3]}));
    let error = sort_payload(&payload, &common::keys(&["mixed"])).unwrap_err();
    assert!(matches!(error, SortError::UnsupportedType { .. }));
}

#[test]
fn test_absent_key() -> Result<(), anyhow::Error> {
    common::setup();
    let payload = common::payload(json!({"fruits": ["b", "a"]}));
    let sorted = sort_payload(&payload, &common::keys(&["vegetables"]))?;
    assert_eq!(sorted, payload);
    assert!(!sorted.contains_key("vegetables"));
    Ok(())
}

#[test]
fn test_empty_array_and_scalars() -> Result<(), anyhow::Error> {
    common::setup();
    let payload = common::payload(json!({"empty": [], "count": 3, "name": "fruits", "flag": true}));
    let sorted = sort_payload(&payload, &common::keys(&["empty", "count", "name", "flag"]))?;
    assert_eq!(sorted, payload);
    Ok(())
}

#[test]
fn test_duplicate_keys() -> Result<(), anyhow::Error> {
    common::setup();
    let payload = common::payload(json!({"fruits": ["c", "a", "b"]}));
    for strategy in [Strategy::Sequential, Strategy::Parallel] {
        let mut sort = Sort::new();
        sort.with_strategy(strategy);
        let sorted = sort.sort(&payload, &common::keys(&["fruits", "fruits", "fruits"]))?;
        assert_eq!(sorted["fruits"], json!(["a", "b", "c"]));
    }
    Ok(())
}

#[test]
fn test_sort_is_idempotent() -> Result<(), anyhow::Error> {
    common::setup();
    let payload = common::payload(json!({"numbers": [2.5, -3, 10, 0], "letters": ["z", "y", "x"]}));
    let sort_keys = common::keys(&["numbers", "letters"]);
    let once = sort_payload(&payload, &sort_keys)?;
    let twice = sort_payload(&once, &sort_keys)?;
    assert_eq!(once, twice);
    assert_eq!(once["numbers"], json!([-3, 0, 2.5, 10]));
    Ok(())
}

#[test]
fn test_sort_large_integers() -> Result<(), anyhow::Error> {
    common::setup();
    let payload = common::payload(json!({
        "ids": [9007199254740993_u64, 9007199254740992_u64, 9007199254740993_u64, 9007199254740992_u64],
        "mixed_sign": [u64::MAX, i64::MIN, i64::MAX],
    }));
    let sorted = sort_payload(&payload, &common::keys(&["ids", "mixed_sign"]))?;
    assert_eq!(
        sorted["ids"],
        json!([9007199254740992_u64, 9007199254740992_u64, 9007199254740993_u64, 9007199254740993_u64])
    );
    assert_eq!(
        sorted["mixed_sign"],
        json!([i64::MIN, i64::MAX, u64::MAX])
    );
    Ok(())
}
