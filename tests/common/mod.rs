use std::sync::Once;

use rand::seq::SliceRandom;
use serde_json::{json, Value};
use simple_logger::SimpleLogger;

use payload_sort::payload::Payload;

static LOGGER: Once = Once::new();

pub fn setup() {
    LOGGER.call_once(|| {
        SimpleLogger::new()
            .with_level(log::LevelFilter::Warn)
            .env()
            .init()
            .unwrap_or_else(|e| panic!("Failed to initialize logger: {}", e));
    });
}

#[allow(dead_code)]
pub fn payload(value: Value) -> Payload {
    match value {
        Value::Object(map) => map,
        other => panic!("Payload must be an object: {}", other),
    }
}

#[allow(dead_code)]
pub fn keys(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|key| key.to_string()).collect()
}

#[allow(dead_code)]
pub fn shuffled_numbers(size: usize) -> Value {
    let mut numbers: Vec<i64> = (0..size as i64).map(|i| i * 3 - 1000).collect();
    numbers.shuffle(&mut rand::thread_rng());
    json!(numbers)
}

#[allow(dead_code)]
pub fn shuffled_strings(size: usize) -> Value {
    let mut strings: Vec<String> = (0..size).map(|i| format!("string_{}", i)).collect();
    strings.shuffle(&mut rand::thread_rng());
    json!(strings)
}

#[allow(dead_code)]
pub fn is_sorted(value: &Value) -> bool {
    let elements = match value.as_array() {
        Some(elements) => elements,
        None => return false,
    };
    elements.windows(2).all(|pair| match (&pair[0], &pair[1]) {
        (Value::String(a), Value::String(b)) => a <= b,
        (Value::Number(a), Value::Number(b)) => a.as_f64() <= b.as_f64(),
        _ => false,
    })
}
