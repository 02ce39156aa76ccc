//! This crate sorts the arrays of a JSON payload, selected by name, leaving every other entry
//! untouched.
//!
//! A payload is a JSON object. Every entry listed by the sort keys that holds a non-empty array of
//! text or numbers is replaced by the same elements in ascending order. Arrays holding anything
//! else are rejected, entries missing from the payload are skipped.
//!
//! A request with a single sort key is sorted on the calling thread. A request with more keys is
//! spread over a pool of worker threads, bounded by [sort::MAX_WORKERS] regardless of how many
//! keys are requested. Each worker owns the array it sorts, results are merged back into a copy
//! of the payload once all workers are done. The caller's payload is never modified and a failed
//! request never returns a partially sorted payload.
//!
//! The [server] module exposes the sort over HTTP as `POST /sort`.
//!
//! # Examples
//! ```
//! use serde_json::json;
//! use payload_sort::sort::sort_payload;
//!
//! fn sort_request() -> Result<(), anyhow::Error> {
//!     let payload = json!({
//!         "fruits": ["banana", "apple", "orange"],
//!         "numbers": [1333, 4, 2431, 7],
//!         "colors": ["red", "blue", "green"],
//!     });
//!     let sort_keys = vec!["fruits".to_string(), "numbers".to_string()];
//!
//!     let sorted = sort_payload(payload.as_object().unwrap(), &sort_keys)?;
//!     assert_eq!(sorted["fruits"], json!(["apple", "banana", "orange"]));
//!     assert_eq!(sorted["numbers"], json!([4, 7, 1333, 2431]));
//!     assert_eq!(sorted["colors"], json!(["red", "blue", "green"]));
//!     Ok(())
//! }
//! # sort_request().unwrap();
//! ```
//!

pub(crate) mod sort_command;
pub(crate) mod element;
pub(crate) mod config;

pub mod sort;
pub mod array_sort;
pub mod element_type;
pub mod error;
pub mod payload;
pub mod request;
pub mod server;
pub mod strategy;
