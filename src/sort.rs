use std::sync::Arc;

use anyhow::anyhow;
use command_executor::shutdown_mode::ShutdownMode;
use command_executor::thread_pool_builder::ThreadPoolBuilder;
use serde_json::Value;

use crate::array_sort::{is_sorted, sort_array};
use crate::config::Config;
use crate::error::SortError;
use crate::payload::{isolate, take_array, unique_keys, Payload};
use crate::sort_command::{SortCommand, SortResults};
use crate::strategy::Strategy;

/// Default upper bound of the worker pool size
pub const MAX_WORKERS: usize = 8;

/// Sort the arrays of a payload listed by sort keys
///
/// # Examples
/// ```
/// use serde_json::json;
/// use payload_sort::sort::Sort;
///
/// fn sort_fruits() -> Result<(), payload_sort::error::SortError> {
///     let payload = json!({"fruits": ["banana", "apple"], "colors": ["red", "blue"]});
///     let payload = payload.as_object().unwrap();
///
///     let mut sort = Sort::new();
///     // bound the number of threads used for a single request, the default is 8
///     sort.with_max_workers(4);
///     let sorted = sort.sort(payload, &["fruits".to_string()])?;
///     assert_eq!(sorted["fruits"], json!(["apple", "banana"]));
///     assert_eq!(sorted["colors"], json!(["red", "blue"]));
///     Ok(())
/// }
/// # sort_fruits().unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct Sort {
    max_workers: usize,
    strategy: Strategy,
}

impl Default for Sort {
    fn default() -> Self {
        Sort::new()
    }
}

impl Sort {
    /// Create a default Sort definition.
    ///
    /// * at most [MAX_WORKERS] workers are used for a single request
    /// * the strategy is [Strategy::Auto]: a single sort key is sorted on the calling thread,
    ///   more keys are sorted by a worker pool
    pub fn new() -> Sort {
        Sort {
            max_workers: MAX_WORKERS,
            strategy: Strategy::Auto,
        }
    }

    /// Set the upper bound of the worker pool size. Zero will result in using all system cores
    pub fn with_max_workers(&mut self, max_workers: usize) {
        self.max_workers = max_workers;
    }

    /// Set [Strategy]. The default is [Strategy::Auto]
    pub fn with_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    /// Return a copy of `payload` where every array listed in `sort_keys` is sorted in ascending
    /// order. Keys missing from the payload and empty arrays are skipped. `payload` itself is
    /// never modified, and no partially sorted copy is returned on error.
    pub fn sort(&self, payload: &Payload, sort_keys: &[String]) -> Result<Payload, SortError> {
        Self::validate(payload, sort_keys)?;
        let config = self.create_config();
        let copy = isolate(payload);
        let worker_count = config.worker_count(sort_keys.len());
        if worker_count < 2 {
            log::debug!("Start sequential sort, keys: {}", sort_keys.len());
            Self::sequential_sort(copy, sort_keys)
        } else {
            Self::parallel_sort(copy, sort_keys, &config, worker_count)
        }
    }

    /// Check whether every array listed in `sort_keys` is already sorted
    pub fn check(&self, payload: &Payload, sort_keys: &[String]) -> Result<bool, SortError> {
        Self::validate(payload, sort_keys)?;
        for key in sort_keys {
            if let Some(Value::Array(elements)) = payload.get(key) {
                if !is_sorted(key, elements)? {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    fn validate(payload: &Payload, sort_keys: &[String]) -> Result<(), SortError> {
        if payload.is_empty() {
            return Err(SortError::InvalidInput("payload cannot be nil".to_string()));
        }
        if sort_keys.is_empty() {
            return Err(SortError::InvalidInput("sort keys cannot be empty".to_string()));
        }
        Ok(())
    }

    fn create_config(&self) -> Config {
        let mut max_workers = self.max_workers;
        if self.max_workers == 0 {
            max_workers = num_cpus::get();
        }

        Config::new(
            "payload-sort".to_string(),
            max_workers,
            self.strategy,
        )
    }

    fn sequential_sort(mut payload: Payload, sort_keys: &[String]) -> Result<Payload, SortError> {
        for key in sort_keys {
            if let Some(Value::Array(elements)) = payload.get_mut(key) {
                if !elements.is_empty() {
                    *elements = sort_array(key, elements)?;
                }
            }
        }
        Ok(payload)
    }

    fn parallel_sort(mut payload: Payload, sort_keys: &[String], config: &Config, worker_count: usize) -> Result<Payload, SortError> {
        let results = Arc::new(SortResults::default());
        let mut commands = Vec::with_capacity(sort_keys.len());
        for key in unique_keys(sort_keys) {
            if let Some(elements) = take_array(&mut payload, key) {
                commands.push(Box::new(SortCommand::new(key.clone(), elements, results.clone())));
            }
        }

        if commands.is_empty() {
            log::debug!("Nothing to sort, keys: {}", sort_keys.len());
            return Ok(payload);
        }

        log::info!("Start parallel sort, keys: {}, arrays: {}, workers: {} of {}", sort_keys.len(), commands.len(), worker_count, config.max_workers());
        let mut thread_pool_builder = ThreadPoolBuilder::new();
        let mut sorting_pool = thread_pool_builder
            .with_name(config.pool_name().clone())
            .with_tasks(worker_count)
            .with_queue_size(sort_keys.len())
            .with_shutdown_mode(ShutdownMode::CompletePending)
            .build()
            .map_err(|e| SortError::Execution(anyhow!("Failed to start sorting pool: {}", e)))?;

        for sort_command in commands {
            sorting_pool.submit(sort_command);
        }

        log::debug!("Shutting down sorting pool, strategy: {:?}", config.strategy());
        sorting_pool.shutdown();
        sorting_pool
            .join()
            .map_err(|e| SortError::Execution(anyhow!("Failed to join sorting pool: {}", e)))?;

        for (key, sorted) in results.take()? {
            payload.insert(key, Value::Array(sorted));
        }
        log::info!("Finish parallel sort");
        Ok(payload)
    }
}

/// Sort `payload` with the default [Sort] definition
pub fn sort_payload(payload: &Payload, sort_keys: &[String]) -> Result<Payload, SortError> {
    Sort::new().sort(payload, sort_keys)
}
