use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

use command_executor::command::Command;
use serde_json::Value;

use crate::array_sort::sort_array;
use crate::error::SortError;

/// Sorted arrays and the first failure, shared by all commands of one parallel sort
#[derive(Default)]
pub(crate) struct SortResults {
    sorted: Mutex<Vec<(String, Vec<Value>)>>,
    failure: Mutex<Option<SortError>>,
}

impl SortResults {
    pub(crate) fn failed(&self) -> bool {
        self.failure
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn push(&self, key: String, sorted: Vec<Value>) {
        self.sorted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((key, sorted));
    }

    /// Only the first failure is kept
    fn fail(&self, error: SortError) {
        let mut failure = self.failure.lock().unwrap_or_else(PoisonError::into_inner);
        if failure.is_none() {
            *failure = Some(error);
        }
    }

    /// Take the sorted arrays, or the first failure if any command failed
    pub(crate) fn take(&self) -> Result<Vec<(String, Vec<Value>)>, SortError> {
        if let Some(error) = self.failure.lock().unwrap_or_else(PoisonError::into_inner).take() {
            return Err(error);
        }
        let mut sorted = self.sorted.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(std::mem::take(&mut *sorted))
    }
}

/// Sorts the array of one payload key. The command owns its array, only the result is shared.
pub(crate) struct SortCommand {
    key: String,
    elements: Vec<Value>,
    results: Arc<SortResults>,
}

impl SortCommand {
    pub(crate) fn new(key: String, elements: Vec<Value>, results: Arc<SortResults>) -> SortCommand {
        SortCommand {
            key,
            elements,
            results,
        }
    }
}

impl Command for SortCommand {
    fn execute(&self) -> Result<(), anyhow::Error> {
        if self.results.failed() {
            log::debug!("Skip key: {}, a previous key failed, thread: {}", self.key, thread::current().name().unwrap_or("unnamed"));
            return Ok(());
        }

        log::debug!("Sorting key: {}, elements: {}, thread: {}", self.key, self.elements.len(), thread::current().name().unwrap_or("unnamed"));
        // failures are reported through SortResults, the pool only logs command errors
        match sort_array(&self.key, &self.elements) {
            Ok(sorted) => {
                self.results.push(self.key.clone(), sorted);
            }
            Err(e) => {
                log::warn!("Failed to sort key: {}, error: {}", self.key, e);
                self.results.fail(e);
            }
        }
        Ok(())
    }
}
