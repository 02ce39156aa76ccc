use std::cmp::{max, min};

use crate::strategy::Strategy;

#[derive(Clone, Debug)]
pub(crate) struct Config {
    pool_name: String,
    max_workers: usize,
    strategy: Strategy,
}

impl Config {
    pub(crate) fn new(
        pool_name: String,
        max_workers: usize,
        strategy: Strategy,
    ) -> Config {
        Config {
            pool_name,
            max_workers,
            strategy,
        }
    }

    pub(crate) fn pool_name(&self) -> &String {
        &self.pool_name
    }

    pub(crate) fn max_workers(&self) -> usize {
        self.max_workers
    }

    pub(crate) fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Number of workers for a request with `keys` sort keys. Less than 2 means sequential.
    pub(crate) fn worker_count(&self, keys: usize) -> usize {
        let bounded = min(keys, self.max_workers);
        match self.strategy {
            Strategy::Auto => bounded,
            Strategy::Sequential => min(bounded, 1),
            Strategy::Parallel => max(bounded, 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(max_workers: usize, strategy: Strategy) -> Config {
        Config::new("test".to_string(), max_workers, strategy)
    }

    #[test]
    fn test_auto_worker_count() {
        let config = config(8, Strategy::Auto);
        assert_eq!(config.worker_count(1), 1);
        assert_eq!(config.worker_count(2), 2);
        assert_eq!(config.worker_count(8), 8);
        assert_eq!(config.worker_count(100), 8);
    }

    #[test]
    fn test_forced_worker_count() {
        assert_eq!(config(8, Strategy::Sequential).worker_count(10), 1);
        assert_eq!(config(8, Strategy::Parallel).worker_count(1), 2);
        assert_eq!(config(1, Strategy::Parallel).worker_count(10), 2);
        assert_eq!(config(4, Strategy::Parallel).worker_count(10), 4);
    }
}
