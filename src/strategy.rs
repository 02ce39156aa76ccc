/// Execution strategy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Sort sequentially when there is a single sort key, use a worker pool otherwise
    #[default]
    Auto,
    /// Always sort on the calling thread
    Sequential,
    /// Always use a worker pool of at least two workers
    Parallel,
}
