use super::Batch;

/// Anything that can be iterated as batches of `(x, y)` pairs.
pub trait DataSource {
    /// Returns the amount of examples in the underlying dataset.
    ///
    /// This is independent of batching: examples the source skips (e.g. a dropped final
    /// partial batch) are still counted.
    fn dataset_len(&self) -> usize;

    /// Returns one pass over the data, in order.
    fn batches(&mut self) -> impl Iterator<Item = Batch> + '_;
}
