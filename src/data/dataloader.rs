use std::num::NonZeroUsize;

use log::trace;
use ndarray::Axis;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use super::{Batch, DataSource, InMemoryDataset};

/// Batching loader over an `InMemoryDataset`.
///
/// Optionally shuffles the sample order on every pass and drops a final partial batch.
#[derive(Debug, Clone)]
pub struct DataLoader {
    dataset: InMemoryDataset,
    batch_size: NonZeroUsize,
    drop_last: bool,
    rng: Option<StdRng>,
    order: Vec<usize>,
    cursor: usize,
}

impl DataLoader {
    pub fn new(dataset: InMemoryDataset, batch_size: NonZeroUsize) -> Self {
        let order = (0..dataset.len()).collect();

        Self {
            dataset,
            batch_size,
            drop_last: false,
            rng: None,
            order,
            cursor: 0,
        }
    }

    /// Skips the last batch of each pass when it holds fewer than `batch_size` samples.
    pub fn with_drop_last(mut self, drop_last: bool) -> Self {
        self.drop_last = drop_last;
        self
    }

    /// Shuffles the sample order on every pass, seeding from the OS when `seed` is `None`.
    pub fn with_shuffle(mut self, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        self.rng = Some(rng);
        self.reset();
        self
    }

    #[inline]
    pub fn dataset(&self) -> &InMemoryDataset {
        &self.dataset
    }

    #[inline]
    pub fn batch_size(&self) -> usize {
        self.batch_size.get()
    }

    /// Returns the amount of batches a full pass yields.
    pub fn num_batches(&self) -> usize {
        let len = self.dataset.len();
        let batch_size = self.batch_size.get();

        if self.drop_last {
            len / batch_size
        } else {
            len.div_ceil(batch_size)
        }
    }

    /// Rewinds to the start of the data, reshuffling if enabled.
    pub fn reset(&mut self) {
        self.cursor = 0;

        if let Some(rng) = &mut self.rng {
            self.order.shuffle(rng);
        }
    }

    /// Returns the next batch of this pass, or None if exhausted.
    pub fn next_batch(&mut self) -> Option<Batch> {
        let batch_size = self.batch_size.get();
        let remaining = self.order.len() - self.cursor;

        if remaining == 0 || (self.drop_last && remaining < batch_size) {
            if remaining > 0 {
                trace!("dropping last partial batch of {remaining} samples");
            }
            return None;
        }

        let end = (self.cursor + batch_size).min(self.order.len());
        let idx = &self.order[self.cursor..end];

        let batch = Batch {
            x: self.dataset.x().select(Axis(0), idx),
            y: self.dataset.y().select(Axis(0), idx),
        };

        self.cursor = end;
        Some(batch)
    }
}

impl DataSource for DataLoader {
    fn dataset_len(&self) -> usize {
        self.dataset.len()
    }

    fn batches(&mut self) -> impl Iterator<Item = Batch> + '_ {
        self.reset();
        std::iter::from_fn(move || self.next_batch())
    }
}
