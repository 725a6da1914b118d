pub mod dataloader;
pub mod dataset;
mod source;

pub use dataloader::DataLoader;
pub use dataset::{Batch, InMemoryDataset};
pub use source::DataSource;
