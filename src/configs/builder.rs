use std::num::NonZeroUsize;

use super::{ActFnConfig, DatasetConfig, JobConfig, LayerConfig, LoaderConfig, ModelConfig};
use crate::{
    EvalErr, Result,
    arch::{Sequential, activations::ActFn, layers::Layer},
    data::{DataLoader, InMemoryDataset},
};

/// Builds the runtime pieces of an evaluation job from its configuration.
#[derive(Default)]
pub struct JobBuilder;

impl JobBuilder {
    /// Creates a new `JobBuilder`.
    pub fn new() -> Self {
        Self
    }

    /// Builds the model and the loader described by `job`.
    pub fn build(&self, job: &JobConfig) -> Result<(Sequential, DataLoader)> {
        let model = self.resolve_model(&job.model)?;
        let loader = self.resolve_loader(&job.dataset, &job.loader)?;
        Ok((model, loader))
    }

    fn resolve_model(&self, config: &ModelConfig) -> Result<Sequential> {
        let layers = config
            .layers
            .iter()
            .map(|lc| self.resolve_layer(lc))
            .collect::<Result<Vec<_>>>()?;

        let model = Sequential::new(layers, config.params.clone())?;

        Ok(match config.seed {
            Some(seed) => model.with_seed(seed),
            None => model,
        })
    }

    fn resolve_layer(&self, config: &LayerConfig) -> Result<Layer> {
        match *config {
            LayerConfig::Dense { dim, act_fn } => {
                Ok(Layer::dense(dim, act_fn.map(|a| self.resolve_act_fn(a))))
            }
            LayerConfig::Dropout { p } => Layer::dropout(p),
        }
    }

    fn resolve_act_fn(&self, config: ActFnConfig) -> ActFn {
        match config {
            ActFnConfig::Sigmoid { amp } => ActFn::sigmoid(amp),
        }
    }

    fn resolve_loader(&self, dataset: &DatasetConfig, config: &LoaderConfig) -> Result<DataLoader> {
        let batch_size = NonZeroUsize::new(config.batch_size)
            .ok_or_else(|| EvalErr::InvalidConfig("batch_size must be positive".into()))?;

        let dataset = InMemoryDataset::new(dataset.data.clone(), dataset.x_size, dataset.y_size)?;
        let loader = DataLoader::new(dataset, batch_size).with_drop_last(config.drop_last);

        Ok(if config.shuffle {
            loader.with_shuffle(config.seed)
        } else {
            loader
        })
    }
}
