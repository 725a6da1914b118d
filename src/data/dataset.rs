use ndarray::{Array2, ArrayView2, s};

use crate::{EvalErr, Result};

/// An in-memory supervised dataset.
///
/// Samples are stored row-major, each row holding `x_size` features followed by `y_size`
/// labels.
#[derive(Debug, Clone)]
pub struct InMemoryDataset {
    x_size: usize,
    rows: Array2<f32>,
}

impl InMemoryDataset {
    /// Creates a new dataset from a flat buffer.
    ///
    /// # Arguments
    /// * `data` - The samples, row after row.
    /// * `x_size` - The amount of features per sample.
    /// * `y_size` - The amount of labels per sample.
    ///
    /// # Returns
    /// The dataset, or an error if the sizes are zero or `data` isn't a whole number of rows.
    pub fn new(data: Vec<f32>, x_size: usize, y_size: usize) -> Result<Self> {
        if x_size == 0 || y_size == 0 {
            return Err(EvalErr::InvalidConfig(format!(
                "x_size and y_size must be positive, got {x_size} and {y_size}"
            )));
        }

        let row_size = x_size + y_size;
        let len = data.len() / row_size;

        if data.len() % row_size != 0 {
            return Err(EvalErr::SizeMismatch {
                a: "data",
                b: "sample size",
                got: data.len(),
                expected: (len + 1) * row_size,
            });
        }

        let rows = Array2::from_shape_vec((len, row_size), data)
            .map_err(|e| EvalErr::InvalidConfig(e.to_string()))?;

        Ok(Self { x_size, rows })
    }

    /// Creates a new dataset from separate feature and label matrices.
    ///
    /// # Returns
    /// The dataset, or `SizeMismatch` if `x` and `y` have a different amount of rows.
    pub fn from_arrays(x: ArrayView2<f32>, y: ArrayView2<f32>) -> Result<Self> {
        if x.nrows() != y.nrows() {
            return Err(EvalErr::SizeMismatch {
                a: "x rows",
                b: "y rows",
                got: y.nrows(),
                expected: x.nrows(),
            });
        }

        let data = x
            .rows()
            .into_iter()
            .zip(y.rows())
            .flat_map(|(xr, yr)| xr.into_iter().chain(yr).copied())
            .collect();

        Self::new(data, x.ncols(), y.ncols())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.nrows()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn x_size(&self) -> usize {
        self.x_size
    }

    #[inline]
    pub fn y_size(&self) -> usize {
        self.rows.ncols() - self.x_size
    }

    /// Returns the features, one sample per row.
    pub fn x(&self) -> ArrayView2<'_, f32> {
        self.rows.slice(s![.., ..self.x_size])
    }

    /// Returns the labels, one sample per row.
    pub fn y(&self) -> ArrayView2<'_, f32> {
        self.rows.slice(s![.., self.x_size..])
    }
}

/// An owned batch: `x` and `y` hold the same amount of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub x: Array2<f32>,
    pub y: Array2<f32>,
}

impl Batch {
    #[inline]
    pub fn len(&self) -> usize {
        self.x.nrows()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
