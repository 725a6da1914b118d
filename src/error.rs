use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, EvalErr>;

/// The crate's error type.
#[derive(Debug)]
pub enum EvalErr {
    /// Two arrays can't be combined element-wise, even after broadcasting.
    ShapeMismatch {
        what: &'static str,
        got: (usize, usize),
        expected: (usize, usize),
    },
    /// A flat buffer doesn't hold the amount of values its consumer needs.
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    /// The accuracy denominator is zero.
    EmptyDataset,
    InvalidConfig(String),
    Io(io::Error),
    Json(serde_json::Error),
}

impl Display for EvalErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalErr::ShapeMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "shape mismatch for {what}: got {got:?}, expected {expected:?}"
            ),
            EvalErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch between {a} and {b}, got {got} and expected {expected}"
            ),
            EvalErr::EmptyDataset => write!(f, "cannot compute accuracy over zero examples"),
            EvalErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            EvalErr::Io(e) => write!(f, "io error: {e}"),
            EvalErr::Json(e) => write!(f, "invalid JSON: {e}"),
        }
    }
}

impl Error for EvalErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EvalErr::Io(e) => Some(e),
            EvalErr::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for EvalErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for EvalErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
