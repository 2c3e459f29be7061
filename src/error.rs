use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire metrics crate.
pub type Result<T> = std::result::Result<T, MetricsErr>;

/// The metrics crate's error type.
///
/// The plain metric functions never return it, only the checked layer
/// (`check_shapes` and `LossFnSpec`) does.
#[derive(Debug)]
pub enum MetricsErr {
    ShapeMismatch {
        a: &'static str,
        b: &'static str,
        got: Vec<usize>,
        expected: Vec<usize>,
    },
    InvalidConfig(String),
    Json(serde_json::Error),
}

impl Display for MetricsErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricsErr::ShapeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "There's a shape mismatch between {a} and {b}, got {got:?} and expected {expected:?}"
            ),
            MetricsErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            MetricsErr::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl Error for MetricsErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MetricsErr::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for MetricsErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
