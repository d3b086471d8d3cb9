//! Error types for classification and inference.

use thiserror::Error;

/// Errors that can occur while inferring a shape from an input value.
///
/// Every failure is fatal at the point of occurrence: there are no retries
/// and no partial results.
#[derive(Error, Debug)]
pub enum ShapeError {
    /// The input string was not valid JSON (inference entry point).
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The classifier met a value kind outside its recognized set.
    /// Unreachable through JSON input; only programmatic callers can
    /// construct such values. Carries the kind name and a best-effort
    /// snapshot of the offending value.
    #[error("unsupported value kind `{kind}`: {repr}")]
    UnsupportedKind { kind: &'static str, repr: String },

    /// A sampling-strategy token that names no known strategy. Raised when
    /// parsing the token at the API boundary; the sampler itself only ever
    /// sees a validated [`SampleStrategy`](crate::SampleStrategy).
    #[error("unknown sampling strategy `{0}`, expected one of: first, first+last, first+mid+last, all")]
    UnknownStrategy(String),
}

/// Convenience alias used throughout jsonshape-core.
pub type Result<T> = std::result::Result<T, ShapeError>;
