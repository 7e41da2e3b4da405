//! Error type shared by every solver entry point.

/// Errors raised before any evolutionary work starts.
///
/// A run either fails up front with one of these or runs to completion;
/// nothing inside the generation loop can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GaError {
    /// A knapsack item line could not be parsed.
    ///
    /// `line` is 1-based and counts blank lines, so it matches what the
    /// caller sees in its text input.
    #[error("parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// A configuration value makes the algorithm undefined.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl GaError {
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        GaError::Parse {
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        GaError::InvalidParameter(msg.into())
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GaError>;
