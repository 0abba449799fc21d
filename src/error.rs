use cancel_this::Cancelled;
use std::path::PathBuf;

/// Failures of a BNS search.
///
/// Note that "no attractor found" is not an error. It is reported as `Ok(None)` by the
/// search methods.
#[derive(Debug, thiserror::Error)]
pub enum BnsError {
    /// The model reference is neither a path nor something a registered adapter can export.
    #[error("Unsupported model kind: {0}")]
    UnsupportedModelKind(String),

    /// The model was recognized, but could not be converted into a CNET file.
    #[error("Cannot export model to CNET: {0}")]
    ModelExport(String),

    /// The CNET file passed to the solver does not exist.
    #[error("Model file `{}` does not exist", .0.display())]
    ModelNotFound(PathBuf),

    /// The solver executable cannot be started.
    #[error("Cannot launch `{}`: {source}", .executable.display())]
    ExternalToolUnavailable {
        executable: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A block of solver output has rows of unexpected width or with invalid characters.
    ///
    /// Both indices are zero-based.
    #[error("Malformed attractor block {block} (row {row}): {reason}")]
    MalformedBlock {
        block: usize,
        row: usize,
        reason: String,
    },

    /// The model provides a different number of variable names than the solver reports.
    #[error("Model names {names} variables, but the solver output has {variables}")]
    VariableNamesMismatch { names: usize, variables: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Search cancelled: {0}")]
    Cancelled(Cancelled),
}

impl From<Cancelled> for BnsError {
    fn from(value: Cancelled) -> Self {
        BnsError::Cancelled(value)
    }
}

impl BnsError {
    /// True if this error was caused by cooperative cancellation of the search.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, BnsError::Cancelled(_))
    }
}
