use crate::model::{ModelAdapter, default_adapters};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Name of the solver executable (resolved using `PATH`).
pub const BNS_EXECUTABLE: &str = "bns";

/// A configuration object for attractor search using the `bns` solver.
#[derive(Clone)]
pub struct SearchConfig {
    /// The solver executable (default: [`BNS_EXECUTABLE`]).
    pub executable: PathBuf,
    /// Only search for attractors whose period divides this length (default: `None`,
    /// i.e., all attractors). `Some(0)` is treated the same as `None`.
    pub length: Option<usize>,
    /// If a CNET file is given without variable names, try to read the names from its
    /// `# <id> = <name>` comments (default: `false`).
    pub labels_from_comments: bool,
    /// Adapters used to normalize model references, in the order in which they are tried
    /// (default: [`default_adapters`]).
    pub adapters: Vec<Arc<dyn ModelAdapter>>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig::new()
    }
}

impl From<Option<usize>> for SearchConfig {
    fn from(value: Option<usize>) -> Self {
        SearchConfig::new().with_length(value)
    }
}

impl SearchConfig {
    /// Create a new [`SearchConfig`] that searches for all attractors using the `bns`
    /// executable and the default model adapters.
    pub fn new() -> SearchConfig {
        SearchConfig {
            executable: PathBuf::from(BNS_EXECUTABLE),
            length: None,
            labels_from_comments: false,
            adapters: default_adapters(),
        }
    }

    pub fn with_executable<P: Into<PathBuf>>(mut self, executable: P) -> SearchConfig {
        self.executable = executable.into();
        self
    }

    pub fn with_length(mut self, length: Option<usize>) -> SearchConfig {
        self.length = length;
        self
    }

    pub fn with_labels_from_comments(mut self, enabled: bool) -> SearchConfig {
        self.labels_from_comments = enabled;
        self
    }

    /// Register an additional adapter. It is tried *before* all previously registered
    /// adapters.
    pub fn with_adapter(mut self, adapter: Arc<dyn ModelAdapter>) -> SearchConfig {
        self.adapters.insert(0, adapter);
        self
    }

    /// The effective length restriction (`Some(0)` is no restriction).
    pub fn effective_length(length: Option<usize>) -> Option<usize> {
        length.filter(|it| *it > 0)
    }

    /// Command line arguments of the solver: `[-l <length>] <model>`.
    pub fn solver_arguments(length: Option<usize>, model: &Path) -> Vec<OsString> {
        let mut args = Vec::new();
        if let Some(length) = Self::effective_length(length) {
            args.push(OsString::from("-l"));
            args.push(OsString::from(length.to_string()));
        }
        args.push(model.as_os_str().to_os_string());
        args
    }
}
