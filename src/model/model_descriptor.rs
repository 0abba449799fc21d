use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempPath;

/// A model in the form accepted by the solver: a path to a CNET file, optionally with
/// the names of the network variables.
///
/// If present, `variable_names` has one entry per network variable and its order is the
/// order of the columns printed by the solver.
///
/// A descriptor created from an in-memory model owns the temporary file it was exported
/// to. The file is removed once the last clone of the descriptor is dropped.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelDescriptor {
    source_path: PathBuf,
    variable_names: Option<Vec<String>>,
    #[cfg_attr(feature = "serde", serde(skip))]
    artifact: Option<Arc<TempPath>>,
}

impl ModelDescriptor {
    /// Create a descriptor of an existing CNET file.
    pub fn new<P: Into<PathBuf>>(
        source_path: P,
        variable_names: Option<Vec<String>>,
    ) -> ModelDescriptor {
        ModelDescriptor {
            source_path: source_path.into(),
            variable_names,
            artifact: None,
        }
    }

    /// Create a descriptor of an existing CNET file without variable names.
    pub fn from_path<P: Into<PathBuf>>(source_path: P) -> ModelDescriptor {
        ModelDescriptor::new(source_path, None)
    }

    /// Create a descriptor that owns (and eventually deletes) a temporary CNET file.
    pub(crate) fn from_temporary(path: TempPath, variable_names: Vec<String>) -> ModelDescriptor {
        ModelDescriptor {
            source_path: path.to_path_buf(),
            variable_names: Some(variable_names),
            artifact: Some(Arc::new(path)),
        }
    }

    /// Replace the variable names of this descriptor.
    pub fn with_variable_names(mut self, variable_names: Vec<String>) -> ModelDescriptor {
        self.variable_names = Some(variable_names);
        self
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn variable_names(&self) -> Option<&[String]> {
        self.variable_names.as_deref()
    }

    /// True if the CNET file was created by this crate and will be deleted with the
    /// descriptor.
    pub fn is_temporary(&self) -> bool {
        self.artifact.is_some()
    }
}
