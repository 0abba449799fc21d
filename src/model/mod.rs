//! Normalization of model references into a [`ModelDescriptor`].
//!
//! The solver only reads networks in the CNET format. A [`ModelRef`] can however be
//! an already prepared CNET file, an in-memory [`BooleanNetwork`], or a model written in
//! one of the formats supported by `biodivine-lib-param-bn`. The conversion is performed by
//! an explicit list of [`ModelAdapter`] objects:
//!
//! - [`ModelFormatAdapter`] parses `.aeon`, `.bnet` and `.sbml` models (files or in-memory
//!   sources) and hands the resulting network over to [`BooleanNetworkAdapter`].
//! - [`BooleanNetworkAdapter`] writes a [`BooleanNetwork`] into a temporary CNET file
//!   and remembers the names of its variables.
//!
//! A path that no adapter claims is passed to the solver as is.
//!
//! ```no_run
//! use biodivine_bns::model::load;
//!
//! let descriptor = load("model.bnet").unwrap();
//! assert!(descriptor.is_temporary());
//! println!("Variables: {:?}", descriptor.variable_names());
//! ```

mod adapters;
pub mod cnet;
mod model_descriptor;

#[cfg(test)]
mod tests;

use crate::error::BnsError;
use biodivine_lib_param_bn::BooleanNetwork;
use log::debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use adapters::{BooleanNetworkAdapter, ModelFormat, ModelFormatAdapter};
pub use model_descriptor::ModelDescriptor;

/// A reference to a model of any supported origin.
#[derive(Clone)]
pub enum ModelRef {
    /// An already normalized model.
    Descriptor(ModelDescriptor),
    /// A path to a model file.
    Path(PathBuf),
    /// An in-memory Boolean network.
    Network(BooleanNetwork),
    /// An in-memory model source in the given format (e.g. `aeon`, `bnet` or `sbml`).
    Source { format: String, content: String },
}

impl ModelRef {
    /// Build a [`ModelRef::Source`].
    pub fn source(format: &str, content: &str) -> ModelRef {
        ModelRef::Source {
            format: format.to_string(),
            content: content.to_string(),
        }
    }

    /// A short human-readable description of this reference (used in logs and errors).
    pub fn kind(&self) -> String {
        match self {
            ModelRef::Descriptor(d) => format!("descriptor `{}`", d.source_path().display()),
            ModelRef::Path(path) => format!("path `{}`", path.display()),
            ModelRef::Network(network) => format!("network with {} variables", network.num_vars()),
            ModelRef::Source { format, content } => {
                format!("`{format}` source ({} bytes)", content.len())
            }
        }
    }
}

impl From<ModelDescriptor> for ModelRef {
    fn from(value: ModelDescriptor) -> Self {
        ModelRef::Descriptor(value)
    }
}

impl From<BooleanNetwork> for ModelRef {
    fn from(value: BooleanNetwork) -> Self {
        ModelRef::Network(value)
    }
}

impl From<&BooleanNetwork> for ModelRef {
    fn from(value: &BooleanNetwork) -> Self {
        ModelRef::Network(value.clone())
    }
}

impl From<PathBuf> for ModelRef {
    fn from(value: PathBuf) -> Self {
        ModelRef::Path(value)
    }
}

impl From<&Path> for ModelRef {
    fn from(value: &Path) -> Self {
        ModelRef::Path(value.to_path_buf())
    }
}

impl From<&str> for ModelRef {
    fn from(value: &str) -> Self {
        ModelRef::Path(PathBuf::from(value))
    }
}

impl From<String> for ModelRef {
    fn from(value: String) -> Self {
        ModelRef::Path(PathBuf::from(value))
    }
}

/// Converts recognized model references into CNET files.
pub trait ModelAdapter: Send + Sync {
    /// Name of the adapter (for logging).
    fn name(&self) -> &str;

    /// True if this adapter can export the given model.
    fn recognize(&self, model: &ModelRef) -> bool;

    /// Export a model previously accepted by [`ModelAdapter::recognize`].
    ///
    /// The returned descriptor should use a fresh, uniquely named file, such that
    /// concurrent searches never share an export.
    fn export(&self, model: ModelRef) -> Result<ModelDescriptor, BnsError>;
}

/// The adapters used by [`load`], in the order in which they are tried.
pub fn default_adapters() -> Vec<Arc<dyn ModelAdapter>> {
    let format: Arc<dyn ModelAdapter> = Arc::new(ModelFormatAdapter::default());
    let network: Arc<dyn ModelAdapter> = Arc::new(BooleanNetworkAdapter);
    vec![format, network]
}

/// Normalize a model reference using the [`default_adapters`].
pub fn load<M: Into<ModelRef>>(model: M) -> Result<ModelDescriptor, BnsError> {
    normalize(model.into(), &default_adapters())
}

/// Normalize a model reference using the given adapters.
///
/// A descriptor is returned unchanged. Otherwise, the first adapter that recognizes the
/// model exports it. Paths that no adapter recognizes are used directly, without variable
/// names. Any other reference is an [`BnsError::UnsupportedModelKind`].
pub fn normalize(
    model: ModelRef,
    adapters: &[Arc<dyn ModelAdapter>],
) -> Result<ModelDescriptor, BnsError> {
    let model = match model {
        ModelRef::Descriptor(descriptor) => return Ok(descriptor),
        model => model,
    };

    if let Some(adapter) = adapters.iter().find(|it| it.recognize(&model)) {
        debug!("Exporting {} using `{}`.", model.kind(), adapter.name());
        return adapter.export(model);
    }

    match model {
        ModelRef::Path(path) => {
            debug!("Using `{}` as a CNET file.", path.display());
            Ok(ModelDescriptor::from_path(path))
        }
        other => Err(BnsError::UnsupportedModelKind(other.kind())),
    }
}
