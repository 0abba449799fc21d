use crate::error::BnsError;
use crate::model::{ModelAdapter, ModelDescriptor, ModelRef, cnet};
use biodivine_lib_param_bn::BooleanNetwork;
use log::info;
use std::io::Write;
use std::path::Path;

/// Exports an in-memory [`BooleanNetwork`] into a temporary CNET file.
#[derive(Clone, Copy, Debug, Default)]
pub struct BooleanNetworkAdapter;

/// Model formats that can be lowered to a [`BooleanNetwork`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModelFormat {
    Aeon,
    Bnet,
    Sbml,
}

/// Parses models in one of the known [`ModelFormat`]s and exports them
/// through [`BooleanNetworkAdapter`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ModelFormatAdapter {
    network: BooleanNetworkAdapter,
}

impl BooleanNetworkAdapter {
    /// Write `network` into a fresh temporary CNET file.
    pub fn export_network(&self, network: &BooleanNetwork) -> Result<ModelDescriptor, BnsError> {
        let mut file = tempfile::Builder::new()
            .prefix("bns-model-")
            .suffix(".cnet")
            .tempfile()?;
        cnet::write_cnet(network, &mut file)?;
        file.flush()?;

        let names = network
            .variables()
            .map(|var| network.get_variable_name(var).clone())
            .collect();

        let path = file.into_temp_path();
        info!(
            "Exported network with {} variables to `{}`.",
            network.num_vars(),
            path.display()
        );
        Ok(ModelDescriptor::from_temporary(path, names))
    }
}

impl ModelAdapter for BooleanNetworkAdapter {
    fn name(&self) -> &str {
        "boolean-network"
    }

    fn recognize(&self, model: &ModelRef) -> bool {
        matches!(model, ModelRef::Network(_))
    }

    fn export(&self, model: ModelRef) -> Result<ModelDescriptor, BnsError> {
        match model {
            ModelRef::Network(network) => self.export_network(&network),
            other => Err(BnsError::UnsupportedModelKind(other.kind())),
        }
    }
}

impl ModelFormat {
    /// Find a format by its name (case insensitive).
    pub fn from_name(name: &str) -> Option<ModelFormat> {
        match name.to_ascii_lowercase().as_str() {
            "aeon" => Some(ModelFormat::Aeon),
            "bnet" => Some(ModelFormat::Bnet),
            "sbml" => Some(ModelFormat::Sbml),
            _ => None,
        }
    }

    /// Find a format using the extension of a model file.
    pub fn from_path(path: &Path) -> Option<ModelFormat> {
        path.extension()
            .and_then(|it| it.to_str())
            .and_then(ModelFormat::from_name)
    }

    /// Parse a model in this format.
    pub fn parse(&self, content: &str) -> Result<BooleanNetwork, BnsError> {
        let network = match self {
            ModelFormat::Aeon => BooleanNetwork::try_from(content),
            ModelFormat::Bnet => BooleanNetwork::try_from_bnet(content),
            ModelFormat::Sbml => BooleanNetwork::try_from_sbml(content).map(|(bn, _layout)| bn),
        };
        network.map_err(|e| BnsError::ModelExport(format!("Invalid {self:?} model: {e}")))
    }
}

impl ModelFormatAdapter {
    fn lower(&self, model: ModelRef) -> Result<BooleanNetwork, BnsError> {
        match model {
            ModelRef::Source { format, content } => match ModelFormat::from_name(&format) {
                Some(format) => format.parse(&content),
                None => Err(BnsError::UnsupportedModelKind(format!(
                    "unknown model format `{format}`"
                ))),
            },
            ModelRef::Path(path) => match ModelFormat::from_path(&path) {
                Some(format) => format.parse(&std::fs::read_to_string(&path)?),
                None => Err(BnsError::UnsupportedModelKind(format!(
                    "unknown model format of `{}`",
                    path.display()
                ))),
            },
            other => Err(BnsError::UnsupportedModelKind(other.kind())),
        }
    }
}

impl ModelAdapter for ModelFormatAdapter {
    fn name(&self) -> &str {
        "model-format"
    }

    fn recognize(&self, model: &ModelRef) -> bool {
        match model {
            ModelRef::Source { format, .. } => ModelFormat::from_name(format).is_some(),
            ModelRef::Path(path) => ModelFormat::from_path(path).is_some(),
            _ => false,
        }
    }

    fn export(&self, model: ModelRef) -> Result<ModelDescriptor, BnsError> {
        let network = self.lower(model)?;
        self.network.export(ModelRef::Network(network))
    }
}
