//! Tests of model normalization and CNET export.

use crate::error::BnsError;
use crate::model::cnet::{parse_cnet_labels, read_cnet_labels, to_cnet_string};
use crate::model::{
    BooleanNetworkAdapter, ModelAdapter, ModelDescriptor, ModelFormat, ModelFormatAdapter,
    ModelRef, default_adapters, load, normalize,
};
use crate::test_utils::{
    TEST_NETWORK_AEON, TEST_NETWORK_CNET, create_test_network, init_logger, write_file,
};
use biodivine_lib_param_bn::BooleanNetwork;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use test_generator::test_resources;

fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|it| it.to_string()).collect()
}

// ========== Normalization ==========

#[test]
fn test_descriptor_is_unchanged() {
    init_logger();
    let descriptor = ModelDescriptor::new("does/not/exist.cnet", Some(names(&["x", "y"])));
    let normalized = load(descriptor).unwrap();
    assert_eq!(normalized.source_path(), Path::new("does/not/exist.cnet"));
    assert_eq!(normalized.variable_names(), Some(names(&["x", "y"]).as_slice()));
    assert!(!normalized.is_temporary());
}

#[test]
fn test_plain_path_has_no_names() {
    init_logger();
    let descriptor = load("models/toggle_switch.cnet").unwrap();
    assert_eq!(descriptor.source_path(), Path::new("models/toggle_switch.cnet"));
    assert_eq!(descriptor.variable_names(), None);
    assert!(!descriptor.is_temporary());

    // Unknown extensions are also passed through.
    let descriptor = load(PathBuf::from("network.txt")).unwrap();
    assert_eq!(descriptor.variable_names(), None);
}

#[test]
fn test_network_is_exported() {
    init_logger();
    let descriptor = load(create_test_network()).unwrap();
    assert!(descriptor.is_temporary());
    assert_eq!(descriptor.variable_names(), Some(names(&["a", "b", "c"]).as_slice()));
    assert_eq!(
        descriptor.source_path().extension().and_then(|it| it.to_str()),
        Some("cnet")
    );

    let content = std::fs::read_to_string(descriptor.source_path()).unwrap();
    assert_eq!(content, TEST_NETWORK_CNET);

    let path = descriptor.source_path().to_path_buf();
    let copy = descriptor.clone();
    drop(descriptor);
    assert!(path.exists(), "The export must live as long as any clone.");
    drop(copy);
    assert!(!path.exists(), "The export must be removed with the descriptor.");
}

#[test]
fn test_exports_use_unique_files() {
    init_logger();
    let network = create_test_network();
    let first = load(&network).unwrap();
    let second = load(&network).unwrap();
    assert_ne!(first.source_path(), second.source_path());
}

#[test]
fn test_sources_are_lowered_to_networks() {
    init_logger();
    let descriptor = load(ModelRef::source("aeon", TEST_NETWORK_AEON)).unwrap();
    assert_eq!(descriptor.variable_names(), Some(names(&["a", "b", "c"]).as_slice()));
    let content = std::fs::read_to_string(descriptor.source_path()).unwrap();
    assert_eq!(content, TEST_NETWORK_CNET);

    let bnet = "targets, factors\nx, !y\ny, x\n";
    let descriptor = load(ModelRef::source("BNET", bnet)).unwrap();
    assert_eq!(descriptor.variable_names(), Some(names(&["x", "y"]).as_slice()));
}

#[test]
fn test_model_files_are_lowered_to_networks() {
    init_logger();
    let directory = tempfile::tempdir().unwrap();
    let path = write_file(directory.path(), "network.aeon", TEST_NETWORK_AEON);
    let descriptor = load(path.as_path()).unwrap();
    assert!(descriptor.is_temporary());
    assert_ne!(descriptor.source_path(), path.as_path());
    assert_eq!(descriptor.variable_names(), Some(names(&["a", "b", "c"]).as_slice()));
}

#[test]
fn test_unknown_source_format_is_unsupported() {
    init_logger();
    let error = load(ModelRef::source("sbgn", "<xml/>")).unwrap_err();
    assert!(matches!(error, BnsError::UnsupportedModelKind(_)), "{error}");
}

#[test]
fn test_network_without_adapters_is_unsupported() {
    init_logger();
    let error = normalize(ModelRef::Network(create_test_network()), &[]).unwrap_err();
    assert!(matches!(error, BnsError::UnsupportedModelKind(_)), "{error}");

    // Paths are still accepted as they are.
    let descriptor = normalize(ModelRef::from("model.aeon"), &[]).unwrap();
    assert_eq!(descriptor.source_path(), Path::new("model.aeon"));
}

#[test]
fn test_invalid_source_fails_export() {
    init_logger();
    let error = load(ModelRef::source("aeon", "$a: b &")).unwrap_err();
    assert!(matches!(error, BnsError::ModelExport(_)), "{error}");
}

#[test]
fn test_parametrized_network_fails_export() {
    init_logger();
    let network = BooleanNetwork::try_from(
        r"
        a -? a
        $a: p & a
    ",
    )
    .unwrap();
    let error = load(network).unwrap_err();
    assert!(matches!(error, BnsError::ModelExport(_)), "{error}");

    let network = BooleanNetwork::try_from("a -? b\nb -? a\n$b: a").unwrap();
    let error = load(network).unwrap_err();
    assert!(matches!(error, BnsError::ModelExport(_)), "{error}");
}

#[test]
fn test_input_without_function_is_identity() {
    init_logger();
    let network = BooleanNetwork::try_from("a -? b\n$b: a").unwrap();
    let cnet = to_cnet_string(&network).unwrap();
    assert_eq!(cnet, ".v 2\n# 1 = a\n# 2 = b\n\n.n 1 1 1\n1 1\n\n.n 2 1 1\n1 1\n");

    let descriptor = load(network).unwrap();
    assert_eq!(descriptor.variable_names(), Some(names(&["a", "b"]).as_slice()));
}

/// Claims paths with the `.custom` extension and reports a fixed set of names.
struct CustomAdapter;

impl ModelAdapter for CustomAdapter {
    fn name(&self) -> &str {
        "custom"
    }

    fn recognize(&self, model: &ModelRef) -> bool {
        matches!(model, ModelRef::Path(path) if path.extension().is_some_and(|it| it == "custom"))
    }

    fn export(&self, model: ModelRef) -> Result<ModelDescriptor, BnsError> {
        match model {
            ModelRef::Path(path) => Ok(ModelDescriptor::new(
                path.with_extension("cnet"),
                Some(names(&["p", "q"])),
            )),
            other => Err(BnsError::UnsupportedModelKind(other.kind())),
        }
    }
}

#[test]
fn test_adapters_are_tried_in_order() {
    init_logger();
    let mut adapters: Vec<Arc<dyn ModelAdapter>> = vec![Arc::new(CustomAdapter)];
    adapters.extend(default_adapters());

    let descriptor = normalize(ModelRef::from("net.custom"), &adapters).unwrap();
    assert_eq!(descriptor.source_path(), Path::new("net.cnet"));
    assert_eq!(descriptor.variable_names(), Some(names(&["p", "q"]).as_slice()));

    // Networks are still handled by the default adapters.
    let descriptor = normalize(ModelRef::Network(create_test_network()), &adapters).unwrap();
    assert!(descriptor.is_temporary());
}

#[test]
fn test_adapter_recognition() {
    let network = BooleanNetworkAdapter;
    let format = ModelFormatAdapter::default();
    let aeon = ModelRef::from("model.AEON");
    let cnet = ModelRef::from("model.cnet");
    let source = ModelRef::source("sbml", "");

    assert!(network.recognize(&ModelRef::Network(create_test_network())));
    assert!(!network.recognize(&aeon));
    assert!(format.recognize(&aeon));
    assert!(format.recognize(&source));
    assert!(!format.recognize(&cnet));
    assert_eq!(ModelFormat::from_path(Path::new("a/b.bnet")), Some(ModelFormat::Bnet));
    assert_eq!(ModelFormat::from_path(Path::new("a/b")), None);
}

// ========== CNET ==========

#[test]
fn test_cnet_labels() {
    init_logger();
    assert_eq!(parse_cnet_labels(TEST_NETWORK_CNET), Some(names(&["a", "b", "c"])));

    // Missing label of variable 2.
    let partial = ".v 2\n# 1 = a\n.n 1 0\n";
    assert_eq!(parse_cnet_labels(partial), None);

    // Missing variable count.
    assert_eq!(parse_cnet_labels("# 1 = a\n"), None);

    // Other comments are ignored and the first label wins.
    let noisy = "# header = yes\n# 2 = second\n.v 2\n# 1 = first\n# 2 = other\n";
    assert_eq!(parse_cnet_labels(noisy), Some(names(&["first", "second"])));
}

#[test]
fn test_read_cnet_labels_of_missing_file() {
    let error = read_cnet_labels(Path::new("models/missing.cnet")).unwrap_err();
    assert!(matches!(error, BnsError::ModelNotFound(_)));
}

#[test]
fn test_constant_false_has_empty_on_set() {
    init_logger();
    let network = BooleanNetwork::try_from("$a: false\n$b: true\n").unwrap();
    let cnet = to_cnet_string(&network).unwrap();
    assert_eq!(cnet, ".v 2\n# 1 = a\n# 2 = b\n\n.n 1 0\n\n.n 2 0\n1\n");
}

/// Every test model can be exported, and the exported labels match its variables.
#[test_resources("./models/*.aeon")]
fn test_export_model_file(model_path: &str) {
    init_logger();
    let network = BooleanNetwork::try_from_file(model_path)
        .unwrap_or_else(|e| panic!("Failed to load {}: {}", model_path, e));
    let descriptor = load(model_path).unwrap();
    let labels = read_cnet_labels(descriptor.source_path()).unwrap().unwrap();
    assert_eq!(Some(labels.as_slice()), descriptor.variable_names());
    assert_eq!(labels.len(), network.num_vars());

    let content = std::fs::read_to_string(descriptor.source_path()).unwrap();
    let declared = content.lines().filter(|it| it.starts_with(".n ")).count();
    assert_eq!(declared, network.num_vars());
}
