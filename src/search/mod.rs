//! Attractor search using the external `bns` solver.
//!
//! The solver computes attractors of the *synchronous* dynamics of a Boolean network.
//! A search normalizes the model (see [`crate::model`]), runs `bns [-l <length>] <model>`,
//! and converts its output (see [`crate::output`]).
//!
//! The result of a search is `Ok(None)` when the solver reports no attractor (e.g., because
//! no attractor satisfies the length restriction). Otherwise, attractors are returned in the
//! order reported by the solver.
//!
//! ```no_run
//! use biodivine_bns::search::{BnsSearch, SearchConfig, attractors, fixpoints};
//!
//! // Fixed points of a model stored in a CNET file.
//! if let Some(states) = fixpoints("model.cnet").unwrap() {
//!     for state in states {
//!         println!("Fixed point: {state}");
//!     }
//! }
//!
//! // All attractors of an AEON model, searched with a specific solver binary.
//! let search = BnsSearch::new(SearchConfig::new().with_executable("/opt/bns/bns"));
//! match search.attractors("model.aeon").unwrap() {
//!     None => println!("No attractors."),
//!     Some(found) => {
//!         for attractor in found {
//!             println!("Attractor with period {}.", attractor.period());
//!         }
//!     }
//! }
//!
//! // Attractors with period dividing 4.
//! let short = attractors("model.cnet", Some(4)).unwrap();
//! # let _ = short;
//! ```
//!
//! Searches can be cancelled using `cancel_this` (the check happens whenever
//! the solver prints a line). The solver process is terminated on cancellation.

mod search_config;
mod solver_process;


use crate::error::BnsError;
use crate::model::{ModelDescriptor, ModelRef, cnet, normalize};
use crate::output::{Attractor, State};
use log::{debug, info};

pub use search_config::{BNS_EXECUTABLE, SearchConfig};
pub use solver_process::SolverProcess;

/// Runs the solver according to a [`SearchConfig`].
#[derive(Clone, Default)]
pub struct BnsSearch {
    config: SearchConfig,
}

impl From<SearchConfig> for BnsSearch {
    fn from(value: SearchConfig) -> Self {
        BnsSearch::new(value)
    }
}

impl BnsSearch {
    pub fn new(config: SearchConfig) -> BnsSearch {
        BnsSearch { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Normalize a model reference using the configured adapters.
    pub fn load<M: Into<ModelRef>>(&self, model: M) -> Result<ModelDescriptor, BnsError> {
        let descriptor = normalize(model.into(), &self.config.adapters)?;
        if self.config.labels_from_comments && descriptor.variable_names().is_none() {
            if let Some(names) = cnet::read_cnet_labels(descriptor.source_path())? {
                debug!("Using {} variable names from CNET comments.", names.len());
                return Ok(descriptor.with_variable_names(names));
            }
        }
        Ok(descriptor)
    }

    /// Compute the attractors of `model`, using the configured length restriction.
    pub fn attractors<M: Into<ModelRef>>(
        &self,
        model: M,
    ) -> Result<Option<Vec<Attractor>>, BnsError> {
        let descriptor = self.load(model)?;
        self.run(&descriptor, self.config.length)
    }

    /// Compute the fixed points of `model` (attractors of length one).
    pub fn fixpoints<M: Into<ModelRef>>(&self, model: M) -> Result<Option<Vec<State>>, BnsError> {
        let descriptor = self.load(model)?;
        let attractors = self.run(&descriptor, Some(1))?;
        Ok(attractors.map(|found| {
            found
                .into_iter()
                .filter_map(Attractor::into_fixed_point)
                .collect()
        }))
    }

    /// Run the solver on an already normalized model.
    ///
    /// With a `length`, only attractors whose period divides `length` are returned.
    /// The whole call fails if any block of the output is malformed, or if the descriptor
    /// names a different number of variables than the output contains.
    pub fn run(
        &self,
        descriptor: &ModelDescriptor,
        length: Option<usize>,
    ) -> Result<Option<Vec<Attractor>>, BnsError> {
        let model_path = descriptor.source_path();
        if !model_path.is_file() {
            return Err(BnsError::ModelNotFound(model_path.to_path_buf()));
        }

        let length = SearchConfig::effective_length(length);
        let args = SearchConfig::solver_arguments(length, model_path);
        info!(
            "Searching attractors of `{}` (length: {:?}).",
            model_path.display(),
            length
        );

        let mut process = SolverProcess::spawn(&self.config.executable, &args)?;
        let parsed = process.read_output()?;
        process.finish()?;

        let Some(parsed) = parsed else {
            info!("No attractors found.");
            return Ok(None);
        };

        let parsed = match length {
            None => parsed,
            Some(length) => match parsed.restrict_period(length) {
                Some(parsed) => parsed,
                None => {
                    info!("No attractors with period dividing {length} found.");
                    return Ok(None);
                }
            },
        };

        let attractors = parsed.build(descriptor.variable_names())?;
        info!(
            "Found {} attractors ({} fixed points; {} variables).",
            attractors.len(),
            attractors.iter().filter(|it| it.is_fixed_point()).count(),
            parsed.variable_count
        );
        Ok(Some(attractors))
    }
}

/// Compute the fixed points of `model` using the default configuration.
///
/// Returns `Ok(None)` if the network has no fixed point. States are keyed by variable
/// names when the model provides them, and by position otherwise.
pub fn fixpoints<M: Into<ModelRef>>(model: M) -> Result<Option<Vec<State>>, BnsError> {
    BnsSearch::default().fixpoints(model)
}

/// Compute the attractors of `model` using the default configuration.
///
/// With a `length`, only attractors whose period divides `length` are returned.
/// Returns `Ok(None)` if no such attractor exists. Fails with
/// [`BnsError::VariableNamesMismatch`] if the model names do not fit the solver output.
pub fn attractors<M: Into<ModelRef>>(
    model: M,
    length: Option<usize>,
) -> Result<Option<Vec<Attractor>>, BnsError> {
    BnsSearch::new(SearchConfig::from(length)).attractors(model)
}
