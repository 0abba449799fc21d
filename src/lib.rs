//! Attractors and fixed points of synchronous Boolean networks, computed by the external
//! [BNS](https://people.kth.se/~dubrova/bns.html) solver.
//!
//! The crate does not analyse networks by itself. It prepares a model for the solver
//! ([`model`]), runs the `bns` executable ([`search`]) and interprets what it prints
//! ([`output`]).
//!
//! ```no_run
//! use biodivine_bns::output::Attractor;
//!
//! match biodivine_bns::attractors("model.bnet", None).unwrap() {
//!     None => println!("No attractors found."),
//!     Some(attractors) => {
//!         for attractor in attractors {
//!             match attractor {
//!                 Attractor::FixedPoint(state) => println!("Fixed point {state}"),
//!                 Attractor::Cycle(cycle) => println!("Cycle of length {}", cycle.len()),
//!             }
//!         }
//!     }
//! }
//! ```

#[cfg(test)]
mod test_utils;

pub mod error;
pub mod model;
pub mod output;
pub mod search;

pub use error::BnsError;
pub use model::{ModelDescriptor, ModelRef, load};
pub use search::{attractors, fixpoints};
