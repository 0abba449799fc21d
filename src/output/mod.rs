//! Interpretation of the `bns` standard output.
//!
//! The solver prints every attractor as a block of fixed-width `0`/`1` rows (one row per
//! state, one character per variable), followed by a line starting with `Attractor`.
//! Processing happens in two stages:
//!
//! - [`OutputParser`] groups output lines into [`RawBlock`]s and infers the number of
//!   network variables from the longest block.
//! - [`build`] turns each block into an [`Attractor`]: a [`State`] for single-row blocks,
//!   or a [`HypercubeCollection`] for cycles.
//!
//! ```rust
//! use biodivine_bns::output::{Attractor, parse_lines};
//!
//! let output = "010\n101\nAttractor 1 is of length 2\n";
//! let parsed = parse_lines(output.as_bytes()).unwrap().unwrap();
//! let attractors = parsed.build(None).unwrap();
//! assert_eq!(attractors.len(), 1);
//! assert!(matches!(&attractors[0], Attractor::Cycle(cycle) if cycle.len() == 2));
//! ```

mod builder;
mod hypercube;
mod output_parser;
mod state;


use crate::error::BnsError;
use cancel_this::is_cancelled;
use log::debug;
use std::io::BufRead;

pub use builder::{Attractor, build};
pub use hypercube::{Hypercube, HypercubeCollection};
pub use output_parser::{OutputParser, SEPARATOR_PREFIX};
pub use state::{State, VariableKey};

/// Rows of one attractor block, exactly as printed by the solver (minus trailing
/// whitespace).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawBlock {
    index: usize,
    rows: Vec<String>,
}

impl RawBlock {
    /// Create a block with the given position in the solver output.
    pub fn new(index: usize, rows: Vec<String>) -> RawBlock {
        RawBlock { index, rows }
    }

    /// Zero-based position of this block in the solver output.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// All blocks of one completed solver run, together with the inferred output dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedOutput {
    /// Closed blocks, in the order the solver printed them.
    pub blocks: Vec<RawBlock>,
    /// Number of rows of the longest block. Always positive.
    pub max_block_length: usize,
    /// Width of the first row of the first longest block.
    pub variable_count: usize,
}

impl ParsedOutput {
    /// Keep only blocks whose period divides `length`.
    ///
    /// This matches the solver's interpretation of `-l <length>` (attractors of the given
    /// length or of one of its factors). Empty blocks are removed as well. Returns `None`
    /// if no block remains.
    pub fn restrict_period(mut self, length: usize) -> Option<ParsedOutput> {
        let before = self.blocks.len();
        self.blocks
            .retain(|block| !block.is_empty() && length % block.len() == 0);
        if before != self.blocks.len() {
            debug!(
                "Removed {} blocks with period not dividing {}.",
                before - self.blocks.len(),
                length
            );
        }

        if self.blocks.is_empty() {
            None
        } else {
            Some(self)
        }
    }

    /// Convert every block using [`build`] and the inferred variable count.
    ///
    /// Fails on the first malformed block; no partial result is returned.
    pub fn build(&self, names: Option<&[String]>) -> Result<Vec<Attractor>, BnsError> {
        self.blocks
            .iter()
            .map(|block| build(block, self.variable_count, names))
            .collect()
    }
}

/// Feed every line of `reader` into an [`OutputParser`] and finish it.
///
/// Lines are decoded lossily, so non-UTF-8 noise in the output is simply ignored. The
/// parsing can be cancelled between lines using `cancel_this`.
pub fn parse_lines<R: BufRead>(mut reader: R) -> Result<Option<ParsedOutput>, BnsError> {
    let mut parser = OutputParser::new();
    let mut buffer = Vec::new();
    loop {
        is_cancelled!()?;
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        parser.push_line(&String::from_utf8_lossy(&buffer));
    }
    Ok(parser.finish())
}
