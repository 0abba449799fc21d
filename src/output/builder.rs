use crate::error::BnsError;
use crate::output::{Hypercube, HypercubeCollection, RawBlock, State, VariableKey};

/// One attractor reported by the solver.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attractor {
    /// An attractor consisting of a single state (block with exactly one row).
    FixedPoint(State),
    /// A cyclic attractor, one hypercube per visited state.
    Cycle(HypercubeCollection),
}

impl Attractor {
    /// Number of states along the attractor (1 for fixed points).
    pub fn period(&self) -> usize {
        match self {
            Attractor::FixedPoint(_) => 1,
            Attractor::Cycle(cycle) => cycle.len(),
        }
    }

    pub fn is_fixed_point(&self) -> bool {
        matches!(self, Attractor::FixedPoint(_))
    }

    pub fn as_fixed_point(&self) -> Option<&State> {
        match self {
            Attractor::FixedPoint(state) => Some(state),
            Attractor::Cycle(_) => None,
        }
    }

    pub fn into_fixed_point(self) -> Option<State> {
        match self {
            Attractor::FixedPoint(state) => Some(state),
            Attractor::Cycle(_) => None,
        }
    }
}

/// Convert a closed [`RawBlock`] into an [`Attractor`].
///
/// Every row is decoded as `variable_count` one-character fields. A block with exactly one
/// row becomes a [`Attractor::FixedPoint`], anything else becomes an [`Attractor::Cycle`]
/// with rows in their original order.
///
/// Variables are keyed by `names` when given, or by their position otherwise. Fails with
/// [`BnsError::VariableNamesMismatch`] if the number of names is not `variable_count`.
pub fn build(
    block: &RawBlock,
    variable_count: usize,
    names: Option<&[String]>,
) -> Result<Attractor, BnsError> {
    let keys = make_keys(variable_count, names)?;
    if block.len() == 1 {
        let values = decode_row(block, 0, variable_count)?;
        let entries = keys.into_iter().zip(values).collect();
        return Ok(Attractor::FixedPoint(State::new(entries)));
    }

    let mut rows = Vec::with_capacity(block.len());
    for row in 0..block.len() {
        let values = decode_row(block, row, variable_count)?;
        let entries = keys
            .iter()
            .cloned()
            .zip(values.into_iter().map(Some))
            .collect();
        rows.push(Hypercube::new(entries));
    }
    Ok(Attractor::Cycle(HypercubeCollection::new(rows)))
}

fn make_keys(
    variable_count: usize,
    names: Option<&[String]>,
) -> Result<Vec<VariableKey>, BnsError> {
    match names {
        Some(names) if names.len() == variable_count => {
            Ok(names.iter().cloned().map(VariableKey::Name).collect())
        }
        Some(names) => Err(BnsError::VariableNamesMismatch {
            names: names.len(),
            variables: variable_count,
        }),
        None => Ok((0..variable_count).map(VariableKey::Index).collect()),
    }
}

fn decode_row(block: &RawBlock, row: usize, variable_count: usize) -> Result<Vec<bool>, BnsError> {
    let malformed = |reason: String| BnsError::MalformedBlock {
        block: block.index(),
        row,
        reason,
    };

    let line = &block.rows()[row];
    let width = line.chars().count();
    if width != variable_count {
        return Err(malformed(format!(
            "expected {variable_count} values, found {width}"
        )));
    }

    line.chars()
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(malformed(format!("invalid value `{other}`"))),
        })
        .collect()
}
