use crate::output::{State, VariableKey};
use std::fmt::{Display, Formatter};

/// A partial assignment of network variables. A variable with value `None` is *free*,
/// i.e., the hypercube contains states with both of its values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hypercube {
    entries: Vec<(VariableKey, Option<bool>)>,
}

impl Hypercube {
    pub fn new(entries: Vec<(VariableKey, Option<bool>)>) -> Hypercube {
        Hypercube { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value of the given variable: `Some(None)` if the variable is free, `None` if it is not
    /// part of this hypercube at all.
    pub fn get<K: Into<VariableKey>>(&self, key: K) -> Option<Option<bool>> {
        let key = key.into();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| *value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &VariableKey> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VariableKey, Option<bool>)> {
        self.entries.iter().map(|(key, value)| (key, *value))
    }

    pub fn free_variables(&self) -> impl Iterator<Item = &VariableKey> {
        self.entries
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(key, _)| key)
    }

    /// True if no variable is free, i.e., the hypercube is a single state.
    pub fn is_state(&self) -> bool {
        self.entries.iter().all(|(_, value)| value.is_some())
    }

    /// The hypercube as a pattern string, using `-` for free variables.
    pub fn to_pattern_string(&self) -> String {
        self.entries
            .iter()
            .map(|(_, value)| match value {
                Some(true) => '1',
                Some(false) => '0',
                None => '-',
            })
            .collect()
    }
}

impl From<&State> for Hypercube {
    fn from(value: &State) -> Self {
        Hypercube::new(
            value
                .iter()
                .map(|(key, value)| (key.clone(), Some(value)))
                .collect(),
        )
    }
}

impl Display for Hypercube {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match value {
                Some(value) => write!(f, "{key}: {}", u8::from(*value))?,
                None => write!(f, "{key}: *")?,
            }
        }
        write!(f, "}}")
    }
}

/// An ordered sequence of hypercubes describing one cyclic attractor.
///
/// The order of rows is the order in which the solver visits them along the cycle, so the
/// number of rows is the period of the attractor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HypercubeCollection {
    rows: Vec<Hypercube>,
}

impl HypercubeCollection {
    pub fn new(rows: Vec<Hypercube>) -> HypercubeCollection {
        HypercubeCollection { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Hypercube] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hypercube> {
        self.rows.iter()
    }

    /// The smallest hypercube that contains every row of this collection. Variables that
    /// change their value along the cycle become free.
    ///
    /// Returns `None` for an empty collection.
    pub fn bounding_hypercube(&self) -> Option<Hypercube> {
        let (first, rest) = self.rows.split_first()?;
        let mut entries = first.entries.clone();
        for row in rest {
            for ((_, value), (_, other)) in entries.iter_mut().zip(row.entries.iter()) {
                if *value != *other {
                    *value = None;
                }
            }
        }
        Some(Hypercube::new(entries))
    }
}

impl IntoIterator for HypercubeCollection {
    type Item = Hypercube;
    type IntoIter = std::vec::IntoIter<Hypercube>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}
