use std::fmt::{Display, Formatter};

/// Identifies a network variable in a [`State`] or [`Hypercube`](crate::output::Hypercube).
///
/// Variables are identified by name when the model descriptor carries variable names,
/// and by their zero-based position in the solver output otherwise.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VariableKey {
    Index(usize),
    Name(String),
}

impl From<usize> for VariableKey {
    fn from(value: usize) -> Self {
        VariableKey::Index(value)
    }
}

impl From<&str> for VariableKey {
    fn from(value: &str) -> Self {
        VariableKey::Name(value.to_string())
    }
}

impl From<String> for VariableKey {
    fn from(value: String) -> Self {
        VariableKey::Name(value)
    }
}

impl Display for VariableKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VariableKey::Index(index) => write!(f, "{index}"),
            VariableKey::Name(name) => write!(f, "{name}"),
        }
    }
}

/// A single, fully determined network state (a fixed point, in the context of a search).
///
/// Entries are kept in the variable order of the solver output.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    entries: Vec<(VariableKey, bool)>,
}

impl State {
    pub fn new(entries: Vec<(VariableKey, bool)>) -> State {
        State { entries }
    }

    /// The number of variables in this state.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value of the given variable, or `None` if the variable is not part of this state.
    pub fn get<K: Into<VariableKey>>(&self, key: K) -> Option<bool> {
        let key = key.into();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| *value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &VariableKey> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VariableKey, bool)> {
        self.entries.iter().map(|(key, value)| (key, *value))
    }

    /// The state as a string of `0`/`1` characters, in the same form as printed by the solver.
    pub fn to_bit_string(&self) -> String {
        self.entries
            .iter()
            .map(|(_, value)| if *value { '1' } else { '0' })
            .collect()
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {}", u8::from(*value))?;
        }
        write!(f, "}}")
    }
}
