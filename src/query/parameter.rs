//! Filter parameters

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::operators::Operator;

/// A flag altering how a matcher compares values
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    /// Compare strings case-insensitively
    IgnoreCase,
}

impl Modifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::IgnoreCase => "ignore case",
        }
    }
}

/// One predicate of a filter branch.
///
/// Binds the invocation arguments at `indices` to `operator` and applies it
/// to the value found at `path`.
#[derive(Debug, Clone)]
pub struct Parameter {
    path: String,
    modifiers: BTreeSet<Modifier>,
    indices: Vec<usize>,
    operator: Arc<Operator>,
}

impl Parameter {
    pub fn new(
        path: impl Into<String>,
        modifiers: impl IntoIterator<Item = Modifier>,
        indices: impl Into<Vec<usize>>,
        operator: Arc<Operator>,
    ) -> Self {
        Self {
            path: path.into(),
            modifiers: modifiers.into_iter().collect(),
            indices: indices.into(),
            operator,
        }
    }

    /// A parameter without modifiers
    pub fn plain(path: impl Into<String>, indices: impl Into<Vec<usize>>, operator: Arc<Operator>) -> Self {
        Self::new(path, Vec::<Modifier>::new(), indices, operator)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn modifiers(&self) -> &BTreeSet<Modifier> {
        &self.modifiers
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    pub fn ignores_case(&self) -> bool {
        self.has_modifier(Modifier::IgnoreCase)
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn operator(&self) -> &Arc<Operator> {
        &self.operator
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.path, self.operator.name())?;
        if !self.indices.is_empty() {
            let indices: Vec<String> = self.indices.iter().map(|i| format!("#{}", i)).collect();
            write!(f, " {}", indices.join(", "))?;
        }
        for modifier in &self.modifiers {
            write!(f, " ({})", modifier.as_str())?;
        }
        Ok(())
    }
}
