//! Sort orders

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// Placement of null sort keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullHandling {
    /// Nulls sort as the lowest value, so their position follows the direction
    #[default]
    Default,
    /// Nulls first regardless of direction
    NullsFirst,
    /// Nulls last regardless of direction
    NullsLast,
}

impl NullHandling {
    pub fn as_str(&self) -> &'static str {
        match self {
            NullHandling::Default => "",
            NullHandling::NullsFirst => " nulls first",
            NullHandling::NullsLast => " nulls last",
        }
    }
}

/// One sort key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Dotted property path
    pub property: String,
    #[serde(default)]
    pub direction: SortDirection,
    #[serde(default)]
    pub null_handling: NullHandling,
}

impl Order {
    pub fn new(
        direction: SortDirection,
        property: impl Into<String>,
        null_handling: NullHandling,
    ) -> Self {
        Self {
            property: property.into(),
            direction,
            null_handling,
        }
    }

    pub fn asc(property: impl Into<String>) -> Self {
        Self::new(SortDirection::Ascending, property, NullHandling::Default)
    }

    pub fn desc(property: impl Into<String>) -> Self {
        Self::new(SortDirection::Descending, property, NullHandling::Default)
    }

    /// Overrides the null handling policy
    pub fn with_null_handling(mut self, null_handling: NullHandling) -> Self {
        self.null_handling = null_handling;
        self
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}{}",
            self.property,
            self.direction.as_str(),
            self.null_handling.as_str()
        )
    }
}

/// Ordered list of sort keys, first key is primary
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sort {
    pub orders: Vec<Order>,
}

impl Sort {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// Sort by a single key
    pub fn by(order: Order) -> Self {
        Self {
            orders: vec![order],
        }
    }

    /// Appends a tie-breaking key
    pub fn then(mut self, order: Order) -> Self {
        self.orders.push(order);
        self
    }

    pub fn is_unsorted(&self) -> bool {
        self.orders.is_empty()
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, order) in self.orders.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", order)?;
        }
        Ok(())
    }
}
