//! Page requests

use std::fmt;

use serde::{Deserialize, Serialize};

use super::order::Sort;

/// A zero-based page window, optionally carrying its own sort
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub index: usize,
    pub size: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<Sort>,
}

impl Page {
    pub fn new(index: usize, size: usize) -> Self {
        Self {
            index,
            size,
            sort: None,
        }
    }

    /// Attaches a sort to the page request
    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Offset of the first item on this page, saturating on overflow
    pub fn offset(&self) -> usize {
        self.index.saturating_mul(self.size)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {} of size {}", self.index, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(Page::new(0, 10).offset(), 0);
        assert_eq!(Page::new(2, 10).offset(), 20);
        assert_eq!(Page::new(usize::MAX, 2).offset(), usize::MAX);
    }
}
