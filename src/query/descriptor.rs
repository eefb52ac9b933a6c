//! Query descriptors
//!
//! A descriptor is built once, when a repository method is derived, and then
//! executed for every call of that method. It is never mutated after
//! construction; the `with_*` methods consume and return it.

use std::fmt;
use std::sync::Arc;

use super::extractors::{PageExtractor, SortExtractor};
use super::parameter::Parameter;

/// An AND-group of parameters. Branches of a descriptor are OR-ed.
pub type Branch = Vec<Parameter>;

/// The complete, immutable description of one query
#[derive(Debug, Clone, Default)]
pub struct QueryDescriptor {
    distinct: bool,
    unique_property: Option<String>,
    limit: usize,
    page_extractor: Option<Arc<dyn PageExtractor>>,
    sort_extractor: Option<Arc<dyn SortExtractor>>,
    branches: Vec<Branch>,
}

impl QueryDescriptor {
    /// A descriptor selecting every record, unsorted and unlimited
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_distinct(mut self, distinct: bool) -> Self {
        self.distinct = distinct;
        self
    }

    /// Deduplicate on this property instead of whole-record equality.
    /// Only takes effect together with `with_distinct(true)`.
    pub fn with_unique_property(mut self, property: impl Into<String>) -> Self {
        self.unique_property = Some(property.into());
        self
    }

    /// Caps the result size; 0 means unlimited
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_page_extractor(mut self, extractor: impl PageExtractor + 'static) -> Self {
        self.page_extractor = Some(Arc::new(extractor));
        self
    }

    pub fn with_sort_extractor(mut self, extractor: impl SortExtractor + 'static) -> Self {
        self.sort_extractor = Some(Arc::new(extractor));
        self
    }

    /// Appends an OR branch
    pub fn with_branch(mut self, branch: Branch) -> Self {
        self.branches.push(branch);
        self
    }

    pub fn with_branches(mut self, branches: impl IntoIterator<Item = Branch>) -> Self {
        self.branches.extend(branches);
        self
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    pub fn unique_property(&self) -> Option<&str> {
        self.unique_property.as_deref()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn page_extractor(&self) -> Option<&dyn PageExtractor> {
        self.page_extractor.as_deref()
    }

    pub fn sort_extractor(&self) -> Option<&dyn SortExtractor> {
        self.sort_extractor.as_deref()
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// True when the descriptor filters nothing out
    pub fn matches_all(&self) -> bool {
        self.branches.is_empty()
    }
}

impl fmt::Display for QueryDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "select")?;
        if self.distinct {
            write!(f, " distinct")?;
            if let Some(property) = &self.unique_property {
                write!(f, " on {}", property)?;
            }
        }
        if !self.branches.is_empty() {
            write!(f, " where ")?;
            for (i, branch) in self.branches.iter().enumerate() {
                if i > 0 {
                    write!(f, " or ")?;
                }
                let params: Vec<String> = branch.iter().map(ToString::to_string).collect();
                write!(f, "({})", params.join(" and "))?;
            }
        }
        if let Some(sort) = &self.sort_extractor {
            write!(f, " order by {}", sort)?;
        }
        if let Some(page) = &self.page_extractor {
            write!(f, " page {}", page)?;
        }
        if self.limit > 0 {
            write!(f, " limit {}", self.limit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::OperatorContext;
    use crate::query::{Order, PageableExtractor, Sort, WrappedSortExtractor};

    #[test]
    fn test_defaults() {
        let descriptor = QueryDescriptor::new();
        assert!(!descriptor.is_distinct());
        assert_eq!(descriptor.limit(), 0);
        assert!(descriptor.matches_all());
        assert!(descriptor.page_extractor().is_none());
        assert!(descriptor.sort_extractor().is_none());
        assert_eq!(descriptor.to_string(), "select");
    }

    #[test]
    fn test_display() {
        let context = OperatorContext::shared();
        let descriptor = QueryDescriptor::new()
            .with_distinct(true)
            .with_branch(vec![
                Parameter::plain("firstName", vec![0], context.by_suffix("Is").unwrap()),
                Parameter::plain("lastName", vec![1], context.by_suffix("Is").unwrap()),
            ])
            .with_branch(vec![Parameter::plain(
                "age",
                vec![2, 3],
                context.by_suffix("Between").unwrap(),
            )])
            .with_sort_extractor(WrappedSortExtractor::new(Sort::by(Order::asc("lastName"))))
            .with_page_extractor(PageableExtractor::new(4))
            .with_limit(3);

        assert_eq!(
            descriptor.to_string(),
            "select distinct where (firstName Is #0 and lastName Is #1) or (age Between #2, #3) \
             order by lastName asc page #4 limit 3"
        );
    }

    #[test]
    fn test_clone_shares_extractors() {
        let descriptor = QueryDescriptor::new().with_page_extractor(PageableExtractor::new(0));
        let copy = descriptor.clone();
        assert_eq!(copy.to_string(), descriptor.to_string());
    }
}
