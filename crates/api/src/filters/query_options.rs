//! Query options combining filters, ordering, and a result limit.

use crate::filters::sort::sort_vaults;
use crate::filters::vault_filter::VaultFilter;
use crate::types::{SortDirection, Vault, VaultSortField};

/// Options for deriving a displayed vault list.
///
/// # Example
///
/// ```
/// use curator_rs_api::{ChainFilter, SortDirection, VaultFilter, VaultQuery, VaultSortField};
///
/// let query = VaultQuery::new()
///     .filter(VaultFilter::new().chain(ChainFilter::All))
///     .sort_by(VaultSortField::Tvl)
///     .direction(SortDirection::Desc)
///     .limit(25);
/// assert!(query.apply(&[]).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct VaultQuery {
    /// Filter to apply.
    pub filter: VaultFilter,
    /// Field to sort by. Unsorted (input order) when unset.
    pub sort_field: Option<VaultSortField>,
    /// Sort direction.
    pub direction: SortDirection,
    /// Maximum number of results to return.
    pub limit: Option<usize>,
}

impl VaultQuery {
    /// Create a query that returns every vault in input order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter.
    pub fn filter(mut self, filter: VaultFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the field to sort by.
    pub fn sort_by(mut self, field: VaultSortField) -> Self {
        self.sort_field = Some(field);
        self
    }

    /// Set the sort direction.
    pub fn direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the maximum number of results.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Filter, sort, then truncate.
    pub fn apply(&self, vaults: &[Vault]) -> Vec<Vault> {
        let mut result = self.filter.apply(vaults);
        if let Some(field) = self.sort_field {
            sort_vaults(&mut result, field, self.direction);
        }
        if let Some(limit) = self.limit {
            result.truncate(limit);
        }
        result
    }
}
