//! Vault list sorting with position pinning.

use std::cmp::Ordering;

use crate::types::{SortDirection, Vault, VaultSortField};

/// Compare two vaults for display.
///
/// Vaults where the user holds a position always come first, whatever the
/// direction. Within the same tier vaults compare by `field`; a missing value
/// on either side compares equal. `direction` only inverts the field
/// comparison.
pub fn compare_vaults(
    a: &Vault,
    b: &Vault,
    field: VaultSortField,
    direction: SortDirection,
) -> Ordering {
    let tier = b.has_position().cmp(&a.has_position());
    if tier != Ordering::Equal {
        return tier;
    }

    let ordering = match (field.value(a), field.value(b)) {
        (Some(x), Some(y)) => x.compare(&y),
        _ => Ordering::Equal,
    };
    direction.apply(ordering)
}

/// Stable in-place sort by [`compare_vaults`].
///
/// [`compare_vaults`] is not a total order once values are missing, which
/// `slice::sort_by` may reject with a panic. An insertion sort only moves a
/// vault past neighbours that compare strictly greater.
pub fn sort_vaults(vaults: &mut [Vault], field: VaultSortField, direction: SortDirection) {
    for i in 1..vaults.len() {
        let mut j = i;
        while j > 0 && compare_vaults(&vaults[j - 1], &vaults[j], field, direction) == Ordering::Greater
        {
            vaults.swap(j - 1, j);
            j -= 1;
        }
    }
}
