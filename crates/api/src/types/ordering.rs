//! Ordering types for client-side vault sorting.

use std::cmp::Ordering;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use super::vault::Vault;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order (default).
    #[default]
    Desc,
}

impl SortDirection {
    /// Apply this direction to an ascending comparison.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(format!("Unknown sort direction: {}", s)),
        }
    }
}

/// A field value extracted for comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    /// Compared case-insensitively.
    Text(String),
    /// Compared numerically.
    Number(f64),
    /// Compared by epoch millisecond.
    Date(DateTime<Utc>),
}

impl SortValue {
    /// Compare two values in ascending order.
    ///
    /// Values of different kinds, and numbers that cannot be ordered (NaN),
    /// compare equal.
    pub fn compare(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => compare_text(a, b),
            (SortValue::Number(a), SortValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (SortValue::Date(a), SortValue::Date(b)) => {
                a.timestamp_millis().cmp(&b.timestamp_millis())
            }
            _ => Ordering::Equal,
        }
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Fields vaults can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VaultSortField {
    /// Vault name.
    Name,
    /// Vault symbol.
    Symbol,
    /// Contract address.
    Address,
    /// Chain name.
    Chain,
    /// Total value locked.
    #[default]
    Tvl,
    /// Current APY.
    Apy,
    /// Loan-to-value ratio.
    Ltv,
    /// User's position size.
    UserPosition,
    /// Market maturity date.
    Maturity,
}

type Accessor = fn(&Vault) -> Option<SortValue>;

impl VaultSortField {
    /// All sortable fields.
    pub const ALL: [VaultSortField; 9] = [
        VaultSortField::Name,
        VaultSortField::Symbol,
        VaultSortField::Address,
        VaultSortField::Chain,
        VaultSortField::Tvl,
        VaultSortField::Apy,
        VaultSortField::Ltv,
        VaultSortField::UserPosition,
        VaultSortField::Maturity,
    ];

    fn accessor(self) -> Accessor {
        match self {
            VaultSortField::Name => |v| Some(SortValue::Text(v.name.clone())),
            VaultSortField::Symbol => |v| Some(SortValue::Text(v.symbol.clone())),
            VaultSortField::Address => |v| Some(SortValue::Text(v.address.to_string())),
            VaultSortField::Chain => |v| Some(SortValue::Text(v.chain.as_str().to_string())),
            VaultSortField::Tvl => |v| Some(SortValue::Number(v.tvl)),
            VaultSortField::Apy => |v| Some(SortValue::Number(v.apy)),
            VaultSortField::Ltv => |v| v.ltv.map(SortValue::Number),
            VaultSortField::UserPosition => |v| Some(SortValue::Number(v.user_position)),
            VaultSortField::Maturity => |v| v.maturity.map(SortValue::Date),
        }
    }

    /// Extract this field from a vault, if present.
    pub fn value(self, vault: &Vault) -> Option<SortValue> {
        (self.accessor())(vault)
    }

    /// Canonical name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            VaultSortField::Name => "name",
            VaultSortField::Symbol => "symbol",
            VaultSortField::Address => "address",
            VaultSortField::Chain => "chain",
            VaultSortField::Tvl => "tvl",
            VaultSortField::Apy => "apy",
            VaultSortField::Ltv => "ltv",
            VaultSortField::UserPosition => "userPosition",
            VaultSortField::Maturity => "maturity",
        }
    }
}

impl std::fmt::Display for VaultSortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VaultSortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        let field = match normalized.as_str() {
            "name" => VaultSortField::Name,
            "symbol" => VaultSortField::Symbol,
            "address" => VaultSortField::Address,
            "chain" => VaultSortField::Chain,
            "tvl" => VaultSortField::Tvl,
            "apy" => VaultSortField::Apy,
            "ltv" => VaultSortField::Ltv,
            "userposition" | "position" => VaultSortField::UserPosition,
            "maturity" | "date" => VaultSortField::Maturity,
            _ => return Err(format!("Unknown sort field: {}", s)),
        };
        Ok(field)
    }
}
