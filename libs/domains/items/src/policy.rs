use std::collections::BTreeSet;

use crate::models::ItemGroup;

/// Price total at which registrations into a restricted group are refused.
/// The comparison is inclusive.
pub const AGGREGATE_PRICE_LIMIT: i64 = 3000;

/// Most rows a search may match before it is rejected as too broad.
pub const MAX_SEARCH_RESULTS: u64 = 1000;

/// Which groups are subject to the aggregate price limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationPolicy {
    restricted_groups: BTreeSet<String>,
}

impl RegistrationPolicy {
    pub fn new<I, S>(restricted_groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            restricted_groups: restricted_groups.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_restricted(&self, group_id: &str) -> bool {
        self.restricted_groups.contains(group_id)
    }

    pub fn reaches_limit(&self, aggregate_price: i64) -> bool {
        aggregate_price >= AGGREGATE_PRICE_LIMIT
    }
}

impl Default for RegistrationPolicy {
    /// Only stationery is restricted.
    fn default() -> Self {
        Self::new([ItemGroup::Stationery.to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_restricts_stationery_only() {
        let policy = RegistrationPolicy::default();
        assert!(policy.is_restricted("CD-A01"));
        assert!(!policy.is_restricted("CD-A02"));
        assert!(!policy.is_restricted(""));
    }

    #[test]
    fn test_limit_is_inclusive() {
        let policy = RegistrationPolicy::default();
        assert!(!policy.reaches_limit(2999));
        assert!(policy.reaches_limit(3000));
        assert!(policy.reaches_limit(3001));
    }

    #[test]
    fn test_custom_groups() {
        let policy = RegistrationPolicy::new(["CD-A01", "CD-A02"]);
        assert!(policy.is_restricted("CD-A01"));
        assert!(policy.is_restricted("CD-A02"));
        assert!(!policy.is_restricted("CD-A03"));
    }
}
