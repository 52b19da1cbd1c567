use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Read-only aggregates over a club's members, rendered as summary cards.
/// The last two counters are not always provided by the balance API.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    total: i64,
    average: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    with_none: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    less_average: Option<u64>,
}

impl Statistics {
    pub fn new(total: i64, average: f64, with_none: Option<u64>, less_average: Option<u64>) -> Self {
        Self {
            total,
            average,
            with_none,
            less_average,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub fn get_expected_statistics() -> Statistics {
        Statistics::new(120, 7.5, Some(2), Some(6))
    }

    #[test]
    fn should_expose_optional_counters() {
        let statistics = Statistics::new(120, 7.5, None, None);

        assert_eq!(&None, statistics.with_none());
        assert_eq!(&None, statistics.less_average());
    }
}
