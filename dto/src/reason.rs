use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// An immutable ledger entry adjusting a member's balance.
/// `new_total` snapshots the member's balance right after the adjustment:
/// new_total = balance at creation time + amount_given.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct Reason {
    id: u64,
    reason: String,
    club_member_id: u64,
    amount_given: i64,
    new_total: i64,
    date_created: DateTime<Utc>,
}

impl Reason {
    pub fn new(
        id: u64,
        reason: String,
        club_member_id: u64,
        amount_given: i64,
        new_total: i64,
        date_created: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            reason,
            club_member_id,
            amount_given,
            new_total,
            date_created,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    impl Reason {
        pub fn new_test(id: u64, club_member_id: u64, amount_given: i64, new_total: i64) -> Self {
            Reason {
                id,
                reason: "redeemed".to_owned(),
                club_member_id,
                amount_given,
                new_total,
                date_created: DateTime::<Utc>::MIN_UTC,
            }
        }
    }

    #[test]
    fn should_snapshot_new_total() {
        let reason = Reason::new_test(1, 17, -5, 0);

        assert_eq!(&-5, reason.amount_given());
        assert_eq!(&0, reason.new_total());
    }
}
