use crate::grade::Grade;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A tracked individual with a running point balance, owned by exactly one club.
/// The balance (`amount`) is only ever changed by applying a transaction.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct ClubMember {
    id: u64,
    first_name: String,
    last_name: String,
    amount: i64,
    grade: Grade,
    club_id: u64,
    search_vector: String,
}

impl ClubMember {
    pub fn new(
        id: u64,
        first_name: String,
        last_name: String,
        amount: i64,
        grade: Grade,
        club_id: u64,
        search_vector: String,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            amount,
            grade,
            club_id,
            search_vector,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub const MEMBER_ID: u64 = 17;
    pub const MEMBER_FIRST_NAME: &str = "Ada";
    pub const MEMBER_LAST_NAME: &str = "Lovelace";
    pub const CLUB_ID: u64 = 3;

    impl ClubMember {
        pub fn new_test(id: u64, amount: i64) -> Self {
            ClubMember {
                id,
                first_name: MEMBER_FIRST_NAME.to_owned(),
                last_name: MEMBER_LAST_NAME.to_owned(),
                amount,
                grade: Grade::Third,
                club_id: CLUB_ID,
                search_vector: format!("{MEMBER_FIRST_NAME} {MEMBER_LAST_NAME}"),
            }
        }
    }

    pub fn get_expected_member() -> ClubMember {
        ClubMember::new_test(MEMBER_ID, 5)
    }

    #[test]
    fn should_expose_fields() {
        let member = get_expected_member();

        assert_eq!(&MEMBER_ID, member.id());
        assert_eq!(MEMBER_FIRST_NAME, member.first_name());
        assert_eq!(MEMBER_LAST_NAME, member.last_name());
        assert_eq!(&5, member.amount());
        assert_eq!(&Grade::Third, member.grade());
        assert_eq!(&CLUB_ID, member.club_id());
    }
}
