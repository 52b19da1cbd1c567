use crate::grade::Grade;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Payload for the member-creation endpoint.
/// The balance API expects camelCase fields; new members always start at 0.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewClubMember {
    first_name: String,
    last_name: String,
    amount: i64,
    grade: Grade,
    club_id: u64,
}

impl NewClubMember {
    pub fn new(first_name: String, last_name: String, grade: Grade, club_id: u64) -> Self {
        Self {
            first_name,
            last_name,
            amount: 0,
            grade,
            club_id,
        }
    }
}

/// A member can only be created once all three fields are populated.
/// The submit control stays disabled as long as this returns false.
pub fn is_creation_form_complete(first_name: &str, last_name: &str, grade: &str) -> bool {
    !first_name.trim().is_empty() && !last_name.trim().is_empty() && Grade::from_str(grade).is_ok()
}
