use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The largest amount a single transaction may add to a balance.
pub const MAX_AMOUNT_GIVEN: i64 = 20;

/// Payload for the transaction-creation endpoint (camelCase per the balance API).
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewReason {
    reason: String,
    club_member_id: u64,
    amount_given: i64,
    new_total: i64,
}

impl NewReason {
    pub fn new(reason: String, club_member_id: u64, amount_given: i64, new_total: i64) -> Self {
        Self {
            reason,
            club_member_id,
            amount_given,
            new_total,
        }
    }
}

/// A transaction amount is valid when it is non-zero, caps at [MAX_AMOUNT_GIVEN]
/// and never drives the member's balance below zero.
pub fn is_amount_allowed(balance: i64, amount_given: i64) -> bool {
    amount_given != 0 && amount_given <= MAX_AMOUNT_GIVEN && amount_given >= -balance
}

/// The transaction form can only be submitted with a valid amount and a non-empty reason.
pub fn is_transaction_form_complete(balance: i64, amount_given: i64, reason: &str) -> bool {
    !reason.trim().is_empty() && is_amount_allowed(balance, amount_given)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        balance = {5, 5, 5, 5, 5, 0, 0, 100, 100},
        amount_given = {-5, -6, 0, 20, 21, 1, -1, 20, -100},
        expected_result = {true, false, false, true, false, true, false, true, true}
    )]
    fn should_check_amount(balance: i64, amount_given: i64, expected_result: bool) {
        assert_eq!(expected_result, is_amount_allowed(balance, amount_given));
    }

    #[parameterized(
        reason = {"redeemed", "", "   ", "prize"},
        amount_given = {-5, -5, -5, 10},
        expected_result = {true, false, false, true}
    )]
    fn should_check_transaction_form_completeness(
        reason: &str,
        amount_given: i64,
        expected_result: bool,
    ) {
        let balance = 5;
        assert_eq!(
            expected_result,
            is_transaction_form_complete(balance, amount_given, reason)
        );
    }

    #[test]
    fn should_allow_redeeming_down_to_zero_but_not_below() {
        let balance = 5;
        assert!(is_transaction_form_complete(balance, -5, "redeemed"));
        assert!(!is_transaction_form_complete(balance, -6, "redeemed"));
    }
}
