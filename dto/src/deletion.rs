/// Text a user has to type before the member-deletion control unlocks.
pub const DELETE_CONFIRMATION: &str = "delete";

/// The confirmation has to match exactly, without trimming or case folding.
pub fn is_deletion_confirmed(confirmation: &str) -> bool {
    confirmation == DELETE_CONFIRMATION
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        confirmation = {"delete", "Delete", "delete ", "", "DELETE", "del"},
        expected_result = {true, false, false, false, false, false}
    )]
    fn should_only_confirm_exact_literal(confirmation: &str, expected_result: bool) {
        assert_eq!(expected_result, is_deletion_confirmed(confirmation));
    }
}
