/// Fixed page sizes of the balance API.
pub const MEMBERS_PAGE_SIZE: usize = 10;
pub const REASONS_PAGE_SIZE: usize = 5;

/// The first page has no predecessor.
pub fn has_previous_page(page: u32) -> bool {
    page > 1
}

/// The API exposes no total count: a page shorter than the page size is
/// taken as the last one. A full last page is indistinguishable from
/// "more data exists" until the next, empty page is fetched.
pub fn has_next_page(page_len: usize, page_size: usize) -> bool {
    page_len >= page_size
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        page = {1, 2, 42},
        expected_result = {false, true, true}
    )]
    fn should_check_previous_page(page: u32, expected_result: bool) {
        assert_eq!(expected_result, has_previous_page(page));
    }

    #[parameterized(
        page_len = {0, 4, 5, 9, 10, 11},
        page_size = {10, 5, 5, 10, 10, 10},
        expected_result = {false, false, true, false, true, true}
    )]
    fn should_check_next_page(page_len: usize, page_size: usize, expected_result: bool) {
        assert_eq!(expected_result, has_next_page(page_len, page_size));
    }
}
