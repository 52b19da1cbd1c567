pub mod club_member;
pub mod deletion;
pub mod grade;
pub mod new_club_member;
pub mod new_reason;
pub mod paging;
pub mod reason;
pub mod sorting;
pub mod statistics;
