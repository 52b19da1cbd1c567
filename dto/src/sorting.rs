use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Columns of the member table the balance API can sort on.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
pub enum SortField {
    Id,
    FirstName,
    LastName,
    Amount,
    Grade,
}

pub const SORTABLE_FIELDS: [SortField; 5] = [
    SortField::Id,
    SortField::FirstName,
    SortField::LastName,
    SortField::Amount,
    SortField::Grade,
];

impl SortField {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::FirstName => "first_name",
            SortField::LastName => "last_name",
            SortField::Amount => "amount",
            SortField::Grade => "grade",
        }
    }
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_param())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortField::Id),
            "first_name" => Ok(SortField::FirstName),
            "last_name" => Ok(SortField::LastName),
            "amount" => Ok(SortField::Amount),
            "grade" => Ok(SortField::Grade),
            _ => Err(format!("Unknown sort field [field: {s}]")),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_param())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Ascending),
            "desc" => Ok(SortDirection::Descending),
            _ => Err(format!("Unknown sort direction [direction: {s}]")),
        }
    }
}

/// The active sort of the member table. At most one column is sorted at a
/// time; when no sort is active, the table falls back to id ascending.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
pub struct Sorting {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Sorting {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

/// Compute the sort state reached by clicking a column header.
/// Clicking the active column cycles ascending → descending → unsorted;
/// clicking any other column starts a fresh ascending sort on it.
pub fn toggle_sorting(current: Option<Sorting>, clicked: SortField) -> Option<Sorting> {
    match current {
        Some(sorting) if sorting.field == clicked => match sorting.direction {
            SortDirection::Ascending => {
                Some(Sorting::new(clicked, SortDirection::Descending))
            }
            SortDirection::Descending => None,
        },
        _ => Some(Sorting::new(clicked, SortDirection::Ascending)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[test]
    fn should_cycle_through_three_clicks_on_same_column() {
        let first_click = toggle_sorting(None, SortField::Amount);
        assert_eq!(
            Some(Sorting::new(SortField::Amount, SortDirection::Ascending)),
            first_click
        );

        let second_click = toggle_sorting(first_click, SortField::Amount);
        assert_eq!(
            Some(Sorting::new(SortField::Amount, SortDirection::Descending)),
            second_click
        );

        let third_click = toggle_sorting(second_click, SortField::Amount);
        assert_eq!(None, third_click);
    }

    #[test]
    fn should_restart_ascending_on_another_column() {
        let current = Some(Sorting::new(SortField::Amount, SortDirection::Descending));

        let result = toggle_sorting(current, SortField::LastName);

        assert_eq!(
            Some(Sorting::new(SortField::LastName, SortDirection::Ascending)),
            result
        );
    }

    #[parameterized(
        param = {"id", "first_name", "last_name", "amount", "grade"},
        expected_field = {SortField::Id, SortField::FirstName, SortField::LastName, SortField::Amount, SortField::Grade}
    )]
    fn should_parse_sort_field(param: &str, expected_field: SortField) {
        assert_eq!(Ok(expected_field), SortField::from_str(param));
        assert_eq!(param, expected_field.as_param());
    }

    #[parameterized(
        param = {"asc", "desc"},
        expected_direction = {SortDirection::Ascending, SortDirection::Descending}
    )]
    fn should_parse_sort_direction(param: &str, expected_direction: SortDirection) {
        assert_eq!(Ok(expected_direction), SortDirection::from_str(param));
        assert_eq!(param, expected_direction.as_param());
    }

    #[parameterized(input = {"", "ASC", "upward"})]
    fn should_fail_to_parse_unknown_direction(input: &str) {
        assert!(SortDirection::from_str(input).is_err());
    }
}
