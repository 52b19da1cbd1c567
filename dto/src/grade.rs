use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// School grade of a club member.
/// The balance API serializes grades as the literal strings `K`, `1`…`5`.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Grade {
    K,
    #[serde(rename = "1")]
    First,
    #[serde(rename = "2")]
    Second,
    #[serde(rename = "3")]
    Third,
    #[serde(rename = "4")]
    Fourth,
    #[serde(rename = "5")]
    Fifth,
}

pub const ALL_GRADES: [Grade; 6] = [
    Grade::K,
    Grade::First,
    Grade::Second,
    Grade::Third,
    Grade::Fourth,
    Grade::Fifth,
];

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::K => "K",
            Grade::First => "1",
            Grade::Second => "2",
            Grade::Third => "3",
            Grade::Fourth => "4",
            Grade::Fifth => "5",
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "K" => Ok(Grade::K),
            "1" => Ok(Grade::First),
            "2" => Ok(Grade::Second),
            "3" => Ok(Grade::Third),
            "4" => Ok(Grade::Fourth),
            "5" => Ok(Grade::Fifth),
            _ => Err(format!("Unknown grade [grade: {s}]")),
        }
    }
}
