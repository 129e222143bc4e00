//! Business verticals with built-in alias data.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// A business vertical that ships a curated field list and alias dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vertical {
    /// Student admission and enrolment registers.
    Students,
    /// Staff directories.
    Staff,
    /// Fee ledgers and receipts.
    Fees,
    /// Store and stock registers.
    Inventory,
    /// Exam result sheets.
    Exams,
}

impl Vertical {
    /// All built-in verticals, in merge order.
    pub const ALL: [Vertical; 5] = [
        Vertical::Students,
        Vertical::Staff,
        Vertical::Fees,
        Vertical::Inventory,
        Vertical::Exams,
    ];

    /// Lowercase identifier used in alias files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Students => "students",
            Self::Staff => "staff",
            Self::Fees => "fees",
            Self::Inventory => "inventory",
            Self::Exams => "exams",
        }
    }
}

impl fmt::Display for Vertical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vertical {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RegistryError::UnknownVertical {
                name: wanted.to_string(),
            })
    }
}
