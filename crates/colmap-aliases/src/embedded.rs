//! Embedded alias data.
//!
//! The curated alias files for every built-in vertical are embedded at compile
//! time using `include_str!()`, so the default registry needs no file I/O.
//!
//! # Adding a vertical
//!
//! Drop a new JSON file into `data/aliases/`, add a constant below, and extend
//! [`crate::Vertical`] plus [`source_for`].

use crate::vertical::Vertical;

/// Student admission registers.
pub const STUDENTS_ALIASES: &str = include_str!("../data/aliases/students.json");

/// Staff directories.
pub const STAFF_ALIASES: &str = include_str!("../data/aliases/staff.json");

/// Fee collection ledgers.
pub const FEES_ALIASES: &str = include_str!("../data/aliases/fees.json");

/// Store and stock registers.
pub const INVENTORY_ALIASES: &str = include_str!("../data/aliases/inventory.json");

/// Exam result sheets.
pub const EXAMS_ALIASES: &str = include_str!("../data/aliases/exams.json");

/// Get the embedded alias file for a vertical.
///
/// Returns a tuple of (file name, content).
pub fn source_for(vertical: Vertical) -> (&'static str, &'static str) {
    match vertical {
        Vertical::Students => ("students.json", STUDENTS_ALIASES),
        Vertical::Staff => ("staff.json", STAFF_ALIASES),
        Vertical::Fees => ("fees.json", FEES_ALIASES),
        Vertical::Inventory => ("inventory.json", INVENTORY_ALIASES),
        Vertical::Exams => ("exams.json", EXAMS_ALIASES),
    }
}
