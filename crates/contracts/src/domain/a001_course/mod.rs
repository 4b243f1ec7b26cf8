//! Course catalog list: sort endpoint and sortable fields.

use crate::shared::listing::SortSchema;

/// Endpoint rendering the sorted course list as an HTML fragment
pub const SORT_ENDPOINT: &str = "/courses/sort/";

/// Sortable course columns
pub const SORT_FIELDS: &[&str] = &[
    "name",
    "cost",
    "location",
    "classroom_hours",
    "lab_hours",
    "internship_hours",
    "practical_hours",
];

/// Values of the sort selector meaning "nothing chosen"
pub const SORT_PLACEHOLDERS: &[&str] = &["", "default"];

pub fn sort_schema() -> SortSchema {
    SortSchema::new(SORT_FIELDS.iter().copied(), SORT_PLACEHOLDERS.iter().copied())
}
