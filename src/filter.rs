//! Pure mirror of the page's client-side filtering rules.
//!
//! The embedded script in `html` and these functions implement the same
//! contract over the same display strings, so the visibility behavior is
//! testable here without a browser harness.

use crate::models::ScheduleRow;
use crate::report::{DateGroup, StudioGroup};

/// One dropdown selection per filter. An empty string means "All"
/// (no constraint), matching the empty-valued option the page prepends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    pub date: String,
    pub studio: String,
    pub instructor: String,
}

impl Filters {
    /// The Clear button: every selection back to "All".
    pub fn clear(&mut self) {
        *self = Filters::default();
    }
}

fn matches(value: &str, filter: &str) -> bool {
    filter.is_empty() || value == filter
}

/// A row is visible only when every active filter matches its tagged value
/// exactly (logical AND across the three).
pub fn row_visible(row: &ScheduleRow, filters: &Filters) -> bool {
    matches(&row.date, &filters.date)
        && matches(&row.studio, &filters.studio)
        && matches(&row.instructor, &filters.instructor)
}

/// Indices of the rows that stay visible under the current selections.
pub fn visible_rows(rows: &[ScheduleRow], filters: &Filters) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row_visible(row, filters))
        .map(|(index, _)| index)
        .collect()
}

/// The number shown in the studio badge while filters are active.
pub fn studio_visible_count(group: &StudioGroup, filters: &Filters) -> usize {
    group
        .rows
        .iter()
        .filter(|row| row_visible(row, filters))
        .count()
}

/// A studio section stays visible while at least one of its rows does.
pub fn studio_visible(group: &StudioGroup, filters: &Filters) -> bool {
    studio_visible_count(group, filters) > 0
}

/// A date section stays visible while at least one studio section does.
pub fn date_visible(group: &DateGroup, filters: &Filters) -> bool {
    group
        .studios
        .iter()
        .any(|studio| studio_visible(studio, filters))
}
