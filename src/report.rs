use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::BuildError;
use crate::html;
use crate::models::ScheduleRow;
use crate::normalize::{date_key, normalize_time, time_key};

/// Classes for one studio on one date, kept in sorted (clock) order.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioGroup {
    pub studio: String,
    pub rows: Vec<ScheduleRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DateGroup {
    pub date: String,
    pub studios: Vec<StudioGroup>,
}

/// Distinct display values feeding the three dropdowns, in first-occurrence
/// order over the sorted rows. The empty "All" option is added at render
/// time, not stored here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub dates: Vec<String>,
    pub studios: Vec<String>,
    pub instructors: Vec<String>,
}

impl FilterOptions {
    pub fn collect(rows: &[ScheduleRow]) -> Self {
        Self {
            dates: distinct(rows.iter().map(|row| row.date.clone())),
            studios: distinct(rows.iter().map(|row| row.studio.clone())),
            instructors: distinct(rows.iter().map(|row| row.instructor.clone())),
        }
    }
}

fn distinct(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in values {
        if seen.insert(value.clone()) {
            out.push(value);
        }
    }
    out
}

/// Stable sort by (date key, studio, clock time). Rows equal on all three
/// keys keep their input order.
pub fn sort_rows(rows: &mut [ScheduleRow]) {
    rows.sort_by_cached_key(|row| {
        (
            date_key(&row.date),
            row.studio.clone(),
            time_key(&row.time),
        )
    });
}

/// Groups sorted rows into consecutive runs by raw date text, then raw
/// studio text. Two date strings that parse to the same day stay separate
/// sections; grouping never re-sorts keys.
pub fn group_rows(rows: &[ScheduleRow]) -> Vec<DateGroup> {
    rows.chunk_by(|a, b| a.date == b.date)
        .map(|date_run| DateGroup {
            date: date_run[0].date.clone(),
            studios: date_run
                .chunk_by(|a, b| a.studio == b.studio)
                .map(|studio_run| StudioGroup {
                    studio: studio_run[0].studio.clone(),
                    rows: studio_run.to_vec(),
                })
                .collect(),
        })
        .collect()
}

/// Renders a schedule into one self-contained HTML document: normalize
/// times, sort, group by date then studio, and emit the page with its
/// embedded filter controls.
#[derive(Debug, Clone)]
pub struct HtmlReporter {
    title: String,
}

impl HtmlReporter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn generate(&self, rows: &[ScheduleRow]) -> String {
        let mut rows = rows.to_vec();
        for row in &mut rows {
            row.time = normalize_time(&row.time);
        }
        sort_rows(&mut rows);

        let options = FilterOptions::collect(&rows);
        let groups = group_rows(&rows);
        debug!(
            rows = rows.len(),
            dates = groups.len(),
            "rendering schedule report"
        );
        html::render_document(&self.title, &options, &groups)
    }

    pub fn write_to(&self, rows: &[ScheduleRow], path: &Path) -> Result<(), BuildError> {
        let document = self.generate(rows);
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, document)?;
        Ok(())
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new("Studio Schedule")
    }
}
