use std::fs::File;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::BuildError;
use crate::models::ScheduleRow;
use crate::validation::validate_columns;

/// Reads the schedule table from a CSV file. An absent file is a structural
/// error, distinct from a malformed one.
pub fn read_schedule(path: &Path) -> Result<Vec<ScheduleRow>, BuildError> {
    if !path.exists() {
        return Err(BuildError::MissingInput(path.display().to_string()));
    }
    let file = File::open(path)?;
    parse_schedule(file)
}

/// Deserializes rows from any CSV source, validating the header before any
/// row is materialized. Unknown extra columns are ignored.
pub fn parse_schedule<R: io::Read>(input: R) -> Result<Vec<ScheduleRow>, BuildError> {
    let mut reader = csv::Reader::from_reader(input);
    validate_columns(reader.headers()?)?;

    let rows = reader
        .deserialize()
        .collect::<Result<Vec<ScheduleRow>, csv::Error>>()?;
    debug!(rows = rows.len(), "parsed schedule table");
    Ok(rows)
}
