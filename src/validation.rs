use csv::StringRecord;

use crate::error::BuildError;

/// Columns every input table must carry. `location` is optional and renders
/// as an empty cell when absent.
pub const REQUIRED_COLUMNS: [&str; 5] = ["date", "time", "studio", "instructor", "type"];

/// Checks the header record before any row is read, naming every absent
/// column at once.
pub fn validate_columns(headers: &StringRecord) -> Result<(), BuildError> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|header| header == **required))
        .map(|required| required.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(BuildError::MissingColumns(missing))
    }
}
