use serde::Deserialize;

/// One scheduled class occurrence as read from the input table.
///
/// `date` and `time` keep the display text from the source; `time` is
/// rewritten to its canonical 12-hour form before sorting.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScheduleRow {
    pub date: String,
    pub time: String,
    pub studio: String,
    pub instructor: String,
    #[serde(rename = "type")]
    pub class_type: String,
    #[serde(default)]
    pub location: String,
}
