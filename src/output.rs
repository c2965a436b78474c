//! JSON output structures for `explain --json`.

use serde::Serialize;

use doomsday_engine::Resolution;

/// Full worked solution for one date.
#[derive(Debug, Serialize)]
pub struct ExplainOutput {
    pub date: String,
    pub weekday: String,
    pub weekday_index: u8,
    pub year_doomsday: String,
    pub month_doomsday: u8,
    pub raw_offset: i32,
    pub offset: u8,
    pub steps: Vec<String>,
}

impl From<&Resolution> for ExplainOutput {
    fn from(resolution: &Resolution) -> Self {
        Self {
            date: resolution.date().iso(),
            weekday: resolution.weekday().to_string(),
            weekday_index: resolution.weekday().index(),
            year_doomsday: resolution.year().doomsday().to_string(),
            month_doomsday: resolution.month_doomsday(),
            raw_offset: resolution.raw_offset(),
            offset: resolution.offset(),
            steps: resolution.solution_lines(),
        }
    }
}
