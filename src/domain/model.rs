use crate::utils::error::{FilterError, Result};
use csv::StringRecord;
use serde::Serialize;
use std::time::Duration;

/// Column positions in a GeoNames dump line.
pub const NAME_COLUMN: usize = 1;
pub const LATITUDE_COLUMN: usize = 4;
pub const LONGITUDE_COLUMN: usize = 5;
pub const COUNTRY_CODE_COLUMN: usize = 8;

/// Highest accessed column is 8, so a line needs at least 9 fields.
pub const MIN_FIELDS: usize = COUNTRY_CODE_COLUMN + 1;

/// The four retained columns of one gazetteer line, in output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedRecord<'a> {
    pub name: &'a str,
    pub latitude: &'a str,
    pub longitude: &'a str,
    pub country_code: &'a str,
}

impl<'a> ProjectedRecord<'a> {
    /// Select the fixed columns from `record`.
    ///
    /// `line` is the 1-based input line, only used for the error.
    pub fn from_record(record: &'a StringRecord, line: u64) -> Result<Self> {
        if record.len() < MIN_FIELDS {
            return Err(FilterError::MalformedRecord {
                line,
                found: record.len(),
                required: MIN_FIELDS,
            });
        }

        Ok(Self {
            name: &record[NAME_COLUMN],
            latitude: &record[LATITUDE_COLUMN],
            longitude: &record[LONGITUDE_COLUMN],
            country_code: &record[COUNTRY_CODE_COLUMN],
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectionSummary {
    pub records_written: u64,
    pub elapsed: Duration,
}
