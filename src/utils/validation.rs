use crate::domain::model::Month;
use crate::utils::error::{GardenError, Result};

/// Converts raw user input into a validated month.
///
/// Surrounding whitespace is ignored. Fails when the text is not an
/// integer literal or the value is outside 1-12.
pub fn parse_month_input(raw: &str) -> Result<Month> {
    let trimmed = raw.trim();

    let value: i64 = trimmed.parse().map_err(|_| GardenError::InvalidNumber {
        input: trimmed.to_string(),
    })?;

    if !(1..=12).contains(&value) {
        return Err(GardenError::MonthOutOfRange { value });
    }

    Month::new(value as u8).ok_or(GardenError::MonthOutOfRange { value })
}
