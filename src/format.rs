//! Formatting of derived fields.

use crate::errors::FormatError;
use time::OffsetDateTime;

/// The furthest a timestamp may lie from the epoch, in milliseconds, and still be formatted:
/// 100 000 000 days either way, from `-271821-04-20` to `+275760-09-13`.
pub const MAX_TIMESTAMP_MILLIS: i64 = 8_640_000_000_000_000;

/// Render a timestamp, taken as milliseconds since the Unix epoch, as an ISO-8601 string in UTC.
///
/// The output always carries millisecond precision and a `Z` suffix, e.g.
/// `1970-01-06T07:18:15.425Z`. Years outside `0000..=9999` use the expanded form, a sign and six
/// digits (`+010000`, `-000001`). The host time zone plays no part.
///
/// # Errors
///
/// Returns [`FormatError::InvalidDate`] if `millis` is further than [`MAX_TIMESTAMP_MILLIS`] from
/// the epoch.
#[inline]
pub fn iso_timestamp(millis: i64) -> Result<String, FormatError> {
    if millis.unsigned_abs() > MAX_TIMESTAMP_MILLIS.unsigned_abs() {
        return Err(FormatError::InvalidDate { millis });
    }
    let date = OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
        .map_err(|_err| FormatError::InvalidDate { millis })?;

    let year = date.year();
    let year = if (0..=9999).contains(&year) {
        format!("{year:04}")
    } else {
        format!("{year:+07}")
    };

    Ok(format!(
        "{year}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        u8::from(date.month()),
        date.day(),
        date.hour(),
        date.minute(),
        date.second(),
        date.millisecond(),
    ))
}
