use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

use crate::Error;

pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// Today's calendar date in the given timezone.
///
/// Returns [Error::InvalidTimezone] when `canonical_timezone` is not a
/// valid canonical timezone name.
pub fn local_date_today(canonical_timezone: &str) -> Result<Date, Error> {
    let offset = get_local_offset(canonical_timezone)
        .ok_or_else(|| Error::InvalidTimezone(canonical_timezone.to_owned()))?;

    Ok(OffsetDateTime::now_utc().to_offset(offset).date())
}

#[cfg(test)]
mod timezone_tests {
    use crate::{
        Error,
        timezone::{get_local_offset, local_date_today},
    };

    #[test]
    fn utc_resolves_to_zero_offset() {
        let offset = get_local_offset("Etc/UTC").unwrap();
        assert!(offset.is_utc());
    }

    #[test]
    fn unknown_timezone_is_an_error() {
        let result = local_date_today("Middle/Earth");
        assert_eq!(result, Err(Error::InvalidTimezone("Middle/Earth".to_owned())));
    }
}
