//! Unix seconds to and from `chrono::DateTime<Utc>`.
//!
//! The accepted range is the one of a four-digit calendar,
//! `0001-01-01T00:00:00Z ..= 9999-12-31T23:59:59Z`.

use chrono::DateTime;
use chrono::Utc;

use crate::error::TimeRangeError;
use crate::try_result::TryResult;

/// Seconds since `1970-01-01T00:00:00Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UnixTimeSeconds(pub i64);

impl UnixTimeSeconds {
    /// `0001-01-01T00:00:00Z`
    pub const MIN: Self = Self(-62_135_596_800);
    /// `9999-12-31T23:59:59Z`
    pub const MAX: Self = Self(253_402_300_799);

    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn is_in_range(self) -> bool {
        (Self::MIN.0..=Self::MAX.0).contains(&self.0)
    }

    #[inline]
    fn check(self) -> Result<Self, TimeRangeError> {
        if self.is_in_range() {
            Ok(self)
        } else {
            tracing::debug!(seconds = self.0, "unix time out of range");
            Err(TimeRangeError {
                value: self.0,
                min: Self::MIN.0,
                max: Self::MAX.0,
            })
        }
    }

    /// The UTC point in time these seconds denote.
    pub fn to_date_time(self) -> Result<DateTime<Utc>, TimeRangeError> {
        let seconds = self.check()?;
        // the whole checked range is representable by chrono
        DateTime::from_timestamp(seconds.0, 0).ok_or(TimeRangeError {
            value: seconds.0,
            min: Self::MIN.0,
            max: Self::MAX.0,
        })
    }

    /// Try-pattern variant of [`to_date_time`](Self::to_date_time); failures carry the Unix epoch.
    pub fn try_to_date_time(self) -> TryResult<DateTime<Utc>> {
        match self.to_date_time() {
            Ok(value) => TryResult::new(value),
            Err(_) => TryResult::failure(DateTime::UNIX_EPOCH),
        }
    }

    /// Whole seconds of `value`, truncating sub-second precision toward negative infinity.
    pub fn from_date_time(value: &DateTime<Utc>) -> Result<Self, TimeRangeError> {
        Self(value.timestamp()).check()
    }
}

impl From<i64> for UnixTimeSeconds {
    #[inline]
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl TryFrom<UnixTimeSeconds> for DateTime<Utc> {
    type Error = TimeRangeError;

    #[inline]
    fn try_from(value: UnixTimeSeconds) -> Result<Self, Self::Error> {
        value.to_date_time()
    }
}

impl TryFrom<DateTime<Utc>> for UnixTimeSeconds {
    type Error = TimeRangeError;

    #[inline]
    fn try_from(value: DateTime<Utc>) -> Result<Self, Self::Error> {
        Self::from_date_time(&value)
    }
}

/// Shorthand for `UnixTimeSeconds(seconds).to_date_time()`.
#[inline]
pub fn to_date_time(seconds: i64) -> Result<DateTime<Utc>, TimeRangeError> {
    UnixTimeSeconds(seconds).to_date_time()
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;
    use chrono::TimeZone;
    use chrono::Timelike;

    use super::*;

    #[test]
    fn test_epoch() {
        let epoch = to_date_time(0).unwrap();
        assert_eq!(epoch, Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(epoch.to_rfc3339(), "1970-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_lower_boundary() {
        let first = to_date_time(-62_135_596_800).unwrap();
        assert_eq!((first.year(), first.month(), first.day()), (1, 1, 1));
        assert_eq!((first.hour(), first.minute(), first.second()), (0, 0, 0));

        let err = to_date_time(-62_135_596_801).unwrap_err();
        assert_eq!(err.value, -62_135_596_801);
        assert_eq!(err.min, UnixTimeSeconds::MIN.get());
    }

    #[test]
    fn test_upper_boundary() {
        let last = to_date_time(253_402_300_799).unwrap();
        assert_eq!(last, Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap());

        let err = to_date_time(253_402_300_800).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Valid values are between -62135596800 and 253402300799 seconds, inclusive (got 253402300800)."
        );
    }

    #[test]
    fn test_extremes_do_not_overflow() {
        assert!(to_date_time(i64::MIN).is_err());
        assert!(to_date_time(i64::MAX).is_err());
    }

    #[test]
    fn test_try_variant() {
        let ok = UnixTimeSeconds(1_234_567_890).try_to_date_time();
        assert!(ok.is_success());
        assert_eq!(ok.result().timestamp(), 1_234_567_890);

        let failed = UnixTimeSeconds(i64::MAX).try_to_date_time();
        assert!(!failed.is_success());
        assert_eq!(*failed.result(), DateTime::UNIX_EPOCH);
    }

    #[test]
    fn test_back_to_seconds() {
        let moment = DateTime::from_timestamp(1_700_000_000, 999_999_999).unwrap();
        assert_eq!(UnixTimeSeconds::from_date_time(&moment), Ok(UnixTimeSeconds(1_700_000_000)));

        let before_year_one = Utc.with_ymd_and_hms(0, 12, 31, 23, 59, 59).unwrap();
        assert!(UnixTimeSeconds::try_from(before_year_one).is_err());

        let converted: DateTime<Utc> = UnixTimeSeconds::MAX.try_into().unwrap();
        assert_eq!(converted.year(), 9999);
    }
}
