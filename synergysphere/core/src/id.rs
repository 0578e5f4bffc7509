use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Public alias for the identifier of any record.
pub type RecordId = String;

/// Issues record ids derived from the creation instant.
///
/// Ids are epoch milliseconds. A clock never hands out the same value twice:
/// two records created within the same millisecond get consecutive ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IdClock {
    last: i64,
}

impl IdClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next id for a record created at `now`.
    pub fn next(&mut self, now: DateTime<Utc>) -> RecordId {
        let millis = now.timestamp_millis().max(self.last + 1);
        self.last = millis;
        millis.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn id_is_creation_time_in_millis() {
        let mut clock = IdClock::new();
        let now = Utc.with_ymd_and_hms(2024, 2, 8, 10, 30, 0).unwrap();

        let id = clock.next(now);

        assert_eq!(id, now.timestamp_millis().to_string());
    }

    #[test]
    fn same_instant_yields_distinct_ids() {
        let mut clock = IdClock::new();
        let now = Utc.with_ymd_and_hms(2024, 2, 8, 10, 30, 0).unwrap();

        let first = clock.next(now);
        let second = clock.next(now);

        assert_ne!(first, second);
        assert_eq!(
            second.parse::<i64>().unwrap(),
            first.parse::<i64>().unwrap() + 1
        );
    }

    #[test]
    fn clock_never_goes_backwards() {
        let mut clock = IdClock::new();
        let later = Utc.with_ymd_and_hms(2024, 2, 8, 10, 30, 0).unwrap();
        let earlier = Utc.with_ymd_and_hms(2024, 2, 8, 9, 0, 0).unwrap();

        let first = clock.next(later);
        let second = clock.next(earlier);

        assert!(second.parse::<i64>().unwrap() > first.parse::<i64>().unwrap());
    }
}
