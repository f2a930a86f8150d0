use chrono::DateTime;

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Time left until the deadline, decomposed for display.
///
/// Days are not carried into a larger unit, so a deadline 40 days out
/// renders as `40d : …`, exactly as organizers expect on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Successive floor-division decomposition of a positive duration.
    pub fn from_millis(mut diff: i64) -> Self {
        let days = diff / MS_PER_DAY;
        diff -= days * MS_PER_DAY;
        let hours = diff / MS_PER_HOUR;
        diff -= hours * MS_PER_HOUR;
        let minutes = diff / MS_PER_MINUTE;
        diff -= minutes * MS_PER_MINUTE;
        let seconds = diff / MS_PER_SECOND;
        Remaining {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    pub fn total_seconds(&self) -> i64 {
        ((self.days * 24 + self.hours) * 60 + self.minutes) * 60 + self.seconds
    }
}

impl std::fmt::Display for Remaining {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}d : {:02}h : {:02}m : {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Countdown phase at a given instant. `Closed` is terminal: the
/// component never re-arms its interval once it has been observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownState {
    Running(Remaining),
    Closed,
}

impl CountdownState {
    pub fn at(deadline_ms: i64, now_ms: i64) -> Self {
        let diff = deadline_ms - now_ms;
        if diff <= 0 {
            CountdownState::Closed
        } else {
            CountdownState::Running(Remaining::from_millis(diff))
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, CountdownState::Closed)
    }
}

/// Parses the configured deadline into epoch milliseconds.
pub fn parse_deadline(iso: &str) -> Result<i64, chrono::ParseError> {
    DateTime::parse_from_rfc3339(iso).map(|dt| dt.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decomposes_millis_without_carrying_past_days() {
        // 40 days, 5 hours, 3 minutes, 2 seconds
        let diff = 40 * MS_PER_DAY + 5 * MS_PER_HOUR + 3 * MS_PER_MINUTE + 2 * MS_PER_SECOND;
        let r = Remaining::from_millis(diff);
        assert_eq!(r.days, 40);
        assert_eq!(r.hours, 5);
        assert_eq!(r.minutes, 3);
        assert_eq!(r.seconds, 2);
        assert_eq!(r.to_string(), "40d : 05h : 03m : 02s");
    }

    #[test]
    fn sub_second_remainder_is_floored() {
        let r = Remaining::from_millis(1999);
        assert_eq!(r.to_string(), "00d : 00h : 00m : 01s");
    }

    #[test]
    fn display_is_zero_padded() {
        let r = Remaining::from_millis(MS_PER_DAY + MS_PER_HOUR + MS_PER_MINUTE + MS_PER_SECOND);
        assert_eq!(r.to_string(), "01d : 01h : 01m : 01s");
    }

    #[test]
    fn future_deadline_is_running_and_decreases_per_tick() {
        let deadline = 10 * MS_PER_DAY;
        let mut previous = i64::MAX;
        for tick in 0..5 {
            let now = tick * MS_PER_SECOND;
            match CountdownState::at(deadline, now) {
                CountdownState::Running(r) => {
                    assert!(r.total_seconds() < previous);
                    previous = r.total_seconds();
                }
                CountdownState::Closed => panic!("closed while time remained"),
            }
        }
    }

    #[test]
    fn past_or_exact_deadline_is_closed() {
        assert!(CountdownState::at(1000, 1000).is_closed());
        assert!(CountdownState::at(1000, 2000).is_closed());
        assert!(!CountdownState::at(1000, 999).is_closed());
    }

    #[test]
    fn parses_offset_timestamps() {
        let ms = parse_deadline("2025-12-04T23:59:00+05:30").unwrap();
        // 18:29 UTC the same day
        assert_eq!(ms, 1764872940000);
        assert!(parse_deadline("not a date").is_err());
    }
}
