//! Countdown math for the sale banner.
//!
//! Everything here is pure; the one-second tick lives in the component that
//! displays the result.

/// A days/hours/minutes/seconds breakdown of the time left until a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountdownParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl CountdownParts {
    /// Breaks down `target_secs - now_secs` into calendar-free parts.
    ///
    /// A target in the past (or right now) yields the all-zero state rather
    /// than wrapping negative; the banner keeps showing 00:00:00:00 until it
    /// is removed.
    pub fn until(target_secs: i64, now_secs: i64) -> Self {
        if now_secs >= target_secs {
            return Self::default();
        }
        let diff = (target_secs - now_secs) as u64;
        Self {
            days: diff / 86_400,
            hours: (diff % 86_400) / 3_600,
            minutes: (diff % 3_600) / 60,
            seconds: diff % 60,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// The fixed start/end range during which a discount code is advertised.
///
/// Both bounds are unix seconds; the window is half-open, so the banner drops
/// off the page the second the sale ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromoWindow {
    pub starts_at: i64,
    pub ends_at: i64,
}

impl PromoWindow {
    pub fn is_active(&self, now_secs: i64) -> bool {
        self.starts_at <= now_secs && now_secs < self.ends_at
    }

    /// Time left until the window closes, zero once it has.
    pub fn remaining(&self, now_secs: i64) -> CountdownParts {
        CountdownParts::until(self.ends_at, now_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_target_clamps_to_zero() {
        assert_eq!(CountdownParts::until(100, 100), CountdownParts::default());
        assert_eq!(CountdownParts::until(100, 101), CountdownParts::default());
        assert_eq!(
            CountdownParts::until(0, 9_999_999),
            CountdownParts::default()
        );
        assert!(CountdownParts::until(100, 500).is_zero());
    }

    #[test]
    fn one_of_each_unit() {
        // 1 day, 1 hour, 1 minute, 1 second
        let parts = CountdownParts::until(90_061, 0);
        assert_eq!(
            parts,
            CountdownParts {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1,
            }
        );
    }

    #[test]
    fn sub_day_breakdown() {
        let parts = CountdownParts::until(3_725, 0); // 1h 2m 5s
        assert_eq!(parts.days, 0);
        assert_eq!(parts.hours, 1);
        assert_eq!(parts.minutes, 2);
        assert_eq!(parts.seconds, 5);
    }

    #[test]
    fn fields_stay_in_range() {
        for diff in [1, 59, 60, 3_599, 3_600, 86_399, 86_400, 1_234_567] {
            let parts = CountdownParts::until(diff, 0);
            assert!(parts.hours < 24, "hours overflow for diff {diff}");
            assert!(parts.minutes < 60, "minutes overflow for diff {diff}");
            assert!(parts.seconds < 60, "seconds overflow for diff {diff}");
        }
    }

    #[test]
    fn window_bounds_are_half_open() {
        let window = PromoWindow {
            starts_at: 1_000,
            ends_at: 2_000,
        };
        assert!(!window.is_active(999));
        assert!(window.is_active(1_000));
        assert!(window.is_active(1_999));
        assert!(!window.is_active(2_000));
        assert!(!window.is_active(3_000));
    }

    #[test]
    fn window_remaining_tracks_end() {
        let window = PromoWindow {
            starts_at: 0,
            ends_at: 90_061,
        };
        assert_eq!(window.remaining(0).days, 1);
        assert!(window.remaining(90_061).is_zero());
    }
}
