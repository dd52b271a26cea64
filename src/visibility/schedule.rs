//! Scheduling window evaluation.

use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::config::Schedule;

/// Decides whether `now` falls inside the configured scheduling window.
///
/// An absent schedule, or one with both bounds empty, passes. A non-empty
/// `start` fails the check while `now` is before it; a non-empty `end` fails
/// the check once `now` is past it. Both bounds are inclusive.
///
/// Bounds are epoch-seconds strings from the settings store. A bound that
/// does not parse as an integer is logged and treated as absent, so a typo
/// in one bound never pins the alert into a state the administrator cannot
/// see.
///
/// # Arguments
///
/// * `schedule` - The configured window, if any
/// * `now` - The current instant
pub fn passes_schedule(schedule: Option<&Schedule>, now: DateTime<Utc>) -> bool {
    let Some(schedule) = schedule else {
        return true;
    };

    let now = now.timestamp();

    if let Some(start) = parse_bound(&schedule.start) {
        if now < start {
            debug!("schedule start {start} not reached yet");
            return false;
        }
    }

    if let Some(end) = parse_bound(&schedule.end) {
        if now > end {
            debug!("schedule end {end} has passed");
            return false;
        }
    }

    true
}

/// Parses an epoch-seconds bound, returning `None` for empty or malformed
/// values.
fn parse_bound(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    match raw.parse() {
        Ok(bound) => Some(bound),
        Err(_) => {
            warn!("ignoring malformed schedule bound {raw:?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(timestamp: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(timestamp, 0).unwrap()
    }

    fn window(start: &str, end: &str) -> Schedule {
        Schedule {
            start: start.to_owned(),
            end: end.to_owned(),
        }
    }

    #[test]
    fn test_absent_schedule_passes() {
        assert!(passes_schedule(None, Utc::now()));
    }

    #[test]
    fn test_empty_schedule_passes() {
        assert!(passes_schedule(Some(&Schedule::default()), Utc::now()));
    }

    #[test]
    fn test_inside_window_passes() {
        let schedule = window("1000", "2000");
        assert!(passes_schedule(Some(&schedule), at(1500)));
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let schedule = window("1000", "2000");
        assert!(passes_schedule(Some(&schedule), at(1000)));
        assert!(passes_schedule(Some(&schedule), at(2000)));
    }

    #[test]
    fn test_before_start_fails() {
        let schedule = window("1000", "2000");
        assert!(!passes_schedule(Some(&schedule), at(999)));
    }

    #[test]
    fn test_after_end_fails() {
        let schedule = window("1000", "2000");
        assert!(!passes_schedule(Some(&schedule), at(2001)));
    }

    #[test]
    fn test_start_only_window() {
        let schedule = window("1000", "");
        assert!(!passes_schedule(Some(&schedule), at(500)));
        assert!(passes_schedule(Some(&schedule), at(5000)));
    }

    #[test]
    fn test_end_only_window() {
        let schedule = window("", "2000");
        assert!(passes_schedule(Some(&schedule), at(500)));
        assert!(!passes_schedule(Some(&schedule), at(5000)));
    }

    #[test]
    fn test_malformed_bound_is_treated_as_absent() {
        let schedule = window("not-a-timestamp", "2000");
        assert!(passes_schedule(Some(&schedule), at(500)));
        assert!(!passes_schedule(Some(&schedule), at(5000)));
    }
}
