//! Utility helpers: path normalization and a reusable debounce timer.

use std::time::{Duration, Instant};

/// Builds the normalized current-path string used by the page matcher.
///
/// Joins the URL path with the query string (when non-empty) and lower-cases
/// the result. A leading `?` on the query, as delivered by
/// `window.location.search`-style sources, is tolerated.
///
/// # Arguments
///
/// * `path` - The URL path component
/// * `query` - The query string, with or without a leading `?`
///
/// # Examples
///
/// ```
/// use site_alerts::utils::path_and_query;
///
/// assert_eq!(path_and_query("/News", ""), "/news");
/// assert_eq!(path_and_query("/News", "?Page=2"), "/news?page=2");
/// ```
pub fn path_and_query(path: &str, query: &str) -> String {
    let query = query.trim_start_matches('?');
    let current = if query.is_empty() {
        path.to_owned()
    } else {
        format!("{path}?{query}")
    };
    current.to_lowercase()
}

/// A generic trailing-edge debounce timer.
///
/// Every [`Debouncer::signal`] pushes the deadline out by the configured
/// delay; [`Debouncer::fire`] reports `true` once the quiet period has
/// elapsed and then disarms until the next signal. The caller supplies the
/// clock by passing [`Instant`] values, which keeps the timer free of any
/// event-loop or framework dependency and easy to test.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use site_alerts::utils::Debouncer;
///
/// let mut debouncer = Debouncer::new(Duration::from_millis(250));
/// let start = Instant::now();
///
/// debouncer.signal(start);
/// assert!(!debouncer.fire(start));
/// assert!(debouncer.fire(start + Duration::from_millis(300)));
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer {
    /// Quiet period required after the last signal.
    delay: Duration,
    /// Deadline of the pending invocation, if any.
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Creates a disarmed debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            deadline: None,
        }
    }

    /// Records an event at `at`, pushing the deadline out by the delay.
    pub fn signal(&mut self, at: Instant) {
        self.deadline = Some(at + self.delay);
    }

    /// Returns `true` once the quiet period has elapsed, then disarms.
    ///
    /// Returns `false` while disarmed or while signals are still arriving
    /// faster than the quiet period.
    pub fn fire(&mut self, at: Instant) -> bool {
        match self.deadline {
            Some(deadline) if at >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a signal is waiting for its quiet period to elapse.
    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }
}
