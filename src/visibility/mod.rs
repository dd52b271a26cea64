//! The display decision: scheduling window and page targeting.
//!
//! An alert displays only when both independent gates pass:
//!
//! - [`passes_schedule`] - is "now" inside the configured time window?
//! - [`passes_pages`] - does the current page match the configured pattern
//!   list under its show/hide polarity?
//!
//! [`should_display`] combines both into the single boolean the renderer
//! acts on. Both gates are pure and side-effect free; an absent or empty
//! configuration section passes vacuously.

mod pages;
mod schedule;

pub use crate::visibility::pages::passes_pages;
pub use crate::visibility::schedule::passes_schedule;

use chrono::{DateTime, Utc};

use crate::config::AlertConfig;

/// Decides whether the alert should display at all.
///
/// Logical AND of the schedule and page gates, short-circuiting on the
/// schedule. Dismissal state is not consulted here; that is the renderer's
/// concern.
///
/// # Arguments
///
/// * `config` - The alert configuration
/// * `now` - The current instant
/// * `current_path` - Normalized current path, see [`crate::utils::path_and_query`]
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use site_alerts::{AlertConfig, should_display};
///
/// let config: AlertConfig = serde_json::from_str(
///     r##"{
///         "message": "hello",
///         "style": {"background": "#000", "text": "#fff"},
///         "sticky": false
///     }"##,
/// )
/// .unwrap();
///
/// // No schedule, no page rules: always displays.
/// assert!(should_display(&config, Utc::now(), "/any/page"));
/// ```
pub fn should_display(config: &AlertConfig, now: DateTime<Utc>, current_path: &str) -> bool {
    passes_schedule(config.scheduled.as_ref(), now)
        && passes_pages(config.pages.as_ref(), current_path)
}
