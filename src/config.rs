//! Alert configuration data model.
//!
//! This module defines the settings object the administrative configuration
//! store hands to the engine once per page load. The structures mirror the
//! JSON the store produces and are immutable for the lifetime of a page view.
//!
//! # Settings Object Format
//!
//! ```json
//! {
//!     "message": "We will be closed on Monday.",
//!     "style": {"background": "#005599", "text": "#ffffff"},
//!     "dismissible": true,
//!     "sticky": false,
//!     "scheduled": {"start": "1700000000", "end": "1700086400"},
//!     "pages": {"pages": ["/news", "/events/*"], "show_hide": "show"}
//! }
//! ```
//!
//! Both `scheduled` and `pages` are optional; an absent or empty section
//! places no restriction on the alert. The store may also deliver the page
//! list as a single comma-joined string instead of an array, and older
//! configurations spell the dismissible flag `dismissable` - both forms
//! deserialize transparently.

use serde::{Deserialize, Serialize};

/// The complete configuration of a single sitewide alert.
///
/// Constructed once by the host from the administrative settings store and
/// treated as read-only thereafter. The engine performs no validation beyond
/// what the individual evaluators tolerate; the store is trusted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Banner message. May contain markup and is rendered verbatim.
    pub message: String,
    /// Banner colors.
    pub style: AlertStyle,
    /// Whether the user may dismiss the banner.
    ///
    /// Accepts the historical `dismissable` spelling used by older settings
    /// stores.
    #[serde(default, alias = "dismissable")]
    pub dismissible: bool,
    /// Whether the banner stays pinned above a fixed-position page header.
    #[serde(default)]
    pub sticky: bool,
    /// Optional scheduling window. Absent or empty means always in window.
    #[serde(default)]
    pub scheduled: Option<Schedule>,
    /// Optional page restriction. Absent or empty means shown on all pages.
    #[serde(default)]
    pub pages: Option<PageRules>,
}

/// Colors applied to the rendered banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertStyle {
    /// CSS background color of the banner.
    pub background: String,
    /// CSS text color of the banner.
    pub text: String,
}

/// An optional scheduling window in epoch seconds.
///
/// Each bound is a stringified epoch-seconds timestamp; an empty string
/// leaves that side of the window unbounded. Both bounds empty (or the whole
/// section absent) means the alert is not schedule-restricted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Earliest instant the alert may display, or empty for no lower bound.
    #[serde(default)]
    pub start: String,
    /// Latest instant the alert may display, or empty for no upper bound.
    #[serde(default)]
    pub end: String,
}

/// Page restriction rules: a pattern list plus its polarity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRules {
    /// The configured path patterns.
    #[serde(default)]
    pub pages: PageList,
    /// Whether the patterns form an allow-list or a deny-list.
    #[serde(default)]
    pub show_hide: Polarity,
}

/// The configured path patterns, in administrator order.
///
/// The settings store delivers these either as a JSON array of pattern
/// strings or as a single comma-joined string; both deserialize here.
/// Use [`PageList::patterns`] to obtain the normalized sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageList {
    /// One pattern per entry.
    Patterns(Vec<String>),
    /// All patterns joined with commas.
    Joined(String),
}

impl PageList {
    /// Returns the ordered sequence of trimmed, non-empty pattern strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use site_alerts::PageList;
    ///
    /// let list = PageList::Joined("/news, /events/* ,".to_owned());
    /// assert_eq!(list.patterns(), vec!["/news", "/events/*"]);
    /// ```
    pub fn patterns(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            PageList::Patterns(patterns) => patterns.iter().map(String::as_str).collect(),
            PageList::Joined(joined) => joined.split(',').collect(),
        };

        raw.into_iter()
            .map(str::trim)
            .filter(|pattern| !pattern.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

impl Default for PageList {
    fn default() -> Self {
        PageList::Patterns(Vec::new())
    }
}

/// Whether the page pattern list is an allow-list or a deny-list.
///
/// Any value other than `show` or `hide` is preserved as [`Polarity::Other`]
/// and treated as fail-open by the page matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Polarity {
    /// Display the alert only on pages matching the list.
    Show,
    /// Display the alert on all pages except those matching the list.
    Hide,
    /// An unrecognized value delivered by the settings store.
    Other(String),
}

impl Default for Polarity {
    fn default() -> Self {
        Polarity::Show
    }
}

impl From<String> for Polarity {
    fn from(value: String) -> Self {
        match value.as_str() {
            "show" => Polarity::Show,
            "hide" => Polarity::Hide,
            _ => Polarity::Other(value),
        }
    }
}

impl From<Polarity> for String {
    fn from(value: Polarity) -> Self {
        match value {
            Polarity::Show => "show".to_owned(),
            Polarity::Hide => "hide".to_owned(),
            Polarity::Other(value) => value,
        }
    }
}
