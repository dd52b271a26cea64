//! Page-pattern matching with show/hide polarity.

use log::warn;

use crate::config::{PageRules, Polarity};

/// Decides whether the current page passes the configured page restriction.
///
/// Absent rules, or rules whose pattern list normalizes to nothing, pass
/// vacuously. Otherwise each pattern is compared against `current_path`,
/// lower-cased:
///
/// - A pattern containing `*` matches when the path contains the pattern
///   with the wildcard characters removed, anywhere. This is substring
///   containment, not a glob; `/user/*` matches `/user/5/edit` because the
///   path contains `/user/`.
/// - Any other pattern must equal the path exactly.
///
/// The polarity then determines the verdict: `show` passes when any pattern
/// matched, `hide` passes when none did. An unrecognized polarity value is
/// logged and fails open, displaying the alert.
///
/// # Arguments
///
/// * `rules` - The configured page restriction, if any
/// * `current_path` - Normalized path plus query, see
///   [`crate::utils::path_and_query`]
pub fn passes_pages(rules: Option<&PageRules>, current_path: &str) -> bool {
    let Some(rules) = rules else {
        return true;
    };

    let patterns = rules.pages.patterns();
    if patterns.is_empty() {
        return true;
    }

    let current_path = current_path.to_lowercase();
    let any_match = patterns.iter().any(|pattern| {
        let pattern = pattern.to_lowercase();
        if pattern.contains('*') {
            current_path.contains(&pattern.replace('*', ""))
        } else {
            current_path == pattern
        }
    });

    match &rules.show_hide {
        Polarity::Show => any_match,
        Polarity::Hide => !any_match,
        Polarity::Other(value) => {
            warn!("unknown show_hide value {value:?}, displaying the alert");
            true
        }
    }
}
