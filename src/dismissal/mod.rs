//! Dismissal tracking: configuration fingerprinting and the persisted slot.
//!
//! A dismissible alert that the user closed should stay closed across page
//! loads - but only for the exact configuration that was dismissed. The
//! tracker derives an opaque fingerprint from every user-visible field of
//! the [`AlertConfig`]; editing the alert in any way changes the fingerprint
//! and forces redisplay even for users who dismissed the earlier version.
//!
//! Persistence goes through the [`DismissalStore`] trait so the host can
//! back the single slot with whatever origin-scoped key-value storage it
//! has. [`MemoryStore`] and [`FileStore`] ship with the crate. Storage
//! failures are contained here: a slot that cannot be read counts as "not
//! dismissed" and a write that fails is dropped with a log entry, never a
//! panic.

mod store;

pub use crate::dismissal::store::{
    DismissalStore, FileStore, MemoryStore, MockDismissalStore, StoreError,
};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use log::warn;

use crate::config::AlertConfig;

/// Field delimiter for the raw fingerprint. Not expected to survive in the
/// message token (non-alphanumerics are stripped) and harmless in the JSON
/// sections, where it cannot collide across field boundaries.
const FINGERPRINT_DELIMITER: char = '|';

/// Computes the opaque fingerprint of an alert configuration.
///
/// The fingerprint covers the message (reduced to its alphanumeric
/// characters), both flags, both colors and the stringified schedule and
/// page sections. It is deterministic for an unchanged configuration and
/// changes whenever any covered field changes.
///
/// # Examples
///
/// ```
/// use site_alerts::{AlertConfig, compute_fingerprint};
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
/// assert_eq!(compute_fingerprint(&config), compute_fingerprint(&config));
/// ```
pub fn compute_fingerprint(config: &AlertConfig) -> String {
    let message_token: String = config
        .message
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect();

    let scheduled = serde_json::to_string(&config.scheduled).unwrap_or_default();
    let pages = serde_json::to_string(&config.pages).unwrap_or_default();

    let fields = [
        message_token,
        config.dismissible.to_string(),
        config.sticky.to_string(),
        config.style.background.clone(),
        config.style.text.clone(),
        scheduled,
        pages,
    ];
    let raw = fields.join(&FINGERPRINT_DELIMITER.to_string());

    STANDARD.encode(raw)
}

/// Returns whether the persisted slot holds exactly this fingerprint.
///
/// A missing record, a mismatching record and an unreadable store all count
/// as "not dismissed"; the last case is logged. The slot is only consulted
/// for dismissible alerts - non-dismissible alerts display whenever the
/// visibility decision passes.
pub fn is_dismissed<S: DismissalStore + ?Sized>(store: &S, fingerprint: &str) -> bool {
    match store.load() {
        Ok(Some(stored)) => stored == fingerprint,
        Ok(None) => false,
        Err(e) => {
            warn!("dismissal state unavailable, treating alert as not dismissed: {e}");
            false
        }
    }
}

/// Overwrites the persisted slot with the given fingerprint.
///
/// A failed write is logged and dropped; the alert will simply reappear on
/// the next page load.
pub fn record_dismissal<S: DismissalStore + ?Sized>(store: &mut S, fingerprint: &str) {
    if let Err(e) = store.save(fingerprint) {
        warn!("failed to persist dismissal: {e}");
    }
}
