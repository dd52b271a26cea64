//! Site Alerts - a sitewide banner alert engine for web pages.
//!
//! This crate implements the client-side decision and rendering logic behind a
//! single administrator-configured banner alert. The alert is gated by two
//! independent conditions - a scheduling window and a page-path allow/deny
//! list - and supports an optional dismiss-and-remember interaction as well as
//! layout adjustment for pages with a fixed-position header.
//!
//! # Overview
//!
//! The host page (a browser shell, a webview binding, a test harness) owns the
//! DOM and the persistent storage. It hands the engine an [`AlertConfig`]
//! produced by the administrative configuration store, element handles
//! implementing the [`dom::Element`] trait, and a [`DismissalStore`]
//! implementation backed by whatever key-value storage the host provides.
//! Everything else - whether the banner shows, what markup goes into the
//! container, how a dismissal is remembered, how the fixed header is offset -
//! is decided here.
//!
//! # Architecture
//!
//! The engine consists of several modules:
//!
//! - [`config`] - The [`AlertConfig`] data model supplied by the host
//! - [`visibility`] - Schedule window and page-pattern evaluation combined
//!   into a single display decision
//! - [`dismissal`] - Configuration fingerprinting and the persisted
//!   dismissal slot
//! - [`render`] - Banner markup injection, dismiss wiring and fixed-header
//!   layout adjustment
//! - [`dom`] - The element handle abstraction the host implements
//! - [`utils`] - Path normalization and a reusable debounce timer
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use site_alerts::{AlertConfig, MemoryStore, RenderOutcome, Renderer};
//! use site_alerts::dom::MockElement;
//!
//! let config: AlertConfig = serde_json::from_str(
//!     r##"{
//!         "message": "Scheduled maintenance tonight",
//!         "style": {"background": "#ffcc00", "text": "#000000"},
//!         "dismissible": false,
//!         "sticky": false
//!     }"##,
//! )
//! .unwrap();
//!
//! let mut container = MockElement::new();
//! container.expect_id().return_const("site-alerts".to_owned());
//! container.expect_set_inner_html().times(1).return_const(());
//!
//! let store = MemoryStore::default();
//! let mut renderer = Renderer::new();
//! let outcome = renderer.render(&mut container, &config, &store, Utc::now(), "/any/page");
//! assert_eq!(outcome, RenderOutcome::Rendered { sticky: false });
//! ```
//!
//! # Runtime behavior
//!
//! All logic is synchronous and runs on the host's UI thread in response to
//! three triggers: the initial page-ready attachment, a dismiss click and a
//! viewport resize. Resize handling is debounced through
//! [`utils::Debouncer`] so layout reads and writes are not repeated for every
//! intermediate resize event.
//!
//! # Logging
//!
//! Diagnostics go through the `log` facade. The host decides whether and how
//! to install a logger; the engine never prints on its own.

pub mod config;
pub mod dismissal;
pub mod dom;
pub mod render;
pub mod utils;
pub mod visibility;

pub use crate::config::{AlertConfig, AlertStyle, PageList, PageRules, Polarity, Schedule};
pub use crate::dismissal::{
    DismissalStore, FileStore, MemoryStore, StoreError, compute_fingerprint, is_dismissed,
    record_dismissal,
};
pub use crate::render::{HeaderLayout, RenderOutcome, Renderer, adjust_header};
pub use crate::visibility::should_display;
