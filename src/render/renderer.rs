//! Banner rendering, dismiss wiring and resize debouncing.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::config::AlertConfig;
use crate::dismissal::{DismissalStore, compute_fingerprint, is_dismissed, record_dismissal};
use crate::dom::Element;
use crate::render::header::{HeaderLayout, adjust_header};
use crate::utils::Debouncer;
use crate::visibility::should_display;

/// Quiet period for resize-triggered header re-adjustment.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

/// The result of a render attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The container was already processed during this page lifecycle.
    AlreadyAttached,
    /// The visibility decision said no; the container was left untouched.
    Hidden,
    /// The user dismissed this exact configuration earlier; suppressed.
    Dismissed,
    /// The banner was injected into the container.
    Rendered {
        /// Whether the alert is sticky and needs header adjustment.
        sticky: bool,
    },
}

/// Renders the banner and manages its lifecycle on one page view.
///
/// The renderer is invoked once per qualifying container element on
/// page-ready. It asks the visibility decision whether the alert applies,
/// consults the dismissal tracker for dismissible alerts, injects the banner
/// markup and, for sticky alerts, arms a debounced resize timer for header
/// re-adjustment.
///
/// # Host contract
///
/// After a `Rendered { sticky: true }` outcome the host must run
/// [`adjust_header`] once with fresh element handles, then forward viewport
/// resize events to [`Renderer::resize`] and call [`Renderer::poll_resize`]
/// from its timer tick, running [`adjust_header`] again whenever it returns
/// `true`. Once [`Renderer::dismiss`] has run, both calls are inert - no
/// stale adjustments can fire for a banner that no longer exists.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use site_alerts::{AlertConfig, MemoryStore, RenderOutcome, Renderer};
/// use site_alerts::dom::MockElement;
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
/// let mut container = MockElement::new();
/// container.expect_id().return_const("site-alerts".to_owned());
/// container.expect_set_inner_html().times(1).return_const(());
///
/// let store = MemoryStore::default();
/// let mut renderer = Renderer::new();
/// let outcome = renderer.render(&mut container, &config, &store, Utc::now(), "/");
/// assert_eq!(outcome, RenderOutcome::Rendered { sticky: false });
/// ```
#[derive(Debug, Default)]
pub struct Renderer {
    /// Container ids already processed during this page lifecycle.
    attached: HashSet<String>,
    /// Armed while a sticky banner is live.
    resize: Option<Debouncer>,
}

impl Renderer {
    /// Creates a renderer with no attached containers.
    pub fn new() -> Self {
        Renderer::default()
    }

    /// Attempts to render the alert into `container`.
    ///
    /// Run-once semantics: a container id that was already processed is
    /// skipped regardless of the earlier outcome, mirroring the one-shot
    /// page-ready attachment of the original behavior.
    ///
    /// # Arguments
    ///
    /// * `container` - The well-known alert container element
    /// * `config` - The alert configuration for this page view
    /// * `store` - The dismissal slot
    /// * `now` - The current instant, for the schedule gate
    /// * `current_path` - Normalized path, see [`crate::utils::path_and_query`]
    pub fn render<S: DismissalStore + ?Sized>(
        &mut self,
        container: &mut dyn Element,
        config: &AlertConfig,
        store: &S,
        now: DateTime<Utc>,
        current_path: &str,
    ) -> RenderOutcome {
        let container_id = container.id();
        if !self.attached.insert(container_id.clone()) {
            debug!("container {container_id} already processed");
            return RenderOutcome::AlreadyAttached;
        }

        if !should_display(config, now, current_path) {
            debug!("alert not displayed on {current_path}");
            return RenderOutcome::Hidden;
        }

        if config.dismissible && is_dismissed(store, &compute_fingerprint(config)) {
            info!("alert already dismissed, suppressing");
            return RenderOutcome::Dismissed;
        }

        container.set_inner_html(&banner_markup(config));

        if config.sticky {
            self.resize = Some(Debouncer::new(RESIZE_DEBOUNCE));
        }

        info!("alert rendered in container {container_id}");

        RenderOutcome::Rendered {
            sticky: config.sticky,
        }
    }

    /// Handles a dismiss click.
    ///
    /// Removes the banner from the document, persists the configuration
    /// fingerprint so the alert stays dismissed across sessions, disarms the
    /// resize timer and re-runs the header adjuster once so a fixed header
    /// returns to its resting position.
    ///
    /// The `layout` banner handle is ignored; the banner is gone by the time
    /// the adjuster runs.
    pub fn dismiss<S: DismissalStore + ?Sized>(
        &mut self,
        config: &AlertConfig,
        store: &mut S,
        banner: &mut dyn Element,
        layout: HeaderLayout<'_>,
    ) {
        record_dismissal(store, &compute_fingerprint(config));
        banner.remove();
        self.resize = None;

        adjust_header(HeaderLayout {
            banner: None,
            ..layout
        });

        info!("alert dismissed");
    }

    /// Forwards a viewport resize event into the debounce timer.
    ///
    /// Inert unless a sticky banner is currently live.
    pub fn resize(&mut self, at: Instant) {
        if let Some(debouncer) = &mut self.resize {
            debouncer.signal(at);
        }
    }

    /// Polls the resize debouncer.
    ///
    /// Returns `true` when the quiet period after the last resize event has
    /// elapsed; the host should then run [`adjust_header`] with fresh
    /// handles. Always `false` when no sticky banner is live.
    pub fn poll_resize(&mut self, at: Instant) -> bool {
        self.resize
            .as_mut()
            .is_some_and(|debouncer| debouncer.fire(at))
    }
}

/// Builds the banner markup: the styled alert, an optional dismiss control
/// and the zero-height layout shim.
fn banner_markup(config: &AlertConfig) -> String {
    let dismiss = if config.dismissible {
        r#"<button type="button" class="sitewide-alert-dismiss" aria-label="Dismiss alert">&times;</button>"#
    } else {
        ""
    };

    format!(
        r#"<div class="sitewide-alert alert" role="alert" style="background-color: {background}; color: {text};">{message}{dismiss}</div><div class="sitewide-alert-shim" style="height: 0;"></div>"#,
        background = config.style.background,
        text = config.style.text,
        message = config.message,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AlertStyle, PageList, PageRules, Polarity, Schedule};
    use crate::dismissal::MemoryStore;
    use crate::dom::{CssPosition, MockElement};
    use mockall::predicate::{eq, str::contains};

    fn config() -> AlertConfig {
        AlertConfig {
            message: "Maintenance tonight".to_owned(),
            style: AlertStyle {
                background: "#ffcc00".to_owned(),
                text: "#000000".to_owned(),
            },
            dismissible: false,
            sticky: false,
            scheduled: Some(Schedule::default()),
            pages: Some(PageRules {
                pages: PageList::Patterns(Vec::new()),
                show_hide: Polarity::Show,
            }),
        }
    }

    fn container(expect_injection: bool) -> MockElement {
        let mut container = MockElement::new();
        container.expect_id().return_const("site-alerts".to_owned());
        if expect_injection {
            container
                .expect_set_inner_html()
                .with(contains("Maintenance tonight"))
                .times(1)
                .return_const(());
        } else {
            container.expect_set_inner_html().never();
        }
        container
    }

    #[test]
    fn test_unrestricted_alert_renders() {
        // Scenario: empty schedule, empty pages, not dismissible.
        let mut renderer = Renderer::new();
        let mut container = container(true);
        let store = MemoryStore::default();

        let outcome = renderer.render(&mut container, &config(), &store, Utc::now(), "/any");
        assert_eq!(outcome, RenderOutcome::Rendered { sticky: false });
    }

    #[test]
    fn test_future_schedule_blocks_render() {
        let mut alert = config();
        alert.scheduled = Some(Schedule {
            start: (Utc::now().timestamp() + 3600).to_string(),
            end: String::new(),
        });

        let mut renderer = Renderer::new();
        let mut container = container(false);
        let store = MemoryStore::default();

        let outcome = renderer.render(&mut container, &alert, &store, Utc::now(), "/any");
        assert_eq!(outcome, RenderOutcome::Hidden);
    }

    #[test]
    fn test_container_is_processed_at_most_once() {
        let mut renderer = Renderer::new();
        let store = MemoryStore::default();

        let mut first = container(true);
        let outcome = renderer.render(&mut first, &config(), &store, Utc::now(), "/any");
        assert_eq!(outcome, RenderOutcome::Rendered { sticky: false });

        let mut second = container(false);
        let outcome = renderer.render(&mut second, &config(), &store, Utc::now(), "/any");
        assert_eq!(outcome, RenderOutcome::AlreadyAttached);
    }

    #[test]
    fn test_markup_contains_colors_and_shim() {
        let markup = banner_markup(&config());
        assert!(markup.contains("background-color: #ffcc00"));
        assert!(markup.contains("color: #000000"));
        assert!(markup.contains("Maintenance tonight"));
        assert!(markup.contains("sitewide-alert-shim"));
        assert!(!markup.contains("sitewide-alert-dismiss"));
    }

    #[test]
    fn test_markup_contains_dismiss_control_when_dismissible() {
        let mut alert = config();
        alert.dismissible = true;
        assert!(banner_markup(&alert).contains("sitewide-alert-dismiss"));
    }

    #[test]
    fn test_dismiss_persists_and_suppresses_until_config_changes() {
        // Scenario: dismiss, reload with the identical config, then reload
        // with an edited message.
        let mut alert = config();
        alert.dismissible = true;

        let mut store = MemoryStore::default();

        let mut renderer = Renderer::new();
        let mut first = container(true);
        let outcome = renderer.render(&mut first, &alert, &store, Utc::now(), "/any");
        assert_eq!(outcome, RenderOutcome::Rendered { sticky: false });

        let mut banner = MockElement::new();
        banner.expect_remove().times(1).return_const(());
        renderer.dismiss(&alert, &mut store, &mut banner, HeaderLayout::default());

        // Reload: same config stays suppressed.
        let mut renderer = Renderer::new();
        let mut second = container(false);
        let outcome = renderer.render(&mut second, &alert, &store, Utc::now(), "/any");
        assert_eq!(outcome, RenderOutcome::Dismissed);

        // Editing the alert changes the fingerprint and forces redisplay.
        alert.message = "Maintenance tonight, extended".to_owned();
        let mut renderer = Renderer::new();
        let mut third = MockElement::new();
        third.expect_id().return_const("site-alerts".to_owned());
        third.expect_set_inner_html().times(1).return_const(());
        let outcome = renderer.render(&mut third, &alert, &store, Utc::now(), "/any");
        assert_eq!(outcome, RenderOutcome::Rendered { sticky: false });
    }

    #[test]
    fn test_sticky_render_offsets_header_and_dismiss_resets_it() {
        // Scenario: fixed header, banner height 48, then dismissal.
        let mut alert = config();
        alert.sticky = true;
        alert.dismissible = true;

        let mut renderer = Renderer::new();
        let mut target = container(true);
        let mut store = MemoryStore::default();

        let outcome = renderer.render(&mut target, &alert, &store, Utc::now(), "/any");
        assert_eq!(outcome, RenderOutcome::Rendered { sticky: true });

        // Initial adjustment with the freshly injected banner.
        let mut header = MockElement::new();
        header.expect_position().return_const(CssPosition::Fixed);
        header.expect_set_top().with(eq(48.0)).times(1).return_const(());

        let mut banner = MockElement::new();
        banner.expect_offset_height().return_const(48.0);

        let mut shim = MockElement::new();
        shim.expect_set_height().with(eq(48.0)).times(1).return_const(());

        adjust_header(HeaderLayout {
            header: Some(&mut header),
            header_child: None,
            banner: Some(&banner),
            shim: Some(&mut shim),
        });

        // Dismissal resets the offset to zero.
        let mut header = MockElement::new();
        header.expect_position().return_const(CssPosition::Fixed);
        header.expect_set_top().with(eq(0.0)).times(1).return_const(());

        let mut banner = MockElement::new();
        banner.expect_remove().times(1).return_const(());

        let mut shim = MockElement::new();
        shim.expect_set_height().with(eq(0.0)).times(1).return_const(());

        renderer.dismiss(
            &alert,
            &mut store,
            &mut banner,
            HeaderLayout {
                header: Some(&mut header),
                header_child: None,
                banner: None,
                shim: Some(&mut shim),
            },
        );
    }

    #[test]
    fn test_resize_is_debounced_while_sticky_banner_is_live() {
        let mut alert = config();
        alert.sticky = true;

        let mut renderer = Renderer::new();
        let mut target = container(true);
        let store = MemoryStore::default();

        renderer.render(&mut target, &alert, &store, Utc::now(), "/any");

        let start = Instant::now();
        renderer.resize(start);
        assert!(!renderer.poll_resize(start));
        assert!(renderer.poll_resize(start + RESIZE_DEBOUNCE));
        // Disarmed until the next resize event.
        assert!(!renderer.poll_resize(start + RESIZE_DEBOUNCE * 2));
    }

    #[test]
    fn test_resize_is_inert_after_dismissal() {
        let mut alert = config();
        alert.sticky = true;
        alert.dismissible = true;

        let mut renderer = Renderer::new();
        let mut target = container(true);
        let mut store = MemoryStore::default();

        renderer.render(&mut target, &alert, &store, Utc::now(), "/any");

        let mut banner = MockElement::new();
        banner.expect_remove().times(1).return_const(());
        renderer.dismiss(&alert, &mut store, &mut banner, HeaderLayout::default());

        let now = Instant::now();
        renderer.resize(now);
        assert!(!renderer.poll_resize(now + RESIZE_DEBOUNCE * 10));
    }

    #[test]
    fn test_resize_is_inert_for_non_sticky_alerts() {
        let mut renderer = Renderer::new();
        let mut target = container(true);
        let store = MemoryStore::default();

        renderer.render(&mut target, &config(), &store, Utc::now(), "/any");

        let now = Instant::now();
        renderer.resize(now);
        assert!(!renderer.poll_resize(now + RESIZE_DEBOUNCE * 10));
    }
}
