//! DOM element handle abstraction.
//!
//! The engine never queries the document itself. The host passes explicit
//! handles implementing [`Element`] for the few elements the engine touches:
//! the alert container, the rendered banner, the layout shim, the page header
//! and the header's first element child. This keeps the engine independent of
//! any particular DOM binding and lets tests drive it with [`MockElement`].

use mockall::automock;

/// Computed CSS position of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CssPosition {
    /// `position: static`
    Static,
    /// `position: relative`
    Relative,
    /// `position: absolute`
    Absolute,
    /// `position: fixed`
    Fixed,
    /// `position: sticky`
    Sticky,
}

/// A handle to a DOM element owned by the host page.
///
/// Implementations forward to the real document (a webview binding, a wasm
/// shell) or to a test double. All operations are best-effort: the engine
/// tolerates handles for elements that no longer exist, and implementations
/// should degrade to no-ops rather than panic.
#[automock]
pub trait Element {
    /// Stable identity of the element, used for run-once attachment.
    fn id(&self) -> String;

    /// Replaces the element's content with the given markup.
    fn set_inner_html(&mut self, html: &str);

    /// Removes the element from the document.
    fn remove(&mut self);

    /// Rendered pixel height of the element.
    fn offset_height(&self) -> f64;

    /// Sets the element's inline `top` offset, in pixels.
    fn set_top(&mut self, top: f64);

    /// Sets the element's inline `height`, in pixels.
    fn set_height(&mut self, height: f64);

    /// Computed CSS position of the element.
    fn position(&self) -> CssPosition;
}
