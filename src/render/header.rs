//! Fixed-header layout adjustment for sticky alerts.

use log::debug;

use crate::dom::{CssPosition, Element};

/// The element handles involved in header adjustment.
///
/// The host supplies explicit handles instead of the engine querying the
/// document: the page's primary header, that header's first element child
/// (some themes fix the inner wrapper rather than the header itself), the
/// currently rendered banner and the layout shim. Every handle is optional;
/// whatever is missing is simply left alone.
pub struct HeaderLayout<'a> {
    /// The page's primary header element.
    pub header: Option<&'a mut dyn Element>,
    /// The header's first element child in document order.
    pub header_child: Option<&'a mut dyn Element>,
    /// The rendered banner, or `None` once it has been dismissed.
    pub banner: Option<&'a dyn Element>,
    /// The layout shim reserving vertical space below the banner.
    pub shim: Option<&'a mut dyn Element>,
}

impl Default for HeaderLayout<'_> {
    fn default() -> Self {
        HeaderLayout {
            header: None,
            header_child: None,
            banner: None,
            shim: None,
        }
    }
}

/// Repositions a fixed-position header so it is not overlapped by the banner.
///
/// Picks whichever of the header or its first element child is computed
/// `position: fixed`, preferring the header itself. With a banner present,
/// the fixed element's `top` offset and the shim's height are both set to
/// the banner's rendered pixel height, reserving the space the banner
/// occupies. Without a banner (dismissed or never rendered) the offset and
/// the shim collapse back to zero.
///
/// Safe to call with any combination of missing handles and with no
/// fixed-position element at all; those cases are no-ops, not errors.
pub fn adjust_header(layout: HeaderLayout<'_>) {
    let HeaderLayout {
        header,
        header_child,
        banner,
        shim,
    } = layout;

    let fixed = match header {
        Some(header) if header.position() == CssPosition::Fixed => Some(header),
        _ => match header_child {
            Some(child) if child.position() == CssPosition::Fixed => Some(child),
            _ => None,
        },
    };

    let Some(fixed) = fixed else {
        debug!("no fixed-position header element, nothing to adjust");
        return;
    };

    let offset = match banner {
        Some(banner) => banner.offset_height(),
        None => 0.0,
    };

    fixed.set_top(offset);
    if let Some(shim) = shim {
        shim.set_height(offset);
    }

    debug!("fixed header offset set to {offset}px");
}
