//! Banner rendering and fixed-header layout adjustment.
//!
//! This module turns a positive visibility decision into markup and keeps a
//! fixed-position page header out from under a sticky banner:
//!
//! - [`Renderer`]: run-once attachment per container, markup injection,
//!   dismissal gating and wiring, debounced resize handling
//! - [`adjust_header`]: offsets whichever of the header or its first element
//!   child is fixed-positioned, and sizes the layout shim
//!
//! # Example Usage
//!
//! ```no_run
//! use chrono::Utc;
//! use site_alerts::{AlertConfig, FileStore, RenderOutcome, Renderer};
//! use site_alerts::utils::path_and_query;
//!
//! # fn host_container() -> Box<dyn site_alerts::dom::Element> { unimplemented!() }
//! # let settings_json = "";
//! let config: AlertConfig = serde_json::from_str(settings_json).unwrap();
//! let store = FileStore::new("dismissal.json");
//! let mut renderer = Renderer::new();
//!
//! let mut container = host_container();
//! let path = path_and_query("/news", "");
//! match renderer.render(container.as_mut(), &config, &store, Utc::now(), &path) {
//!     RenderOutcome::Rendered { sticky: true } => {
//!         // Run adjust_header once with fresh handles, then forward
//!         // resize events to renderer.resize / renderer.poll_resize.
//!     }
//!     _ => {}
//! }
//! ```

mod header;
mod renderer;

pub use crate::render::header::{HeaderLayout, adjust_header};
pub use crate::render::renderer::{RESIZE_DEBOUNCE, RenderOutcome, Renderer};
