//! Keyboard-navigable search results dropdown.
//!
//! [`ResultList`] holds the hits of the current query together with a virtual
//! cursor and renders them into a [`View`], whose `Display` output is the
//! accessible listbox markup. Page navigation, the host element's
//! accessibility attributes and the scrollable viewport are injected through
//! the [`Navigator`], [`AccessibilityTarget`] and [`Viewport`] traits.

pub mod a11y;
pub mod config;
mod controller;
pub mod cursor;
mod error;
pub mod hit;
pub mod keys;
pub mod navigator;
mod outcome;
pub mod sanitize;
pub mod scroll;
pub mod view;

pub use a11y::{ACTIVE_DESCENDANT, AccessibilityTarget, AttributeMap};
pub use config::{FallbackSearch, ListboxConfig, ListboxLabels};
pub use controller::ResultList;
pub use cursor::Cursor;
pub use error::{ConfigError, UnknownKey};
pub use hit::{Hit, SearchResponse};
pub use keys::NavKey;
pub use navigator::{Navigator, RecordingNavigator};
pub use outcome::PickOutcome;
pub use scroll::{ScrollRequest, Viewport};
pub use view::View;
