//! Accessibility tree bookkeeping for the virtually focused entry.

use std::collections::BTreeMap;

use tracing::trace;

/// Attribute naming the virtually focused child for assistive technology.
pub const ACTIVE_DESCENDANT: &str = "aria-activedescendant";

/// The element that carries accessibility attributes for the dropdown.
pub trait AccessibilityTarget {
	fn set_attribute(&mut self, name: &str, value: &str);
	fn remove_attribute(&mut self, name: &str);
}

impl<T: AccessibilityTarget + ?Sized> AccessibilityTarget for &mut T {
	fn set_attribute(&mut self, name: &str, value: &str) {
		(**self).set_attribute(name, value);
	}

	fn remove_attribute(&mut self, name: &str) {
		(**self).remove_attribute(name);
	}
}

/// A single write issued against an [`AccessibilityTarget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeWrite {
	Set { name: String, value: String },
	Remove { name: String },
}

/// In-memory host element. Keeps the current attributes and a log of every
/// write so callers can observe exactly what was issued.
#[derive(Debug, Clone, Default)]
pub struct AttributeMap {
	attributes: BTreeMap<String, String>,
	writes: Vec<AttributeWrite>,
}

impl AttributeMap {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.attributes.get(name).map(String::as_str)
	}

	pub fn writes(&self) -> &[AttributeWrite] {
		&self.writes
	}
}

impl AccessibilityTarget for AttributeMap {
	fn set_attribute(&mut self, name: &str, value: &str) {
		self.attributes.insert(name.to_string(), value.to_string());
		self.writes.push(AttributeWrite::Set {
			name: name.to_string(),
			value: value.to_string(),
		});
	}

	fn remove_attribute(&mut self, name: &str) {
		self.attributes.remove(name);
		self.writes.push(AttributeWrite::Remove {
			name: name.to_string(),
		});
	}
}

/// Mirrors the active entry id into [`ACTIVE_DESCENDANT`].
///
/// The last written value is remembered so an unchanged target never
/// produces another write.
#[derive(Debug, Clone, Default)]
pub struct ActiveDescendant {
	current: Option<String>,
}

impl ActiveDescendant {
	/// Point the attribute at `target`, or remove it for `None`.
	/// Returns whether a write was issued.
	pub fn sync<H: AccessibilityTarget>(&mut self, host: &mut H, target: Option<String>) -> bool {
		if self.current == target {
			return false;
		}

		match &target {
			Some(id) => {
				trace!(id = %id, "setting {ACTIVE_DESCENDANT}");
				host.set_attribute(ACTIVE_DESCENDANT, id);
			}
			None => {
				trace!("removing {ACTIVE_DESCENDANT}");
				host.remove_attribute(ACTIVE_DESCENDANT);
			}
		}
		self.current = target;
		true
	}
}
