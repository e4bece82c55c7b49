//! Declared attribute surfaces.
//!
//! A [`Surface`] is fixed when a type is defined. Nothing can widen it at
//! runtime: it only holds `'static` slices.

use crate::error::AttributeError;

/// The fixed set of attribute names a type permits on its instances.
///
/// # Invariants
///
/// - `type_name` is non-empty (checked at const-evaluation time)
/// - slot order is the index order used by [`Surface::resolve`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Surface {
    type_name: &'static str,
    slots: &'static [&'static str],
}

impl Surface {
    /// A surface for `type_name` permitting exactly `slots`.
    #[must_use]
    pub const fn new(type_name: &'static str, slots: &'static [&'static str]) -> Self {
        assert!(!type_name.is_empty(), "Surface type name must not be empty");
        Self { type_name, slots }
    }

    /// Name used in [`AttributeError`] messages.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        self.type_name
    }

    /// Declared names, in slot order.
    #[must_use]
    pub const fn slots(self) -> &'static [&'static str] {
        self.slots
    }

    /// Whether `name` is one of the declared slots.
    #[must_use]
    pub fn declares(self, name: &str) -> bool {
        self.slots.contains(&name)
    }

    /// Map an attribute name to its slot index.
    ///
    /// Names are compared exactly: `_data` and `__data` are distinct from
    /// `data` and are rejected unless declared themselves.
    pub fn resolve(self, name: &str) -> Result<usize, AttributeError> {
        self.slots
            .iter()
            .position(|slot| *slot == name)
            .ok_or_else(|| AttributeError::undeclared(self.type_name, name))
    }
}
