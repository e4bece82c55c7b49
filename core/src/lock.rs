//! Attribute locking shared by every container.

use std::any::Any;

use lockhold_types::{AttributeError, Surface};

/// A type whose instances never hold attributes outside a fixed surface.
///
/// Implementors declare [`Locked::SURFACE`] and expose each declared slot
/// through [`Locked::slot`] and [`Locked::slot_mut`]. Name-based access is
/// provided here once, so every implementor rejects undeclared names the
/// same way.
///
/// # Invariants
///
/// - A name is checked against the surface before any slot is touched
/// - A failed write leaves the instance unchanged
pub trait Locked {
    /// The declared surface shared by every instance of the type.
    const SURFACE: Surface;

    /// Borrow the slot at `index` in [`Locked::SURFACE`].
    fn slot(&self, index: usize) -> Option<&dyn Any>;

    /// Mutably borrow the slot at `index` in [`Locked::SURFACE`].
    fn slot_mut(&mut self, index: usize) -> Option<&mut dyn Any>;

    /// The attribute names instances of this type may hold.
    #[must_use]
    fn attributes() -> &'static [&'static str] {
        Self::SURFACE.slots()
    }

    /// Whether `name` is part of the declared surface.
    #[must_use]
    fn has_attr(&self, name: &str) -> bool {
        Self::SURFACE.declares(name)
    }

    /// Read a declared attribute by name.
    ///
    /// Fails with [`AttributeError::Undeclared`] for any name outside the
    /// surface, including names that look private such as `_data`.
    fn get_attr(&self, name: &str) -> Result<&dyn Any, AttributeError> {
        let index = Self::SURFACE.resolve(name)?;
        self.slot(index)
            .ok_or_else(|| AttributeError::undeclared(Self::SURFACE.type_name(), name))
    }

    /// Read a declared attribute by name as a concrete type.
    fn attr<V: Any>(&self, name: &str) -> Result<&V, AttributeError> {
        self.get_attr(name)?
            .downcast_ref::<V>()
            .ok_or_else(|| AttributeError::wrong_type(Self::SURFACE.type_name(), name))
    }

    /// Replace a declared attribute by name.
    ///
    /// The name is checked first: an undeclared name fails with
    /// [`AttributeError::Undeclared`] whatever `value` is. A declared name
    /// with a value of the wrong type fails with
    /// [`AttributeError::WrongType`]. Either way nothing is written.
    fn set_attr<V: Any>(&mut self, name: &str, value: V) -> Result<(), AttributeError> {
        let type_name = Self::SURFACE.type_name();
        let index = Self::SURFACE.resolve(name)?;
        let slot = self
            .slot_mut(index)
            .ok_or_else(|| AttributeError::undeclared(type_name, name))?;
        let slot = slot
            .downcast_mut::<V>()
            .ok_or_else(|| AttributeError::wrong_type(type_name, name))?;
        *slot = value;
        Ok(())
    }
}

/// The base locked type: an object with no attributes at all.
///
/// Every read and write through [`Locked`] fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LockedObject;

impl LockedObject {
    /// Create the base object.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Locked for LockedObject {
    const SURFACE: Surface = Surface::new("LockedObject", &[]);

    fn slot(&self, _index: usize) -> Option<&dyn Any> {
        None
    }

    fn slot_mut(&mut self, _index: usize) -> Option<&mut dyn Any> {
        None
    }
}
