//! Optional Value
//!
//! `Value<T>` is an explicit present/absent wrapper whose presence is carried by a flag rather
//! than by a sentinel of `T`, so that a value that is set to `T`'s own "empty" representation
//! (`None`, `""`, `[]`) is still distinguishable from a value that was never set.

pub mod error;
#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "yaml")]
pub mod yaml;

mod de_impl;
#[cfg(any(feature = "json", feature = "yaml"))]
mod inspect;
mod ser_impl;

//
// Implementer's Notes:
//
// * We map the two states onto the Serde data model as follows:
//
//   | Value<T>    | Serde           | JSON    | YAML                       |
//   |-------------|-----------------|---------|----------------------------|
//   | unset       | None            | null    | null (also ~ and empty)    |
//   | set(v)      | Some(v)         | v       | v                          |
//
// * JSON and YAML both encode `Some(v)` as bare `v`, so struct field naming and skipping rules of
//   `T` apply unchanged.
//
// * On the decoding side we go through `deserialize_option`, which is what makes a missing struct
//   field decode to unset: Serde's derived code feeds missing fields to a deserializer that
//   answers `deserialize_option` with `visit_none`.
//
// * The unset slot always holds `T::default()`.  Consequently, the derived `PartialEq` and `Hash`
//   agree with the semantic equality of the two states.
//

pub use crate::error::Error;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Value<T> {
    is_set: bool,
    value: T,
}

impl<T> Value<T> {
    /// Creates a value that is set.
    pub fn new(value: T) -> Self {
        Self {
            is_set: true,
            value,
        }
    }

    /// Returns the slot together with the presence flag.
    ///
    /// When the value is unset, the slot is `T::default()`.
    pub fn get(&self) -> (&T, bool) {
        (&self.value, self.is_set)
    }

    pub fn into_inner(self) -> (T, bool) {
        (self.value, self.is_set)
    }

    /// Sets the value, dropping whatever the slot held before.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.is_set = true;
    }

    pub fn is_set(&self) -> bool {
        self.is_set
    }

    pub fn is_unset(&self) -> bool {
        !self.is_set
    }

    pub fn as_option(&self) -> Option<&T> {
        self.is_set.then_some(&self.value)
    }

    /// Returns a mutable reference to the slot if the value is set.
    ///
    /// An unset slot is not exposed, as writing to it would break the invariant that it holds
    /// `T::default()`.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.is_set.then_some(&mut self.value)
    }

    pub fn into_option(self) -> Option<T> {
        self.is_set.then_some(self.value)
    }
}

impl<T> Value<T>
where
    T: Default,
{
    /// Unsets the value and restores `T::default()` into the slot.
    pub fn reset(&mut self) {
        self.value = T::default();
        self.is_set = false;
    }

    /// Takes the value out, leaving `self` unset.
    pub fn take(&mut self) -> Option<T> {
        std::mem::take(self).into_option()
    }
}

impl<T> From<Option<T>> for Value<T>
where
    T: Default,
{
    fn from(option: Option<T>) -> Self {
        option.map(Self::new).unwrap_or_default()
    }
}

impl<T> From<Value<T>> for Option<T> {
    fn from(value: Value<T>) -> Self {
        value.into_option()
    }
}
