//! # Scalar Views and Sum-Field Plumbing
//!
//! Views are non-owning handles over a record's bytes: a borrowed slice
//! positioned at a field's offset, nothing else. Reads go through
//! [`Wire::load`], writes through [`Wire::store`], so any offset works
//! regardless of alignment. Mutability is a type distinction: the
//! read-only and mutable views are separate types, not a runtime flag.
//!
//! A view's validity is tied to the buffer it was projected from; any
//! buffer mutation that may move storage invalidates outstanding views
//! (the borrow checker enforces this).
//!
//! Generated record views compose these parts: one accessor method per
//! field returning the field's view, with nested records sliced at their
//! offset and sum fields wrapped in a generated view over the
//! tag+payload region. The helpers at the bottom of this module are the
//! shared write path for sum fields: write the discriminant, zero the
//! whole payload region, then write the new alternative.

use std::marker::PhantomData;

use crate::encoding::wire::Wire;

/// Byte width of a tagged sum's discriminant.
pub const SUM_TAG_SIZE: usize = 4;

/// Read-only view of a scalar field.
#[derive(Debug, Clone, Copy)]
pub struct ScalarView<'a, T: Wire> {
    bytes: &'a [u8],
    _value: PhantomData<T>,
}

impl<'a, T: Wire> ScalarView<'a, T> {
    pub fn new(bytes: &'a [u8]) -> Self {
        debug_assert!(bytes.len() >= T::WIRE_SIZE);
        Self {
            bytes,
            _value: PhantomData,
        }
    }

    pub fn get(&self) -> T {
        T::load(self.bytes)
    }

    /// Alias for [`get`](Self::get).
    pub fn value(&self) -> T {
        self.get()
    }
}

impl<T: Wire + PartialEq> PartialEq<T> for ScalarView<'_, T> {
    fn eq(&self, other: &T) -> bool {
        self.get() == *other
    }
}

/// Mutable view of a scalar field.
#[derive(Debug)]
pub struct ScalarViewMut<'a, T: Wire> {
    bytes: &'a mut [u8],
    _value: PhantomData<T>,
}

impl<'a, T: Wire> ScalarViewMut<'a, T> {
    pub fn new(bytes: &'a mut [u8]) -> Self {
        debug_assert!(bytes.len() >= T::WIRE_SIZE);
        Self {
            bytes,
            _value: PhantomData,
        }
    }

    pub fn get(&self) -> T {
        T::load(self.bytes)
    }

    /// Alias for [`get`](Self::get).
    pub fn value(&self) -> T {
        self.get()
    }

    pub fn set(&mut self, value: T) {
        value.store(self.bytes);
    }
}

impl<T: Wire + PartialEq> PartialEq<T> for ScalarViewMut<'_, T> {
    fn eq(&self, other: &T) -> bool {
        self.get() == *other
    }
}

/// Starts writing a tagged-sum alternative.
///
/// `bytes` is the field's full tag+payload region. Stores the
/// discriminant, zeroes the entire payload so bytes past the new
/// alternative stay deterministic, and returns the payload slice for the
/// alternative's bytes.
pub fn begin_alternative(bytes: &mut [u8], tag: u32) -> &mut [u8] {
    tag.store(bytes);
    let payload = &mut bytes[SUM_TAG_SIZE..];
    payload.fill(0);
    payload
}

/// Zeroes an untagged sum's payload region before an alternative write.
pub fn reset_payload(bytes: &mut [u8]) -> &mut [u8] {
    bytes.fill(0);
    bytes
}
