//! # Native POD Pass-Through
//!
//! Some aggregates (math vectors, FFI structs) are stored on the wire as
//! their raw in-memory byte image instead of field-by-field. That is only
//! meaningful when the host representation *is* the wire representation,
//! so this entire module is gated to little-endian hosts; a schema that
//! uses a native POD field or alternative simply does not compile on a
//! big-endian target.
//!
//! The "trivially copyable, standard layout, no invalid bit patterns"
//! gate is the zerocopy trait bundle behind the [`NativePod`] marker.
//! Record layouts have no implicit padding, so a POD field can sit at
//! any byte offset: the load/store path always copies through byte
//! slices and never needs alignment. In-place typed references
//! ([`pod_ref`]/[`pod_mut`], [`PodView::as_ref`]) are the narrow
//! companion case and additionally require `zerocopy::Unaligned`, which
//! is what makes a `&T` at an arbitrary offset sound.

#![cfg(target_endian = "little")]

use std::marker::PhantomData;

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::records::schema::{fingerprint, Record, RecordData};

/// Marker for types stored on the wire as their raw byte image.
///
/// Implement this for a type only if its byte image is the intended wire
/// format. The bounds make any implementor safe to copy in and out of
/// record bytes at arbitrary offsets.
pub trait NativePod:
    FromBytes + IntoBytes + Immutable + KnownLayout + Copy + 'static
{
}

/// Loads a POD value by byte copy from the start of `bytes`.
pub fn load_pod<T: NativePod>(bytes: &[u8]) -> T {
    let mut out = T::new_zeroed();
    out.as_mut_bytes()
        .copy_from_slice(&bytes[..std::mem::size_of::<T>()]);
    out
}

/// Stores a POD value by byte copy at the start of `bytes`.
pub fn store_pod<T: NativePod>(value: &T, bytes: &mut [u8]) {
    bytes[..std::mem::size_of::<T>()].copy_from_slice(value.as_bytes());
}

/// Typed reference directly into the record bytes.
pub fn pod_ref<T: NativePod + Unaligned>(bytes: &[u8]) -> &T {
    match T::ref_from_bytes(&bytes[..std::mem::size_of::<T>()]) {
        Ok(value) => value,
        // Unaligned + exact slice length: the cast cannot fail.
        Err(_) => unreachable!("pod slice has exact size and no alignment requirement"),
    }
}

/// Typed mutable reference directly into the record bytes.
pub fn pod_mut<T: NativePod + Unaligned>(bytes: &mut [u8]) -> &mut T {
    match T::mut_from_bytes(&mut bytes[..std::mem::size_of::<T>()]) {
        Ok(value) => value,
        Err(_) => unreachable!("pod slice has exact size and no alignment requirement"),
    }
}

/// Read-only view of a native POD field.
#[derive(Debug, Clone, Copy)]
pub struct PodView<'a, T: NativePod> {
    bytes: &'a [u8],
    _value: PhantomData<T>,
}

impl<'a, T: NativePod> PodView<'a, T> {
    pub fn new(bytes: &'a [u8]) -> Self {
        debug_assert!(bytes.len() >= std::mem::size_of::<T>());
        Self {
            bytes,
            _value: PhantomData,
        }
    }

    pub fn get(&self) -> T {
        load_pod(self.bytes)
    }

    /// Alias for [`get`](Self::get).
    pub fn value(&self) -> T {
        self.get()
    }

    pub fn as_ref(&self) -> &'a T
    where
        T: Unaligned,
    {
        pod_ref(self.bytes)
    }
}

impl<T: NativePod + PartialEq> PartialEq<T> for PodView<'_, T> {
    fn eq(&self, other: &T) -> bool {
        self.get() == *other
    }
}

/// Mutable view of a native POD field.
#[derive(Debug)]
pub struct PodViewMut<'a, T: NativePod> {
    bytes: &'a mut [u8],
    _value: PhantomData<T>,
}

impl<'a, T: NativePod> PodViewMut<'a, T> {
    pub fn new(bytes: &'a mut [u8]) -> Self {
        debug_assert!(bytes.len() >= std::mem::size_of::<T>());
        Self {
            bytes,
            _value: PhantomData,
        }
    }

    pub fn get(&self) -> T {
        load_pod(self.bytes)
    }

    /// Alias for [`get`](Self::get).
    pub fn value(&self) -> T {
        self.get()
    }

    pub fn set(&mut self, value: T) {
        store_pod(&value, self.bytes);
    }

    /// Applies an in-place update through a copy of the value.
    pub fn update(&mut self, f: impl FnOnce(&mut T)) {
        let mut value = self.get();
        f(&mut value);
        self.set(value);
    }

    pub fn as_mut(&mut self) -> &mut T
    where
        T: Unaligned,
    {
        pod_mut(self.bytes)
    }
}

impl<T: NativePod + PartialEq> PartialEq<T> for PodViewMut<'_, T> {
    fn eq(&self, other: &T) -> bool {
        self.get() == *other
    }
}

/// Adapter that makes a bare POD type usable as a buffer element.
///
/// `Buffer<Pod<V>>` stores `V` values back to back with the same
/// stride/fingerprint surface as a generated schema and full codec
/// support; records are accessed through [`PodView`]/[`PodViewMut`].
pub struct Pod<T>(PhantomData<T>);

impl<T: NativePod> Record for Pod<T> {
    const STRIDE: usize = std::mem::size_of::<T>();
    // Like the original's compiler-signature hash, this depends on the
    // toolchain's type naming; POD buffers interchange only between
    // builds that agree on it.
    const FINGERPRINT: u64 =
        fingerprint(std::any::type_name::<T>(), std::mem::size_of::<T>());

    type View<'a> = PodView<'a, T>;
    type ViewMut<'a> = PodViewMut<'a, T>;

    fn view(bytes: &[u8]) -> PodView<'_, T> {
        PodView::new(bytes)
    }

    fn view_mut(bytes: &mut [u8]) -> PodViewMut<'_, T> {
        PodViewMut::new(bytes)
    }
}

impl<T: NativePod + Default> RecordData for Pod<T> {
    type Data = T;

    fn assign(view: &mut PodViewMut<'_, T>, data: &T) {
        view.set(*data);
    }
}
