//! # Record Buffer
//!
//! [`Buffer`] stores a sequence of same-schema records as one logical run
//! of `len * stride` little-endian bytes and hands out typed views by
//! record index. Records are never parsed into field-by-field objects;
//! reading and writing happens through the views, directly on the bytes.
//!
//! The same byte image serves three roles: an in-memory container with
//! random access, the payload of the framed binary file codec
//! ([`crate::binary`]), and the payload of the stream-codec hooks
//! ([`crate::stream`]).
//!
//! ## Storage and View Validity
//!
//! Physical storage is a policy (`S`): segmented pages by default, a
//! flat vector opt-in. Under the segmented policy a record's page never
//! moves, so views stay valid across appends that only grow into a new
//! page; `clear`, `assign_bytes` and the decode paths invalidate all
//! views under either policy, and the flat policy additionally
//! invalidates them on any growth. The borrow checker enforces all of
//! this mechanically: views borrow the buffer.
//!
//! A buffer is single-threaded: concurrent readers of an unmodified
//! buffer are fine, any mutation needs exclusive access, and no internal
//! locking is provided.

use std::fmt;
use std::marker::PhantomData;

use crate::error::IoError;
use crate::records::schema::{Record, RecordData};
use crate::storage::{ByteStorage, SegmentedBytes};

/// Sequence of fixed-stride records stored as raw little-endian bytes.
///
/// `RECORDS_PER_PAGE` picks the page granularity of the segmented
/// policy; every page holds that many whole records, so a record never
/// straddles a page boundary.
pub struct Buffer<T, S = SegmentedBytes, const RECORDS_PER_PAGE: usize = 256> {
    storage: S,
    _schema: PhantomData<T>,
}

impl<T, S, const RECORDS_PER_PAGE: usize> Buffer<T, S, RECORDS_PER_PAGE>
where
    T: Record,
    S: ByteStorage,
{
    /// Record size in bytes.
    pub const STRIDE: usize = T::STRIDE;

    /// Schema fingerprint of the element type.
    pub const FINGERPRINT: u64 = T::FINGERPRINT;

    /// Records per page under the segmented policy.
    pub const PAGE_RECORDS: usize = RECORDS_PER_PAGE;

    /// Page size in bytes.
    pub const PAGE_BYTES: usize = RECORDS_PER_PAGE * T::STRIDE;

    const VALID_LAYOUT: () = assert!(
        T::STRIDE > 0 && RECORDS_PER_PAGE > 0,
        "record stride and records-per-page must be greater than zero"
    );

    /// Creates an empty buffer.
    pub fn new() -> Self {
        let () = Self::VALID_LAYOUT;
        Self {
            storage: S::with_page_bytes(Self::PAGE_BYTES),
            _schema: PhantomData,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.storage.byte_len() / T::STRIDE
    }

    pub fn is_empty(&self) -> bool {
        self.storage.byte_len() == 0
    }

    /// Total byte size; always `len() * STRIDE`.
    pub fn byte_size(&self) -> usize {
        self.storage.byte_len()
    }

    /// Truncates to zero records. Page memory may be retained for reuse;
    /// all outstanding views are invalidated.
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// Appends one zeroed record and returns its mutable view.
    pub fn push_zeroed(&mut self) -> T::ViewMut<'_> {
        let offset = self.storage.byte_len();
        self.storage.grow_zeroed(T::STRIDE);
        T::view_mut(&mut self.storage.chunk_mut(offset)[..T::STRIDE])
    }

    /// Read-only view of record `index`.
    ///
    /// Panics if `index` is out of range, like slice indexing.
    pub fn get(&self, index: usize) -> T::View<'_> {
        assert!(
            index < self.len(),
            "record index {index} out of range for buffer of {} records",
            self.len()
        );
        T::view(self.record_bytes(index))
    }

    /// Mutable view of record `index`.
    ///
    /// Panics if `index` is out of range, like slice indexing.
    pub fn get_mut(&mut self, index: usize) -> T::ViewMut<'_> {
        assert!(
            index < self.len(),
            "record index {index} out of range for buffer of {} records",
            self.len()
        );
        let offset = index * T::STRIDE;
        T::view_mut(&mut self.storage.chunk_mut(offset)[..T::STRIDE])
    }

    /// Iterates read-only views in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = T::View<'_>> + '_ {
        (0..self.len()).map(move |index| self.get(index))
    }

    /// Physically contiguous runs of the byte image, in order.
    pub fn chunks(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let mut offset = 0;
        std::iter::from_fn(move || {
            if offset >= self.storage.byte_len() {
                return None;
            }
            let chunk = self.storage.chunk(offset);
            offset += chunk.len();
            Some(chunk)
        })
    }

    /// Returns the byte image as one freshly allocated contiguous vector.
    pub fn bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.storage.byte_len());
        for chunk in self.chunks() {
            out.extend_from_slice(chunk);
        }
        out
    }

    /// Replaces the contents from a contiguous byte image.
    ///
    /// Fails with `PayloadSizeMismatch` (before any side effect) unless
    /// the source length is a stride multiple.
    pub fn assign_bytes(&mut self, payload: &[u8]) -> Result<(), IoError> {
        if !payload.len().is_multiple_of(T::STRIDE) {
            return Err(IoError::PayloadSizeMismatch);
        }

        self.storage.resize_zeroed(payload.len());
        let mut offset = 0;
        while offset < payload.len() {
            let chunk = self.storage.chunk_mut(offset);
            let len = chunk.len();
            chunk.copy_from_slice(&payload[offset..offset + len]);
            offset += len;
        }
        Ok(())
    }

    /// Resizes to `payload_size` bytes and fills the pages directly from
    /// `reader`, chunk by chunk. The caller validates `payload_size`
    /// against the stride beforehand; a short read fails with
    /// `TruncatedPayload` and leaves the contents unspecified (the
    /// decode paths clear the buffer on any failure).
    pub fn read_payload_from<R: std::io::Read>(
        &mut self,
        reader: &mut R,
        payload_size: usize,
    ) -> Result<(), IoError> {
        self.storage.resize_zeroed(payload_size);
        let mut offset = 0;
        while offset < payload_size {
            let chunk = self.storage.chunk_mut(offset);
            let len = chunk.len();
            reader
                .read_exact(chunk)
                .map_err(|_| IoError::TruncatedPayload)?;
            offset += len;
        }
        Ok(())
    }

    fn record_bytes(&self, index: usize) -> &[u8] {
        let offset = index * T::STRIDE;
        &self.storage.chunk(offset)[..T::STRIDE]
    }
}

impl<T, S, const RECORDS_PER_PAGE: usize> Buffer<T, S, RECORDS_PER_PAGE>
where
    T: RecordData,
    S: ByteStorage,
{
    /// Appends a record seeded with `Data::default()` and returns its
    /// mutable view. The record bytes are zeroed before the defaults are
    /// assigned, so bytes no field covers stay deterministic.
    pub fn emplace_back(&mut self) -> T::ViewMut<'_> {
        let mut view = self.push_zeroed();
        T::assign(&mut view, &Default::default());
        view
    }

    /// Appends a record seeded from `data`.
    pub fn emplace(&mut self, data: T::Data) -> T::ViewMut<'_> {
        let mut view = self.push_zeroed();
        T::assign(&mut view, &data);
        view
    }
}

impl<T, S, const RECORDS_PER_PAGE: usize> Default for Buffer<T, S, RECORDS_PER_PAGE>
where
    T: Record,
    S: ByteStorage,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S, const RECORDS_PER_PAGE: usize> fmt::Debug for Buffer<T, S, RECORDS_PER_PAGE>
where
    T: Record,
    S: ByteStorage,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("len", &self.len())
            .field("stride", &T::STRIDE)
            .field("fingerprint", &T::FINGERPRINT)
            .finish()
    }
}
