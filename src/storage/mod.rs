//! # Byte Storage Policies
//!
//! A buffer's records live in `len * stride` contiguous *logical* bytes;
//! the physical arrangement is a policy. Two policies are provided:
//!
//! - [`SegmentedBytes`] (default): fixed-size, individually heap-allocated
//!   pages. Pages never move once allocated, so views into existing
//!   records survive appends that only touch a new page.
//! - [`ContiguousBytes`]: one flat `Vec<u8>`. A single memcpy for bulk
//!   moves, but any growth may reallocate and thus invalidates views.
//!
//! The policy interface is chunk-oriented: `chunk(offset)` returns the
//! longest contiguous run starting at a logical offset, and all bulk
//! operations (copy-in, copy-out, fill-from-reader) walk chunks. A page
//! always holds a whole number of records, so a single record never
//! straddles a chunk boundary.

mod contiguous;
mod segmented;

pub use contiguous::ContiguousBytes;
pub use segmented::SegmentedBytes;

/// Page-policy abstraction under a record buffer.
///
/// All offsets and lengths are in bytes. `grow_zeroed` and
/// `resize_zeroed` guarantee the newly exposed range reads as zero even
/// when the policy recycles previously used memory.
pub trait ByteStorage {
    /// Creates empty storage. `page_bytes` is the physical page size;
    /// policies without pages ignore it.
    fn with_page_bytes(page_bytes: usize) -> Self;

    /// Current logical length in bytes.
    fn byte_len(&self) -> usize;

    /// Extends the logical length by `additional` zeroed bytes.
    fn grow_zeroed(&mut self, additional: usize);

    /// Sets the logical length to `new_len`, zeroing the whole range.
    fn resize_zeroed(&mut self, new_len: usize);

    /// Truncates to zero length. Backing memory may be retained.
    fn clear(&mut self);

    /// Longest contiguous run starting at `offset` (non-empty while
    /// `offset < byte_len()`).
    fn chunk(&self, offset: usize) -> &[u8];

    /// Mutable counterpart of [`chunk`](Self::chunk).
    fn chunk_mut(&mut self, offset: usize) -> &mut [u8];
}
