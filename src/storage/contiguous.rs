//! Flat vector storage: one contiguous allocation.

use super::ByteStorage;

/// Single flat allocation holding all record bytes.
///
/// Bulk operations become a single copy, at the cost of view stability:
/// any growth may reallocate the vector, so views must not be held
/// across appends.
#[derive(Default)]
pub struct ContiguousBytes {
    bytes: Vec<u8>,
}

impl ByteStorage for ContiguousBytes {
    fn with_page_bytes(_page_bytes: usize) -> Self {
        Self { bytes: Vec::new() }
    }

    fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    fn grow_zeroed(&mut self, additional: usize) {
        self.bytes.resize(self.bytes.len() + additional, 0);
    }

    fn resize_zeroed(&mut self, new_len: usize) {
        self.bytes.clear();
        self.bytes.resize(new_len, 0);
    }

    fn clear(&mut self) {
        self.bytes.clear();
    }

    fn chunk(&self, offset: usize) -> &[u8] {
        &self.bytes[offset..]
    }

    fn chunk_mut(&mut self, offset: usize) -> &mut [u8] {
        &mut self.bytes[offset..]
    }
}
