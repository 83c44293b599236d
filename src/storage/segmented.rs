//! Segmented page storage: stable pages, record-granular chunks.

use super::ByteStorage;

/// Page-organized byte storage.
///
/// Bytes live in fixed-size, individually boxed pages. Pages are never
/// moved or reallocated while they exist, and `clear` keeps them around
/// for reuse; the zeroing guarantees of the [`ByteStorage`] contract are
/// upheld by re-zeroing any recycled range on growth.
pub struct SegmentedBytes {
    pages: Vec<Box<[u8]>>,
    len: usize,
    page_bytes: usize,
}

impl SegmentedBytes {
    fn page_count_for(&self, len: usize) -> usize {
        len.div_ceil(self.page_bytes)
    }

    /// Ensures pages exist for `new_len` bytes and zeroes `[from, new_len)`.
    fn extend_zeroed_to(&mut self, from: usize, new_len: usize) {
        let needed = self.page_count_for(new_len);
        while self.pages.len() < needed {
            self.pages.push(vec![0u8; self.page_bytes].into_boxed_slice());
        }

        let mut offset = from;
        while offset < new_len {
            let page = offset / self.page_bytes;
            let within = offset % self.page_bytes;
            let end = (new_len - page * self.page_bytes).min(self.page_bytes);
            self.pages[page][within..end].fill(0);
            offset = page * self.page_bytes + end;
        }
        self.len = new_len;
    }
}

impl ByteStorage for SegmentedBytes {
    fn with_page_bytes(page_bytes: usize) -> Self {
        assert!(page_bytes > 0, "page size must be greater than zero");
        Self {
            pages: Vec::new(),
            len: 0,
            page_bytes,
        }
    }

    fn byte_len(&self) -> usize {
        self.len
    }

    fn grow_zeroed(&mut self, additional: usize) {
        self.extend_zeroed_to(self.len, self.len + additional);
    }

    fn resize_zeroed(&mut self, new_len: usize) {
        self.extend_zeroed_to(0, new_len);
        self.len = new_len;
    }

    fn clear(&mut self) {
        self.len = 0;
    }

    fn chunk(&self, offset: usize) -> &[u8] {
        debug_assert!(offset <= self.len);
        let page = offset / self.page_bytes;
        let within = offset % self.page_bytes;
        let end = (self.len - page * self.page_bytes).min(self.page_bytes);
        &self.pages[page][within..end]
    }

    fn chunk_mut(&mut self, offset: usize) -> &mut [u8] {
        debug_assert!(offset <= self.len);
        let page = offset / self.page_bytes;
        let within = offset % self.page_bytes;
        let end = (self.len - page * self.page_bytes).min(self.page_bytes);
        &mut self.pages[page][within..end]
    }
}
