//! Fuzz testing for the stream decode hook.
//!
//! Feeds arbitrary byte sequences to `decode_records` to ensure
//! malformed streams are rejected gracefully: no panics, and any failed
//! decode leaves the target buffer empty.

#![no_main]

use libfuzzer_sys::fuzz_target;

use noserde::records::schema::{fingerprint, wire_size_of, Record};
use noserde::records::view::{ScalarView, ScalarViewMut};
use noserde::stream::decode_records;
use noserde::Buffer;

struct Probe;

impl Probe {
    const A_OFFSET: usize = 0;
    const B_OFFSET: usize = Self::A_OFFSET + wire_size_of::<u32>();
    const SIZE_BYTES: usize = Self::B_OFFSET + wire_size_of::<u16>();
    const SIGNATURE: &'static str = "Probe\nscalar:u32:a\nscalar:u16:b";
}

struct ProbeView<'a> {
    bytes: &'a [u8],
}

struct ProbeViewMut<'a> {
    bytes: &'a mut [u8],
}

impl<'a> ProbeView<'a> {
    fn a(&self) -> ScalarView<'a, u32> {
        ScalarView::new(&self.bytes[Probe::A_OFFSET..Probe::B_OFFSET])
    }
}

impl ProbeViewMut<'_> {
    fn a(&mut self) -> ScalarViewMut<'_, u32> {
        ScalarViewMut::new(&mut self.bytes[Probe::A_OFFSET..Probe::B_OFFSET])
    }
}

impl Record for Probe {
    const STRIDE: usize = Self::SIZE_BYTES;
    const FINGERPRINT: u64 = fingerprint(Self::SIGNATURE, Self::SIZE_BYTES);
    type View<'a> = ProbeView<'a>;
    type ViewMut<'a> = ProbeViewMut<'a>;

    fn view(bytes: &[u8]) -> ProbeView<'_> {
        ProbeView { bytes }
    }

    fn view_mut(bytes: &mut [u8]) -> ProbeViewMut<'_> {
        ProbeViewMut { bytes }
    }
}

fuzz_target!(|data: &[u8]| {
    let mut buffer = Buffer::<Probe>::new();
    let mut pre = buffer.push_zeroed();
    pre.a().set(0xDEAD_BEEF);

    let mut cursor = data;
    match decode_records(&mut cursor, &mut buffer) {
        Ok(()) => {
            // A successful decode produced a whole number of records.
            assert!(buffer.byte_size() % Probe::STRIDE == 0);
            for i in 0..buffer.len() {
                let _ = buffer.get(i).a().get();
            }
        }
        Err(_) => assert!(buffer.is_empty()),
    }
});
