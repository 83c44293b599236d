//! Fuzz testing for the size-prefix codec.
//!
//! Decodes arbitrary bytes and re-encodes any successful decode to
//! check the codec is a lossless, canonical round-trip.

#![no_main]

use libfuzzer_sys::fuzz_target;

use noserde::encoding::size_prefix::{
    decode_size_prefix, encode_size_prefix, size_prefix_len, MAX_SIZE_PREFIX, MAX_SIZE_PREFIX_LEN,
};

fuzz_target!(|data: &[u8]| {
    if let Ok((value, consumed)) = decode_size_prefix(data) {
        assert!(value <= MAX_SIZE_PREFIX);
        assert!(consumed <= data.len());

        // Values decoded from a canonical-width encoding re-encode to
        // the same bytes.
        if consumed == size_prefix_len(value) {
            let mut buf = [0u8; MAX_SIZE_PREFIX_LEN];
            let written = encode_size_prefix(value, &mut buf);
            assert_eq!(written, consumed);
            assert_eq!(&buf[..written], &data[..consumed]);
        }
    }
});
