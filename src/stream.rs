//! # Stream-Codec Hooks
//!
//! Entry points for handing a buffer to a generic size-prefixed stream
//! codec. The codec drives an `std::io::Write` / `std::io::Read` pair;
//! these hooks produce and consume the buffer's fixed wire shape inside
//! that stream:
//!
//! ```text
//! +------------------+------------------+-------------+------------------+
//! | fingerprint (8B) | stride (8B)      | size prefix | raw record bytes |
//! | little-endian    | little-endian    | 1/2/4 bytes | size bytes       |
//! +------------------+------------------+-------------+------------------+
//! ```
//!
//! The size prefix is the variable-length encoding of
//! [`crate::encoding::size_prefix`], which caps the payload at
//! [`MAX_PAYLOAD_BYTES`]; encoding a larger buffer is rejected before
//! anything is written.
//!
//! Decoding validates fingerprint and stride against the target buffer's
//! constants, then the payload length (stride multiple, within the cap)
//! before resizing the target and reading the payload page by page. Any
//! decode failure leaves the target buffer cleared, never partially
//! filled.

use std::io::{Read, Write};

use crate::buffer::Buffer;
use crate::encoding::size_prefix::{read_size_prefix, write_size_prefix, MAX_SIZE_PREFIX};
use crate::encoding::wire::Wire;
use crate::error::IoError;
use crate::records::schema::Record;
use crate::storage::ByteStorage;

/// Largest payload the stream wire format can carry.
pub const MAX_PAYLOAD_BYTES: usize = MAX_SIZE_PREFIX;

/// Serializes `buffer` into `writer` in the stream wire shape.
pub fn encode_records<W, T, S, const RECORDS_PER_PAGE: usize>(
    writer: &mut W,
    buffer: &Buffer<T, S, RECORDS_PER_PAGE>,
) -> Result<(), IoError>
where
    W: Write,
    T: Record,
    S: ByteStorage,
{
    let payload_size = buffer.byte_size();
    if payload_size > MAX_PAYLOAD_BYTES {
        return Err(IoError::PayloadSizeMismatch);
    }

    writer
        .write_all(&T::FINGERPRINT.to_le_bytes())
        .map_err(|_| IoError::WriteFailed)?;
    writer
        .write_all(&(T::STRIDE as u64).to_le_bytes())
        .map_err(|_| IoError::WriteFailed)?;
    write_size_prefix(writer, payload_size)?;

    for chunk in buffer.chunks() {
        writer.write_all(chunk).map_err(|_| IoError::WriteFailed)?;
    }

    Ok(())
}

/// Deserializes the stream wire shape from `reader` into `buffer`,
/// replacing its contents.
///
/// On any failure the buffer is left cleared, never partially filled.
pub fn decode_records<R, T, S, const RECORDS_PER_PAGE: usize>(
    reader: &mut R,
    buffer: &mut Buffer<T, S, RECORDS_PER_PAGE>,
) -> Result<(), IoError>
where
    R: Read,
    T: Record,
    S: ByteStorage,
{
    let result = decode_records_impl(reader, buffer);
    if result.is_err() {
        buffer.clear();
    }
    result
}

fn decode_records_impl<R, T, S, const RECORDS_PER_PAGE: usize>(
    reader: &mut R,
    buffer: &mut Buffer<T, S, RECORDS_PER_PAGE>,
) -> Result<(), IoError>
where
    R: Read,
    T: Record,
    S: ByteStorage,
{
    let mut prelude = [0u8; 16];
    reader
        .read_exact(&mut prelude)
        .map_err(|_| IoError::ReadFailed)?;

    let fingerprint = u64::load(&prelude[..8]);
    let stride = u64::load(&prelude[8..]);
    if fingerprint != T::FINGERPRINT || stride != T::STRIDE as u64 {
        return Err(IoError::SchemaMismatch);
    }

    let payload_size = read_size_prefix(reader)?;
    if payload_size > MAX_PAYLOAD_BYTES || !payload_size.is_multiple_of(T::STRIDE) {
        return Err(IoError::PayloadSizeMismatch);
    }

    buffer.read_payload_from(reader, payload_size)
}
