//! # Framed Binary File Codec
//!
//! Self-describing single-buffer file format: a fixed 40-byte header
//! followed by the raw record bytes.
//!
//! ## File Layout
//!
//! | Offset | Size | Meaning |
//! |-------:|-----:|---------|
//! | 0  | 8 | ASCII magic `NSRDBIN1` |
//! | 8  | 8 | little-endian schema fingerprint |
//! | 16 | 8 | little-endian record stride |
//! | 24 | 8 | little-endian record count |
//! | 32 | 8 | little-endian payload size in bytes |
//! | 40 | payload size | raw record bytes |
//!
//! ## Validation Order
//!
//! `read_records` validates in a fixed order so callers can tell failure
//! modes apart: open (`open_failed`), full header read (`read_failed`),
//! magic (`invalid_header`), fingerprint and stride against the target
//! buffer (`schema_mismatch`), payload size consistent with
//! `stride * record_count` (`invalid_header`), full payload read
//! (`truncated_payload`), payload a stride multiple
//! (`payload_size_mismatch`). Any failure leaves the target buffer
//! cleared. File handles are scoped to the call.
//!
//! ## Endianness
//!
//! All header fields are little-endian; the zerocopy
//! `U64<LittleEndian>` type handles conversion automatically, and the
//! header struct is safe to read from and write as raw bytes.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use zerocopy::little_endian::U64;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::buffer::Buffer;
use crate::error::IoError;
use crate::records::schema::Record;
use crate::storage::ByteStorage;

pub const BINARY_MAGIC: &[u8; 8] = b"NSRDBIN1";
pub const BINARY_HEADER_SIZE: usize = 40;

/// 40-byte header at the start of every record file.
#[repr(C)]
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
pub struct BinaryHeader {
    magic: [u8; 8],
    fingerprint: U64,
    stride: U64,
    record_count: U64,
    payload_size: U64,
}

const _: () = assert!(std::mem::size_of::<BinaryHeader>() == BINARY_HEADER_SIZE);

impl BinaryHeader {
    pub fn new(fingerprint: u64, stride: u64, record_count: u64, payload_size: u64) -> Self {
        Self {
            magic: *BINARY_MAGIC,
            fingerprint: U64::new(fingerprint),
            stride: U64::new(stride),
            record_count: U64::new(record_count),
            payload_size: U64::new(payload_size),
        }
    }

    /// Parses a header, checking only the magic; the schema checks
    /// against a concrete buffer happen in [`read_records`].
    pub fn from_bytes(bytes: &[u8]) -> Result<&Self, IoError> {
        if bytes.len() < BINARY_HEADER_SIZE {
            return Err(IoError::ReadFailed);
        }

        let header = Self::ref_from_bytes(&bytes[..BINARY_HEADER_SIZE])
            .map_err(|_| IoError::InvalidHeader)?;

        if &header.magic != BINARY_MAGIC {
            return Err(IoError::InvalidHeader);
        }

        Ok(header)
    }

    pub fn fingerprint(&self) -> u64 {
        self.fingerprint.get()
    }

    pub fn stride(&self) -> u64 {
        self.stride.get()
    }

    pub fn record_count(&self) -> u64 {
        self.record_count.get()
    }

    pub fn payload_size(&self) -> u64 {
        self.payload_size.get()
    }
}

/// Writes `buffer` to `path`, truncating any existing file.
pub fn write_records<T, S, const RECORDS_PER_PAGE: usize>(
    path: impl AsRef<Path>,
    buffer: &Buffer<T, S, RECORDS_PER_PAGE>,
) -> Result<(), IoError>
where
    T: Record,
    S: ByteStorage,
{
    let mut file = File::create(path).map_err(|_| IoError::OpenFailed)?;

    let header = BinaryHeader::new(
        T::FINGERPRINT,
        T::STRIDE as u64,
        buffer.len() as u64,
        buffer.byte_size() as u64,
    );
    file.write_all(header.as_bytes())
        .map_err(|_| IoError::WriteFailed)?;

    for chunk in buffer.chunks() {
        file.write_all(chunk).map_err(|_| IoError::WriteFailed)?;
    }

    Ok(())
}

/// Loads `path` into `buffer`, replacing its contents.
///
/// On any failure the buffer is left cleared, never partially filled.
pub fn read_records<T, S, const RECORDS_PER_PAGE: usize>(
    path: impl AsRef<Path>,
    buffer: &mut Buffer<T, S, RECORDS_PER_PAGE>,
) -> Result<(), IoError>
where
    T: Record,
    S: ByteStorage,
{
    let result = read_records_impl(path.as_ref(), buffer);
    if result.is_err() {
        buffer.clear();
    }
    result
}

fn read_records_impl<T, S, const RECORDS_PER_PAGE: usize>(
    path: &Path,
    buffer: &mut Buffer<T, S, RECORDS_PER_PAGE>,
) -> Result<(), IoError>
where
    T: Record,
    S: ByteStorage,
{
    let mut file = File::open(path).map_err(|_| IoError::OpenFailed)?;

    let mut raw_header = [0u8; BINARY_HEADER_SIZE];
    file.read_exact(&mut raw_header)
        .map_err(|_| IoError::ReadFailed)?;
    let header = BinaryHeader::from_bytes(&raw_header)?;

    if header.fingerprint() != T::FINGERPRINT || header.stride() != T::STRIDE as u64 {
        return Err(IoError::SchemaMismatch);
    }

    let expected_payload = header
        .stride()
        .checked_mul(header.record_count())
        .ok_or(IoError::InvalidHeader)?;
    if header.payload_size() != expected_payload {
        return Err(IoError::InvalidHeader);
    }
    let payload_size: usize = header
        .payload_size()
        .try_into()
        .map_err(|_| IoError::InvalidHeader)?;

    let mut payload = vec![0u8; payload_size];
    if payload_size > 0 {
        file.read_exact(&mut payload)
            .map_err(|_| IoError::TruncatedPayload)?;
    }

    buffer.assign_bytes(&payload)
}
