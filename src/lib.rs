//! # noserde - Schema-Driven Record Buffers
//!
//! noserde stores homogeneous records of a user-defined schema as a
//! single contiguous little-endian byte image and exposes typed views
//! (read-only and mutable) into those bytes. No field-parsed object is
//! ever materialized: the byte image *is* the data, and the same image
//! serves three roles at once:
//!
//! - an in-memory container with random access by record index
//! - the payload of a length-framed binary file format
//! - the payload handed to a generic size-prefixed stream codec
//!
//! ## Quick Start
//!
//! ```ignore
//! use noserde::Buffer;
//!
//! // `Sample` is a schema marker emitted by the schema generator.
//! let mut buffer: Buffer<Sample> = Buffer::new();
//! let mut record = buffer.emplace_back();
//! record.id().set(42);
//! record.extra().set_count(7);
//!
//! noserde::binary::write_records("samples.bin", &buffer)?;
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │  Generated schema code (external)         │
//! │  offsets · views · Data twins             │
//! ├───────────────────────────────────────────┤
//! │  records   Record traits · views · PODs   │
//! ├───────────────────────────────────────────┤
//! │  buffer    record container               │
//! ├─────────────────────┬─────────────────────┤
//! │  binary  file codec │  stream  codec hooks│
//! ├─────────────────────┴─────────────────────┤
//! │  storage   segmented / contiguous pages   │
//! ├───────────────────────────────────────────┤
//! │  encoding  little-endian wire primitives  │
//! └───────────────────────────────────────────┘
//! ```
//!
//! The schema *generator* is an external collaborator: it compiles
//! annotated record declarations into marker types, offset constants and
//! view types that implement [`records::Record`]. This crate only
//! consumes those artifacts; the modules under [`records`] define the
//! contract and the building blocks the generated code is made of.
//!
//! ## Module Overview
//!
//! - [`records`]: schema traits, fingerprints, field views, native PODs
//! - [`buffer`]: the record container over a page policy
//! - [`storage`]: segmented and contiguous byte storage
//! - [`binary`]: the 40-byte-headered binary file codec
//! - [`stream`]: hooks for an external size-prefixed stream codec
//! - [`encoding`]: little-endian scalar codec and the stream size prefix
//! - [`error`]: the closed error taxonomy

pub mod binary;
pub mod buffer;
pub mod encoding;
pub mod error;
pub mod records;
pub mod storage;
pub mod stream;

pub use buffer::Buffer;
pub use encoding::wire::Wire;
pub use error::IoError;
#[cfg(target_endian = "little")]
pub use records::{NativePod, Pod};
pub use records::{Record, RecordData, ScalarView, ScalarViewMut};
pub use storage::{ByteStorage, ContiguousBytes, SegmentedBytes};
