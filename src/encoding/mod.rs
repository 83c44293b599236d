//! # Wire Encoding Primitives
//!
//! Byte-level codecs shared by the record views and the stream hooks:
//!
//! - `wire`: little-endian load/store for the scalar wire types
//! - `size_prefix`: the 1/2/4-byte size prefix used by the stream codec

pub mod size_prefix;
pub mod wire;
