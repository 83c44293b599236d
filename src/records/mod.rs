//! # Record Schemas and Typed Views
//!
//! A record schema is a fixed-layout aggregate compiled (by the external
//! schema generator) into a set of per-schema constants and view types.
//! This module is the runtime those generated artifacts plug into; the
//! crate never parses schema declarations itself.
//!
//! ## Record Binary Layout
//!
//! Fields occupy the record's bytes in declaration order with no implicit
//! padding; each field's offset is the running sum of the preceding wire
//! sizes, and the total is the record *stride*. Views load and store
//! little-endian bytes at those offsets, so nothing requires alignment.
//!
//! ```text
//! +---------+---------+------------------------------+---------+
//! | field 0 | field 1 | tag (u32) | sum payload      | field 3 |
//! +---------+---------+------------------------------+---------+
//! 0         o1        o2          o2+4               o2+4+max(alts)
//! ```
//!
//! ## Field Categories
//!
//! | Category | Wire form | View |
//! |----------|-----------|------|
//! | scalar / enum | little-endian bytes, enum at underlying width | `ScalarView` / `ScalarViewMut` |
//! | nested record | the nested schema's bytes inline | the nested schema's views |
//! | tagged sum | u32 discriminant + max-sized payload | generated sum view |
//! | untagged sum | max-sized payload only | generated sum view |
//! | native POD | raw byte image (little-endian hosts) | `PodView` / `&T` |
//!
//! ## Module Structure
//!
//! - `schema`: the `Record`/`RecordData` generator contract and the
//!   schema fingerprint
//! - `view`: scalar views and the shared sum-field plumbing
//! - `pod`: gated native POD pass-through

pub mod pod;
pub mod schema;
pub mod view;


#[cfg(target_endian = "little")]
pub use pod::{load_pod, pod_mut, pod_ref, store_pod, NativePod, Pod, PodView, PodViewMut};
pub use schema::{fingerprint, max_wire_size, Record, RecordData};
pub use view::{begin_alternative, reset_payload, ScalarView, ScalarViewMut, SUM_TAG_SIZE};
