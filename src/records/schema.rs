//! # Schema Traits and Fingerprint
//!
//! The contract between the external schema generator and this crate.
//! For every annotated schema the generator emits a marker type with
//! offset constants, a pair of view types, and impls of the traits
//! below; the crate consumes only those artifacts.
//!
//! ## Fingerprint
//!
//! The fingerprint identifies a schema's wire shape: FNV-1a over the
//! schema's canonical textual signature, mixed with the stride. The
//! constants are fixed so independent implementations produce identical
//! fingerprints and their files and streams stay interoperable.
//!
//! The canonical signature is namespace-free text: the schema name, then
//! one line per field in declaration order (`scalar:<type>:<name>`,
//! `record:<Type>:<name>`, or `variant:<name>` / `union:<name>` followed
//! by one `alt:<type>:<name>:<0|1>` line per alternative, `1` marking a
//! record alternative).

use crate::encoding::wire::Wire;

const FNV_OFFSET_BASIS: u64 = 0xCBF2_9CE4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;

/// A record schema, as compiled by the generator.
///
/// Implementors are zero-sized marker types; the associated constants
/// and view constructors are the schema's entire runtime surface.
pub trait Record {
    /// Fixed byte size of one record on the wire.
    const STRIDE: usize;

    /// 64-bit hash of the schema's canonical signature and stride.
    const FINGERPRINT: u64;

    /// Read-only view over one record's bytes.
    type View<'a>;

    /// Mutable view over one record's bytes.
    type ViewMut<'a>;

    /// Projects a read-only view onto `bytes` (at least `STRIDE` long).
    fn view(bytes: &[u8]) -> Self::View<'_>;

    /// Projects a mutable view onto `bytes` (at least `STRIDE` long).
    fn view_mut(bytes: &mut [u8]) -> Self::ViewMut<'_>;
}

/// Optional plain-data twin of a schema, used to seed records.
///
/// `Data::default()` carries the schema's declared field defaults;
/// [`assign`](RecordData::assign) writes every field of `data` through
/// the view. A sum field's data enum holds one alternative choice and
/// defaults to the first alternative's zero value, so default-assignment
/// over a freshly zeroed record is byte-neutral.
pub trait RecordData: Record {
    type Data: Default;

    fn assign(view: &mut Self::ViewMut<'_>, data: &Self::Data);
}

/// Computes a schema fingerprint from its canonical signature and stride.
///
/// FNV-1a with the standard 64-bit offset basis and prime, followed by
/// `h ^= stride; h *= prime`. Two schemas with identical canonical text
/// and stride fingerprint identically on every implementation.
pub const fn fingerprint(signature: &str, stride: usize) -> u64 {
    let bytes = signature.as_bytes();
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash ^= stride as u64;
    hash.wrapping_mul(FNV_PRIME)
}

/// Payload size of a sum field: the largest alternative wire size.
pub const fn max_wire_size(sizes: &[usize]) -> usize {
    let mut result = 0;
    let mut i = 0;
    while i < sizes.len() {
        if sizes[i] > result {
            result = sizes[i];
        }
        i += 1;
    }
    result
}

/// Wire size of a scalar field type, usable in offset constants.
pub const fn wire_size_of<T: Wire>() -> usize {
    T::WIRE_SIZE
}
