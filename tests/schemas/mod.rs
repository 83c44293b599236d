//! Generated-style schemas shared by the integration tests.
//!
//! Written in the exact shape the external schema generator emits; the
//! integration tests exercise the crate purely through its public API.

#![allow(dead_code)]

use noserde::records::schema::{fingerprint, max_wire_size, wire_size_of};
use noserde::records::view::{begin_alternative, ScalarView, ScalarViewMut, SUM_TAG_SIZE};
use noserde::records::{NativePod, Record, RecordData};
use noserde::Wire;

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

// ---------------------------------------------------------------------------
// State (enum, u8 underlying)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum State {
    #[default]
    Idle,
    Active,
    Fault,
    Unknown(u8),
}

impl Wire for State {
    const WIRE_SIZE: usize = 1;

    fn load(bytes: &[u8]) -> Self {
        match u8::load(bytes) {
            0 => State::Idle,
            1 => State::Active,
            2 => State::Fault,
            other => State::Unknown(other),
        }
    }

    fn store(self, bytes: &mut [u8]) {
        let raw: u8 = match self {
            State::Idle => 0,
            State::Active => 1,
            State::Fault => 2,
            State::Unknown(v) => v,
        };
        raw.store(bytes);
    }
}

// ---------------------------------------------------------------------------
// Coords { lat: f64, lon: f64 }
// ---------------------------------------------------------------------------

pub struct Coords;

impl Coords {
    pub const LAT_OFFSET: usize = 0;
    pub const LON_OFFSET: usize = Self::LAT_OFFSET + wire_size_of::<f64>();
    pub const SIZE_BYTES: usize = Self::LON_OFFSET + wire_size_of::<f64>();
    const SIGNATURE: &'static str = "Coords\nscalar:f64:lat\nscalar:f64:lon";
}

pub struct CoordsView<'a> {
    bytes: &'a [u8],
}

pub struct CoordsViewMut<'a> {
    bytes: &'a mut [u8],
}

impl<'a> CoordsView<'a> {
    pub fn lat(&self) -> ScalarView<'a, f64> {
        ScalarView::new(&self.bytes[Coords::LAT_OFFSET..Coords::LON_OFFSET])
    }

    pub fn lon(&self) -> ScalarView<'a, f64> {
        ScalarView::new(&self.bytes[Coords::LON_OFFSET..Coords::SIZE_BYTES])
    }
}

impl CoordsViewMut<'_> {
    pub fn lat(&mut self) -> ScalarViewMut<'_, f64> {
        ScalarViewMut::new(&mut self.bytes[Coords::LAT_OFFSET..Coords::LON_OFFSET])
    }

    pub fn lon(&mut self) -> ScalarViewMut<'_, f64> {
        ScalarViewMut::new(&mut self.bytes[Coords::LON_OFFSET..Coords::SIZE_BYTES])
    }
}

impl Record for Coords {
    const STRIDE: usize = Self::SIZE_BYTES;
    const FINGERPRINT: u64 = fingerprint(Self::SIGNATURE, Self::SIZE_BYTES);
    type View<'a> = CoordsView<'a>;
    type ViewMut<'a> = CoordsViewMut<'a>;

    fn view(bytes: &[u8]) -> CoordsView<'_> {
        CoordsView { bytes }
    }

    fn view_mut(bytes: &mut [u8]) -> CoordsViewMut<'_> {
        CoordsViewMut { bytes }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CoordsData {
    pub lat: f64,
    pub lon: f64,
}

impl RecordData for Coords {
    type Data = CoordsData;

    fn assign(view: &mut CoordsViewMut<'_>, data: &CoordsData) {
        view.lat().set(data.lat);
        view.lon().set(data.lon);
    }
}

// ---------------------------------------------------------------------------
// Sample { id, temp, state, extra: variant { count: i64, coords: Coords } }
// ---------------------------------------------------------------------------

pub struct Sample;

impl Sample {
    pub const ID_OFFSET: usize = 0;
    pub const TEMP_OFFSET: usize = Self::ID_OFFSET + wire_size_of::<u32>();
    pub const STATE_OFFSET: usize = Self::TEMP_OFFSET + wire_size_of::<f32>();
    pub const EXTRA_TAG_OFFSET: usize = Self::STATE_OFFSET + wire_size_of::<State>();
    pub const EXTRA_PAYLOAD_OFFSET: usize = Self::EXTRA_TAG_OFFSET + SUM_TAG_SIZE;
    pub const EXTRA_PAYLOAD_SIZE: usize = max_wire_size(&[wire_size_of::<i64>(), Coords::STRIDE]);
    pub const SIZE_BYTES: usize = Self::EXTRA_PAYLOAD_OFFSET + Self::EXTRA_PAYLOAD_SIZE;
    const SIGNATURE: &'static str = "Sample\nscalar:u32:id\nscalar:f32:temp\n\
         scalar:State:state\nvariant:extra\nalt:i64:count:0\nalt:Coords:coords:1";
}

pub struct ExtraView<'a> {
    bytes: &'a [u8],
}

pub struct ExtraViewMut<'a> {
    bytes: &'a mut [u8],
}

pub enum ExtraAlt<'a> {
    Count(ScalarView<'a, i64>),
    Coords(CoordsView<'a>),
}

impl<'a> ExtraView<'a> {
    pub fn index(&self) -> u32 {
        u32::load(self.bytes)
    }

    pub fn holds_count(&self) -> bool {
        self.index() == 0
    }

    pub fn holds_coords(&self) -> bool {
        self.index() == 1
    }

    pub fn as_count(&self) -> Option<ScalarView<'a, i64>> {
        if self.holds_count() {
            Some(ScalarView::new(&self.bytes[SUM_TAG_SIZE..]))
        } else {
            None
        }
    }

    pub fn as_coords(&self) -> Option<CoordsView<'a>> {
        if self.holds_coords() {
            Some(Coords::view(
                &self.bytes[SUM_TAG_SIZE..SUM_TAG_SIZE + Coords::STRIDE],
            ))
        } else {
            None
        }
    }

    pub fn alternative(&self) -> Option<ExtraAlt<'a>> {
        match self.index() {
            0 => self.as_count().map(ExtraAlt::Count),
            1 => self.as_coords().map(ExtraAlt::Coords),
            _ => None,
        }
    }
}

impl ExtraViewMut<'_> {
    pub fn index(&self) -> u32 {
        u32::load(self.bytes)
    }

    pub fn holds_count(&self) -> bool {
        self.index() == 0
    }

    pub fn holds_coords(&self) -> bool {
        self.index() == 1
    }

    pub fn as_count(&mut self) -> Option<ScalarViewMut<'_, i64>> {
        if self.holds_count() {
            Some(ScalarViewMut::new(&mut self.bytes[SUM_TAG_SIZE..]))
        } else {
            None
        }
    }

    pub fn as_coords(&mut self) -> Option<CoordsViewMut<'_>> {
        if self.holds_coords() {
            Some(Coords::view_mut(
                &mut self.bytes[SUM_TAG_SIZE..SUM_TAG_SIZE + Coords::STRIDE],
            ))
        } else {
            None
        }
    }

    pub fn set_count(&mut self, value: i64) {
        let payload = begin_alternative(self.bytes, 0);
        value.store(payload);
    }

    pub fn set_coords(&mut self) -> CoordsViewMut<'_> {
        let payload = begin_alternative(self.bytes, 1);
        Coords::view_mut(&mut payload[..Coords::STRIDE])
    }
}

pub struct SampleView<'a> {
    bytes: &'a [u8],
}

pub struct SampleViewMut<'a> {
    bytes: &'a mut [u8],
}

impl<'a> SampleView<'a> {
    pub fn id(&self) -> ScalarView<'a, u32> {
        ScalarView::new(&self.bytes[Sample::ID_OFFSET..Sample::TEMP_OFFSET])
    }

    pub fn temp(&self) -> ScalarView<'a, f32> {
        ScalarView::new(&self.bytes[Sample::TEMP_OFFSET..Sample::STATE_OFFSET])
    }

    pub fn state(&self) -> ScalarView<'a, State> {
        ScalarView::new(&self.bytes[Sample::STATE_OFFSET..Sample::EXTRA_TAG_OFFSET])
    }

    pub fn extra(&self) -> ExtraView<'a> {
        ExtraView {
            bytes: &self.bytes[Sample::EXTRA_TAG_OFFSET..Sample::SIZE_BYTES],
        }
    }
}

impl SampleViewMut<'_> {
    pub fn as_view(&self) -> SampleView<'_> {
        SampleView { bytes: self.bytes }
    }

    pub fn id(&mut self) -> ScalarViewMut<'_, u32> {
        ScalarViewMut::new(&mut self.bytes[Sample::ID_OFFSET..Sample::TEMP_OFFSET])
    }

    pub fn temp(&mut self) -> ScalarViewMut<'_, f32> {
        ScalarViewMut::new(&mut self.bytes[Sample::TEMP_OFFSET..Sample::STATE_OFFSET])
    }

    pub fn state(&mut self) -> ScalarViewMut<'_, State> {
        ScalarViewMut::new(&mut self.bytes[Sample::STATE_OFFSET..Sample::EXTRA_TAG_OFFSET])
    }

    pub fn extra(&mut self) -> ExtraViewMut<'_> {
        ExtraViewMut {
            bytes: &mut self.bytes[Sample::EXTRA_TAG_OFFSET..Sample::SIZE_BYTES],
        }
    }
}

impl Record for Sample {
    const STRIDE: usize = Self::SIZE_BYTES;
    const FINGERPRINT: u64 = fingerprint(Self::SIGNATURE, Self::SIZE_BYTES);
    type View<'a> = SampleView<'a>;
    type ViewMut<'a> = SampleViewMut<'a>;

    fn view(bytes: &[u8]) -> SampleView<'_> {
        SampleView { bytes }
    }

    fn view_mut(bytes: &mut [u8]) -> SampleViewMut<'_> {
        SampleViewMut { bytes }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExtraData {
    Count(i64),
    Coords(CoordsData),
}

impl Default for ExtraData {
    fn default() -> Self {
        ExtraData::Count(0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SampleData {
    pub id: u32,
    pub temp: f32,
    pub state: State,
    pub extra: ExtraData,
}

impl RecordData for Sample {
    type Data = SampleData;

    fn assign(view: &mut SampleViewMut<'_>, data: &SampleData) {
        view.id().set(data.id);
        view.temp().set(data.temp);
        view.state().set(data.state);
        match &data.extra {
            ExtraData::Count(v) => view.extra().set_count(*v),
            ExtraData::Coords(c) => {
                let mut extra = view.extra();
                let mut coords = extra.set_coords();
                Coords::assign(&mut coords, c);
            }
        }
    }
}

/// Seeds a buffer-agnostic fixture set used by both codec tests.
pub fn sample_fixtures() -> Vec<SampleData> {
    vec![
        SampleData {
            id: 1,
            temp: 20.5,
            state: State::Active,
            extra: ExtraData::Count(12345),
        },
        SampleData {
            id: 2,
            temp: -3.25,
            state: State::Fault,
            extra: ExtraData::Coords(CoordsData {
                lat: 48.8566,
                lon: 2.3522,
            }),
        },
        SampleData {
            id: 3,
            temp: 0.0,
            state: State::Idle,
            extra: ExtraData::Count(-1),
        },
    ]
}

// ---------------------------------------------------------------------------
// Tick { seq: u64 } - used for schema-mismatch checks
// ---------------------------------------------------------------------------

pub struct Tick;

impl Tick {
    pub const SEQ_OFFSET: usize = 0;
    pub const SIZE_BYTES: usize = Self::SEQ_OFFSET + wire_size_of::<u64>();
    const SIGNATURE: &'static str = "Tick\nscalar:u64:seq";
}

pub struct TickView<'a> {
    bytes: &'a [u8],
}

pub struct TickViewMut<'a> {
    bytes: &'a mut [u8],
}

impl<'a> TickView<'a> {
    pub fn seq(&self) -> ScalarView<'a, u64> {
        ScalarView::new(&self.bytes[Tick::SEQ_OFFSET..Tick::SIZE_BYTES])
    }
}

impl TickViewMut<'_> {
    pub fn seq(&mut self) -> ScalarViewMut<'_, u64> {
        ScalarViewMut::new(&mut self.bytes[Tick::SEQ_OFFSET..Tick::SIZE_BYTES])
    }
}

impl Record for Tick {
    const STRIDE: usize = Self::SIZE_BYTES;
    const FINGERPRINT: u64 = fingerprint(Self::SIGNATURE, Self::SIZE_BYTES);
    type View<'a> = TickView<'a>;
    type ViewMut<'a> = TickViewMut<'a>;

    fn view(bytes: &[u8]) -> TickView<'_> {
        TickView { bytes }
    }

    fn view_mut(bytes: &mut [u8]) -> TickViewMut<'_> {
        TickViewMut { bytes }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickData {
    pub seq: u64,
}

impl RecordData for Tick {
    type Data = TickData;

    fn assign(view: &mut TickViewMut<'_>, data: &TickData) {
        view.seq().set(data.seq);
    }
}

// ---------------------------------------------------------------------------
// Point3 - native POD element type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl NativePod for Point3 {}
