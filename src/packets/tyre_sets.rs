//! Tyre sets packet (id 12): allocated tyre sets for one car.

use serde::Serialize;

use crate::Result;
use crate::codec::Cursor;
use crate::header::{HEADER_LEN, PacketHeader};

/// Tyre set slots carried by every packet, 13 dry plus 7 wet.
pub const TYRE_SET_COUNT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TyreSetData {
    pub actual_tyre_compound: u8,
    pub visual_tyre_compound: u8,
    /// Wear, percent.
    pub wear: u8,
    /// 0 when the set has been returned or is otherwise unavailable.
    pub available: u8,
    /// Session the game recommends the set for.
    pub recommended_session: u8,
    /// Laps left in the set.
    pub life_span: u8,
    /// Max laps the game recommends for the set.
    pub usable_life: u8,
    /// Expected lap delta versus the fitted set, milliseconds.
    pub lap_delta_time: i16,
    /// 1 if this set is currently on the car.
    pub fitted: u8,
}

impl TyreSetData {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        Ok(TyreSetData {
            actual_tyre_compound: cursor.read_u8()?,
            visual_tyre_compound: cursor.read_u8()?,
            wear: cursor.read_u8()?,
            available: cursor.read_u8()?,
            recommended_session: cursor.read_u8()?,
            life_span: cursor.read_u8()?,
            usable_life: cursor.read_u8()?,
            lap_delta_time: cursor.read_i16()?,
            fitted: cursor.read_u8()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TyreSetsPacket {
    pub header: PacketHeader,
    /// Car these sets belong to.
    pub car_index: u8,
    pub tyre_sets: [TyreSetData; TYRE_SET_COUNT],
    /// Slot index of the fitted set.
    pub fitted_index: u8,
}

pub(crate) fn decode(header: PacketHeader, data: &[u8]) -> Result<TyreSetsPacket> {
    let mut cursor = Cursor::at(data, HEADER_LEN);
    Ok(TyreSetsPacket {
        header,
        car_index: cursor.read_u8()?,
        tyre_sets: cursor.read_array(TyreSetData::decode)?,
        fitted_index: cursor.read_u8()?,
    })
}
