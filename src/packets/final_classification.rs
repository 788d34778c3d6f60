//! Final classification packet (id 8): results table sent once at session end.

use serde::Serialize;

use crate::Result;
use crate::codec::Cursor;
use crate::header::{HEADER_LEN, MAX_CARS, PacketHeader};

/// Tyre stint slots per classification entry.
pub const CLASSIFICATION_STINT_COUNT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassificationEntry {
    pub finishing_position: u8,
    pub num_laps: u8,
    pub grid_position: u8,
    pub points: u8,
    pub num_pit_stops: u8,
    pub result_status: u8,
    /// Best lap time in milliseconds.
    pub best_lap_time_in_ms: u32,
    /// Total race time in seconds, penalties excluded.
    pub total_race_time: f64,
    /// Accumulated penalty time, seconds.
    pub penalties_time: u8,
    pub num_penalties: u8,
    /// Stints actually used; slots past this count are padding.
    pub num_tyre_stints: u8,
    pub tyre_stints_actual: [u8; CLASSIFICATION_STINT_COUNT],
    pub tyre_stints_visual: [u8; CLASSIFICATION_STINT_COUNT],
    /// Lap each stint ended on.
    pub tyre_stints_end_laps: [u8; CLASSIFICATION_STINT_COUNT],
}

impl ClassificationEntry {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        Ok(ClassificationEntry {
            finishing_position: cursor.read_u8()?,
            num_laps: cursor.read_u8()?,
            grid_position: cursor.read_u8()?,
            points: cursor.read_u8()?,
            num_pit_stops: cursor.read_u8()?,
            result_status: cursor.read_u8()?,
            best_lap_time_in_ms: cursor.read_u32()?,
            total_race_time: cursor.read_f64()?,
            penalties_time: cursor.read_u8()?,
            num_penalties: cursor.read_u8()?,
            num_tyre_stints: cursor.read_u8()?,
            tyre_stints_actual: cursor.read_u8_array()?,
            tyre_stints_visual: cursor.read_u8_array()?,
            tyre_stints_end_laps: cursor.read_u8_array()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalClassificationPacket {
    pub header: PacketHeader,
    /// Number of cars actually classified.
    pub num_cars: u8,
    pub classification: [ClassificationEntry; MAX_CARS],
}

pub(crate) fn decode(header: PacketHeader, data: &[u8]) -> Result<FinalClassificationPacket> {
    let mut cursor = Cursor::at(data, HEADER_LEN);
    Ok(FinalClassificationPacket {
        header,
        num_cars: cursor.read_u8()?,
        classification: cursor.read_array(ClassificationEntry::decode)?,
    })
}
