//! Session history packet (id 11): lap and stint history for one car.
//!
//! Unlike the per-car packets this one covers a single vehicle, cycling
//! through the field one car per update. Both embedded arrays decode at
//! full capacity; the count bytes only tell you which slots are live.

use serde::Serialize;

use crate::Result;
use crate::codec::Cursor;
use crate::header::{HEADER_LEN, PacketHeader};

/// Lap history slots carried by every packet.
pub const LAP_HISTORY_COUNT: usize = 100;
/// Tyre stint slots carried by every packet.
pub const TYRE_STINT_COUNT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LapHistoryData {
    /// Lap time in milliseconds, 0 if the lap was never completed.
    pub lap_time_in_ms: u32,
    pub sector1_time_in_ms: u16,
    pub sector1_time_minutes: u8,
    pub sector2_time_in_ms: u16,
    pub sector2_time_minutes: u8,
    pub sector3_time_in_ms: u16,
    pub sector3_time_minutes: u8,
    /// Bit 0 = lap valid, bits 1-3 = sectors 1-3 valid.
    pub lap_valid_bit_flags: u8,
}

impl LapHistoryData {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        Ok(LapHistoryData {
            lap_time_in_ms: cursor.read_u32()?,
            sector1_time_in_ms: cursor.read_u16()?,
            sector1_time_minutes: cursor.read_u8()?,
            sector2_time_in_ms: cursor.read_u16()?,
            sector2_time_minutes: cursor.read_u8()?,
            sector3_time_in_ms: cursor.read_u16()?,
            sector3_time_minutes: cursor.read_u8()?,
            lap_valid_bit_flags: cursor.read_u8()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TyreStintHistoryData {
    /// Lap the stint ended on, 255 for the current stint.
    pub end_lap: u8,
    pub tyre_actual_compound: u8,
    pub tyre_visual_compound: u8,
}

impl TyreStintHistoryData {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        Ok(TyreStintHistoryData {
            end_lap: cursor.read_u8()?,
            tyre_actual_compound: cursor.read_u8()?,
            tyre_visual_compound: cursor.read_u8()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionHistoryPacket {
    pub header: PacketHeader,
    /// Car this history belongs to.
    pub car_index: u8,
    /// Laps in the history including the current in-progress lap.
    pub num_laps: u8,
    pub num_tyre_stints: u8,
    /// Lap number of the car's best lap, 1-based.
    pub best_lap_time_lap_num: u8,
    pub best_sector1_lap_num: u8,
    pub best_sector2_lap_num: u8,
    pub best_sector3_lap_num: u8,
    #[serde(serialize_with = "crate::packets::serialize_array")]
    pub lap_history: [LapHistoryData; LAP_HISTORY_COUNT],
    pub tyre_stints_history: [TyreStintHistoryData; TYRE_STINT_COUNT],
}

pub(crate) fn decode(header: PacketHeader, data: &[u8]) -> Result<SessionHistoryPacket> {
    let mut cursor = Cursor::at(data, HEADER_LEN);
    Ok(SessionHistoryPacket {
        header,
        car_index: cursor.read_u8()?,
        num_laps: cursor.read_u8()?,
        num_tyre_stints: cursor.read_u8()?,
        best_lap_time_lap_num: cursor.read_u8()?,
        best_sector1_lap_num: cursor.read_u8()?,
        best_sector2_lap_num: cursor.read_u8()?,
        best_sector3_lap_num: cursor.read_u8()?,
        lap_history: cursor.read_array(LapHistoryData::decode)?,
        tyre_stints_history: cursor.read_array(TyreStintHistoryData::decode)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packets::Packet;
    use crate::test_utils::PacketBuilder;

    fn history_buffer(num_laps: u8) -> Vec<u8> {
        let mut builder = PacketBuilder::new(11);
        builder.push_bytes(&[4, num_laps, 2, 3, 3, 5, 3]);
        for lap in 0..LAP_HISTORY_COUNT as u32 {
            builder.push_u32(if lap < u32::from(num_laps) { 84_000 + lap * 10 } else { 0 });
            builder.push_u16(27_100);
            builder.push_u8(0);
            builder.push_u16(29_300);
            builder.push_u8(0);
            builder.push_u16(27_600);
            builder.push_u8(0);
            builder.push_u8(0b0000_1111);
        }
        for stint in 0..TYRE_STINT_COUNT as u8 {
            builder.push_bytes(&[if stint == 0 { 255 } else { 0 }, 18, 16]);
        }
        builder.finish()
    }

    #[test]
    fn decodes_full_capacity_regardless_of_counts() {
        let buf = history_buffer(12);
        let Packet::SessionHistory(packet) = Packet::decode(&buf).unwrap() else {
            panic!("expected session history packet");
        };

        assert_eq!(packet.car_index, 4);
        assert_eq!(packet.num_laps, 12);
        assert_eq!(packet.lap_history.len(), LAP_HISTORY_COUNT);
        assert_eq!(packet.lap_history[0].lap_time_in_ms, 84_000);
        assert_eq!(packet.lap_history[11].lap_time_in_ms, 84_110);
        // Slots past num_laps still decode, as emptiness.
        assert_eq!(packet.lap_history[99].lap_time_in_ms, 0);
        assert_eq!(packet.lap_history[99].sector1_time_in_ms, 27_100);
        assert_eq!(packet.tyre_stints_history[0].end_lap, 255);
        assert_eq!(packet.tyre_stints_history[7].tyre_visual_compound, 16);
    }

    #[test]
    fn short_buffer_is_truncation() {
        let buf = history_buffer(1);
        let err = Packet::decode(&buf[..buf.len() - 1]).unwrap_err();
        assert!(matches!(err, crate::TelemetryError::TruncatedBuffer { .. }));
    }
}
