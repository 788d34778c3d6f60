//! Lap data packet (id 2): lap times and track position for all cars.

use serde::Serialize;

use crate::codec::Cursor;
use crate::header::{HEADER_LEN, MAX_CARS, PacketHeader};
use crate::Result;

/// Lap state of one car.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LapData {
    /// Last lap time in milliseconds.
    pub last_lap_time_ms: u32,
    /// Current time around the lap in milliseconds.
    pub current_lap_time_ms: u32,
    /// Sector 1 time milliseconds part.
    pub sector1_time_ms: u16,
    /// Sector 1 whole-minute part.
    pub sector1_time_minutes: u8,
    /// Sector 2 time milliseconds part.
    pub sector2_time_ms: u16,
    /// Sector 2 whole-minute part.
    pub sector2_time_minutes: u8,
    /// Time delta to the car in front in milliseconds.
    pub delta_to_car_in_front_ms: u16,
    /// Time delta to the race leader in milliseconds.
    pub delta_to_race_leader_ms: u16,
    /// Distance around the current lap in metres; can be negative before the
    /// start line is crossed.
    pub lap_distance: f32,
    /// Total distance travelled in the session in metres.
    pub total_distance: f32,
    /// Delta in seconds for the safety car.
    pub safety_car_delta: f32,
    /// Car race position.
    pub car_position: u8,
    /// Current lap number.
    pub current_lap_num: u8,
    /// 0 = none, 1 = pitting, 2 = in pit area.
    pub pit_status: u8,
    /// Number of pit stops taken in this race.
    pub num_pit_stops: u8,
    /// 0 = sector 1, 1 = sector 2, 2 = sector 3.
    pub sector: u8,
    /// 0 = valid, 1 = invalid.
    pub current_lap_invalid: u8,
    /// Accumulated time penalties to be added, in seconds.
    pub penalties: u8,
    /// Accumulated number of warnings issued.
    pub total_warnings: u8,
    /// Accumulated number of corner-cutting warnings issued.
    pub corner_cutting_warnings: u8,
    /// Drive-through penalties left to serve.
    pub num_unserved_drive_through_pens: u8,
    /// Stop-go penalties left to serve.
    pub num_unserved_stop_go_pens: u8,
    /// Grid position the car started the race in.
    pub grid_position: u8,
    /// 0 = in garage, 1 = flying lap, 2 = in lap, 3 = out lap, 4 = on track.
    pub driver_status: u8,
    /// 0 = invalid, 1 = inactive, 2 = active, 3 = finished, 4 = DNF, 5 = DSQ.
    pub result_status: u8,
    /// Pit lane timing - 0 = inactive, 1 = active.
    pub pit_lane_timer_active: u8,
    /// If the timer is active, current time spent in the pit lane in ms.
    pub pit_lane_time_in_lane_ms: u16,
    /// Time of the actual pit stop in ms.
    pub pit_stop_timer_ms: u16,
    /// Whether the car should serve a penalty at this stop.
    pub pit_stop_should_serve_pen: u8,
}

impl LapData {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        Ok(Self {
            last_lap_time_ms: cursor.read_u32()?,
            current_lap_time_ms: cursor.read_u32()?,
            sector1_time_ms: cursor.read_u16()?,
            sector1_time_minutes: cursor.read_u8()?,
            sector2_time_ms: cursor.read_u16()?,
            sector2_time_minutes: cursor.read_u8()?,
            delta_to_car_in_front_ms: cursor.read_u16()?,
            delta_to_race_leader_ms: cursor.read_u16()?,
            lap_distance: cursor.read_f32()?,
            total_distance: cursor.read_f32()?,
            safety_car_delta: cursor.read_f32()?,
            car_position: cursor.read_u8()?,
            current_lap_num: cursor.read_u8()?,
            pit_status: cursor.read_u8()?,
            num_pit_stops: cursor.read_u8()?,
            sector: cursor.read_u8()?,
            current_lap_invalid: cursor.read_u8()?,
            penalties: cursor.read_u8()?,
            total_warnings: cursor.read_u8()?,
            corner_cutting_warnings: cursor.read_u8()?,
            num_unserved_drive_through_pens: cursor.read_u8()?,
            num_unserved_stop_go_pens: cursor.read_u8()?,
            grid_position: cursor.read_u8()?,
            driver_status: cursor.read_u8()?,
            result_status: cursor.read_u8()?,
            pit_lane_timer_active: cursor.read_u8()?,
            pit_lane_time_in_lane_ms: cursor.read_u16()?,
            pit_stop_timer_ms: cursor.read_u16()?,
            pit_stop_should_serve_pen: cursor.read_u8()?,
        })
    }
}

/// Lap data for all cars plus the time-trial rival indices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LapDataPacket {
    pub header: PacketHeader,
    pub lap_data: [LapData; MAX_CARS],
    /// Index of the personal-best car in time trial; 255 if invalid.
    pub time_trial_pb_car_idx: u8,
    /// Index of the rival car in time trial; 255 if invalid.
    pub time_trial_rival_car_idx: u8,
}

pub(crate) fn decode(header: PacketHeader, data: &[u8]) -> Result<LapDataPacket> {
    let mut cursor = Cursor::at(data, HEADER_LEN);
    Ok(LapDataPacket {
        header,
        lap_data: cursor.read_array(LapData::decode)?,
        time_trial_pb_car_idx: cursor.read_u8()?,
        time_trial_rival_car_idx: cursor.read_u8()?,
    })
}
