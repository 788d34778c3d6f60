//! Car damage packet (id 10): wear and component damage per car.

use serde::Serialize;

use crate::Result;
use crate::codec::Cursor;
use crate::header::{HEADER_LEN, MAX_CARS, PacketHeader, WHEEL_COUNT};

/// Damage state for one car. Per-wheel arrays use wheel order RL, RR, FL, FR.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CarDamage {
    /// Tyre wear, percent per wheel.
    pub tyres_wear: [f32; WHEEL_COUNT],
    /// Tyre damage, percent per wheel.
    pub tyres_damage: [u8; WHEEL_COUNT],
    /// Brake damage, percent per wheel.
    pub brakes_damage: [u8; WHEEL_COUNT],
    pub front_left_wing_damage: u8,
    pub front_right_wing_damage: u8,
    pub rear_wing_damage: u8,
    pub floor_damage: u8,
    pub diffuser_damage: u8,
    pub sidepod_damage: u8,
    pub drs_fault: u8,
    pub ers_fault: u8,
    pub gear_box_damage: u8,
    pub engine_damage: u8,
    pub engine_mguh_wear: u8,
    pub engine_es_wear: u8,
    pub engine_ce_wear: u8,
    pub engine_ice_wear: u8,
    pub engine_mguk_wear: u8,
    pub engine_tc_wear: u8,
    pub engine_blown: u8,
    pub engine_seized: u8,
}

impl CarDamage {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        Ok(CarDamage {
            tyres_wear: cursor.read_f32_array()?,
            tyres_damage: cursor.read_u8_array()?,
            brakes_damage: cursor.read_u8_array()?,
            front_left_wing_damage: cursor.read_u8()?,
            front_right_wing_damage: cursor.read_u8()?,
            rear_wing_damage: cursor.read_u8()?,
            floor_damage: cursor.read_u8()?,
            diffuser_damage: cursor.read_u8()?,
            sidepod_damage: cursor.read_u8()?,
            drs_fault: cursor.read_u8()?,
            ers_fault: cursor.read_u8()?,
            gear_box_damage: cursor.read_u8()?,
            engine_damage: cursor.read_u8()?,
            engine_mguh_wear: cursor.read_u8()?,
            engine_es_wear: cursor.read_u8()?,
            engine_ce_wear: cursor.read_u8()?,
            engine_ice_wear: cursor.read_u8()?,
            engine_mguk_wear: cursor.read_u8()?,
            engine_tc_wear: cursor.read_u8()?,
            engine_blown: cursor.read_u8()?,
            engine_seized: cursor.read_u8()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarDamagePacket {
    pub header: PacketHeader,
    pub car_damage: [CarDamage; MAX_CARS],
}

pub(crate) fn decode(header: PacketHeader, data: &[u8]) -> Result<CarDamagePacket> {
    let mut cursor = Cursor::at(data, HEADER_LEN);
    Ok(CarDamagePacket {
        header,
        car_damage: cursor.read_array(CarDamage::decode)?,
    })
}
