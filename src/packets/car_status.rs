//! Car status packet (id 7): fuel, ERS, tyre compound and flag state per car.

use serde::Serialize;

use crate::Result;
use crate::codec::Cursor;
use crate::header::{HEADER_LEN, MAX_CARS, PacketHeader};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CarStatus {
    /// 0 = off, 1 = medium, 2 = full.
    pub traction_control: u8,
    /// 0 = off, 1 = on.
    pub anti_lock_brakes: u8,
    /// 0 = lean, 1 = standard, 2 = rich, 3 = max.
    pub fuel_mix: u8,
    /// Front brake bias, percent.
    pub front_brake_bias: u8,
    pub pit_limiter_status: u8,
    /// Fuel left in tank, kg.
    pub fuel_in_tank: f32,
    pub fuel_capacity: f32,
    /// Fuel remaining expressed in laps.
    pub fuel_remaining_laps: f32,
    pub max_rpm: u16,
    pub idle_rpm: u16,
    pub max_gears: u8,
    pub drs_allowed: u8,
    /// Metres until DRS is available, 0 when unavailable.
    pub drs_activation_distance: u16,
    /// Fitted compound, game internal id.
    pub actual_tyre_compound: u8,
    /// Compound as shown on screen.
    pub visual_tyre_compound: u8,
    pub tyres_age_laps: u8,
    /// -1 = invalid, 0 = none, 1 = green, 2 = blue, 3 = yellow.
    pub vehicle_fia_flags: i8,
    /// Engine power, watts.
    pub engine_power_ice: f32,
    pub engine_power_mguk: f32,
    /// ERS store, joules.
    pub ers_store_energy: f32,
    /// 0 = none, 1 = medium, 2 = hotlap, 3 = overtake.
    pub ers_deploy_mode: u8,
    pub ers_harvested_this_lap_mguk: f32,
    pub ers_harvested_this_lap_mguh: f32,
    pub ers_deployed_this_lap: f32,
    /// 1 when the car is paused in a network game.
    pub network_paused: u8,
}

impl CarStatus {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        Ok(CarStatus {
            traction_control: cursor.read_u8()?,
            anti_lock_brakes: cursor.read_u8()?,
            fuel_mix: cursor.read_u8()?,
            front_brake_bias: cursor.read_u8()?,
            pit_limiter_status: cursor.read_u8()?,
            fuel_in_tank: cursor.read_f32()?,
            fuel_capacity: cursor.read_f32()?,
            fuel_remaining_laps: cursor.read_f32()?,
            max_rpm: cursor.read_u16()?,
            idle_rpm: cursor.read_u16()?,
            max_gears: cursor.read_u8()?,
            drs_allowed: cursor.read_u8()?,
            drs_activation_distance: cursor.read_u16()?,
            actual_tyre_compound: cursor.read_u8()?,
            visual_tyre_compound: cursor.read_u8()?,
            tyres_age_laps: cursor.read_u8()?,
            vehicle_fia_flags: cursor.read_i8()?,
            engine_power_ice: cursor.read_f32()?,
            engine_power_mguk: cursor.read_f32()?,
            ers_store_energy: cursor.read_f32()?,
            ers_deploy_mode: cursor.read_u8()?,
            ers_harvested_this_lap_mguk: cursor.read_f32()?,
            ers_harvested_this_lap_mguh: cursor.read_f32()?,
            ers_deployed_this_lap: cursor.read_f32()?,
            network_paused: cursor.read_u8()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarStatusPacket {
    pub header: PacketHeader,
    pub car_status: [CarStatus; MAX_CARS],
}

pub(crate) fn decode(header: PacketHeader, data: &[u8]) -> Result<CarStatusPacket> {
    let mut cursor = Cursor::at(data, HEADER_LEN);
    Ok(CarStatusPacket {
        header,
        car_status: cursor.read_array(CarStatus::decode)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packets::Packet;
    use crate::test_utils::PacketBuilder;

    fn status_buffer() -> Vec<u8> {
        let mut builder = PacketBuilder::new(7);
        for car in 0..MAX_CARS as u8 {
            builder.push_bytes(&[2, 1, 1, 56, 0]); // assists and bias
            builder.push_f32(40.0 - f32::from(car)); // fuel_in_tank
            builder.push_f32(110.0); // fuel_capacity
            builder.push_f32(1.5); // fuel_remaining_laps
            builder.push_u16(13_000); // max_rpm
            builder.push_u16(3_500); // idle_rpm
            builder.push_u8(8); // max_gears
            builder.push_u8(1); // drs_allowed
            builder.push_u16(150); // drs_activation_distance
            builder.push_u8(18); // actual_tyre_compound
            builder.push_u8(16); // visual_tyre_compound
            builder.push_u8(car); // tyres_age_laps
            builder.push_i8(3); // vehicle_fia_flags
            builder.push_f32(580_000.0); // engine_power_ice
            builder.push_f32(120_000.0); // engine_power_mguk
            builder.push_f32(3_200_000.0); // ers_store_energy
            builder.push_u8(2); // ers_deploy_mode
            builder.push_f32(800_000.0); // ers_harvested_this_lap_mguk
            builder.push_f32(400_000.0); // ers_harvested_this_lap_mguh
            builder.push_f32(1_000_000.0); // ers_deployed_this_lap
            builder.push_u8(0); // network_paused
        }
        builder.finish()
    }

    #[test]
    fn decodes_every_car_status() {
        let buf = status_buffer();
        let Packet::CarStatus(packet) = Packet::decode(&buf).unwrap() else {
            panic!("expected car status packet");
        };

        assert_eq!(packet.car_status[0].fuel_in_tank, 40.0);
        assert_eq!(packet.car_status[21].fuel_in_tank, 19.0);
        assert_eq!(packet.car_status[5].tyres_age_laps, 5);
        assert_eq!(packet.car_status[5].vehicle_fia_flags, 3);
        assert_eq!(packet.car_status[5].drs_activation_distance, 150);
        assert_eq!(packet.car_status[5].ers_deploy_mode, 2);
    }

    #[test]
    fn short_buffer_is_truncation() {
        let buf = status_buffer();
        let err = Packet::decode(&buf[..buf.len() - 1]).unwrap_err();
        assert!(matches!(err, crate::TelemetryError::TruncatedBuffer { .. }));
    }
}
