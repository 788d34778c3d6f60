//! Car setups packet (id 5): suspension, aero and tyre setup per car.

use serde::Serialize;

use crate::Result;
use crate::codec::Cursor;
use crate::header::{HEADER_LEN, MAX_CARS, PacketHeader, WHEEL_COUNT};

/// Setup sheet for one car. Other cars' setups are zeroed in multiplayer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CarSetup {
    pub front_wing: u8,
    pub rear_wing: u8,
    /// Differential adjustment on throttle, percent.
    pub on_throttle: u8,
    /// Differential adjustment off throttle, percent.
    pub off_throttle: u8,
    pub front_camber: f32,
    pub rear_camber: f32,
    pub front_toe: f32,
    pub rear_toe: f32,
    pub front_suspension: u8,
    pub rear_suspension: u8,
    pub front_anti_roll_bar: u8,
    pub rear_anti_roll_bar: u8,
    pub front_suspension_height: u8,
    pub rear_suspension_height: u8,
    /// Brake pressure, percent.
    pub brake_pressure: u8,
    /// Front brake bias, percent.
    pub brake_bias: u8,
    /// Tyre pressures in PSI, wheel order RL, RR, FL, FR.
    pub tyre_pressures: [f32; WHEEL_COUNT],
    pub ballast: u8,
    pub fuel_load: f32,
}

impl CarSetup {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        Ok(CarSetup {
            front_wing: cursor.read_u8()?,
            rear_wing: cursor.read_u8()?,
            on_throttle: cursor.read_u8()?,
            off_throttle: cursor.read_u8()?,
            front_camber: cursor.read_f32()?,
            rear_camber: cursor.read_f32()?,
            front_toe: cursor.read_f32()?,
            rear_toe: cursor.read_f32()?,
            front_suspension: cursor.read_u8()?,
            rear_suspension: cursor.read_u8()?,
            front_anti_roll_bar: cursor.read_u8()?,
            rear_anti_roll_bar: cursor.read_u8()?,
            front_suspension_height: cursor.read_u8()?,
            rear_suspension_height: cursor.read_u8()?,
            brake_pressure: cursor.read_u8()?,
            brake_bias: cursor.read_u8()?,
            tyre_pressures: cursor.read_f32_array()?,
            ballast: cursor.read_u8()?,
            fuel_load: cursor.read_f32()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarSetupsPacket {
    pub header: PacketHeader,
    pub car_setups: [CarSetup; MAX_CARS],
}

pub(crate) fn decode(header: PacketHeader, data: &[u8]) -> Result<CarSetupsPacket> {
    let mut cursor = Cursor::at(data, HEADER_LEN);
    Ok(CarSetupsPacket {
        header,
        car_setups: cursor.read_array(CarSetup::decode)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packets::Packet;
    use crate::test_utils::PacketBuilder;

    fn setups_buffer() -> Vec<u8> {
        let mut builder = PacketBuilder::new(5);
        for car in 0..MAX_CARS as u8 {
            builder.push_u8(car); // front_wing
            builder.push_u8(car + 1); // rear_wing
            builder.push_u8(60); // on_throttle
            builder.push_u8(55); // off_throttle
            builder.push_f32(-3.0); // front_camber
            builder.push_f32(-2.0); // rear_camber
            builder.push_f32(0.05); // front_toe
            builder.push_f32(0.2); // rear_toe
            builder.push_u8(8); // front_suspension
            builder.push_u8(4); // rear_suspension
            builder.push_u8(11); // front_anti_roll_bar
            builder.push_u8(9); // rear_anti_roll_bar
            builder.push_u8(3); // front_suspension_height
            builder.push_u8(7); // rear_suspension_height
            builder.push_u8(95); // brake_pressure
            builder.push_u8(56); // brake_bias
            for wheel in 0..4 {
                builder.push_f32(22.0 + f32::from(car) + f32::from(wheel as u8) * 0.25);
            }
            builder.push_u8(6); // ballast
            builder.push_f32(50.5 + f32::from(car)); // fuel_load
        }
        builder.finish()
    }

    #[test]
    fn decodes_every_car_slot_in_order() {
        let buf = setups_buffer();
        let Packet::CarSetups(packet) = Packet::decode(&buf).unwrap() else {
            panic!("expected car setups packet");
        };

        assert_eq!(packet.car_setups[0].front_wing, 0);
        assert_eq!(packet.car_setups[21].front_wing, 21);
        assert_eq!(packet.car_setups[3].fuel_load, 53.5);
        assert_eq!(packet.car_setups[3].tyre_pressures, [25.0, 25.25, 25.5, 25.75]);
        assert_eq!(packet.car_setups[10].brake_bias, 56);
    }

    #[test]
    fn short_buffer_is_truncation() {
        let buf = setups_buffer();
        let err = Packet::decode(&buf[..buf.len() - 1]).unwrap_err();
        assert!(matches!(err, crate::TelemetryError::TruncatedBuffer { .. }));
    }
}
