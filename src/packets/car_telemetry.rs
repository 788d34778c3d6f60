//! Car telemetry packet (id 6): live cockpit readings at simulation rate.

use serde::Serialize;

use crate::Result;
use crate::codec::Cursor;
use crate::header::{HEADER_LEN, MAX_CARS, PacketHeader, WHEEL_COUNT};

/// Live telemetry for one car. Per-wheel arrays use wheel order RL, RR, FL, FR.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CarTelemetry {
    /// Speed in kph.
    pub speed: u16,
    /// Applied throttle, 0.0 to 1.0.
    pub throttle: f32,
    /// Steering input, -1.0 full left to 1.0 full right.
    pub steer: f32,
    /// Applied brake, 0.0 to 1.0.
    pub brake: f32,
    /// Clutch, 0 to 100.
    pub clutch: u8,
    /// Selected gear, 1-8, 0 = neutral, -1 = reverse.
    pub gear: i8,
    pub engine_rpm: u16,
    /// 1 when DRS is open.
    pub drs: u8,
    pub rev_lights_percent: u8,
    /// Rev light bit mask, bit 0 = leftmost LED.
    pub rev_lights_bit_value: u16,
    /// Brake temperatures in celsius.
    pub brakes_temperature: [u16; WHEEL_COUNT],
    /// Tyre surface temperatures in celsius.
    pub tyres_surface_temperature: [u8; WHEEL_COUNT],
    /// Tyre inner temperatures in celsius.
    pub tyres_inner_temperature: [u8; WHEEL_COUNT],
    pub engine_temperature: u16,
    /// Tyre pressures in PSI.
    pub tyres_pressure: [f32; WHEEL_COUNT],
    /// Surface each wheel is driving on.
    pub surface_type: [u8; WHEEL_COUNT],
}

impl CarTelemetry {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        Ok(CarTelemetry {
            speed: cursor.read_u16()?,
            throttle: cursor.read_f32()?,
            steer: cursor.read_f32()?,
            brake: cursor.read_f32()?,
            clutch: cursor.read_u8()?,
            gear: cursor.read_i8()?,
            engine_rpm: cursor.read_u16()?,
            drs: cursor.read_u8()?,
            rev_lights_percent: cursor.read_u8()?,
            rev_lights_bit_value: cursor.read_u16()?,
            brakes_temperature: cursor.read_u16_array()?,
            tyres_surface_temperature: cursor.read_u8_array()?,
            tyres_inner_temperature: cursor.read_u8_array()?,
            engine_temperature: cursor.read_u16()?,
            tyres_pressure: cursor.read_f32_array()?,
            surface_type: cursor.read_u8_array()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarTelemetryPacket {
    pub header: PacketHeader,
    pub car_telemetry: [CarTelemetry; MAX_CARS],
    /// Index of the open MFD panel, 255 = closed.
    pub mfd_panel_index: u8,
    pub mfd_panel_index_secondary_player: u8,
    /// Gear the suggested-gear HUD shows, 0 if inactive.
    pub suggested_gear: i8,
}

pub(crate) fn decode(header: PacketHeader, data: &[u8]) -> Result<CarTelemetryPacket> {
    let mut cursor = Cursor::at(data, HEADER_LEN);
    Ok(CarTelemetryPacket {
        header,
        car_telemetry: cursor.read_array(CarTelemetry::decode)?,
        mfd_panel_index: cursor.read_u8()?,
        mfd_panel_index_secondary_player: cursor.read_u8()?,
        suggested_gear: cursor.read_i8()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packets::Packet;
    use crate::test_utils::PacketBuilder;

    fn telemetry_buffer() -> Vec<u8> {
        let mut builder = PacketBuilder::new(6);
        for car in 0..MAX_CARS as u16 {
            builder.push_u16(250 + car); // speed
            builder.push_f32(0.95); // throttle
            builder.push_f32(-0.1); // steer
            builder.push_f32(0.0); // brake
            builder.push_u8(0); // clutch
            builder.push_i8(7); // gear
            builder.push_u16(11_000); // engine_rpm
            builder.push_u8(1); // drs
            builder.push_u8(80); // rev_lights_percent
            builder.push_u16(0b0011_1111); // rev_lights_bit_value
            for wheel in 0..4u16 {
                builder.push_u16(400 + wheel); // brakes_temperature
            }
            builder.push_bytes(&[95, 96, 97, 98]); // surface temps
            builder.push_bytes(&[90, 91, 92, 93]); // inner temps
            builder.push_u16(110); // engine_temperature
            for wheel in 0..4 {
                builder.push_f32(21.5 + f32::from(wheel as u8) * 0.5);
            }
            builder.push_bytes(&[0, 0, 1, 1]); // surface_type
        }
        builder.push_u8(255); // mfd_panel_index
        builder.push_u8(255); // mfd_panel_index_secondary_player
        builder.push_i8(8); // suggested_gear
        builder.finish()
    }

    #[test]
    fn decodes_all_cars_and_the_scalar_tail() {
        let buf = telemetry_buffer();
        let Packet::CarTelemetry(packet) = Packet::decode(&buf).unwrap() else {
            panic!("expected car telemetry packet");
        };

        assert_eq!(packet.car_telemetry[0].speed, 250);
        assert_eq!(packet.car_telemetry[21].speed, 271);
        assert_eq!(packet.car_telemetry[4].gear, 7);
        assert_eq!(packet.car_telemetry[4].brakes_temperature, [400, 401, 402, 403]);
        assert_eq!(packet.car_telemetry[4].tyres_pressure, [21.5, 22.0, 22.5, 23.0]);
        assert_eq!(packet.mfd_panel_index, 255);
        assert_eq!(packet.suggested_gear, 8);
    }

    #[test]
    fn missing_scalar_tail_is_truncation() {
        let buf = telemetry_buffer();
        // Drop the three tail bytes; the per-car array alone is not a packet.
        let err = Packet::decode(&buf[..buf.len() - 3]).unwrap_err();
        assert!(matches!(err, crate::TelemetryError::TruncatedBuffer { .. }));
    }
}
