//! Session packet (id 1): track, session timing, weather forecast and
//! assist settings.
//!
//! The marshal-zone and weather-forecast arrays are a wire-format quirk:
//! `num_marshal_zones` and `num_weather_forecast_samples` say how many
//! leading entries are semantically valid, but the wire always carries the
//! full fixed capacity (21 zones, 56 samples) and the decoder always reads
//! all of it. Trailing entries beyond the count are present but meaningless.

use serde::Serialize;

use crate::codec::Cursor;
use crate::header::{HEADER_LEN, PacketHeader};
use crate::Result;

/// Number of marshal zone slots always present on the wire.
pub const MARSHAL_ZONE_COUNT: usize = 21;

/// Number of weather forecast sample slots always present on the wire.
pub const WEATHER_FORECAST_COUNT: usize = 56;

/// One marshal zone along the lap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarshalZone {
    /// Fraction (0..1) of the way through the lap the zone starts.
    pub zone_start: f32,
    /// -1 = invalid/unknown, 0 = none, 1 = green, 2 = blue, 3 = yellow.
    pub zone_flag: i8,
}

impl MarshalZone {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        Ok(Self { zone_start: cursor.read_f32()?, zone_flag: cursor.read_i8()? })
    }
}

/// One weather forecast sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeatherForecastSample {
    /// Session type the forecast applies to; raw byte, see the game appendix.
    pub session_type: u8,
    /// Time in minutes the forecast is for.
    pub time_offset: u8,
    /// Weather - 0 = clear, 1 = light cloud, 2 = overcast, 3 = light rain,
    /// 4 = heavy rain, 5 = storm.
    pub weather: u8,
    /// Track temperature in degrees Celsius.
    pub track_temperature: i8,
    /// Track temperature change - 0 = up, 1 = down, 2 = no change.
    pub track_temperature_change: i8,
    /// Air temperature in degrees Celsius.
    pub air_temperature: i8,
    /// Air temperature change - 0 = up, 1 = down, 2 = no change.
    pub air_temperature_change: i8,
    /// Rain percentage (0-100).
    pub rain_percentage: u8,
}

impl WeatherForecastSample {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        Ok(Self {
            session_type: cursor.read_u8()?,
            time_offset: cursor.read_u8()?,
            weather: cursor.read_u8()?,
            track_temperature: cursor.read_i8()?,
            track_temperature_change: cursor.read_i8()?,
            air_temperature: cursor.read_i8()?,
            air_temperature_change: cursor.read_i8()?,
            rain_percentage: cursor.read_u8()?,
        })
    }
}

/// Session state, decoded straight off the wire. Enum-like fields keep their
/// raw byte values so unknown future values never fail the decode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionPacket {
    pub header: PacketHeader,
    /// Weather - 0 = clear, 1 = light cloud, 2 = overcast, 3 = light rain,
    /// 4 = heavy rain, 5 = storm.
    pub weather: u8,
    /// Track temperature in degrees Celsius.
    pub track_temperature: i8,
    /// Air temperature in degrees Celsius.
    pub air_temperature: i8,
    /// Total number of laps in this race.
    pub total_laps: u8,
    /// Track length in metres.
    pub track_length: u16,
    /// 0 = unknown, 1 = P1, ... 10 = R, see the game appendix.
    pub session_type: u8,
    /// -1 for unknown, otherwise see the game appendix.
    pub track_id: i8,
    /// Formula - 0 = F1 Modern, 1 = F1 Classic, 2 = F2, ...
    pub formula: u8,
    /// Time left in the session in seconds.
    pub session_time_left: u16,
    /// Session duration in seconds.
    pub session_duration: u16,
    /// Pit speed limit in kilometres per hour.
    pub pit_speed_limit: u8,
    /// Whether the game is paused - network game only.
    pub game_paused: u8,
    /// Whether the player is spectating.
    pub is_spectating: u8,
    /// Index of the car being spectated.
    pub spectator_car_index: u8,
    /// SLI Pro support - 0 = inactive, 1 = active.
    pub sli_pro_native_support: u8,
    /// How many leading entries of `marshal_zones` are valid.
    pub num_marshal_zones: u8,
    /// All 21 marshal zone slots, valid or not.
    pub marshal_zones: [MarshalZone; MARSHAL_ZONE_COUNT],
    /// 0 = no safety car, 1 = full, 2 = virtual, 3 = formation lap.
    pub safety_car_status: u8,
    /// 0 = offline, 1 = online.
    pub network_game: u8,
    /// How many leading entries of `weather_forecast_samples` are valid.
    pub num_weather_forecast_samples: u8,
    /// All 56 forecast sample slots, valid or not.
    #[serde(serialize_with = "crate::packets::serialize_array")]
    pub weather_forecast_samples: [WeatherForecastSample; WEATHER_FORECAST_COUNT],
    /// 0 = perfect, 1 = approximate.
    pub forecast_accuracy: u8,
    /// AI difficulty rating, 0-110.
    pub ai_difficulty: u8,
    /// Identifier for the season - persists across saves.
    pub season_link_identifier: u32,
    /// Identifier for the weekend - persists across saves.
    pub weekend_link_identifier: u32,
    /// Identifier for the session - persists across saves.
    pub session_link_identifier: u32,
    /// Ideal lap for the player to pit on for the current strategy.
    pub pit_stop_window_ideal_lap: u8,
    /// Latest lap for the player to pit on for the current strategy.
    pub pit_stop_window_latest_lap: u8,
    /// Predicted position for the player to rejoin at.
    pub pit_stop_rejoin_position: u8,
    pub steering_assist: u8,
    pub braking_assist: u8,
    /// 1 = manual, 2 = manual & suggested gear, 3 = auto.
    pub gearbox_assist: u8,
    pub pit_assist: u8,
    pub pit_release_assist: u8,
    pub ers_assist: u8,
    pub drs_assist: u8,
    /// 0 = off, 1 = corners only, 2 = full.
    pub dynamic_racing_line: u8,
    /// 0 = 2D, 1 = 3D.
    pub dynamic_racing_line_type: u8,
    /// Game mode id, see the game appendix.
    pub game_mode: u8,
    /// Ruleset, see the game appendix.
    pub rule_set: u8,
    /// Local time of day, minutes since midnight.
    pub time_of_day: u32,
    /// 0 = none, 2 = very short, ... 7 = full.
    pub session_length: u8,
    /// 0 = MPH, 1 = KPH.
    pub speed_units_lead_player: u8,
    /// 0 = Celsius, 1 = Fahrenheit.
    pub temperature_units_lead_player: u8,
    pub speed_units_secondary_player: u8,
    pub temperature_units_secondary_player: u8,
    /// Number of safety cars called during the session.
    pub num_safety_car_periods: u8,
    /// Number of virtual safety cars called during the session.
    pub num_virtual_safety_car_periods: u8,
    /// Number of red flags called during the session.
    pub num_red_flag_periods: u8,
}

pub(crate) fn decode(header: PacketHeader, data: &[u8]) -> Result<SessionPacket> {
    let mut cursor = Cursor::at(data, HEADER_LEN);
    Ok(SessionPacket {
        header,
        weather: cursor.read_u8()?,
        track_temperature: cursor.read_i8()?,
        air_temperature: cursor.read_i8()?,
        total_laps: cursor.read_u8()?,
        track_length: cursor.read_u16()?,
        session_type: cursor.read_u8()?,
        track_id: cursor.read_i8()?,
        formula: cursor.read_u8()?,
        session_time_left: cursor.read_u16()?,
        session_duration: cursor.read_u16()?,
        pit_speed_limit: cursor.read_u8()?,
        game_paused: cursor.read_u8()?,
        is_spectating: cursor.read_u8()?,
        spectator_car_index: cursor.read_u8()?,
        sli_pro_native_support: cursor.read_u8()?,
        num_marshal_zones: cursor.read_u8()?,
        marshal_zones: cursor.read_array(MarshalZone::decode)?,
        safety_car_status: cursor.read_u8()?,
        network_game: cursor.read_u8()?,
        num_weather_forecast_samples: cursor.read_u8()?,
        weather_forecast_samples: cursor.read_array(WeatherForecastSample::decode)?,
        forecast_accuracy: cursor.read_u8()?,
        ai_difficulty: cursor.read_u8()?,
        season_link_identifier: cursor.read_u32()?,
        weekend_link_identifier: cursor.read_u32()?,
        session_link_identifier: cursor.read_u32()?,
        pit_stop_window_ideal_lap: cursor.read_u8()?,
        pit_stop_window_latest_lap: cursor.read_u8()?,
        pit_stop_rejoin_position: cursor.read_u8()?,
        steering_assist: cursor.read_u8()?,
        braking_assist: cursor.read_u8()?,
        gearbox_assist: cursor.read_u8()?,
        pit_assist: cursor.read_u8()?,
        pit_release_assist: cursor.read_u8()?,
        ers_assist: cursor.read_u8()?,
        drs_assist: cursor.read_u8()?,
        dynamic_racing_line: cursor.read_u8()?,
        dynamic_racing_line_type: cursor.read_u8()?,
        game_mode: cursor.read_u8()?,
        rule_set: cursor.read_u8()?,
        time_of_day: cursor.read_u32()?,
        session_length: cursor.read_u8()?,
        speed_units_lead_player: cursor.read_u8()?,
        temperature_units_lead_player: cursor.read_u8()?,
        speed_units_secondary_player: cursor.read_u8()?,
        temperature_units_secondary_player: cursor.read_u8()?,
        num_safety_car_periods: cursor.read_u8()?,
        num_virtual_safety_car_periods: cursor.read_u8()?,
        num_red_flag_periods: cursor.read_u8()?,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::packets::Packet;
    use crate::test_utils::PacketBuilder;

    /// Session buffer with marshal-zone count 3 but all 21 slots populated
    /// with distinct sentinels - the fixed-capacity decode scenario.
    pub(crate) fn session_buffer() -> Vec<u8> {
        let mut builder = PacketBuilder::new(1);
        builder.push_u8(2); // weather: overcast
        builder.push_i8(31); // track temp
        builder.push_i8(24); // air temp
        builder.push_u8(52); // total laps
        builder.push_u16(5303); // track length
        builder.push_u8(10); // session type: race
        builder.push_i8(4); // track id
        builder.push_u8(0); // formula
        builder.push_u16(1800);
        builder.push_u16(7200);
        builder.push_u8(80); // pit speed limit
        builder.push_u8(0); // paused
        builder.push_u8(0); // spectating
        builder.push_u8(255); // spectator car
        builder.push_u8(0); // sli pro
        builder.push_u8(3); // num marshal zones: only 3 "valid"
        for zone in 0..MARSHAL_ZONE_COUNT {
            builder.push_f32(zone as f32 / MARSHAL_ZONE_COUNT as f32);
            builder.push_i8(zone as i8);
        }
        builder.push_u8(1); // safety car: full
        builder.push_u8(1); // network game
        builder.push_u8(5); // num weather samples
        for sample in 0..WEATHER_FORECAST_COUNT {
            builder.push_u8(10); // session type
            builder.push_u8(sample as u8 * 4); // time offset
            builder.push_u8(1);
            builder.push_i8(30);
            builder.push_i8(2);
            builder.push_i8(22);
            builder.push_i8(2);
            builder.push_u8(sample as u8); // rain percentage sentinel
        }
        builder.push_u8(0); // forecast accuracy
        builder.push_u8(90); // ai difficulty
        builder.push_u32(11);
        builder.push_u32(22);
        builder.push_u32(33);
        builder.push_u8(18); // pit ideal lap
        builder.push_u8(24); // pit latest lap
        builder.push_u8(12); // rejoin position
        for assist in [1u8, 0, 3, 0, 1, 1, 0, 2, 1] {
            builder.push_u8(assist);
        }
        builder.push_u8(3); // game mode
        builder.push_u8(0); // rule set
        builder.push_u32(14 * 60); // time of day
        builder.push_u8(7); // session length
        builder.push_u8(1);
        builder.push_u8(0);
        builder.push_u8(1);
        builder.push_u8(0);
        builder.push_u8(2); // safety car periods
        builder.push_u8(1); // vsc periods
        builder.push_u8(0); // red flags
        builder.finish()
    }

    #[test]
    fn count_byte_does_not_limit_marshal_zone_decode() {
        let buf = session_buffer();
        let Packet::Session(packet) = Packet::decode(&buf).unwrap() else {
            panic!("expected session packet");
        };

        assert_eq!(packet.num_marshal_zones, 3);
        // All 21 slots decoded, not just the 3 the count byte covers.
        for (i, zone) in packet.marshal_zones.iter().enumerate() {
            assert_eq!(zone.zone_flag, i as i8);
            assert_eq!(zone.zone_start, i as f32 / MARSHAL_ZONE_COUNT as f32);
        }
    }

    #[test]
    fn weather_samples_decode_full_capacity_in_order() {
        let buf = session_buffer();
        let Packet::Session(packet) = Packet::decode(&buf).unwrap() else {
            panic!("expected session packet");
        };

        assert_eq!(packet.num_weather_forecast_samples, 5);
        for (i, sample) in packet.weather_forecast_samples.iter().enumerate() {
            assert_eq!(sample.rain_percentage, i as u8);
        }
    }

    #[test]
    fn scalar_tail_lands_after_fixed_arrays() {
        let buf = session_buffer();
        let Packet::Session(packet) = Packet::decode(&buf).unwrap() else {
            panic!("expected session packet");
        };

        assert_eq!(packet.track_length, 5303);
        assert_eq!(packet.safety_car_status, 1);
        assert_eq!(packet.ai_difficulty, 90);
        assert_eq!(packet.session_link_identifier, 33);
        assert_eq!(packet.time_of_day, 14 * 60);
        assert_eq!(packet.num_safety_car_periods, 2);
        assert_eq!(packet.num_red_flag_periods, 0);
    }

    #[test]
    fn one_byte_short_fails_with_truncation() {
        let buf = session_buffer();
        let err = Packet::decode(&buf[..buf.len() - 1]).unwrap_err();
        assert!(matches!(err, crate::TelemetryError::TruncatedBuffer { .. }));
    }
}
