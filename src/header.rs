//! Packet header codec.
//!
//! Every F1 23 telemetry datagram starts with the same fixed 25-byte
//! little-endian header carrying format/version identifiers, the session id,
//! the frame counter and the local player car indices. The header codec only
//! checks that the buffer is long enough; an unrecognized packet id is left
//! for the dispatch table to reject, so that header decoding stays a pure
//! function of its input bytes.

use serde::Serialize;

use crate::codec::Cursor;
use crate::Result;

/// Size of the packet header in bytes.
pub const HEADER_LEN: usize = 25;

/// Maximum number of cars on track; per-car arrays have this many slots.
pub const MAX_CARS: usize = 22;

/// Wheels per car. Wire order: rear left, rear right, front left, front right.
pub const WHEEL_COUNT: usize = 4;

/// Common prefix of every telemetry datagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PacketHeader {
    /// Packet format (the game year, e.g. 2023).
    pub packet_format: u16,
    /// Game year, last two digits (e.g. 23).
    pub game_year: u8,
    /// Game major version - "X.00".
    pub game_major_version: u8,
    /// Game minor version - "1.XX".
    pub game_minor_version: u8,
    /// Version of this packet type, all start from 1.
    pub packet_version: u8,
    /// Identifier for the packet type; see [`PacketKind`].
    pub packet_id: u8,
    /// Unique identifier for the session.
    pub session_uid: u64,
    /// Session timestamp in seconds.
    pub session_time: f32,
    /// Identifier for the frame the data was retrieved on.
    pub frame_identifier: u32,
    /// Index of the player's car in the per-car arrays.
    pub player_car_index: u8,
    /// Index of the secondary player's car (splitscreen); 255 if none.
    pub secondary_player_car_index: u8,
}

impl PacketHeader {
    /// Decode the fixed header from the front of a datagram.
    ///
    /// Fails with [`TruncatedBuffer`](crate::TelemetryError::TruncatedBuffer)
    /// if the buffer is shorter than [`HEADER_LEN`]. No other validation is
    /// performed here.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(data);
        Ok(Self {
            packet_format: cursor.read_u16()?,
            game_year: cursor.read_u8()?,
            game_major_version: cursor.read_u8()?,
            game_minor_version: cursor.read_u8()?,
            packet_version: cursor.read_u8()?,
            packet_id: cursor.read_u8()?,
            session_uid: cursor.read_u64()?,
            session_time: cursor.read_f32()?,
            frame_identifier: cursor.read_u32()?,
            player_car_index: cursor.read_u8()?,
            secondary_player_car_index: cursor.read_u8()?,
        })
    }
}

/// The closed set of record kinds, keyed by the header's packet id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PacketKind {
    /// Physics data for all cars being driven.
    Motion,
    /// Data about the session: track, time left, weather forecast.
    Session,
    /// Lap times and positions for all cars in the session.
    LapData,
    /// Notable session events (fastest lap, penalties, flags, ...).
    Event,
    /// List of participants in the session.
    Participants,
    /// Car setups for all cars in the race.
    CarSetups,
    /// Telemetry (inputs, temperatures, pressures) for all cars.
    CarTelemetry,
    /// Status (fuel, tyres, ERS) for all cars.
    CarStatus,
    /// Final classification at the end of a race.
    FinalClassification,
    /// Players in a multiplayer lobby.
    LobbyInfo,
    /// Damage state for all cars.
    CarDamage,
    /// Lap and tyre-stint history for a single car.
    SessionHistory,
    /// Tyre set availability and wear for a single car.
    TyreSets,
    /// Extended motion data for the player's car.
    MotionExtra,
}

impl PacketKind {
    /// Map a header packet id to its kind; ids outside 0..=13 are
    /// unrecognized and yield `None`.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(PacketKind::Motion),
            1 => Some(PacketKind::Session),
            2 => Some(PacketKind::LapData),
            3 => Some(PacketKind::Event),
            4 => Some(PacketKind::Participants),
            5 => Some(PacketKind::CarSetups),
            6 => Some(PacketKind::CarTelemetry),
            7 => Some(PacketKind::CarStatus),
            8 => Some(PacketKind::FinalClassification),
            9 => Some(PacketKind::LobbyInfo),
            10 => Some(PacketKind::CarDamage),
            11 => Some(PacketKind::SessionHistory),
            12 => Some(PacketKind::TyreSets),
            13 => Some(PacketKind::MotionExtra),
            _ => None,
        }
    }

    /// The wire id for this kind.
    pub fn id(self) -> u8 {
        match self {
            PacketKind::Motion => 0,
            PacketKind::Session => 1,
            PacketKind::LapData => 2,
            PacketKind::Event => 3,
            PacketKind::Participants => 4,
            PacketKind::CarSetups => 5,
            PacketKind::CarTelemetry => 6,
            PacketKind::CarStatus => 7,
            PacketKind::FinalClassification => 8,
            PacketKind::LobbyInfo => 9,
            PacketKind::CarDamage => 10,
            PacketKind::SessionHistory => 11,
            PacketKind::TyreSets => 12,
            PacketKind::MotionExtra => 13,
        }
    }
}
