//! Participants packet (id 4): driver roster for every car slot.
//!
//! Names arrive as fixed 48-byte UTF-8 slots; the codec truncates at the
//! first NUL, so an unused trailing region never leaks into the string.

use serde::Serialize;

use crate::Result;
use crate::codec::Cursor;
use crate::header::{HEADER_LEN, MAX_CARS, PacketHeader};

/// One roster entry, present for all 22 slots regardless of `num_active_cars`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantData {
    /// 1 if the car is AI controlled.
    pub ai_controlled: u8,
    /// Driver id, 255 for network humans.
    pub driver_id: u8,
    /// Unique id of the network player.
    pub network_id: u8,
    pub team_id: u8,
    /// 1 if the entry is the player's My Team car.
    pub my_team: u8,
    pub race_number: u8,
    pub nationality: u8,
    /// Driver name, NUL-truncated from its fixed wire slot.
    pub name: String,
    /// 0 = telemetry restricted, 1 = public.
    pub your_telemetry: u8,
    /// 0 = online name withheld, 1 = shown.
    pub show_online_names: u8,
    /// 1 = Steam, 3 = PlayStation, 4 = Xbox, 6 = Origin, 255 = unknown.
    pub platform: u8,
}

impl ParticipantData {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        Ok(ParticipantData {
            ai_controlled: cursor.read_u8()?,
            driver_id: cursor.read_u8()?,
            network_id: cursor.read_u8()?,
            team_id: cursor.read_u8()?,
            my_team: cursor.read_u8()?,
            race_number: cursor.read_u8()?,
            nationality: cursor.read_u8()?,
            name: cursor.read_name()?,
            your_telemetry: cursor.read_u8()?,
            show_online_names: cursor.read_u8()?,
            platform: cursor.read_u8()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantsPacket {
    pub header: PacketHeader,
    /// Number of cars the game considers active in this session.
    pub num_active_cars: u8,
    pub participants: [ParticipantData; MAX_CARS],
}

pub(crate) fn decode(header: PacketHeader, data: &[u8]) -> Result<ParticipantsPacket> {
    let mut cursor = Cursor::at(data, HEADER_LEN);
    Ok(ParticipantsPacket {
        header,
        num_active_cars: cursor.read_u8()?,
        participants: cursor.read_array(ParticipantData::decode)?,
    })
}
