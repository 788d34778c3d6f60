//! Lobby info packet (id 9): multiplayer lobby roster before the session starts.

use serde::Serialize;

use crate::Result;
use crate::codec::Cursor;
use crate::header::{HEADER_LEN, MAX_CARS, PacketHeader};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LobbyPlayer {
    /// 1 if the slot is AI controlled.
    pub ai_controlled: u8,
    pub team_id: u8,
    pub nationality: u8,
    /// 1 = Steam, 3 = PlayStation, 4 = Xbox, 6 = Origin, 255 = unknown.
    pub platform: u8,
    /// Player name, NUL-truncated from its fixed wire slot.
    pub name: String,
    pub car_number: u8,
    /// 0 = not ready, 1 = ready, 2 = spectating.
    pub ready_status: u8,
}

impl LobbyPlayer {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        Ok(LobbyPlayer {
            ai_controlled: cursor.read_u8()?,
            team_id: cursor.read_u8()?,
            nationality: cursor.read_u8()?,
            platform: cursor.read_u8()?,
            name: cursor.read_name()?,
            car_number: cursor.read_u8()?,
            ready_status: cursor.read_u8()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LobbyInfoPacket {
    pub header: PacketHeader,
    /// Number of players actually in the lobby.
    pub num_players: u8,
    pub players: [LobbyPlayer; MAX_CARS],
}

pub(crate) fn decode(header: PacketHeader, data: &[u8]) -> Result<LobbyInfoPacket> {
    let mut cursor = Cursor::at(data, HEADER_LEN);
    Ok(LobbyInfoPacket {
        header,
        num_players: cursor.read_u8()?,
        players: cursor.read_array(LobbyPlayer::decode)?,
    })
}
