//! Decoders for every packet kind, and the [`Packet`] sum type tying them
//! together.
//!
//! Each kind lives in its own module with a single `decode` entry point that
//! reads the body after the shared header. [`Packet::decode`] is the one
//! front door: it decodes the header, selects the body decoder by packet id,
//! and returns the typed packet or the first decode error.

pub mod car_damage;
pub mod car_setups;
pub mod car_status;
pub mod car_telemetry;
pub mod event;
pub mod final_classification;
pub mod lap_data;
pub mod lobby_info;
pub mod motion;
pub mod motion_extra;
pub mod participants;
pub mod session;
pub mod session_history;
pub mod tyre_sets;

use serde::{Serialize, Serializer};

use crate::header::{PacketHeader, PacketKind};
use crate::{Result, TelemetryError};

/// Serialize a fixed-size array as a sequence; serde's derive only covers
/// arrays up to 32 elements, so the larger packet arrays route through this.
pub(crate) fn serialize_array<S, T, const N: usize>(
    array: &[T; N],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    serializer.collect_seq(array.iter())
}

pub use car_damage::{CarDamage, CarDamagePacket};
pub use car_setups::{CarSetup, CarSetupsPacket};
pub use car_status::{CarStatus, CarStatusPacket};
pub use car_telemetry::{CarTelemetry, CarTelemetryPacket};
pub use event::{EventDetail, EventPacket};
pub use final_classification::{
    CLASSIFICATION_STINT_COUNT, ClassificationEntry, FinalClassificationPacket,
};
pub use lap_data::{LapData, LapDataPacket};
pub use lobby_info::{LobbyInfoPacket, LobbyPlayer};
pub use motion::{CarMotion, MotionPacket};
pub use motion_extra::MotionExtraPacket;
pub use participants::{ParticipantData, ParticipantsPacket};
pub use session::{
    MARSHAL_ZONE_COUNT, MarshalZone, SessionPacket, WEATHER_FORECAST_COUNT, WeatherForecastSample,
};
pub use session_history::{
    LAP_HISTORY_COUNT, LapHistoryData, SessionHistoryPacket, TYRE_STINT_COUNT, TyreStintHistoryData,
};
pub use tyre_sets::{TYRE_SET_COUNT, TyreSetData, TyreSetsPacket};

/// One fully decoded telemetry datagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Packet {
    Motion(MotionPacket),
    Session(Box<SessionPacket>),
    LapData(Box<LapDataPacket>),
    Event(EventPacket),
    Participants(Box<ParticipantsPacket>),
    CarSetups(Box<CarSetupsPacket>),
    CarTelemetry(Box<CarTelemetryPacket>),
    CarStatus(Box<CarStatusPacket>),
    FinalClassification(Box<FinalClassificationPacket>),
    LobbyInfo(Box<LobbyInfoPacket>),
    CarDamage(Box<CarDamagePacket>),
    SessionHistory(Box<SessionHistoryPacket>),
    TyreSets(Box<TyreSetsPacket>),
    MotionExtra(MotionExtraPacket),
}

impl Packet {
    /// Decode a whole datagram: header first, then the body selected by the
    /// header's packet id.
    ///
    /// Fails with [`UnknownRecordKind`](TelemetryError::UnknownRecordKind)
    /// for ids outside the known set, and with the body decoder's error for
    /// anything else. Decoding is all-or-nothing; no partial packet is ever
    /// returned.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let header = PacketHeader::decode(data)?;
        let kind = PacketKind::from_id(header.packet_id)
            .ok_or(TelemetryError::UnknownRecordKind { kind: header.packet_id })?;

        Ok(match kind {
            PacketKind::Motion => Packet::Motion(motion::decode(header, data)?),
            PacketKind::Session => Packet::Session(Box::new(session::decode(header, data)?)),
            PacketKind::LapData => Packet::LapData(Box::new(lap_data::decode(header, data)?)),
            PacketKind::Event => Packet::Event(event::decode(header, data)?),
            PacketKind::Participants => {
                Packet::Participants(Box::new(participants::decode(header, data)?))
            }
            PacketKind::CarSetups => {
                Packet::CarSetups(Box::new(car_setups::decode(header, data)?))
            }
            PacketKind::CarTelemetry => {
                Packet::CarTelemetry(Box::new(car_telemetry::decode(header, data)?))
            }
            PacketKind::CarStatus => {
                Packet::CarStatus(Box::new(car_status::decode(header, data)?))
            }
            PacketKind::FinalClassification => {
                Packet::FinalClassification(Box::new(final_classification::decode(header, data)?))
            }
            PacketKind::LobbyInfo => {
                Packet::LobbyInfo(Box::new(lobby_info::decode(header, data)?))
            }
            PacketKind::CarDamage => {
                Packet::CarDamage(Box::new(car_damage::decode(header, data)?))
            }
            PacketKind::SessionHistory => {
                Packet::SessionHistory(Box::new(session_history::decode(header, data)?))
            }
            PacketKind::TyreSets => Packet::TyreSets(Box::new(tyre_sets::decode(header, data)?)),
            PacketKind::MotionExtra => Packet::MotionExtra(motion_extra::decode(header, data)?),
        })
    }

    /// The kind of this packet.
    pub fn kind(&self) -> PacketKind {
        match self {
            Packet::Motion(_) => PacketKind::Motion,
            Packet::Session(_) => PacketKind::Session,
            Packet::LapData(_) => PacketKind::LapData,
            Packet::Event(_) => PacketKind::Event,
            Packet::Participants(_) => PacketKind::Participants,
            Packet::CarSetups(_) => PacketKind::CarSetups,
            Packet::CarTelemetry(_) => PacketKind::CarTelemetry,
            Packet::CarStatus(_) => PacketKind::CarStatus,
            Packet::FinalClassification(_) => PacketKind::FinalClassification,
            Packet::LobbyInfo(_) => PacketKind::LobbyInfo,
            Packet::CarDamage(_) => PacketKind::CarDamage,
            Packet::SessionHistory(_) => PacketKind::SessionHistory,
            Packet::TyreSets(_) => PacketKind::TyreSets,
            Packet::MotionExtra(_) => PacketKind::MotionExtra,
        }
    }

    /// The shared header, whichever kind this is.
    pub fn header(&self) -> &PacketHeader {
        match self {
            Packet::Motion(p) => &p.header,
            Packet::Session(p) => &p.header,
            Packet::LapData(p) => &p.header,
            Packet::Event(p) => &p.header,
            Packet::Participants(p) => &p.header,
            Packet::CarSetups(p) => &p.header,
            Packet::CarTelemetry(p) => &p.header,
            Packet::CarStatus(p) => &p.header,
            Packet::FinalClassification(p) => &p.header,
            Packet::LobbyInfo(p) => &p.header,
            Packet::CarDamage(p) => &p.header,
            Packet::SessionHistory(p) => &p.header,
            Packet::TyreSets(p) => &p.header,
            Packet::MotionExtra(p) => &p.header,
        }
    }
}
