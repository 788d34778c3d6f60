//! Event packet (id 3): the one genuine tagged union on the wire.
//!
//! A 4-byte ASCII code immediately after the header selects the shape of the
//! trailing payload. The decode runs in two stages: map the code to an event
//! kind, then read that kind's payload (several kinds carry none). An
//! unrecognized code fails the whole decode with
//! [`UnknownEventCode`](crate::TelemetryError::UnknownEventCode) - without
//! the code there is no way to know the payload shape. A recognized code
//! whose payload runs past the buffer fails with `TruncatedBuffer`; no
//! partial event is ever produced.

use serde::Serialize;

use crate::codec::Cursor;
use crate::header::{HEADER_LEN, PacketHeader};
use crate::{Result, TelemetryError};

/// One session event plus its kind-specific detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventPacket {
    pub header: PacketHeader,
    pub detail: EventDetail,
}

/// Kind-specific event payload, selected by the 4-byte ASCII code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum EventDetail {
    /// `SSTA` - sent when the session starts.
    SessionStarted,
    /// `SEND` - sent when the session ends.
    SessionEnded,
    /// `FTLP` - a driver has set the fastest lap of the session.
    FastestLap {
        vehicle_index: u8,
        /// Lap time in seconds.
        lap_time: f32,
    },
    /// `RTMT` - a driver has retired.
    Retirement { vehicle_index: u8 },
    /// `DRSE` - race control have enabled DRS.
    DrsEnabled,
    /// `DRSD` - race control have disabled DRS.
    DrsDisabled,
    /// `TMPT` - your team mate has entered the pits.
    TeamMateInPits { vehicle_index: u8 },
    /// `CHQF` - the chequered flag has been waved.
    ChequeredFlag,
    /// `RCWN` - the race winner is announced.
    RaceWinner { vehicle_index: u8 },
    /// `PENA` - a penalty has been issued.
    Penalty {
        /// Penalty type, see the game appendix.
        penalty_type: u8,
        /// Infringement type, see the game appendix.
        infringement_type: u8,
        /// Car receiving the penalty.
        vehicle_index: u8,
        /// Other car involved in the incident.
        other_vehicle_index: u8,
        /// Time gained, or time spent doing the action, in seconds.
        time: u8,
        /// Lap the penalty occurred on.
        lap_num: u8,
        /// Number of places gained.
        places_gained: u8,
    },
    /// `SPTP` - the speed trap has been triggered.
    SpeedTrap {
        vehicle_index: u8,
        /// Top speed logged in the trap, in kph.
        speed: u8,
        /// 1 if overall fastest in the session.
        is_overall_fastest_in_session: u8,
        /// 1 if the driver's fastest in the session.
        is_driver_fastest_in_session: u8,
        /// Fastest vehicle in the session.
        fastest_vehicle_index_in_session: u8,
    },
    /// `STLG` - start lights, number currently shown.
    StartLights { num_lights: u8 },
    /// `LGOT` - lights out.
    LightsOut,
    /// `DTSV` - drive-through penalty served.
    DriveThroughPenaltyServed { vehicle_index: u8 },
    /// `SGSV` - stop-go penalty served.
    StopGoPenaltyServed { vehicle_index: u8 },
    /// `FLBK` - flashback activated.
    Flashback {
        /// Frame the game was flashed back to.
        flashback_frame_identifier: u32,
        /// Session time flashed back to.
        flashback_session_time: f32,
    },
    /// `BUTN` - button status changed.
    Buttons {
        /// Bit flags specifying which buttons are pressed.
        button_status: u32,
    },
    /// `OVTK` - one car has overtaken another.
    Overtake {
        overtaking_vehicle_index: u8,
        being_overtaken_vehicle_index: u8,
    },
}

impl EventDetail {
    /// The 4-byte wire code for this event kind.
    pub fn code(&self) -> &'static [u8; 4] {
        match self {
            EventDetail::SessionStarted => b"SSTA",
            EventDetail::SessionEnded => b"SEND",
            EventDetail::FastestLap { .. } => b"FTLP",
            EventDetail::Retirement { .. } => b"RTMT",
            EventDetail::DrsEnabled => b"DRSE",
            EventDetail::DrsDisabled => b"DRSD",
            EventDetail::TeamMateInPits { .. } => b"TMPT",
            EventDetail::ChequeredFlag => b"CHQF",
            EventDetail::RaceWinner { .. } => b"RCWN",
            EventDetail::Penalty { .. } => b"PENA",
            EventDetail::SpeedTrap { .. } => b"SPTP",
            EventDetail::StartLights { .. } => b"STLG",
            EventDetail::LightsOut => b"LGOT",
            EventDetail::DriveThroughPenaltyServed { .. } => b"DTSV",
            EventDetail::StopGoPenaltyServed { .. } => b"SGSV",
            EventDetail::Flashback { .. } => b"FLBK",
            EventDetail::Buttons { .. } => b"BUTN",
            EventDetail::Overtake { .. } => b"OVTK",
        }
    }
}

pub(crate) fn decode(header: PacketHeader, data: &[u8]) -> Result<EventPacket> {
    let mut cursor = Cursor::at(data, HEADER_LEN);
    let code: [u8; 4] = cursor.read_u8_array()?;

    let detail = match &code {
        b"SSTA" => EventDetail::SessionStarted,
        b"SEND" => EventDetail::SessionEnded,
        b"FTLP" => EventDetail::FastestLap {
            vehicle_index: cursor.read_u8()?,
            lap_time: cursor.read_f32()?,
        },
        b"RTMT" => EventDetail::Retirement { vehicle_index: cursor.read_u8()? },
        b"DRSE" => EventDetail::DrsEnabled,
        b"DRSD" => EventDetail::DrsDisabled,
        b"TMPT" => EventDetail::TeamMateInPits { vehicle_index: cursor.read_u8()? },
        b"CHQF" => EventDetail::ChequeredFlag,
        b"RCWN" => EventDetail::RaceWinner { vehicle_index: cursor.read_u8()? },
        b"PENA" => EventDetail::Penalty {
            penalty_type: cursor.read_u8()?,
            infringement_type: cursor.read_u8()?,
            vehicle_index: cursor.read_u8()?,
            other_vehicle_index: cursor.read_u8()?,
            time: cursor.read_u8()?,
            lap_num: cursor.read_u8()?,
            places_gained: cursor.read_u8()?,
        },
        b"SPTP" => EventDetail::SpeedTrap {
            vehicle_index: cursor.read_u8()?,
            speed: cursor.read_u8()?,
            is_overall_fastest_in_session: cursor.read_u8()?,
            is_driver_fastest_in_session: cursor.read_u8()?,
            fastest_vehicle_index_in_session: cursor.read_u8()?,
        },
        b"STLG" => EventDetail::StartLights { num_lights: cursor.read_u8()? },
        b"LGOT" => EventDetail::LightsOut,
        b"DTSV" => EventDetail::DriveThroughPenaltyServed { vehicle_index: cursor.read_u8()? },
        b"SGSV" => EventDetail::StopGoPenaltyServed { vehicle_index: cursor.read_u8()? },
        b"FLBK" => EventDetail::Flashback {
            flashback_frame_identifier: cursor.read_u32()?,
            flashback_session_time: cursor.read_f32()?,
        },
        b"BUTN" => EventDetail::Buttons { button_status: cursor.read_u32()? },
        b"OVTK" => EventDetail::Overtake {
            overtaking_vehicle_index: cursor.read_u8()?,
            being_overtaken_vehicle_index: cursor.read_u8()?,
        },
        _ => return Err(TelemetryError::UnknownEventCode { code }),
    };

    Ok(EventPacket { header, detail })
}
