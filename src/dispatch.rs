//! Fan-out of decoded packets to a consumer.
//!
//! [`PacketSink`] is the seam consumers implement: one callback per packet
//! kind, every one defaulted to a no-op so a sink only writes the handlers
//! it cares about. [`Dispatcher`] owns the sink and feeds it datagrams one
//! at a time; a datagram that fails to decode is logged and counted, never
//! fatal, so one corrupt buffer cannot stall a live stream.

use tracing::warn;

use crate::TelemetryError;
use crate::packets::{
    CarDamagePacket, CarSetupsPacket, CarStatusPacket, CarTelemetryPacket, EventPacket,
    FinalClassificationPacket, LapDataPacket, LobbyInfoPacket, MotionExtraPacket, MotionPacket,
    Packet, ParticipantsPacket, SessionHistoryPacket, SessionPacket, TyreSetsPacket,
};

/// Receiver of decoded packets. Every handler defaults to doing nothing.
#[allow(unused_variables)]
pub trait PacketSink {
    fn on_motion(&mut self, packet: &MotionPacket) {}
    fn on_session(&mut self, packet: &SessionPacket) {}
    fn on_lap_data(&mut self, packet: &LapDataPacket) {}
    fn on_event(&mut self, packet: &EventPacket) {}
    fn on_participants(&mut self, packet: &ParticipantsPacket) {}
    fn on_car_setups(&mut self, packet: &CarSetupsPacket) {}
    fn on_car_telemetry(&mut self, packet: &CarTelemetryPacket) {}
    fn on_car_status(&mut self, packet: &CarStatusPacket) {}
    fn on_final_classification(&mut self, packet: &FinalClassificationPacket) {}
    fn on_lobby_info(&mut self, packet: &LobbyInfoPacket) {}
    fn on_car_damage(&mut self, packet: &CarDamagePacket) {}
    fn on_session_history(&mut self, packet: &SessionHistoryPacket) {}
    fn on_tyre_sets(&mut self, packet: &TyreSetsPacket) {}
    fn on_motion_extra(&mut self, packet: &MotionExtraPacket) {}

    /// Called when a datagram fails to decode. The stream continues either way.
    fn on_decode_error(&mut self, error: &TelemetryError) {}
}

/// Running totals for a dispatcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    /// Datagrams decoded and handed to the sink.
    pub delivered: u64,
    /// Datagrams dropped because they failed to decode.
    pub failed: u64,
}

/// Decodes datagrams and routes each to the matching sink handler.
#[derive(Debug)]
pub struct Dispatcher<S> {
    sink: S,
    stats: DispatchStats,
}

impl<S: PacketSink> Dispatcher<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, stats: DispatchStats::default() }
    }

    /// Decode one datagram and deliver it.
    ///
    /// Decode failures are reported to the sink's `on_decode_error`, logged,
    /// and counted; they never propagate. Later datagrams are unaffected.
    pub fn deliver(&mut self, datagram: &[u8]) {
        match Packet::decode(datagram) {
            Ok(packet) => {
                self.stats.delivered += 1;
                self.route(&packet);
            }
            Err(error) => {
                self.stats.failed += 1;
                warn!(%error, len = datagram.len(), "dropping undecodable datagram");
                self.sink.on_decode_error(&error);
            }
        }
    }

    fn route(&mut self, packet: &Packet) {
        match packet {
            Packet::Motion(p) => self.sink.on_motion(p),
            Packet::Session(p) => self.sink.on_session(p),
            Packet::LapData(p) => self.sink.on_lap_data(p),
            Packet::Event(p) => self.sink.on_event(p),
            Packet::Participants(p) => self.sink.on_participants(p),
            Packet::CarSetups(p) => self.sink.on_car_setups(p),
            Packet::CarTelemetry(p) => self.sink.on_car_telemetry(p),
            Packet::CarStatus(p) => self.sink.on_car_status(p),
            Packet::FinalClassification(p) => self.sink.on_final_classification(p),
            Packet::LobbyInfo(p) => self.sink.on_lobby_info(p),
            Packet::CarDamage(p) => self.sink.on_car_damage(p),
            Packet::SessionHistory(p) => self.sink.on_session_history(p),
            Packet::TyreSets(p) => self.sink.on_tyre_sets(p),
            Packet::MotionExtra(p) => self.sink.on_motion_extra(p),
        }
    }

    /// Delivery and drop counts so far.
    pub fn stats(&self) -> DispatchStats {
        self.stats
    }

    /// Borrow the sink, e.g. to inspect accumulated state.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Tear down the dispatcher and reclaim the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
