//! Builders for hand-assembling wire buffers in tests.

use crate::codec::NAME_SLOT_LEN;
use crate::header::HEADER_LEN;

/// Builds a datagram: a plausible header for the given packet id, then
/// whatever body bytes the test pushes, all little-endian.
pub struct PacketBuilder {
    buf: Vec<u8>,
}

impl PacketBuilder {
    /// Start a datagram whose header carries `packet_id` and fixed,
    /// recognizable values for every other header field.
    pub fn new(packet_id: u8) -> Self {
        let mut buf = Vec::new();
        buf.extend_from_slice(&2023u16.to_le_bytes()); // packet_format
        buf.push(23); // game_year
        buf.push(1); // game_major_version
        buf.push(18); // game_minor_version
        buf.push(1); // packet_version
        buf.push(packet_id);
        buf.extend_from_slice(&0xDEAD_BEEF_CAFE_F00Du64.to_le_bytes()); // session_uid
        buf.extend_from_slice(&42.5f32.to_le_bytes()); // session_time
        buf.extend_from_slice(&1_000u32.to_le_bytes()); // frame_identifier
        buf.push(19); // player_car_index
        buf.push(255); // secondary_player_car_index
        debug_assert_eq!(buf.len(), HEADER_LEN);
        Self { buf }
    }

    pub fn push_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn push_i8(&mut self, value: i8) {
        self.buf.push(value as u8);
    }

    pub fn push_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn push_i16(&mut self, value: i16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn push_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn push_f32(&mut self, value: f32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn push_f64(&mut self, value: f64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Write a name into its fixed wire slot, NUL-padded.
    ///
    /// Panics if `name` does not fit; tests should not be writing names that
    /// the wire cannot carry.
    pub fn push_name(&mut self, name: &str) {
        assert!(name.len() < NAME_SLOT_LEN, "name does not fit its wire slot");
        let mut slot = [0u8; NAME_SLOT_LEN];
        slot[..name.len()].copy_from_slice(name.as_bytes());
        self.buf.extend_from_slice(&slot);
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}
