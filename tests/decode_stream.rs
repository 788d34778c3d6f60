//! End-to-end decoding over hand-assembled wire buffers, exercising the
//! public surface the way a live capture would.

use gridwire::packets::{EventDetail, EventPacket, LapDataPacket, Packet};
use gridwire::{
    DispatchStats, Dispatcher, HEADER_LEN, MAX_CARS, PacketKind, PacketSink, TelemetryError,
};

/// Assemble a datagram from raw little-endian parts, the way the game would.
fn datagram(packet_id: u8, session_time: f32, frame: u32, body: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_LEN + body.len());
    buf.extend_from_slice(&2023u16.to_le_bytes());
    buf.push(23);
    buf.push(1);
    buf.push(18);
    buf.push(1);
    buf.push(packet_id);
    buf.extend_from_slice(&0x1122_3344_5566_7788u64.to_le_bytes());
    buf.extend_from_slice(&session_time.to_le_bytes());
    buf.extend_from_slice(&frame.to_le_bytes());
    buf.push(0);
    buf.push(255);
    buf.extend_from_slice(body);
    buf
}

fn fastest_lap_body(vehicle_index: u8, lap_time: f32) -> Vec<u8> {
    let mut body = b"FTLP".to_vec();
    body.push(vehicle_index);
    body.extend_from_slice(&lap_time.to_le_bytes());
    body
}

/// Lap-data body with each car's position set to a distinct sentinel.
fn lap_data_body() -> Vec<u8> {
    let mut body = Vec::new();
    for car in 0..MAX_CARS as u8 {
        body.extend_from_slice(&92_000u32.to_le_bytes()); // last lap ms
        body.extend_from_slice(&45_000u32.to_le_bytes()); // current lap ms
        body.extend_from_slice(&27_000u16.to_le_bytes()); // sector 1 ms
        body.push(0); // sector 1 minutes
        body.extend_from_slice(&18_000u16.to_le_bytes()); // sector 2 ms
        body.push(0); // sector 2 minutes
        body.extend_from_slice(&1_500u16.to_le_bytes()); // delta to car in front
        body.extend_from_slice(&30_000u16.to_le_bytes()); // delta to leader
        body.extend_from_slice(&1_234.5f32.to_le_bytes()); // lap distance
        body.extend_from_slice(&150_000.0f32.to_le_bytes()); // total distance
        body.extend_from_slice(&0.0f32.to_le_bytes()); // safety car delta
        body.push(car + 1); // car position, the sentinel under test
        body.push(32); // current lap number
        body.push(0); // pit status
        body.push(1); // num pit stops
        body.push(2); // sector
        body.push(0); // current lap invalid
        body.push(0); // penalties
        body.push(0); // total warnings
        body.push(0); // corner cutting warnings
        body.push(0); // unserved drive throughs
        body.push(0); // unserved stop gos
        body.push(car + 1); // grid position
        body.push(1); // driver status
        body.push(2); // result status
        body.push(0); // pit lane timer active
        body.extend_from_slice(&0u16.to_le_bytes()); // pit lane time in lane
        body.extend_from_slice(&0u16.to_le_bytes()); // pit stop timer
        body.push(0); // pit stop should serve penalty
    }
    body.push(255); // time trial PB car index
    body.push(255); // time trial rival car index
    body
}

#[test]
fn fastest_lap_event_decodes_from_raw_wire_bytes() {
    let buf = datagram(3, 5_121.25, 307_275, &fastest_lap_body(5, 83.421));
    let packet = Packet::decode(&buf).unwrap();

    assert_eq!(packet.kind(), PacketKind::Event);
    assert_eq!(packet.header().packet_format, 2023);
    assert_eq!(packet.header().session_uid, 0x1122_3344_5566_7788);
    assert!((packet.header().session_time - 5_121.25).abs() < f32::EPSILON);

    let Packet::Event(EventPacket { detail, .. }) = packet else {
        panic!("expected event packet");
    };
    let EventDetail::FastestLap { vehicle_index, lap_time } = detail else {
        panic!("expected fastest lap, got {detail:?}");
    };
    assert_eq!(vehicle_index, 5);
    assert!((lap_time - 83.421).abs() < 1e-4);
}

#[test]
fn per_car_slots_keep_wire_order() {
    let buf = datagram(2, 100.0, 6_000, &lap_data_body());
    let Packet::LapData(packet) = Packet::decode(&buf).unwrap() else {
        panic!("expected lap data packet");
    };

    let packet: &LapDataPacket = &packet;
    for (slot, lap) in packet.lap_data.iter().enumerate() {
        assert_eq!(usize::from(lap.car_position), slot + 1, "slot {slot} out of order");
    }
    assert_eq!(packet.time_trial_pb_car_idx, 255);
}

#[derive(Default)]
struct CountingSink {
    events: u32,
    laps: u32,
    errors: u32,
}

impl PacketSink for CountingSink {
    fn on_event(&mut self, _packet: &EventPacket) {
        self.events += 1;
    }

    fn on_lap_data(&mut self, _packet: &LapDataPacket) {
        self.laps += 1;
    }

    fn on_decode_error(&mut self, _error: &TelemetryError) {
        self.errors += 1;
    }
}

#[test]
fn one_bad_datagram_does_not_stall_the_stream() {
    let first = datagram(3, 10.0, 600, &fastest_lap_body(5, 83.421));
    let second = datagram(2, 10.1, 606, &lap_data_body());
    let truncated = &second[..second.len() / 2];
    let third = datagram(3, 10.2, 612, &fastest_lap_body(7, 84.002));

    let mut dispatcher = Dispatcher::new(CountingSink::default());
    dispatcher.deliver(&first);
    dispatcher.deliver(truncated);
    dispatcher.deliver(&third);

    assert_eq!(dispatcher.stats(), DispatchStats { delivered: 2, failed: 1 });
    let sink = dispatcher.into_sink();
    assert_eq!(sink.events, 2);
    assert_eq!(sink.laps, 0);
    assert_eq!(sink.errors, 1);
}

#[test]
fn unknown_event_code_is_its_own_failure() {
    let mut body = b"ZZZZ".to_vec();
    body.extend_from_slice(&[0; 8]);
    let buf = datagram(3, 1.0, 60, &body);

    match Packet::decode(&buf).unwrap_err() {
        TelemetryError::UnknownEventCode { code } => assert_eq!(&code, b"ZZZZ"),
        other => panic!("expected UnknownEventCode, got {other:?}"),
    }
}
