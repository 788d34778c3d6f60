//! Decoder for the UDP telemetry stream broadcast by the F1 23 game.
//!
//! Gridwire turns raw datagrams into typed packets: every one of the game's
//! fourteen packet kinds gets a struct mirroring its wire layout, decoded
//! with strict bounds checking and no partial results. On top of the pure
//! decoder sit a [`PacketSink`] fan-out and a tokio UDP receiver for live
//! sessions.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gridwire::{PacketSink, UdpReceiver};
//! use gridwire::packets::CarTelemetryPacket;
//! use tokio_util::sync::CancellationToken;
//!
//! #[derive(Default)]
//! struct SpeedLogger;
//!
//! impl PacketSink for SpeedLogger {
//!     fn on_car_telemetry(&mut self, packet: &CarTelemetryPacket) {
//!         let player = usize::from(packet.header.player_car_index);
//!         println!("speed: {} kph", packet.car_telemetry[player].speed);
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let receiver = UdpReceiver::bind_default(SpeedLogger).await?;
//!     let (stats, _sink) = receiver.run(CancellationToken::new()).await?;
//!     println!("delivered {} packets", stats.delivered);
//!     Ok(())
//! }
//! ```
//!
//! Decoding without the network layer is one call:
//!
//! ```rust,ignore
//! let packet = gridwire::Packet::decode(&datagram)?;
//! ```

pub mod codec;
mod dispatch;
mod error;
mod header;
pub mod packets;
mod receiver;
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;

pub use dispatch::{DispatchStats, Dispatcher, PacketSink};
pub use error::{Result, TelemetryError};
pub use header::{HEADER_LEN, MAX_CARS, PacketHeader, PacketKind, WHEEL_COUNT};
pub use packets::Packet;
pub use receiver::{DEFAULT_PORT, UdpReceiver};
