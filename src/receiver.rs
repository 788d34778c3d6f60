//! UDP ingest loop feeding a [`Dispatcher`].
//!
//! Binds the port the game broadcasts to and pumps datagrams into the
//! dispatcher until cancelled. Socket reads and decode failures are both
//! non-fatal; the loop only ends on cancellation.

use std::net::SocketAddr;

use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::Result;
use crate::dispatch::{DispatchStats, Dispatcher, PacketSink};

/// Port the game broadcasts telemetry to by default.
pub const DEFAULT_PORT: u16 = 20777;

/// Largest datagram the game sends is well under this.
const RECV_BUFFER_LEN: usize = 2048;

/// Listens for telemetry datagrams and feeds them to a sink.
pub struct UdpReceiver<S> {
    socket: UdpSocket,
    dispatcher: Dispatcher<S>,
}

impl<S: PacketSink> UdpReceiver<S> {
    /// Bind the default telemetry port on all interfaces.
    pub async fn bind_default(sink: S) -> Result<Self> {
        Self::bind(SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)), sink).await
    }

    /// Bind a specific address.
    pub async fn bind(addr: SocketAddr, sink: S) -> Result<Self> {
        let socket = UdpSocket::bind(addr).await?;
        info!(addr = %socket.local_addr()?, "listening for telemetry");
        Ok(Self { socket, dispatcher: Dispatcher::new(sink) })
    }

    /// The address the socket actually bound, useful with port 0.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// Pump datagrams into the sink until `cancel` fires.
    ///
    /// Returns the delivery counts accumulated over the run. Transient socket
    /// errors are logged and the loop keeps reading.
    pub async fn run(mut self, cancel: CancellationToken) -> Result<(DispatchStats, S)> {
        let mut buf = [0u8; RECV_BUFFER_LEN];

        loop {
            let received = tokio::select! {
                _ = cancel.cancelled() => {
                    info!("telemetry receiver cancelled");
                    break;
                }
                received = self.socket.recv_from(&mut buf) => received,
            };

            match received {
                Ok((len, peer)) => {
                    debug!(len, %peer, "datagram received");
                    self.dispatcher.deliver(&buf[..len]);
                }
                Err(error) => {
                    warn!(%error, "socket read failed, continuing");
                }
            }
        }

        let stats = self.dispatcher.stats();
        info!(delivered = stats.delivered, failed = stats.failed, "telemetry receiver stopped");
        Ok((stats, self.dispatcher.into_sink()))
    }
}
