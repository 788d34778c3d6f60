//! Receiver smoke test over a loopback socket.

use std::net::SocketAddr;

use anyhow::Result;
use gridwire::packets::EventPacket;
use gridwire::{PacketSink, UdpReceiver};
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;

fn fastest_lap_datagram() -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&2023u16.to_le_bytes());
    buf.extend_from_slice(&[23, 1, 18, 1, 3]);
    buf.extend_from_slice(&7u64.to_le_bytes());
    buf.extend_from_slice(&61.5f32.to_le_bytes());
    buf.extend_from_slice(&3_690u32.to_le_bytes());
    buf.extend_from_slice(&[0, 255]);
    buf.extend_from_slice(b"FTLP");
    buf.push(5);
    buf.extend_from_slice(&83.421f32.to_le_bytes());
    buf
}

#[derive(Default)]
struct EventCollector {
    seen: u32,
}

impl PacketSink for EventCollector {
    fn on_event(&mut self, _packet: &EventPacket) {
        self.seen += 1;
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn delivers_datagrams_until_cancelled() -> Result<()> {
    let _ = tracing_subscriber::fmt::try_init();

    let bind: SocketAddr = "127.0.0.1:0".parse()?;
    let receiver = UdpReceiver::bind(bind, EventCollector::default()).await?;
    let target = receiver.local_addr()?;

    let cancel = CancellationToken::new();
    let run = tokio::spawn(receiver.run(cancel.clone()));

    let sender = UdpSocket::bind("127.0.0.1:0").await?;
    let datagram = fastest_lap_datagram();
    for _ in 0..3 {
        sender.send_to(&datagram, target).await?;
    }
    // Garbage datagram must be dropped without ending the run.
    sender.send_to(&[0xFF; 12], target).await?;

    // Loopback delivery is quick; leave generous slack before cancelling.
    tokio::time::sleep(std::time::Duration::from_millis(250)).await;
    cancel.cancel();
    let (stats, sink) = run.await??;

    assert_eq!(stats.delivered, 3);
    assert_eq!(stats.failed, 1);
    assert_eq!(sink.seen, 3);
    Ok(())
}
