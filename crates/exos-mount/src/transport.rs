//! Transport abstraction for the serial link.

use std::io;

use crossbeam_channel::{unbounded, Receiver, Sender, TrySendError};

/// A byte transport carrying frames to the mount controller.
///
/// Implementations wrap the physical link (a serial device, or a TCP bridge
/// in front of one). Opening and configuring the link is their business; the
/// session only asks two things of it.
pub trait Transport {
    /// Whether the link is currently open.
    fn is_connected(&self) -> bool;

    /// Transmit one encoded frame.
    fn send(&mut self, frame: &[u8]) -> io::Result<()>;
}

/// In-memory transport over a channel, for tests and offline frame building.
///
/// Transmitted frames land in the paired receiver. The connected flag is
/// settable so disconnected behavior can be exercised without a device.
#[derive(Debug)]
pub struct ChannelTransport {
    connected: bool,
    tx: Sender<Vec<u8>>,
}

impl ChannelTransport {
    /// Create a transport and the receiver observing its transmissions.
    pub fn pair() -> (Self, Receiver<Vec<u8>>) {
        let (tx, rx) = unbounded();
        (
            ChannelTransport {
                connected: true,
                tx,
            },
            rx,
        )
    }

    /// Create a transport that reports itself disconnected.
    pub fn disconnected() -> Self {
        let (tx, _) = unbounded();
        ChannelTransport {
            connected: false,
            tx,
        }
    }

    /// Set the connected flag.
    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }
}

impl Transport for ChannelTransport {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn send(&mut self, frame: &[u8]) -> io::Result<()> {
        match self.tx.try_send(frame.to_vec()) {
            Ok(()) => Ok(()),
            Err(TrySendError::Disconnected(_)) => Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "frame receiver dropped",
            )),
            Err(TrySendError::Full(_)) => unreachable!("unbounded channel"),
        }
    }
}
