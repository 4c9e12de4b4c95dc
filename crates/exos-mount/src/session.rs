//! Mount session: typed commands out, decoded reports in.

use std::io;

use exos_protocol::{
    Command, DecodedFrame, Direction, EquatorialCoordinates, FrameCodec, GeographicCoordinates,
    RawFrame, SexagesimalAngle, RESP_POINTING_REPORT, RESP_SITE_LOCATION_REPORT,
};
use tracing::{debug, trace, warn};

use crate::transport::Transport;

/// Events produced by feeding received bytes into a session.
#[derive(Debug, Clone, PartialEq)]
pub enum MountEvent {
    /// Pointing-coordinate report.
    Pointing(EquatorialCoordinates),

    /// Site-location report.
    SiteLocation(GeographicCoordinates),

    /// Any other frame; recorded but not interpreted.
    Unhandled(DecodedFrame),
}

/// A command/report session with the mount controller.
///
/// The session owns the one receive buffer and is its sole consumer, so
/// reports are always produced in stream order. Commands are fire-and-forget:
/// encoding always succeeds, and when the transport is not connected the
/// frame is logged and dropped rather than treated as an error.
pub struct MountSession<T: Transport> {
    codec: FrameCodec,
    transport: T,
}

impl<T: Transport> MountSession<T> {
    /// Create a session over the given transport.
    pub fn new(transport: T) -> Self {
        MountSession {
            codec: FrameCodec::new(),
            transport,
        }
    }

    /// Get the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Get the underlying transport mutably.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Encode a command and transmit it if the link is open.
    ///
    /// Returns the encoded frame either way, so callers can record what
    /// would have gone out.
    pub fn send(&mut self, command: &Command) -> io::Result<RawFrame> {
        let frame = command.encode();
        debug!("command 0x{:02X}, frame {:02X?}", command.code(), frame);

        if self.transport.is_connected() {
            self.transport.send(&frame)?;
        } else {
            trace!("transport not connected, frame not transmitted");
        }

        Ok(frame)
    }

    /// Slew to the equatorial coordinates provided.
    pub fn goto(&mut self, ra: SexagesimalAngle, dec: SexagesimalAngle) -> io::Result<RawFrame> {
        self.send(&Command::Goto { ra, dec })
    }

    /// Set the current pointing position without slewing.
    pub fn sync(&mut self, ra: SexagesimalAngle, dec: SexagesimalAngle) -> io::Result<RawFrame> {
        self.send(&Command::Sync { ra, dec })
    }

    /// Slew back to the park position.
    pub fn park(&mut self) -> io::Result<RawFrame> {
        self.send(&Command::Park)
    }

    /// Immediately stop slewing.
    pub fn stop_motion(&mut self) -> io::Result<RawFrame> {
        self.send(&Command::StopMotion)
    }

    /// End the serial session.
    pub fn disconnect(&mut self) -> io::Result<RawFrame> {
        self.send(&Command::Disconnect)
    }

    /// Request a site-location report.
    pub fn get_site_location(&mut self) -> io::Result<RawFrame> {
        self.send(&Command::GetSiteLocation)
    }

    /// Set the observation site location.
    pub fn set_site_location(
        &mut self,
        latitude: SexagesimalAngle,
        longitude: SexagesimalAngle,
    ) -> io::Result<RawFrame> {
        self.send(&Command::SetSiteLocation {
            latitude,
            longitude,
        })
    }

    /// Set date and time on the controller.
    pub fn set_date_time(
        &mut self,
        hours: u8,
        minutes: u8,
        seconds: u8,
        day: u8,
        month: u8,
        year: u16,
    ) -> io::Result<RawFrame> {
        self.send(&Command::SetDateTime {
            hours,
            minutes,
            seconds,
            day,
            month,
            year,
        })
    }

    /// Nudge the mount in a direction.
    pub fn move_direction(&mut self, direction: Direction) -> io::Result<RawFrame> {
        self.send(&Command::Move { direction })
    }

    /// Send an arbitrary command id and payload, for protocol exploration.
    pub fn fuzz(&mut self, command_id: u8, payload: [u8; 8]) -> io::Result<RawFrame> {
        self.send(&Command::Raw {
            command_id,
            payload,
        })
    }

    /// Append received bytes and return every event they complete.
    ///
    /// Call this from the transport's receive path whenever data arrives.
    /// Undecodable frames (aligned but carrying non-finite floats) are
    /// logged and skipped, matching the framer's silent-discard stance.
    pub fn feed(&mut self, data: &[u8]) -> Vec<MountEvent> {
        self.codec.push(data);
        self.collect(false)
    }

    /// Drain events a final time, releasing a trailing exactly-aligned frame
    /// the live gate would keep waiting on. For end-of-capture decoding.
    pub fn finish(&mut self) -> Vec<MountEvent> {
        self.collect(true)
    }

    fn collect(&mut self, at_end: bool) -> Vec<MountEvent> {
        let raw_frames = if at_end {
            self.codec.flush()
        } else {
            self.codec.drain()
        };

        let mut events = Vec::new();
        for raw in raw_frames {
            match DecodedFrame::decode(&raw) {
                Ok(frame) => events.push(route(frame)),
                Err(err) => warn!("dropping undecodable frame {raw:02X?}: {err}"),
            }
        }
        events
    }
}

fn route(frame: DecodedFrame) -> MountEvent {
    match frame.command_id {
        RESP_POINTING_REPORT => {
            trace!(
                "pointing report RA:{} DEC:{}",
                frame.equatorial.ra,
                frame.equatorial.dec
            );
            MountEvent::Pointing(frame.equatorial)
        }
        RESP_SITE_LOCATION_REPORT => {
            debug!(
                "site location LAT:{} LON:{}",
                frame.site.latitude, frame.site.longitude
            );
            MountEvent::SiteLocation(frame.site)
        }
        other => {
            debug!("unhandled frame id 0x{other:02X}");
            MountEvent::Unhandled(frame)
        }
    }
}
