//! Decoded frames received from the mount controller.

use std::fmt;

use crate::constants::*;
use crate::error::ProtocolError;
use crate::frame::RawFrame;
use crate::types::{
    decode_f32, EquatorialCoordinates, GeographicCoordinates, SexagesimalAngle,
};

/// A decoded wire frame.
///
/// Decoding is semantics-free: the controller reuses the same float-pair
/// payload for pointing coordinates and site coordinates, so both readings
/// are computed for every frame and the caller picks the meaningful one
/// based on [`command_id`](Self::command_id). Routing by id belongs to the
/// dispatch layer, not here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedFrame {
    /// Command or response id byte.
    pub command_id: u8,
    /// First payload float, decimal hours or degrees.
    pub value_a: f32,
    /// Second payload float, decimal degrees.
    pub value_b: f32,
    /// Hour-angle reading of the payload (RA/Dec).
    pub equatorial: EquatorialCoordinates,
    /// Degree-angle reading of the payload (latitude/longitude).
    pub site: GeographicCoordinates,
    /// The raw frame bytes.
    pub raw: RawFrame,
}

impl DecodedFrame {
    /// Decode a frame from its wire bytes.
    ///
    /// Requires at least [`MESSAGE_FRAME_LENGTH`] bytes; extra bytes are
    /// ignored. Fails with [`ProtocolError::InvalidValue`] if a payload
    /// float is non-finite, which only a corrupted-but-aligned frame
    /// produces.
    pub fn decode(bytes: &[u8]) -> Result<Self, ProtocolError> {
        if bytes.len() < MESSAGE_FRAME_LENGTH {
            return Err(ProtocolError::FrameTooShort {
                expected: MESSAGE_FRAME_LENGTH,
                actual: bytes.len(),
            });
        }

        let mut raw = [0u8; MESSAGE_FRAME_LENGTH];
        raw.copy_from_slice(&bytes[..MESSAGE_FRAME_LENGTH]);

        let mut a = [0u8; 4];
        a.copy_from_slice(&raw[PAYLOAD_A_OFFSET..PAYLOAD_A_OFFSET + 4]);
        let mut b = [0u8; 4];
        b.copy_from_slice(&raw[PAYLOAD_B_OFFSET..PAYLOAD_B_OFFSET + 4]);

        let value_a = decode_f32(a);
        let value_b = decode_f32(b);

        let first = SexagesimalAngle::from_decimal(value_a)?;
        let second = SexagesimalAngle::from_decimal(value_b)?;

        Ok(DecodedFrame {
            command_id: raw[COMMAND_ID_OFFSET],
            value_a,
            value_b,
            equatorial: EquatorialCoordinates {
                ra: first,
                dec: second,
            },
            site: GeographicCoordinates {
                latitude: first,
                longitude: second,
            },
            raw,
        })
    }
}

impl fmt::Display for DecodedFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.command_id {
            RESP_POINTING_REPORT => write!(
                f,
                "Report -> RA:{} DEC:{}",
                self.equatorial.ra, self.equatorial.dec
            )?,
            RESP_SITE_LOCATION_REPORT => write!(
                f,
                "Location -> LAT:{} LON:{}",
                self.site.latitude, self.site.longitude
            )?,
            CMD_GOTO => write!(
                f,
                "GOTO -> RA:{} DEC:{}",
                self.equatorial.ra, self.equatorial.dec
            )?,
            CMD_STOP_MOTION => write!(f, "Stop Motion!")?,
            other => write!(f, "Frame 0x{other:02X}")?,
        }

        write!(f, " [")?;
        for (i, byte) in self.raw.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{byte:02X}")?;
        }
        write!(f, "]")
    }
}
