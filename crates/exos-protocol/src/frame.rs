//! Frame encoding and stream resynchronization.
//!
//! Every frame, in both directions, is exactly 13 bytes:
//!
//! ```text
//! +-------------------+------+---------------------+---------------------+
//! | 55 AA 01 09       | cid  | payload A (4 bytes) | payload B (4 bytes) |
//! +-------------------+------+---------------------+---------------------+
//!   signature           id     LE float / raw        LE float / raw
//! ```
//!
//! The controller streams position reports continuously and frames carry no
//! length or checksum, so alignment is recovered by scanning for the
//! signature: anything buffered ahead of a signature is garbage (or the tail
//! of a frame whose start was never seen) and is dropped.

use bytes::{Buf, BytesMut};

use crate::constants::*;
use crate::types::{encode_f32, SexagesimalAngle};

/// A complete, aligned wire frame as extracted from the stream.
pub type RawFrame = [u8; MESSAGE_FRAME_LENGTH];

/// Receive buffer capacity; matches the 1 KiB window of the handbox link.
const RECEIVE_BUFFER_CAPACITY: usize = 1024;

fn frame_with_id(command_id: u8) -> RawFrame {
    let mut frame = [0u8; MESSAGE_FRAME_LENGTH];
    frame[..FRAME_SIGNATURE.len()].copy_from_slice(&FRAME_SIGNATURE);
    frame[COMMAND_ID_OFFSET] = command_id;
    frame
}

/// Build a frame with an all-zero payload.
pub fn simple_frame(command_id: u8) -> RawFrame {
    frame_with_id(command_id)
}

/// Build a frame carrying two angles as little-endian floats.
///
/// Used for GOTO, sync, and site-location commands alike: site coordinates
/// travel in the same float-pair encoding as pointing coordinates.
pub fn coordinate_frame(command_id: u8, a: SexagesimalAngle, b: SexagesimalAngle) -> RawFrame {
    let mut frame = frame_with_id(command_id);
    frame[PAYLOAD_A_OFFSET..PAYLOAD_A_OFFSET + 4].copy_from_slice(&encode_f32(a.to_decimal()));
    frame[PAYLOAD_B_OFFSET..PAYLOAD_B_OFFSET + 4].copy_from_slice(&encode_f32(b.to_decimal()));
    frame
}

/// Build a set-date-time frame.
///
/// The year splits into a hundreds byte and a remainder byte; values outside
/// the representable range wrap silently.
pub fn date_time_frame(
    hours: u8,
    minutes: u8,
    seconds: u8,
    day: u8,
    month: u8,
    year: u16,
) -> RawFrame {
    let mut frame = frame_with_id(CMD_SET_DATE_TIME);
    frame[5] = (year / 100) as u8;
    frame[6] = (year % 100) as u8;
    frame[7] = month;
    frame[8] = day;
    frame[9] = hours;
    frame[10] = minutes;
    frame[11] = seconds;
    frame
}

/// Build a frame with all 8 payload bytes supplied directly.
///
/// The most general constructor; used for the move commands and for protocol
/// exploration against unknown ids.
pub fn raw_frame(command_id: u8, payload: [u8; 8]) -> RawFrame {
    let mut frame = frame_with_id(command_id);
    frame[PAYLOAD_A_OFFSET..].copy_from_slice(&payload);
    frame
}

/// A resynchronizing scanner over the incoming byte stream.
///
/// Bytes arrive from the transport in arbitrary chunks: partial frames,
/// several frames back to back, or noise from a half-open line. The codec
/// accumulates everything and extracts complete, signature-aligned frames.
#[derive(Debug, Default)]
pub struct FrameCodec {
    /// Buffer for accumulating incoming data.
    buffer: BytesMut,
}

impl FrameCodec {
    /// Create a new frame codec.
    pub fn new() -> Self {
        FrameCodec {
            buffer: BytesMut::with_capacity(RECEIVE_BUFFER_CAPACITY),
        }
    }

    /// Add received data to the buffer.
    pub fn push(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Extract every complete frame currently buffered, in arrival order.
    ///
    /// Parsing only starts once strictly more than one frame's worth of
    /// bytes is buffered; a lone, exactly-13-byte frame stays buffered until
    /// at least one more byte arrives. Within a pass the buffer head
    /// advances past every byte that was discarded as garbage or consumed
    /// into an emitted frame, so no byte is ever decoded twice.
    pub fn drain(&mut self) -> Vec<RawFrame> {
        if self.buffer.len() <= MESSAGE_FRAME_LENGTH {
            return Vec::new();
        }
        self.extract_frames()
    }

    /// Extract complete frames without the minimum-buffer gate.
    ///
    /// For end-of-capture decoding: a stream that ends on a frame boundary
    /// holds exactly 13 bytes, which [`drain`](Self::drain) keeps waiting
    /// on. Call this when no more bytes will arrive.
    pub fn flush(&mut self) -> Vec<RawFrame> {
        self.extract_frames()
    }

    fn extract_frames(&mut self) -> Vec<RawFrame> {
        let mut frames = Vec::new();

        loop {
            match self.find_signature() {
                Some(position) => {
                    if position > 0 {
                        // Garbage or a superseded partial frame in front.
                        log::trace!("discarding {position} bytes ahead of frame signature");
                        self.buffer.advance(position);
                    }

                    if self.buffer.len() < MESSAGE_FRAME_LENGTH {
                        // Partial frame; wait for the rest.
                        break;
                    }

                    let bytes = self.buffer.split_to(MESSAGE_FRAME_LENGTH);
                    let mut frame = [0u8; MESSAGE_FRAME_LENGTH];
                    frame.copy_from_slice(&bytes);
                    frames.push(frame);
                }
                None => {
                    // No signature anywhere. Keep only the longest tail that
                    // could still be a signature prefix and drop the rest, so
                    // a noisy line cannot grow the buffer without bound.
                    let keep = (FRAME_SIGNATURE.len() - 1).min(self.buffer.len());
                    let dropped = self.buffer.len() - keep;
                    if dropped > 0 {
                        log::trace!("no frame signature in buffer, dropping {dropped} bytes");
                        self.buffer.advance(dropped);
                    }
                    break;
                }
            }
        }

        frames
    }

    fn find_signature(&self) -> Option<usize> {
        self.buffer
            .windows(FRAME_SIGNATURE.len())
            .position(|window| window == FRAME_SIGNATURE)
    }

    /// Get the number of buffered bytes.
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Clear the buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
