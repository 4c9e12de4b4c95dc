//! Protocol constants
//!
//! These constants define the frame layout and the command/response id bytes
//! spoken by the Exos II GoTo handbox controller (firmware V2.3) over its
//! serial link. The id set was mapped by probing the controller: ids that
//! stop the periodic position report are rejected by the firmware, ids that
//! keep it running are listed here.

// ============================================================================
// Frame Layout
// ============================================================================

/// Signature bytes opening every frame, identical in both directions.
pub const FRAME_SIGNATURE: [u8; 4] = [0x55, 0xAA, 0x01, 0x09];
/// Total length of a wire frame in bytes.
pub const MESSAGE_FRAME_LENGTH: usize = 13;
/// Offset of the command id byte.
pub const COMMAND_ID_OFFSET: usize = 4;
/// Offset of the first payload value (4-byte little-endian float).
pub const PAYLOAD_A_OFFSET: usize = 5;
/// Offset of the second payload value (4-byte little-endian float).
pub const PAYLOAD_B_OFFSET: usize = 9;

// ============================================================================
// Command IDs (host → controller)
// ============================================================================

/// Nudge the mount east.
pub const CMD_MOVE_EAST: u8 = 0x01;
/// Nudge the mount west.
pub const CMD_MOVE_WEST: u8 = 0x02;
/// Nudge the mount north.
pub const CMD_MOVE_NORTH: u8 = 0x04;
/// Nudge the mount south.
pub const CMD_MOVE_SOUTH: u8 = 0x08;
/// Immediately stop slewing.
pub const CMD_STOP_MOTION: u8 = 0x1D;
/// Slew back to the park/initial position.
pub const CMD_PARK: u8 = 0x1E;
/// Request a site-location report.
pub const CMD_GET_SITE_LOCATION: u8 = 0x1F;
/// End the serial session.
pub const CMD_DISCONNECT: u8 = 0x22;
/// Slew to the equatorial coordinates provided ("GOTO").
pub const CMD_GOTO: u8 = 0x23;
/// Set the current pointing position without slewing.
pub const CMD_SYNC: u8 = 0x24;
/// Set the observation site location.
pub const CMD_SET_SITE_LOCATION: u8 = 0x25;
/// Set date and time on the controller.
pub const CMD_SET_DATE_TIME: u8 = 0x26;

// ============================================================================
// Response IDs (controller → host)
// ============================================================================

/// Periodic pointing-coordinate report (decode payload as RA/Dec).
pub const RESP_POINTING_REPORT: u8 = 0xFF;
/// Site-location report (decode payload as latitude/longitude).
pub const RESP_SITE_LOCATION_REPORT: u8 = 0xFE;

// ============================================================================
// Fixed Payloads
// ============================================================================

/// Payload sent with every move command, captured verbatim from the vendor
/// handbox. The 0xC8 bytes have no known interpretation.
pub const MOVE_COMMAND_PAYLOAD: [u8; 8] = [0xC8, 0x00, 0x00, 0x00, 0xC8, 0x00, 0x00, 0x00];
