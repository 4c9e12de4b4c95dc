//! Commands that can be sent to the mount controller.

use crate::constants::*;
use crate::frame::{coordinate_frame, date_time_frame, raw_frame, simple_frame, RawFrame};
use crate::types::SexagesimalAngle;

/// Slewing directions for the nudge commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Nudge east.
    East,
    /// Nudge west.
    West,
    /// Nudge north.
    North,
    /// Nudge south.
    South,
}

impl Direction {
    /// Get the command id byte for this direction.
    pub fn code(&self) -> u8 {
        match self {
            Direction::East => CMD_MOVE_EAST,
            Direction::West => CMD_MOVE_WEST,
            Direction::North => CMD_MOVE_NORTH,
            Direction::South => CMD_MOVE_SOUTH,
        }
    }
}

/// Commands that can be sent to the mount controller.
///
/// The protocol has no acknowledgement; every command is fire-and-forget.
/// Range validation is the caller's responsibility (the codec does not clamp
/// minutes to [0, 59] or years to a century).
#[derive(Debug, Clone)]
pub enum Command {
    /// Slew to the equatorial coordinates provided ("GOTO").
    Goto {
        /// Target right ascension.
        ra: SexagesimalAngle,
        /// Target declination.
        dec: SexagesimalAngle,
    },

    /// Set the current pointing position without slewing.
    Sync {
        /// Current right ascension.
        ra: SexagesimalAngle,
        /// Current declination.
        dec: SexagesimalAngle,
    },

    /// Slew back to the park/initial position.
    Park,

    /// Immediately stop slewing.
    StopMotion,

    /// End the serial session.
    Disconnect,

    /// Request a site-location report.
    GetSiteLocation,

    /// Set the observation site location.
    SetSiteLocation {
        /// Site latitude.
        latitude: SexagesimalAngle,
        /// Site longitude.
        longitude: SexagesimalAngle,
    },

    /// Set date and time on the controller.
    SetDateTime {
        /// Hour of day.
        hours: u8,
        /// Minute.
        minutes: u8,
        /// Second.
        seconds: u8,
        /// Day of month.
        day: u8,
        /// Month (1-12).
        month: u8,
        /// Full year, e.g. 2024.
        year: u16,
    },

    /// Nudge the mount in a direction.
    Move {
        /// Direction to move.
        direction: Direction,
    },

    /// Arbitrary command id and payload, for protocol exploration.
    Raw {
        /// Command id byte.
        command_id: u8,
        /// All 8 payload bytes.
        payload: [u8; 8],
    },
}

impl Command {
    /// Get the command id byte for this command.
    pub fn code(&self) -> u8 {
        match self {
            Command::Goto { .. } => CMD_GOTO,
            Command::Sync { .. } => CMD_SYNC,
            Command::Park => CMD_PARK,
            Command::StopMotion => CMD_STOP_MOTION,
            Command::Disconnect => CMD_DISCONNECT,
            Command::GetSiteLocation => CMD_GET_SITE_LOCATION,
            Command::SetSiteLocation { .. } => CMD_SET_SITE_LOCATION,
            Command::SetDateTime { .. } => CMD_SET_DATE_TIME,
            Command::Move { direction } => direction.code(),
            Command::Raw { command_id, .. } => *command_id,
        }
    }

    /// Encode the command as a wire frame. Never fails.
    pub fn encode(&self) -> RawFrame {
        match self {
            Command::Goto { ra, dec } => coordinate_frame(CMD_GOTO, *ra, *dec),

            Command::Sync { ra, dec } => coordinate_frame(CMD_SYNC, *ra, *dec),

            Command::Park => simple_frame(CMD_PARK),

            Command::StopMotion => simple_frame(CMD_STOP_MOTION),

            Command::Disconnect => simple_frame(CMD_DISCONNECT),

            Command::GetSiteLocation => simple_frame(CMD_GET_SITE_LOCATION),

            // Site coordinates travel as the same float pair as pointing
            // coordinates, not as six raw component bytes.
            Command::SetSiteLocation {
                latitude,
                longitude,
            } => coordinate_frame(CMD_SET_SITE_LOCATION, *latitude, *longitude),

            Command::SetDateTime {
                hours,
                minutes,
                seconds,
                day,
                month,
                year,
            } => date_time_frame(*hours, *minutes, *seconds, *day, *month, *year),

            Command::Move { direction } => raw_frame(direction.code(), MOVE_COMMAND_PAYLOAD),

            Command::Raw {
                command_id,
                payload,
            } => raw_frame(*command_id, *payload),
        }
    }
}
