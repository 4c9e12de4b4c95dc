//! Exos II GoTo mount serial protocol
//!
//! This crate provides types and utilities for talking to the Bresser Exos
//! II GoTo handbox controller over its serial link. The protocol is a
//! fixed-length binary framing: every message, in both directions, is a
//! 13-byte frame opened by a constant 4-byte signature, followed by one
//! command id byte and 8 payload bytes (typically two packed little-endian
//! floats).
//!
//! # Protocol Overview
//!
//! - **Commands** (host → controller): built by [`Command`], one variant per
//!   operation the controller accepts.
//! - **Reports** (controller → host): the controller streams pointing
//!   reports continuously and answers site-location requests; both arrive as
//!   the same frame shape and are decoded by [`DecodedFrame`].
//! - **Resynchronization**: frames carry no length or checksum, so
//!   [`FrameCodec`] recovers alignment by scanning the receive buffer for
//!   the frame signature and dropping whatever precedes it.
//!
//! There is no acknowledgement, retry, or error reporting on the wire; an
//! invalid command simply silences the controller's report stream.
//!
//! # Example
//!
//! ```rust,ignore
//! use exos_protocol::{Command, DecodedFrame, FrameCodec, SexagesimalAngle};
//!
//! // Build a GOTO command frame.
//! let frame = Command::Goto {
//!     ra: SexagesimalAngle::new(5, 35, 17),
//!     dec: SexagesimalAngle::new(-5, -23, -28),
//! }
//! .encode();
//!
//! // Recover frames from received bytes.
//! let mut codec = FrameCodec::new();
//! codec.push(&received);
//! for raw in codec.drain() {
//!     let report = DecodedFrame::decode(&raw)?;
//! }
//! ```

mod commands;
mod constants;
mod error;
mod frame;
mod responses;
mod types;

pub use commands::*;
pub use constants::*;
pub use error::*;
pub use frame::*;
pub use responses::*;
pub use types::*;
