//! Session and dispatch layer for the Exos II GoTo mount.
//!
//! [`exos_protocol`] is pure data transformation; this crate adds the two
//! things an application needs around it:
//!
//! - a [`Transport`] seam in front of the physical link, with send gated on
//!   its connected state, and
//! - a [`MountSession`] that owns the receive buffer, runs the frame
//!   scanner, and routes decoded frames into typed [`MountEvent`]s by their
//!   id byte (pointing report vs. site-location report).
//!
//! The session is synchronous and single-threaded: the transport's receive
//! path calls [`MountSession::feed`] and handles the returned events however
//! it likes. No callbacks, no shared state beyond the one buffer.

mod session;
mod transport;

pub use session::{MountEvent, MountSession};
pub use transport::{ChannelTransport, Transport};
