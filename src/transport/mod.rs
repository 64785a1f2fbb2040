//! Line-oriented command and raw byte stream transports.
//!
//! The control protocol, the transfer channel and the peer query channel all
//! speak through the [`traits::transport::Transport`] trait: a newline
//! delimited text channel plus a raw byte channel over the same connection.
//!
//! Two implementations exist:
//!
//! - `TcpTransport` - connection oriented; multiplexes the textual command
//!   channel and the raw byte stream of a file transfer over one connection
//! - `UdpTransport` - datagram based; one packet per call and a configurable
//!   receive timeout, used for best-effort peer queries that must not block
//!   indefinitely
//!
//! Closing either transport is idempotent; any call after `close` fails with
//! a `TransportError::Closed`.

/// Transport error kinds.
pub mod enums;

/// Transport data structures.
pub mod structs;

/// Implementation blocks for the transports.
pub mod impls;

/// The transport contract.
pub mod traits;
