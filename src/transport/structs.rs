//! Transport data structures.

/// Connection-oriented transport over TCP.
pub mod tcp_transport;

/// Datagram transport over UDP with a receive timeout.
pub mod udp_transport;
