//! Implementation blocks for the transports.

/// `TcpTransport` constructors and `Transport` impl.
pub mod tcp_transport;

/// `UdpTransport` constructors and `Transport` impl.
pub mod udp_transport;
