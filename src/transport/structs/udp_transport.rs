use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;

/// Datagram transport aimed at a single remote peer.
///
/// One packet per send/read call. Reads honor `read_timeout` so a silent
/// peer cannot hang a best-effort query.
pub struct UdpTransport {
    pub(crate) socket: UdpSocket,
    pub(crate) remote_addr: SocketAddr,
    pub(crate) read_timeout: Duration,
    pub(crate) closed: bool,
}
