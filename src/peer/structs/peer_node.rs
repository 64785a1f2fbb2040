use crate::config::structs::peer_config::PeerConfig;
use crate::transport::structs::tcp_transport::TcpTransport;

/// The peer's control connection to the tracker.
///
/// Wraps the wire protocol into typed calls; the transfer listener and
/// query responder run as separate service loops.
pub struct PeerNode {
    pub(crate) config: PeerConfig,
    pub(crate) control: TcpTransport,
    pub(crate) username: Option<String>,
}
