use std::net::SocketAddr;
use tokio::io::BufReader;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};

/// Connection-oriented transport multiplexing the textual command channel
/// and the raw byte channel over one TCP connection.
///
/// The buffered read half serves both `read_line` and `read_bytes`, so a
/// command reply followed by a byte stream is consumed in order without
/// losing buffered data between the two modes.
pub struct TcpTransport {
    pub(crate) reader: BufReader<OwnedReadHalf>,
    pub(crate) writer: OwnedWriteHalf,
    pub(crate) remote_addr: SocketAddr,
    pub(crate) closed: bool,
}
