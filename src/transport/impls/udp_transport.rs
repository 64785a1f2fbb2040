use std::net::SocketAddr;
use std::time::Duration;
use async_trait::async_trait;
use tokio::net::UdpSocket;
use tokio::time::timeout;
use crate::transport::enums::transport_error::TransportError;
use crate::transport::structs::udp_transport::UdpTransport;
use crate::transport::traits::transport::Transport;

const MAX_DATAGRAM_SIZE: usize = 65507;

impl UdpTransport {
    #[tracing::instrument(level = "debug")]
    pub async fn connect(remote: &str, read_timeout: Duration) -> Result<UdpTransport, TransportError>
    {
        let remote_addr: SocketAddr = remote.parse()
            .map_err(|_| TransportError::Io(std::io::Error::other(format!("invalid remote address: {remote}"))))?;
        let bind_addr = if remote_addr.is_ipv4() { "0.0.0.0:0" } else { "[::]:0" };
        let socket = UdpSocket::bind(bind_addr).await?;
        socket.connect(remote_addr).await?;
        Ok(UdpTransport {
            socket,
            remote_addr,
            read_timeout,
            closed: false,
        })
    }

    pub fn remote_addr(&self) -> SocketAddr {
        self.remote_addr
    }

    fn guard(&self) -> Result<(), TransportError> {
        if self.closed {
            return Err(TransportError::Closed);
        }
        Ok(())
    }

    async fn recv_packet(&self, buffer: &mut [u8]) -> Result<usize, TransportError>
    {
        match timeout(self.read_timeout, self.socket.recv(buffer)).await {
            Ok(received) => Ok(received?),
            Err(_) => Err(TransportError::Timeout),
        }
    }
}

#[async_trait]
impl Transport for UdpTransport {
    async fn send_line(&mut self, line: &str) -> Result<(), TransportError>
    {
        self.guard()?;
        self.socket.send(line.as_bytes()).await?;
        Ok(())
    }

    async fn read_line(&mut self) -> Result<Option<String>, TransportError>
    {
        self.guard()?;
        let mut buffer = vec![0u8; MAX_DATAGRAM_SIZE];
        let received = self.recv_packet(&mut buffer).await?;
        let mut line = String::from_utf8_lossy(&buffer[..received]).to_string();
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    async fn send_bytes(&mut self, data: &[u8]) -> Result<(), TransportError>
    {
        self.guard()?;
        self.socket.send(data).await?;
        Ok(())
    }

    async fn read_bytes(&mut self, buffer: &mut [u8]) -> Result<usize, TransportError>
    {
        self.guard()?;
        self.recv_packet(buffer).await
    }

    async fn close(&mut self) -> Result<(), TransportError>
    {
        self.closed = true;
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

impl std::fmt::Debug for UdpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UdpTransport")
            .field("remote_addr", &self.remote_addr)
            .field("read_timeout", &self.read_timeout)
            .field("closed", &self.closed)
            .finish()
    }
}
