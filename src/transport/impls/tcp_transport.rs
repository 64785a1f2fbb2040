use std::net::SocketAddr;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use crate::transport::enums::transport_error::TransportError;
use crate::transport::structs::tcp_transport::TcpTransport;
use crate::transport::traits::transport::Transport;

impl TcpTransport {
    #[tracing::instrument(level = "debug")]
    pub async fn connect(addr: &str) -> Result<TcpTransport, TransportError>
    {
        let stream = TcpStream::connect(addr).await?;
        Self::from_stream(stream)
    }

    pub fn from_stream(stream: TcpStream) -> Result<TcpTransport, TransportError>
    {
        let remote_addr = stream.peer_addr()?;
        let (read_half, write_half) = stream.into_split();
        Ok(TcpTransport {
            reader: BufReader::new(read_half),
            writer: write_half,
            remote_addr,
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
}

#[async_trait]
impl Transport for TcpTransport {
    async fn send_line(&mut self, line: &str) -> Result<(), TransportError>
    {
        self.guard()?;
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }

    async fn read_line(&mut self) -> Result<Option<String>, TransportError>
    {
        self.guard()?;
        let mut line = String::new();
        let read = self.reader.read_line(&mut line).await?;
        if read == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    async fn send_bytes(&mut self, data: &[u8]) -> Result<(), TransportError>
    {
        self.guard()?;
        self.writer.write_all(data).await?;
        self.writer.flush().await?;
        Ok(())
    }

    async fn read_bytes(&mut self, buffer: &mut [u8]) -> Result<usize, TransportError>
    {
        self.guard()?;
        Ok(self.reader.read(buffer).await?)
    }

    async fn close(&mut self) -> Result<(), TransportError>
    {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        let _ = self.writer.shutdown().await;
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

impl std::fmt::Debug for TcpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TcpTransport")
            .field("remote_addr", &self.remote_addr)
            .field("closed", &self.closed)
            .finish()
    }
}
