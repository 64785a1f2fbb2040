use async_trait::async_trait;
use crate::transport::enums::transport_error::TransportError;

/// A bidirectional channel carrying newline-delimited text and raw bytes.
///
/// `read_line` returns `None` on end of stream; `read_bytes` returns `0`.
/// Implementations must make `close` idempotent and fail every call after it
/// with [`TransportError::Closed`].
#[async_trait]
pub trait Transport: Send {
    async fn send_line(&mut self, line: &str) -> Result<(), TransportError>;

    async fn read_line(&mut self) -> Result<Option<String>, TransportError>;

    async fn send_bytes(&mut self, data: &[u8]) -> Result<(), TransportError>;

    async fn read_bytes(&mut self, buffer: &mut [u8]) -> Result<usize, TransportError>;

    async fn close(&mut self) -> Result<(), TransportError>;

    fn is_closed(&self) -> bool;
}
