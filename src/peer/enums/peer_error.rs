use thiserror::Error;
use crate::transport::enums::transport_error::TransportError;

#[derive(Error, Debug)]
pub enum PeerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("tracker refused: {0}")]
    Tracker(String),

    #[error("invalid peer address: {0}")]
    InvalidPeerAddress(String),
}
