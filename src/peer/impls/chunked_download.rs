use std::path::{Path, PathBuf};
use log::{info, warn};
use tokio::io::AsyncWriteExt;
use crate::peer::enums::peer_error::PeerError;
use crate::peer::structs::chunked_download::ChunkedDownload;
use crate::transport::structs::tcp_transport::TcpTransport;
use crate::transport::traits::transport::Transport;

impl ChunkedDownload {
    pub fn new(chunk_size: usize, download_folder: &Path) -> ChunkedDownload {
        ChunkedDownload {
            chunk_size,
            download_folder: PathBuf::from(download_folder),
        }
    }

    /// Fetches `file_name` from the peer at `peer_address` (`host:port`).
    ///
    /// Sends `DOWNLOAD <fileName>` and copies the response byte stream to
    /// the local file in `chunk_size` pieces until the remote closes. A
    /// zero-byte result is a warning, not an error: the source peer may
    /// simply not have answered with data. Returns the bytes received.
    pub async fn fetch(&self, peer_address: &str, file_name: &str) -> Result<u64, PeerError>
    {
        if peer_address.parse::<std::net::SocketAddr>().is_err() {
            return Err(PeerError::InvalidPeerAddress(peer_address.to_string()));
        }

        let mut transport = TcpTransport::connect(peer_address).await?;
        transport.send_line(&format!("DOWNLOAD {file_name}")).await?;

        tokio::fs::create_dir_all(&self.download_folder).await?;
        let target = self.download_folder.join(file_name);
        let mut output = tokio::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&target)
            .await?;

        let mut buffer = vec![0u8; self.chunk_size];
        let mut total: u64 = 0;
        loop {
            let read = transport.read_bytes(&mut buffer).await?;
            if read == 0 {
                break;
            }
            output.write_all(&buffer[..read]).await?;
            total += read as u64;
        }
        output.flush().await?;
        transport.close().await?;

        if total == 0 {
            warn!("[TRANSFER] Download of {file_name} from {peer_address} returned no data");
        } else {
            info!("[TRANSFER] Downloaded {file_name} ({total} bytes) from {peer_address}");
        }
        Ok(total)
    }
}
