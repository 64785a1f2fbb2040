use std::net::SocketAddr;
use std::process::exit;
use std::time::Duration;
use log::{debug, error, info, warn};
use tokio::net::{TcpListener, UdpSocket};
use tokio::task::JoinHandle;
use crate::peer::structs::shared_folder::SharedFolder;
use crate::transport::structs::tcp_transport::TcpTransport;
use crate::transport::structs::udp_transport::UdpTransport;
use crate::transport::traits::transport::Transport;

/// Sentinel returned by `FILESIZE` for files this peer does not have.
pub const FILESIZE_NOT_FOUND: &str = "-1";

/// The transfer listener: answers one `DOWNLOAD <fileName>` per accepted
/// connection with the whole file as raw bytes, then closes.
pub async fn transfer_service(addr: SocketAddr, folder: SharedFolder, chunk_size: usize, mut rx: tokio::sync::watch::Receiver<bool>) -> JoinHandle<()>
{
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(error) => {
            error!("Could not listen on the transfer port: {error}");
            exit(1);
        }
    };

    info!("[TRANSFER] Starting a transfer listener on {addr}");
    tokio::spawn(async move {
        loop {
            tokio::select! {
                accepted = listener.accept() => {
                    match accepted {
                        Ok((stream, remote)) => {
                            let folder = folder.clone();
                            tokio::spawn(async move {
                                handle_transfer(stream, remote, folder, chunk_size).await;
                            });
                        }
                        Err(error) => {
                            warn!("[TRANSFER] Accept failed: {error}");
                        }
                    }
                }
                _ = rx.changed() => {
                    if *rx.borrow() {
                        info!("[TRANSFER] Shutting down transfer listener on {addr}");
                        break;
                    }
                }
            }
        }
    })
}

async fn handle_transfer(stream: tokio::net::TcpStream, remote: SocketAddr, folder: SharedFolder, chunk_size: usize)
{
    let mut transport = match TcpTransport::from_stream(stream) {
        Ok(transport) => transport,
        Err(error) => {
            warn!("[TRANSFER] Dropping connection from {remote}: {error}");
            return;
        }
    };

    let request = match transport.read_line().await {
        Ok(Some(line)) => line,
        _ => {
            let _ = transport.close().await;
            return;
        }
    };

    let Some(file_name) = request.strip_prefix("DOWNLOAD ") else {
        info!("[TRANSFER] Ignoring malformed request from {remote}: {request}");
        let _ = transport.close().await;
        return;
    };

    let Some(path) = folder.resolve(file_name) else {
        info!("[TRANSFER] Refusing request for {file_name} from {remote}");
        let _ = transport.close().await;
        return;
    };

    let mut file = match tokio::fs::File::open(&path).await {
        Ok(file) => file,
        Err(_) => {
            info!("[TRANSFER] {remote} requested missing file {file_name}");
            let _ = transport.close().await;
            return;
        }
    };

    let mut buffer = vec![0u8; chunk_size];
    let mut total: u64 = 0;
    loop {
        let read = match tokio::io::AsyncReadExt::read(&mut file, &mut buffer).await {
            Ok(read) => read,
            Err(error) => {
                warn!("[TRANSFER] Reading {file_name} failed: {error}");
                break;
            }
        };
        if read == 0 {
            break;
        }
        if let Err(error) = transport.send_bytes(&buffer[..read]).await {
            debug!("[TRANSFER] {remote} went away mid-transfer of {file_name}: {error}");
            break;
        }
        total += read as u64;
    }

    let _ = transport.close().await;
    info!("[TRANSFER] Served {file_name} ({total} bytes) to {remote}");
}

/// The query responder: answers `LIST_FILES` and `FILESIZE <name>`
/// datagrams. Bound to the transfer port plus one; per-request errors are
/// swallowed because the channel is best-effort by design.
pub async fn query_service(addr: SocketAddr, folder: SharedFolder, mut rx: tokio::sync::watch::Receiver<bool>) -> JoinHandle<()>
{
    let socket = match UdpSocket::bind(addr).await {
        Ok(socket) => socket,
        Err(error) => {
            error!("Could not listen on the query port: {error}");
            exit(1);
        }
    };

    info!("[QUERY] Starting a query responder on {addr}");
    tokio::spawn(async move {
        let mut buffer = [0u8; 2048];
        loop {
            tokio::select! {
                received = socket.recv_from(&mut buffer) => {
                    let (size, remote) = match received {
                        Ok(result) => result,
                        Err(error) => {
                            debug!("[QUERY] Receive failed: {error}");
                            continue;
                        }
                    };
                    let request = String::from_utf8_lossy(&buffer[..size]).trim().to_string();
                    if let Some(response) = answer_query(&request, &folder).await {
                        if let Err(error) = socket.send_to(response.as_bytes(), remote).await {
                            debug!("[QUERY] Reply to {remote} failed: {error}");
                        }
                    } else {
                        debug!("[QUERY] Ignoring unknown request from {remote}: {request}");
                    }
                }
                _ = rx.changed() => {
                    if *rx.borrow() {
                        info!("[QUERY] Shutting down query responder on {addr}");
                        break;
                    }
                }
            }
        }
    })
}

async fn answer_query(request: &str, folder: &SharedFolder) -> Option<String>
{
    if request == "LIST_FILES" {
        let names = folder.list_files().await.unwrap_or_default();
        return Some(names.join(","));
    }
    if let Some(name) = request.strip_prefix("FILESIZE ") {
        return Some(match folder.file_size(name).await {
            Some(size) => size.to_string(),
            None => FILESIZE_NOT_FOUND.to_string(),
        });
    }
    None
}

/// One best-effort datagram query against another peer's responder.
///
/// Timeouts and transport failures come back as `None` rather than
/// propagating; a non-responding peer must not hang a search.
pub async fn query_peer(addr: &str, request: &str, timeout: Duration) -> Option<String>
{
    let mut transport = match UdpTransport::connect(addr, timeout).await {
        Ok(transport) => transport,
        Err(error) => {
            debug!("[QUERY] Could not reach {addr}: {error}");
            return None;
        }
    };
    if let Err(error) = transport.send_line(request).await {
        debug!("[QUERY] Sending to {addr} failed: {error}");
        return None;
    }
    match transport.read_line().await {
        Ok(reply) => reply,
        Err(error) => {
            debug!("[QUERY] No answer from {addr}: {error}");
            None
        }
    }
}

/// Remote file listing via the query responder, `None` when unreachable.
pub async fn list_remote_files(addr: &str, timeout: Duration) -> Option<Vec<String>>
{
    let reply = query_peer(addr, "LIST_FILES", timeout).await?;
    if reply.is_empty() {
        return Some(Vec::new());
    }
    Some(reply.split(',').map(str::to_string).collect())
}

/// Remote file size via the query responder, `None` when unreachable or
/// not offered.
pub async fn remote_file_size(addr: &str, name: &str, timeout: Duration) -> Option<u64>
{
    let reply = query_peer(addr, &format!("FILESIZE {name}"), timeout).await?;
    if reply == FILESIZE_NOT_FOUND {
        return None;
    }
    reply.parse::<u64>().ok()
}
