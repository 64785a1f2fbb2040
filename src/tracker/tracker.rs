use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use log::{debug, error, info, warn};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use crate::tracker::structs::client_session::ClientSession;
use crate::tracker::structs::tracker_state::TrackerState;
use crate::transport::structs::tcp_transport::TcpTransport;

/// Binds the control listener and spawns one session task per accepted
/// connection until the shutdown channel flips.
pub async fn tracker_service(addr: SocketAddr, state: Arc<TrackerState>, mut rx: tokio::sync::watch::Receiver<bool>) -> JoinHandle<()>
{
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(error) => {
            error!("Could not listen on the control port: {error}");
            exit(1);
        }
    };

    info!("[TRACKER] Starting a control listener on {addr}");
    tokio::spawn(async move {
        loop {
            tokio::select! {
                accepted = listener.accept() => {
                    match accepted {
                        Ok((stream, remote)) => {
                            debug!("[TRACKER] Accepted control connection from {remote}");
                            let state = state.clone();
                            tokio::spawn(async move {
                                match TcpTransport::from_stream(stream) {
                                    Ok(transport) => ClientSession::new(state, transport).run().await,
                                    Err(error) => warn!("[TRACKER] Dropping connection from {remote}: {error}"),
                                }
                            });
                        }
                        Err(error) => {
                            warn!("[TRACKER] Accept failed: {error}");
                        }
                    }
                }
                _ = rx.changed() => {
                    if *rx.borrow() {
                        info!("[TRACKER] Shutting down control listener on {addr}");
                        break;
                    }
                }
            }
        }
    })
}
