use std::net::SocketAddr;
use std::path::Path;
use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use log::{error, info, warn};
use tokio::runtime::Builder;
use peerdex::common::common::setup_logging;
use peerdex::config::structs::configuration::Configuration;
use peerdex::peer::peer::{query_service, transfer_service};
use peerdex::peer::structs::peer_node::PeerNode;
use peerdex::peer::structs::shared_folder::SharedFolder;

#[derive(Parser)]
#[command(author, version, about = "Peerdex peer node", long_about = None)]
pub struct PeerCli {
    /// Create config.toml file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// Username for the tracker session.
    #[arg(long)]
    pub username: String,

    /// Password for the tracker session.
    #[arg(long)]
    pub password: String,

    /// Sign the account up before logging in.
    #[arg(long)]
    pub signup: bool
}

fn main() -> std::io::Result<()>
{
    let args = PeerCli::parse();

    let config = match Configuration::load_from_file(args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} peer node - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let peer_config = &config.peer_config;

            if let Err(error) = tokio::fs::create_dir_all(&peer_config.shared_folder).await {
                error!("[BOOT] Could not create the shared folder: {error}");
                exit(101);
            }
            if let Err(error) = tokio::fs::create_dir_all(&peer_config.download_folder).await {
                error!("[BOOT] Could not create the download folder: {error}");
                exit(101);
            }

            let folder = SharedFolder::new(Path::new(&peer_config.shared_folder));
            let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);

            let transfer_addr: SocketAddr = format!("{}:{}", peer_config.listen_address, peer_config.listen_port)
                .parse()
                .unwrap();
            let query_addr: SocketAddr = format!("{}:{}", peer_config.listen_address, peer_config.listen_port + 1)
                .parse()
                .unwrap();

            let transfer_future = transfer_service(
                transfer_addr,
                folder.clone(),
                peer_config.chunk_size,
                shutdown_rx.clone()
            ).await;

            let query_future = query_service(
                query_addr,
                folder.clone(),
                shutdown_rx.clone()
            ).await;

            let mut node = match PeerNode::connect(peer_config).await {
                Ok(node) => node,
                Err(error) => {
                    error!("[BOOT] Could not reach the tracker: {error}");
                    exit(1);
                }
            };

            if args.signup {
                if let Err(error) = node.signup(&args.username, &args.password).await {
                    warn!("[BOOT] Signup refused: {error}");
                }
            }

            if let Err(error) = node.login(&args.username, &args.password).await {
                error!("[BOOT] Login failed: {error}");
                exit(1);
            }
            if let Err(error) = node.register().await {
                error!("[BOOT] Register failed: {error}");
                exit(1);
            }
            match node.announce_shared(&folder).await {
                Ok(count) => info!("[BOOT] Announced {count} shared files"),
                Err(error) => {
                    error!("[BOOT] Announcing shared files failed: {error}");
                    exit(1);
                }
            }

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");

                    let _ = shutdown_tx.send(true);
                    if let Err(error) = node.unregister().await {
                        warn!("Unregister on shutdown failed: {error}");
                    }

                    let _ = transfer_future.await;
                    let _ = query_future.await;

                    info!("Peer node shutting down completed");
                }
            }

            Ok(())
        })
}
