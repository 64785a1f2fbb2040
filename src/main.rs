use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info};
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use peerdex::common::common::setup_logging;
use peerdex::config::structs::configuration::Configuration;
use peerdex::structs::Cli;
use peerdex::tracker::structs::tracker_state::TrackerState;
use peerdex::tracker::tracker::tracker_service;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let state = Arc::new(TrackerState::new(config.clone()));

            if let Err(error) = state.accounts.load().await {
                error!("[BOOT] Could not load the user table: {error}");
                exit(101);
            }

            let tokio_shutdown = Shutdown::new().expect("shutdown creation works on first call");
            let (tracker_tx, tracker_rx) = tokio::sync::watch::channel(false);

            let mut tracker_futures = Vec::new();
            for tracker_server_object in &config.tracker_server {
                if tracker_server_object.enabled {
                    let address: SocketAddr = tracker_server_object.bind_address.parse().unwrap();

                    let tracker_future = tracker_service(
                        address,
                        state.clone(),
                        tracker_rx.clone()
                    ).await;

                    tracker_futures.push(tracker_future);
                }
            }

            let stats_handler = tokio_shutdown.clone();
            let state_spawn_stats = state.clone();
            let console_interval = config.log_console_interval;
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");

            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let stats = state_spawn_stats.get_stats();

                            info!(
                                "[STATS] Sessions: {} - Logins: {} - Signups: {} - Searches: {} - Shares: {} | \
                                Peers: {} - Files: {} - Kicks: {} - Persist failures: {}",
                                stats.sessions_active, stats.logins_handled, stats.signups_handled,
                                stats.searches_handled, stats.shares_handled, state_spawn_stats.registry.peer_count(),
                                state_spawn_stats.registry.file_count(), stats.force_disconnects, stats.persist_failures
                            );
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");

                    let _ = tracker_tx.send(true);

                    match try_join_all(tracker_futures).await {
                        Ok(_) => {}
                        Err(error) => {
                            error!("Errors happened on shutting down control listeners: {error}");
                        }
                    }

                    tokio_shutdown.handle().await;

                    info!("Saving final data to the user table...");
                    if let Err(error) = state.accounts.save_users().await {
                        error!("Could not save the user table: {error}");
                    }
                    if let Err(error) = state.accounts.save_admin_stats().await {
                        error!("Could not save the administrator stats: {error}");
                    }

                    info!("Server shutting down completed");
                    Ok(())
                }
            }
        })
}
