use log::info;
use crate::accounts::structs::transfer_stats::TransferStats;
use crate::common::common::file_kind;
use crate::config::structs::peer_config::PeerConfig;
use crate::peer::enums::peer_error::PeerError;
use crate::peer::structs::peer_node::PeerNode;
use crate::peer::structs::shared_folder::SharedFolder;
use crate::registry::structs::peer_record::PeerRecord;
use crate::transport::structs::tcp_transport::TcpTransport;
use crate::transport::traits::transport::Transport;

impl PeerNode {
    /// Opens the control connection to the tracker.
    pub async fn connect(config: &PeerConfig) -> Result<PeerNode, PeerError>
    {
        let control = TcpTransport::connect(&config.tracker_address).await?;
        info!("[PEER] Connected to tracker at {}", config.tracker_address);
        Ok(PeerNode {
            config: config.clone(),
            control,
            username: None,
        })
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Sends one request line and matches the reply against the expected
    /// success token. Any other reply is surfaced verbatim as a refusal.
    async fn request(&mut self, line: &str, success_token: &str) -> Result<String, PeerError>
    {
        self.control.send_line(line).await?;
        let reply = self.control.read_line().await?
            .ok_or_else(|| PeerError::Tracker(String::from("tracker closed the connection")))?;
        if reply == success_token {
            return Ok(String::new());
        }
        match reply.strip_prefix(&format!("{success_token} ")) {
            Some(payload) => Ok(payload.to_string()),
            None => Err(PeerError::Tracker(reply)),
        }
    }

    /// Authenticates and returns the persisted download/upload counters
    /// from the login payload.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(TransferStats, TransferStats), PeerError>
    {
        let payload = self.request(&format!("LOGIN {username} {password}"), "LOGIN_SUCCESS").await?;
        let fields: Vec<&str> = payload.split(' ').collect();

        let mut downloads = TransferStats::default();
        let mut uploads = TransferStats::default();
        if let Some(csv) = fields.get(2) {
            downloads.apply_csv(csv);
        }
        if let Some(csv) = fields.get(3) {
            uploads.apply_csv(csv);
        }

        self.username = Some(username.to_string());
        info!("[PEER] Logged in as {username}");
        Ok((downloads, uploads))
    }

    pub async fn signup(&mut self, username: &str, password: &str) -> Result<(), PeerError>
    {
        self.request(&format!("SIGNUP {username} {password}"), "SIGNUP_SUCCESS").await?;
        Ok(())
    }

    /// Announces the transfer listener port; the tracker derives the
    /// address from the connection's remote IP.
    pub async fn register(&mut self) -> Result<String, PeerError>
    {
        let port = self.config.listen_port;
        let address = self.request(&format!("REGISTER {port}"), "REGISTER_SUCCESS").await?;
        info!("[PEER] Registered as {address}");
        Ok(address)
    }

    /// Shares every file currently in the shared folder.
    pub async fn announce_shared(&mut self, folder: &SharedFolder) -> Result<usize, PeerError>
    {
        let names = folder.list_files().await?;
        for name in &names {
            self.request(&format!("SHARE {name}"), "SHARE_SUCCESS").await?;
            info!("[PEER] Sharing {name} ({})", file_kind(name));
        }
        Ok(names.len())
    }

    pub async fn search(&mut self, term: &str) -> Result<Vec<(String, Vec<PeerRecord>)>, PeerError>
    {
        let payload = self.request(&format!("SEARCH {term}"), "SEARCH_SUCCESS").await?;
        Ok(Self::parse_search(&payload))
    }

    pub async fn list_peers(&mut self) -> Result<Vec<PeerRecord>, PeerError>
    {
        let payload = self.request("LIST_PEERS", "LIST_PEERS_SUCCESS").await?;
        Ok(Self::parse_peers(&payload))
    }

    pub async fn update_stats(&mut self, downloads: &TransferStats, uploads: &TransferStats) -> Result<(), PeerError>
    {
        self.request(
            &format!("UPDATE_STATS {} {}", downloads.to_csv(), uploads.to_csv()),
            "UPDATE_STATS_SUCCESS",
        ).await?;
        Ok(())
    }

    /// Graceful session end; the tracker sends no reply for this one.
    pub async fn unregister(&mut self) -> Result<(), PeerError>
    {
        self.control.send_line("UNREGISTER").await?;
        self.control.close().await?;
        Ok(())
    }

    pub(crate) fn parse_search(payload: &str) -> Vec<(String, Vec<PeerRecord>)>
    {
        let mut results = Vec::new();
        for file_part in payload.split(';').filter(|part| !part.is_empty()) {
            let Some((name, peers_part)) = file_part.split_once('=') else {
                continue;
            };
            let peers = peers_part.split(',')
                .filter_map(|token| {
                    let (username, address) = token.split_once(':')?;
                    Some(PeerRecord::new(username, address))
                })
                .collect();
            results.push((name.to_string(), peers));
        }
        results
    }

    pub(crate) fn parse_peers(payload: &str) -> Vec<PeerRecord>
    {
        payload.split(',')
            .filter_map(|token| {
                let (username, address) = token.split_once('=')?;
                Some(PeerRecord::new(username, address))
            })
            .collect()
    }
}
