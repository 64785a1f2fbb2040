use std::sync::Arc;
use log::{debug, info, warn};
use crate::accounts::enums::account_error::AccountError;
use crate::registry::structs::peer_record::PeerRecord;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::command::Command;
use crate::tracker::enums::session_flow::SessionFlow;
use crate::tracker::structs::client_session::ClientSession;
use crate::tracker::structs::tracker_state::TrackerState;
use crate::transport::structs::tcp_transport::TcpTransport;
use crate::transport::traits::transport::Transport;

impl ClientSession {
    pub fn new(state: Arc<TrackerState>, transport: TcpTransport) -> ClientSession {
        ClientSession {
            state,
            transport,
            identity: None,
            peer: None,
            handle: None,
        }
    }

    /// Drives the session until the connection closes, an `UNREGISTER` or
    /// self-delete arrives, or another task force-disconnects it. The
    /// cleanup path at the end runs exactly once, whatever the cause.
    pub async fn run(mut self)
    {
        self.state.update_stats(StatsEvent::SessionsActive, 1);
        let remote = self.transport.remote_addr();
        debug!("[SESSION] Session started for {remote}");

        loop {
            let read = match self.handle.clone() {
                Some(handle) => {
                    tokio::select! {
                        read = self.transport.read_line() => read,
                        _ = handle.kicked() => {
                            let reason = handle.take_reason()
                                .unwrap_or_else(|| String::from("disconnected by administrator"));
                            let _ = self.transport.send_line(&format!("FORCE_DISCONNECT {reason}")).await;
                            self.state.update_stats(StatsEvent::ForceDisconnects, 1);
                            break;
                        }
                    }
                }
                None => self.transport.read_line().await,
            };

            let line = match read {
                Ok(Some(line)) => line,
                Ok(None) => {
                    debug!("[SESSION] {remote} closed the connection");
                    break;
                }
                Err(error) => {
                    debug!("[SESSION] Connection to {remote} broke: {error}");
                    break;
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            match self.handle_line(&line).await {
                SessionFlow::Continue => {}
                SessionFlow::End => break,
            }
        }

        self.cleanup().await;
        debug!("[SESSION] Session ended for {remote}");
    }

    async fn handle_line(&mut self, line: &str) -> SessionFlow
    {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(reason) => {
                self.reply(&format!("ERROR {reason}")).await;
                return SessionFlow::Continue;
            }
        };

        match command {
            Command::Login { username, password } => self.handle_login(&username, &password).await,
            Command::Signup { username, password } => self.handle_signup(&username, &password).await,
            Command::Register { port } => self.handle_register(port).await,
            Command::Share { file_name } => self.handle_share(&file_name).await,
            Command::Search { term } => self.handle_search(&term).await,
            Command::ListPeers => self.handle_list_peers().await,
            Command::UpdateStats { downloads, uploads } => self.handle_update_stats(&downloads, &uploads).await,
            Command::RemoveUser { username } => self.handle_remove_user(&username).await,
            Command::ChangePassword { old_password, new_password } => {
                self.handle_change_password(&old_password, &new_password).await
            }
            Command::DeleteAccount { username, password } => self.handle_delete_account(&username, &password).await,
            Command::Unregister => SessionFlow::End,
        }
    }

    async fn handle_login(&mut self, username: &str, password: &str) -> SessionFlow
    {
        if self.identity.is_some() {
            self.reply("ERROR already logged in").await;
            return SessionFlow::Continue;
        }

        /* the duplicate-session check comes before authentication: a second
           login fails the same way with or without the right password */
        if self.state.sessions.contains(username) {
            self.reply("LOGIN_FAIL already logged in elsewhere").await;
            return SessionFlow::Continue;
        }

        let identity = match self.state.accounts.authenticate(username, password) {
            Some(identity) => identity,
            None => {
                self.reply("LOGIN_FAIL invalid username or password").await;
                return SessionFlow::Continue;
            }
        };

        let handle = match self.state.sessions.insert(username) {
            Some(handle) => handle,
            None => {
                self.reply("LOGIN_FAIL already logged in elsewhere").await;
                return SessionFlow::Continue;
            }
        };

        info!("[SESSION] {username} logged in from {}", self.transport.remote_addr());
        self.state.update_stats(StatsEvent::LoginsHandled, 1);

        let payload = format!(
            "{} {} {} {}",
            identity.username,
            identity.is_admin(),
            identity.downloads.to_csv(),
            identity.uploads.to_csv()
        );
        self.identity = Some(identity);
        self.handle = Some(handle);
        self.reply(&format!("LOGIN_SUCCESS {payload}")).await;
        SessionFlow::Continue
    }

    async fn handle_signup(&mut self, username: &str, password: &str) -> SessionFlow
    {
        match self.state.accounts.create(username, password).await {
            Ok(_) => {
                self.state.update_stats(StatsEvent::SignupsHandled, 1);
                self.reply("SIGNUP_SUCCESS").await;
            }
            Err(error) => {
                if matches!(error, AccountError::Persist(_) | AccountError::Io(_)) {
                    self.state.update_stats(StatsEvent::PersistFailures, 1);
                }
                self.reply(&format!("SIGNUP_FAIL {error}")).await;
            }
        }
        SessionFlow::Continue
    }

    async fn handle_register(&mut self, port: u16) -> SessionFlow
    {
        let Some(identity) = self.identity.clone() else {
            self.reply("ERROR not logged in").await;
            return SessionFlow::Continue;
        };

        /* a repeated REGISTER replaces the previous record, shares included */
        if let Some(previous) = self.peer.take() {
            let before = self.state.registry.file_count();
            self.state.registry.unregister_peer(&previous);
            let after = self.state.registry.file_count();
            self.state.update_stats(StatsEvent::FilesIndexed, after as i64 - before as i64);
        }

        let address = format!("{}:{}", self.transport.remote_addr().ip(), port);
        let record = PeerRecord::new(&identity.username, &address);
        if self.state.registry.register_peer(record.clone()) {
            self.state.update_stats(StatsEvent::PeersRegistered, 1);
        }
        self.peer = Some(record);
        self.reply(&format!("REGISTER_SUCCESS {address}")).await;
        SessionFlow::Continue
    }

    async fn handle_share(&mut self, file_name: &str) -> SessionFlow
    {
        let Some(peer) = self.peer.clone() else {
            self.reply("ERROR peer not registered").await;
            return SessionFlow::Continue;
        };

        let before = self.state.registry.file_count();
        self.state.registry.share(file_name, peer);
        let after = self.state.registry.file_count();
        self.state.update_stats(StatsEvent::SharesHandled, 1);
        self.state.update_stats(StatsEvent::FilesIndexed, after as i64 - before as i64);
        self.reply("SHARE_SUCCESS").await;
        SessionFlow::Continue
    }

    async fn handle_search(&mut self, term: &str) -> SessionFlow
    {
        if self.identity.is_none() {
            self.reply("ERROR not logged in").await;
            return SessionFlow::Continue;
        }

        let results = self.state.registry.search(term);
        self.state.update_stats(StatsEvent::SearchesHandled, 1);
        let payload = Self::serialize_search(&results);
        if payload.is_empty() {
            self.reply("SEARCH_SUCCESS").await;
        } else {
            self.reply(&format!("SEARCH_SUCCESS {payload}")).await;
        }
        SessionFlow::Continue
    }

    async fn handle_list_peers(&mut self) -> SessionFlow
    {
        if self.identity.is_none() {
            self.reply("ERROR not logged in").await;
            return SessionFlow::Continue;
        }

        let peers = self.state.registry.list_peers();
        let payload = Self::serialize_peers(&peers);
        if payload.is_empty() {
            self.reply("LIST_PEERS_SUCCESS").await;
        } else {
            self.reply(&format!("LIST_PEERS_SUCCESS {payload}")).await;
        }
        SessionFlow::Continue
    }

    async fn handle_update_stats(&mut self, downloads: &str, uploads: &str) -> SessionFlow
    {
        let Some(session_identity) = self.identity.clone() else {
            self.reply("ERROR not logged in").await;
            return SessionFlow::Continue;
        };

        let mut identity = self.state.accounts.get(&session_identity.username).unwrap_or(session_identity);
        identity.downloads.apply_csv(downloads);
        identity.uploads.apply_csv(uploads);

        match self.state.accounts.update_stats(&identity).await {
            Ok(_) => {
                self.identity = Some(identity);
                self.reply("UPDATE_STATS_SUCCESS").await;
            }
            Err(error) => {
                self.state.update_stats(StatsEvent::PersistFailures, 1);
                warn!("[SESSION] Persisting stats for {} failed: {error}", identity.username);
                self.reply(&format!("UPDATE_STATS_FAIL {error}")).await;
            }
        }
        SessionFlow::Continue
    }

    async fn handle_remove_user(&mut self, username: &str) -> SessionFlow
    {
        match &self.identity {
            Some(identity) if identity.is_admin() => {}
            Some(_) => {
                self.reply("ERROR not an administrator").await;
                return SessionFlow::Continue;
            }
            None => {
                self.reply("ERROR not logged in").await;
                return SessionFlow::Continue;
            }
        }

        match self.state.accounts.remove(username).await {
            Ok(true) => {
                self.state.sessions.kick(username, "account removed by administrator");
                let before = self.state.registry.file_count();
                self.state.registry.purge_username(username);
                let after = self.state.registry.file_count();
                self.state.update_stats(StatsEvent::FilesIndexed, after as i64 - before as i64);
                info!("[SESSION] Administrator removed account {username}");
                self.reply("REMOVE_USER_SUCCESS").await;
            }
            Ok(false) => {
                self.reply("REMOVE_USER_FAIL no such user").await;
            }
            Err(error) => {
                if matches!(error, AccountError::Persist(_) | AccountError::Io(_)) {
                    self.state.update_stats(StatsEvent::PersistFailures, 1);
                }
                self.reply(&format!("REMOVE_USER_FAIL {error}")).await;
            }
        }
        SessionFlow::Continue
    }

    async fn handle_change_password(&mut self, old_password: &str, new_password: &str) -> SessionFlow
    {
        let Some(identity) = self.identity.clone() else {
            self.reply("ERROR not logged in").await;
            return SessionFlow::Continue;
        };

        if !self.state.accounts.verify_password(&identity.username, old_password) {
            self.reply("CHANGE_PASSWORD_FAIL invalid password").await;
            return SessionFlow::Continue;
        }

        match self.state.accounts.change_credential(&identity.username, new_password).await {
            Ok(true) => self.reply("CHANGE_PASSWORD_SUCCESS").await,
            Ok(false) => self.reply("CHANGE_PASSWORD_FAIL this account's password cannot be changed").await,
            Err(error) => {
                self.state.update_stats(StatsEvent::PersistFailures, 1);
                self.reply(&format!("CHANGE_PASSWORD_FAIL {error}")).await;
            }
        }
        SessionFlow::Continue
    }

    async fn handle_delete_account(&mut self, username: &str, password: &str) -> SessionFlow
    {
        let Some(identity) = self.identity.clone() else {
            self.reply("ERROR not logged in").await;
            return SessionFlow::Continue;
        };

        if identity.username != username {
            self.reply("DELETE_ACCOUNT_FAIL can only delete your own account").await;
            return SessionFlow::Continue;
        }
        if identity.is_admin() {
            self.reply("DELETE_ACCOUNT_FAIL cannot delete the only admin account").await;
            return SessionFlow::Continue;
        }
        if !self.state.accounts.verify_password(username, password) {
            self.reply("DELETE_ACCOUNT_FAIL invalid password").await;
            return SessionFlow::Continue;
        }

        match self.state.accounts.remove(username).await {
            Ok(true) => {
                info!("[SESSION] {username} deleted their account");
                self.reply("DELETE_ACCOUNT_SUCCESS").await;
                SessionFlow::End
            }
            Ok(false) => {
                self.reply("DELETE_ACCOUNT_FAIL no such user").await;
                SessionFlow::Continue
            }
            Err(error) => {
                if matches!(error, AccountError::Persist(_) | AccountError::Io(_)) {
                    self.state.update_stats(StatsEvent::PersistFailures, 1);
                }
                self.reply(&format!("DELETE_ACCOUNT_FAIL {error}")).await;
                SessionFlow::Continue
            }
        }
    }

    /// `file1=user:addr,user:addr;file2=...` - files separated by `;`,
    /// peers by `,`, username and address by `:`.
    pub fn serialize_search(results: &[(String, Vec<PeerRecord>)]) -> String
    {
        results.iter()
            .map(|(name, peers)| {
                let peer_list = peers.iter()
                    .map(|peer| peer.to_string())
                    .collect::<Vec<String>>()
                    .join(",");
                format!("{name}={peer_list}")
            })
            .collect::<Vec<String>>()
            .join(";")
    }

    /// `user=addr,user=addr,...`
    pub fn serialize_peers(peers: &[PeerRecord]) -> String
    {
        peers.iter()
            .map(|peer| format!("{}={}", peer.username, peer.address))
            .collect::<Vec<String>>()
            .join(",")
    }

    async fn reply(&mut self, line: &str)
    {
        if let Err(error) = self.transport.send_line(line).await {
            debug!("[SESSION] Reply to {} failed: {error}", self.transport.remote_addr());
        }
    }

    async fn cleanup(&mut self)
    {
        if let (Some(identity), Some(handle)) = (&self.identity, &self.handle) {
            self.state.sessions.remove(&identity.username, handle);
        }
        if let Some(peer) = self.peer.take() {
            let before = self.state.registry.file_count();
            self.state.registry.unregister_peer(&peer);
            let after = self.state.registry.file_count();
            self.state.update_stats(StatsEvent::FilesIndexed, after as i64 - before as i64);
        }
        let _ = self.transport.close().await;
        self.identity = None;
        self.handle = None;
        self.state.update_stats(StatsEvent::SessionsActive, -1);
    }
}
