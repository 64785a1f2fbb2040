use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use log::{info, warn};
use parking_lot::RwLock;
use tokio::sync::Mutex;
use crate::accounts::enums::account_error::AccountError;
use crate::accounts::enums::role::Role;
use crate::accounts::structs::account_store::AccountStore;
use crate::accounts::structs::identity::Identity;
use crate::accounts::structs::transfer_stats::TransferStats;
use crate::accounts::traits::credential_hasher::CredentialHasher;

/// The single built-in administrator. Reserved in any letter case at signup.
pub const ADMIN_USERNAME: &str = "admin";

/// Well-known initial administrator credential; the stored hash is derived
/// from this at load time, never read from the user table.
pub const ADMIN_DEFAULT_CREDENTIAL: &str = "admin";

pub const USERS_FILE_HEADER: &str = "username,passwordHash,downloadFiles,downloadBytes,uploadFiles,uploadBytes";

impl AccountStore {
    pub fn new(users_file: &Path, admin_stats_file: &Path, hasher: Arc<dyn CredentialHasher>, save_retries: u64, save_retry_delay: Duration) -> AccountStore
    {
        let admin = Identity {
            username: ADMIN_USERNAME.to_string(),
            password_hash: hasher.hash(ADMIN_DEFAULT_CREDENTIAL),
            role: Role::Administrator,
            downloads: TransferStats::default(),
            uploads: TransferStats::default(),
        };
        AccountStore {
            users: Arc::new(RwLock::new(BTreeMap::new())),
            admin: Arc::new(RwLock::new(admin)),
            users_file: PathBuf::from(users_file),
            admin_stats_file: PathBuf::from(admin_stats_file),
            hasher,
            save_lock: Mutex::new(()),
            save_retries,
            save_retry_delay,
        }
    }

    /// Parses the flat user table and the administrator stats file.
    ///
    /// Rows are matched by column count, not by a version tag: 6 columns is
    /// the current shape, 4 and 2 are legacy shapes missing trailing stats.
    /// Malformed numeric stats fall back to zero instead of aborting the
    /// whole load.
    pub async fn load(&self) -> Result<usize, AccountError>
    {
        let mut loaded = BTreeMap::new();
        match tokio::fs::read_to_string(&self.users_file).await {
            Ok(contents) => {
                for line in contents.lines() {
                    if line.is_empty() || line == USERS_FILE_HEADER {
                        continue;
                    }
                    match Self::parse_row(line) {
                        Some(identity) => {
                            if identity.username.eq_ignore_ascii_case(ADMIN_USERNAME) {
                                warn!("[ACCOUNTS] Ignoring administrator row in the user table");
                                continue;
                            }
                            loaded.insert(identity.username.clone(), identity);
                        }
                        None => {
                            warn!("[ACCOUNTS] Skipping malformed row: {line}");
                        }
                    }
                }
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                info!("[ACCOUNTS] No user table at {} yet, starting empty", self.users_file.display());
            }
            Err(error) => {
                return Err(AccountError::Io(error));
            }
        }

        let count = loaded.len();
        *self.users.write() = loaded;

        let mut downloads = TransferStats::default();
        let mut uploads = TransferStats::default();
        if let Ok(row) = tokio::fs::read_to_string(&self.admin_stats_file).await {
            let columns: Vec<&str> = row.trim().split(',').collect();
            if columns.len() == 4 {
                downloads.apply_csv(&format!("{},{}", columns[0], columns[1]));
                uploads.apply_csv(&format!("{},{}", columns[2], columns[3]));
            }
        }
        {
            let mut admin = self.admin.write();
            admin.downloads = downloads;
            admin.uploads = uploads;
        }

        info!("[ACCOUNTS] Loaded {count} users from {}", self.users_file.display());
        Ok(count)
    }

    fn parse_row(line: &str) -> Option<Identity>
    {
        let columns: Vec<&str> = line.split(',').collect();
        let (username, password_hash) = match columns.as_slice() {
            [username, hash, ..] if !username.is_empty() && !hash.is_empty() => (*username, *hash),
            _ => return None,
        };

        let number = |index: usize| -> u64 {
            columns.get(index).and_then(|raw| raw.trim().parse::<u64>().ok()).unwrap_or(0)
        };

        let (downloads, uploads) = match columns.len() {
            6 => (TransferStats::new(number(2), number(3)), TransferStats::new(number(4), number(5))),
            4 => (TransferStats::new(number(2), number(3)), TransferStats::default()),
            2 => (TransferStats::default(), TransferStats::default()),
            _ => return None,
        };

        Some(Identity {
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            role: Role::Regular,
            downloads,
            uploads,
        })
    }

    pub async fn create(&self, username: &str, password: &str) -> Result<Identity, AccountError>
    {
        if username.eq_ignore_ascii_case(ADMIN_USERNAME) {
            return Err(AccountError::ReservedName);
        }

        let identity = Identity {
            username: username.to_string(),
            password_hash: self.hasher.hash(password),
            role: Role::Regular,
            downloads: TransferStats::default(),
            uploads: TransferStats::default(),
        };

        {
            let mut users = self.users.write();
            if users.contains_key(username) {
                return Err(AccountError::AlreadyExists);
            }
            users.insert(username.to_string(), identity.clone());
        }

        self.save_users().await?;
        info!("[ACCOUNTS] Created account {username}");
        Ok(identity)
    }

    /// Removes an account and persists. The administrator is refused
    /// explicitly; an unknown identity yields `Ok(false)`.
    pub async fn remove(&self, username: &str) -> Result<bool, AccountError>
    {
        if username.eq_ignore_ascii_case(ADMIN_USERNAME) {
            return Err(AccountError::AdminProtected);
        }

        let removed = self.users.write().remove(username).is_some();
        if !removed {
            return Ok(false);
        }

        self.save_users().await?;
        info!("[ACCOUNTS] Removed account {username}");
        Ok(true)
    }

    pub fn authenticate(&self, username: &str, password: &str) -> Option<Identity>
    {
        let identity = if username == ADMIN_USERNAME {
            self.admin.read().clone()
        } else {
            self.users.read().get(username)?.clone()
        };
        if self.hasher.verify(password, &identity.password_hash) {
            return Some(identity);
        }
        None
    }

    pub fn verify_password(&self, username: &str, password: &str) -> bool {
        self.authenticate(username, password).is_some()
    }

    pub fn get(&self, username: &str) -> Option<Identity>
    {
        if username == ADMIN_USERNAME {
            return Some(self.admin.read().clone());
        }
        self.users.read().get(username).cloned()
    }

    pub fn count(&self) -> usize {
        self.users.read().len()
    }

    /// Idempotent upsert of the transfer counters.
    ///
    /// Administrator statistics go to the dedicated single-row file, every
    /// other identity to the main table.
    pub async fn update_stats(&self, identity: &Identity) -> Result<(), AccountError>
    {
        if identity.is_admin() {
            {
                let mut admin = self.admin.write();
                admin.downloads = identity.downloads;
                admin.uploads = identity.uploads;
            }
            return self.save_admin_stats().await;
        }

        {
            let mut users = self.users.write();
            match users.get_mut(&identity.username) {
                Some(existing) => {
                    existing.downloads = identity.downloads;
                    existing.uploads = identity.uploads;
                }
                None => {
                    users.insert(identity.username.clone(), identity.clone());
                }
            }
        }
        self.save_users().await
    }

    /// Replaces a credential hash. The administrator's stored credential is
    /// immutable; unknown identities report `false`.
    pub async fn change_credential(&self, username: &str, new_password: &str) -> Result<bool, AccountError>
    {
        if username.eq_ignore_ascii_case(ADMIN_USERNAME) {
            return Ok(false);
        }

        {
            let mut users = self.users.write();
            match users.get_mut(username) {
                Some(identity) => {
                    identity.password_hash = self.hasher.hash(new_password);
                }
                None => return Ok(false),
            }
        }

        self.save_users().await?;
        info!("[ACCOUNTS] Changed credential for {username}");
        Ok(true)
    }

    /// Rewrites the full user table through a temporary file and an atomic
    /// rename, so a concurrent reader sees either the old or the new table.
    pub async fn save_users(&self) -> Result<(), AccountError>
    {
        let _guard = self.save_lock.lock().await;

        let mut contents = String::from(USERS_FILE_HEADER);
        contents.push('\n');
        {
            let users = self.users.read();
            for identity in users.values() {
                contents.push_str(&identity.to_row());
                contents.push('\n');
            }
        }

        self.write_atomic(&self.users_file, contents).await
    }

    pub async fn save_admin_stats(&self) -> Result<(), AccountError>
    {
        let _guard = self.save_lock.lock().await;

        let row = {
            let admin = self.admin.read();
            format!("{},{}\n", admin.downloads.to_csv(), admin.uploads.to_csv())
        };

        self.write_atomic(&self.admin_stats_file, row).await
    }

    async fn write_atomic(&self, path: &Path, contents: String) -> Result<(), AccountError>
    {
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, contents).await?;

        let attempts = self.save_retries.max(1);
        for attempt in 1..=attempts {
            match tokio::fs::rename(&temp_path, path).await {
                Ok(_) => return Ok(()),
                Err(error) => {
                    if attempt == attempts {
                        return Err(AccountError::Persist(format!(
                            "renaming {} over {} failed after {attempts} attempts: {error}",
                            temp_path.display(),
                            path.display()
                        )));
                    }
                    warn!("[ACCOUNTS] Rename attempt {attempt} for {} failed: {error}", path.display());
                    tokio::time::sleep(Duration::from_millis(attempt * self.save_retry_delay.as_millis() as u64)).await;
                }
            }
        }
        Ok(())
    }
}
