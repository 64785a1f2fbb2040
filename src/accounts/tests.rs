#[cfg(test)]
mod accounts_tests {
    mod transfer_stats_tests {
        use crate::accounts::structs::transfer_stats::TransferStats;

        #[test]
        fn test_to_csv() {
            let stats = TransferStats::new(3, 1024);
            assert_eq!(stats.to_csv(), "3,1024");
        }

        #[test]
        fn test_apply_csv_valid() {
            let mut stats = TransferStats::default();
            stats.apply_csv("7,4096");
            assert_eq!(stats, TransferStats::new(7, 4096));
        }

        #[test]
        fn test_apply_csv_malformed_leaves_values_unchanged() {
            let mut stats = TransferStats::new(5, 500);
            stats.apply_csv("");
            stats.apply_csv("garbage");
            stats.apply_csv("1,notanumber");
            stats.apply_csv("1,2,3");
            assert_eq!(stats, TransferStats::new(5, 500), "Defensive parse must not clobber prior values");
        }

        #[test]
        fn test_record() {
            let mut stats = TransferStats::default();
            stats.record(100);
            stats.record(50);
            assert_eq!(stats, TransferStats::new(2, 150));
        }
    }

    mod salted_sha256_tests {
        use crate::accounts::structs::salted_sha256::SaltedSha256;
        use crate::accounts::traits::credential_hasher::CredentialHasher;

        #[test]
        fn test_hash_verifies_own_password() {
            let hasher = SaltedSha256;
            let stored = hasher.hash("secret");
            assert!(hasher.verify("secret", &stored));
            assert!(!hasher.verify("Secret", &stored));
            assert!(!hasher.verify("", &stored));
        }

        #[test]
        fn test_hash_salts_differ() {
            let hasher = SaltedSha256;
            assert_ne!(hasher.hash("secret"), hasher.hash("secret"), "Each hash should carry a fresh salt");
        }

        #[test]
        fn test_verify_rejects_malformed_stored_value() {
            let hasher = SaltedSha256;
            assert!(!hasher.verify("secret", "no-dollar-separator"));
        }
    }

    mod role_tests {
        use crate::accounts::enums::role::Role;

        #[test]
        fn test_role_serialization() {
            assert_eq!(serde_json::to_string(&Role::Administrator).unwrap(), "\"Administrator\"");
            assert_eq!(serde_json::to_string(&Role::Regular).unwrap(), "\"Regular\"");
        }

        #[test]
        fn test_role_deserialization() {
            let role: Role = serde_json::from_str("\"Regular\"").unwrap();
            assert_eq!(role, Role::Regular);
        }
    }

    mod identity_tests {
        use crate::accounts::enums::role::Role;
        use crate::accounts::structs::identity::Identity;
        use crate::accounts::structs::transfer_stats::TransferStats;

        #[test]
        fn test_to_row() {
            let identity = Identity {
                username: String::from("alice"),
                password_hash: String::from("abc$def"),
                role: Role::Regular,
                downloads: TransferStats::new(1, 10),
                uploads: TransferStats::new(2, 20),
            };
            assert_eq!(identity.to_row(), "alice,abc$def,1,10,2,20");
            assert!(!identity.is_admin());
        }
    }

    mod account_store_tests {
        use std::sync::Arc;
        use std::time::Duration;
        use tempfile::TempDir;
        use crate::accounts::enums::account_error::AccountError;
        use crate::accounts::structs::account_store::AccountStore;
        use crate::accounts::structs::salted_sha256::SaltedSha256;
        use crate::accounts::structs::transfer_stats::TransferStats;

        fn create_store(dir: &TempDir) -> AccountStore {
            AccountStore::new(
                &dir.path().join("users.csv"),
                &dir.path().join("admin_stats.csv"),
                Arc::new(SaltedSha256),
                3,
                Duration::from_millis(10),
            )
        }

        #[tokio::test]
        async fn test_create_and_reload_round_trip() {
            let dir = tempfile::tempdir().unwrap();
            let store = create_store(&dir);
            store.create("alice", "pw").await.unwrap();

            let reloaded = create_store(&dir);
            let count = reloaded.load().await.unwrap();
            assert_eq!(count, 1, "One persisted user expected");
            assert!(reloaded.authenticate("alice", "pw").is_some(), "Reloaded hash must verify the password");
            assert!(reloaded.authenticate("alice", "other").is_none(), "Wrong password must be rejected");
        }

        #[tokio::test]
        async fn test_create_rejects_duplicates_and_reserved_names() {
            let dir = tempfile::tempdir().unwrap();
            let store = create_store(&dir);
            store.create("bob", "pw").await.unwrap();

            assert!(matches!(store.create("bob", "pw2").await, Err(AccountError::AlreadyExists)));
            for reserved in ["admin", "Admin", "ADMIN"] {
                assert!(
                    matches!(store.create(reserved, "pw").await, Err(AccountError::ReservedName)),
                    "{reserved} should be rejected at signup"
                );
            }
        }

        #[tokio::test]
        async fn test_remove_refuses_admin_and_reports_missing() {
            let dir = tempfile::tempdir().unwrap();
            let store = create_store(&dir);

            assert!(matches!(store.remove("admin").await, Err(AccountError::AdminProtected)));
            assert!(!store.remove("ghost").await.unwrap(), "Removing an unknown identity reports false");

            store.create("carol", "pw").await.unwrap();
            assert!(store.remove("carol").await.unwrap());
            assert_eq!(store.count(), 0);
        }

        #[tokio::test]
        async fn test_admin_authenticates_with_well_known_credential() {
            let dir = tempfile::tempdir().unwrap();
            let store = create_store(&dir);
            let admin = store.authenticate("admin", "admin").expect("Built-in admin should authenticate");
            assert!(admin.is_admin());
        }

        #[tokio::test]
        async fn test_change_credential() {
            let dir = tempfile::tempdir().unwrap();
            let store = create_store(&dir);
            store.create("dave", "old").await.unwrap();

            assert!(store.change_credential("dave", "new").await.unwrap());
            assert!(store.authenticate("dave", "new").is_some());
            assert!(store.authenticate("dave", "old").is_none());

            assert!(!store.change_credential("ghost", "x").await.unwrap());
            assert!(!store.change_credential("admin", "x").await.unwrap(), "Administrator credential is immutable");
        }

        #[tokio::test]
        async fn test_admin_stats_use_dedicated_file() {
            let dir = tempfile::tempdir().unwrap();
            let store = create_store(&dir);

            let mut admin = store.get("admin").unwrap();
            admin.downloads = TransferStats::new(2, 200);
            admin.uploads = TransferStats::new(1, 100);
            store.update_stats(&admin).await.unwrap();

            let row = std::fs::read_to_string(dir.path().join("admin_stats.csv")).unwrap();
            assert_eq!(row.trim(), "2,200,1,100");
            assert!(
                !dir.path().join("users.csv").exists(),
                "Administrator stats must never touch the user table"
            );

            let reloaded = create_store(&dir);
            reloaded.load().await.unwrap();
            let admin = reloaded.get("admin").unwrap();
            assert_eq!(admin.downloads, TransferStats::new(2, 200));
            assert_eq!(admin.uploads, TransferStats::new(1, 100));
        }

        #[tokio::test]
        async fn test_load_tolerates_legacy_row_shapes() {
            let dir = tempfile::tempdir().unwrap();
            let users_file = dir.path().join("users.csv");
            let table = "username,passwordHash,downloadFiles,downloadBytes,uploadFiles,uploadBytes\n\
                         full,h1,1,10,2,20\n\
                         nouploads,h2,3,30\n\
                         bare,h3\n\
                         badstats,h4,notanumber,eleven,2,x\n\
                         ,missingname\n\
                         admin,sneaky,0,0,0,0\n";
            std::fs::write(&users_file, table).unwrap();

            let store = create_store(&dir);
            let count = store.load().await.unwrap();
            assert_eq!(count, 4, "Legacy shapes load, malformed and admin rows are dropped");

            let full = store.get("full").unwrap();
            assert_eq!(full.downloads, TransferStats::new(1, 10));
            assert_eq!(full.uploads, TransferStats::new(2, 20));

            let legacy = store.get("nouploads").unwrap();
            assert_eq!(legacy.downloads, TransferStats::new(3, 30));
            assert_eq!(legacy.uploads, TransferStats::default());

            let bare = store.get("bare").unwrap();
            assert_eq!(bare.downloads, TransferStats::default());

            let bad = store.get("badstats").unwrap();
            assert_eq!(bad.downloads, TransferStats::default(), "Malformed numerics fall back to zero");
            assert_eq!(bad.uploads, TransferStats::new(2, 0));

            assert!(store.get("sneaky").is_none(), "Admin rows are never read from the table");
        }

        #[tokio::test]
        async fn test_concurrent_stat_updates_keep_table_well_formed() {
            let dir = tempfile::tempdir().unwrap();
            let store = Arc::new(create_store(&dir));
            for i in 0..8 {
                store.create(&format!("user{i}"), "pw").await.unwrap();
            }

            let mut tasks = Vec::new();
            for i in 0..8 {
                let store = store.clone();
                tasks.push(tokio::spawn(async move {
                    let mut identity = store.get(&format!("user{i}")).unwrap();
                    identity.downloads.record(64);
                    store.update_stats(&identity).await.unwrap();
                }));
            }
            for task in tasks {
                task.await.unwrap();
            }

            let contents = std::fs::read_to_string(dir.path().join("users.csv")).unwrap();
            let rows: Vec<&str> = contents.lines().filter(|l| !l.is_empty()).collect();
            assert_eq!(rows.len(), 9, "Header plus one well-formed row per user");
            for row in &rows[1..] {
                assert_eq!(row.split(',').count(), 6, "No half-written rows: {row}");
            }
        }
    }
}
