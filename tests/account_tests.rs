mod common;

use peerdex::accounts::structs::transfer_stats::TransferStats;

#[tokio::test]
async fn test_user_table_round_trip_through_files() {
    let dir = common::create_temp_dir();
    let state = common::create_test_state(&dir).await;

    state.accounts.create("alice", "pw").await.unwrap();
    let mut alice = state.accounts.get("alice").unwrap();
    alice.downloads = TransferStats::new(4, 4096);
    alice.uploads = TransferStats::new(2, 2048);
    state.accounts.update_stats(&alice).await.unwrap();

    let contents = std::fs::read_to_string(dir.path().join("users.csv")).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next(),
        Some("username,passwordHash,downloadFiles,downloadBytes,uploadFiles,uploadBytes"),
        "The table is header-first"
    );
    let row = lines.next().expect("One user row");
    assert!(row.starts_with("alice,"), "Row: {row}");
    assert!(row.ends_with(",4,4096,2,2048"), "Row: {row}");
    assert!(
        !dir.path().join("users.tmp").exists(),
        "The temporary file is gone after the atomic rename"
    );

    let reloaded = common::create_test_state(&dir).await;
    let identity = reloaded.accounts.authenticate("alice", "pw").expect("Round-tripped credential verifies");
    assert_eq!(identity.downloads, TransferStats::new(4, 4096));
    assert_eq!(identity.uploads, TransferStats::new(2, 2048));
}

#[tokio::test]
async fn test_concurrent_saves_never_corrupt_the_table() {
    let dir = common::create_temp_dir();
    let state = common::create_test_state(&dir).await;

    for i in 0..16 {
        state.accounts.create(&format!("user{i:02}"), "pw").await.unwrap();
    }

    let mut tasks = Vec::new();
    for i in 0..16 {
        let state = state.clone();
        tasks.push(tokio::spawn(async move {
            for round in 0..5u64 {
                let mut identity = state.accounts.get(&format!("user{i:02}")).unwrap();
                identity.downloads = TransferStats::new(round, round * 100);
                state.accounts.update_stats(&identity).await.unwrap();
            }
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let contents = std::fs::read_to_string(dir.path().join("users.csv")).unwrap();
    let rows: Vec<&str> = contents.lines().filter(|line| !line.is_empty()).collect();
    assert_eq!(rows.len(), 17, "Header plus exactly one row per user, no truncation or duplication");
    for row in &rows[1..] {
        assert_eq!(row.split(',').count(), 6, "Every row is whole: {row}");
    }

    let reloaded = common::create_test_state(&dir).await;
    assert_eq!(reloaded.accounts.count(), 16);
}
