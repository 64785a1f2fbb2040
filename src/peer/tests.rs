#[cfg(test)]
mod peer_tests {
    mod shared_folder_tests {
        use crate::peer::structs::shared_folder::SharedFolder;

        #[tokio::test]
        async fn test_list_files_skips_directories() {
            let dir = tempfile::tempdir().unwrap();
            std::fs::write(dir.path().join("song.mp3"), b"data").unwrap();
            std::fs::write(dir.path().join("doc.pdf"), b"data").unwrap();
            std::fs::create_dir(dir.path().join("subdir")).unwrap();

            let folder = SharedFolder::new(dir.path());
            let mut names = folder.list_files().await.unwrap();
            names.sort();
            assert_eq!(names, vec!["doc.pdf", "song.mp3"]);
        }

        #[tokio::test]
        async fn test_file_size() {
            let dir = tempfile::tempdir().unwrap();
            std::fs::write(dir.path().join("song.mp3"), b"12345").unwrap();

            let folder = SharedFolder::new(dir.path());
            assert_eq!(folder.file_size("song.mp3").await, Some(5));
            assert_eq!(folder.file_size("missing.mp3").await, None);
        }

        #[test]
        fn test_resolve_refuses_escaping_names() {
            let folder = SharedFolder::new(std::path::Path::new("/tmp/shared"));
            assert!(folder.resolve("song.mp3").is_some());
            assert!(folder.resolve("").is_none());
            assert!(folder.resolve("..").is_none());
            assert!(folder.resolve("../etc/passwd").is_none());
            assert!(folder.resolve("a/b.mp3").is_none());
            assert!(folder.resolve("a\\b.mp3").is_none());
        }
    }

    mod payload_parsing_tests {
        use crate::peer::structs::peer_node::PeerNode;

        #[test]
        fn test_parse_search_payload() {
            let payload = "song.mp3=alice:10.0.0.1:9100,bob:10.0.0.2:9100;other.mp3=carol:10.0.0.3:9100";
            let results = PeerNode::parse_search(payload);
            assert_eq!(results.len(), 2);
            assert_eq!(results[0].0, "song.mp3");
            assert_eq!(results[0].1.len(), 2);
            assert_eq!(results[0].1[0].username, "alice");
            assert_eq!(results[0].1[0].address, "10.0.0.1:9100");
            assert_eq!(results[1].1[0].username, "carol");
        }

        #[test]
        fn test_parse_search_empty_payload() {
            assert!(PeerNode::parse_search("").is_empty());
        }

        #[test]
        fn test_parse_peers_payload() {
            let peers = PeerNode::parse_peers("alice=10.0.0.1:9100,bob=10.0.0.2:9100");
            assert_eq!(peers.len(), 2);
            assert_eq!(peers[1].username, "bob");
            assert_eq!(peers[1].address, "10.0.0.2:9100");
            assert!(PeerNode::parse_peers("").is_empty());
        }
    }

    mod transfer_tests {
        use tokio::sync::watch;
        use crate::peer::peer::transfer_service;
        use crate::peer::structs::chunked_download::ChunkedDownload;
        use crate::peer::structs::shared_folder::SharedFolder;

        #[tokio::test]
        async fn test_chunked_download_round_trip() {
            let shared = tempfile::tempdir().unwrap();
            let content: Vec<u8> = (0..10_000u32).flat_map(|i| i.to_le_bytes()).collect();
            std::fs::write(shared.path().join("payload.bin"), &content).unwrap();

            let (_tx, rx) = watch::channel(false);
            let folder = SharedFolder::new(shared.path());
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            drop(listener);
            transfer_service(addr, folder, 1024, rx).await;
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;

            let downloads = tempfile::tempdir().unwrap();
            let download = ChunkedDownload::new(777, downloads.path());
            let total = download.fetch(&addr.to_string(), "payload.bin").await.unwrap();

            assert_eq!(total, content.len() as u64);
            let received = std::fs::read(downloads.path().join("payload.bin")).unwrap();
            assert_eq!(received, content, "Downloaded bytes must match the source exactly");
        }

        #[tokio::test]
        async fn test_download_of_missing_file_yields_zero_bytes() {
            let shared = tempfile::tempdir().unwrap();
            let (_tx, rx) = watch::channel(false);
            let folder = SharedFolder::new(shared.path());
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            drop(listener);
            transfer_service(addr, folder, 1024, rx).await;
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;

            let downloads = tempfile::tempdir().unwrap();
            let download = ChunkedDownload::new(1024, downloads.path());
            let total = download.fetch(&addr.to_string(), "missing.bin").await.unwrap();
            assert_eq!(total, 0, "A missing file closes the connection without data, not with an error");
        }
    }

    mod query_tests {
        use std::time::Duration;
        use tokio::sync::watch;
        use crate::peer::peer::{list_remote_files, query_service, remote_file_size};
        use crate::peer::structs::shared_folder::SharedFolder;

        #[tokio::test]
        async fn test_query_responder_answers_list_and_size() {
            let shared = tempfile::tempdir().unwrap();
            std::fs::write(shared.path().join("a.mp3"), b"12345").unwrap();
            std::fs::write(shared.path().join("b.mp3"), b"123").unwrap();

            let (_tx, rx) = watch::channel(false);
            let folder = SharedFolder::new(shared.path());
            let probe = tokio::net::UdpSocket::bind("127.0.0.1:0").await.unwrap();
            let addr = probe.local_addr().unwrap();
            drop(probe);
            query_service(addr, folder, rx).await;
            tokio::time::sleep(Duration::from_millis(50)).await;

            let timeout = Duration::from_secs(2);
            let mut names = list_remote_files(&addr.to_string(), timeout).await.unwrap();
            names.sort();
            assert_eq!(names, vec!["a.mp3", "b.mp3"]);

            assert_eq!(remote_file_size(&addr.to_string(), "a.mp3", timeout).await, Some(5));
            assert_eq!(remote_file_size(&addr.to_string(), "nope.mp3", timeout).await, None);
        }

        #[tokio::test]
        async fn test_query_against_dead_peer_is_none_not_hang() {
            let silent = tokio::net::UdpSocket::bind("127.0.0.1:0").await.unwrap();
            let addr = silent.local_addr().unwrap();
            let result = list_remote_files(&addr.to_string(), Duration::from_millis(50)).await;
            assert!(result.is_none(), "A silent responder reports no data");
        }
    }
}
