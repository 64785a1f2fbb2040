#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::watch;
use peerdex::config::structs::configuration::Configuration;
use peerdex::tracker::structs::tracker_state::TrackerState;
use peerdex::tracker::tracker::tracker_service;
use peerdex::transport::structs::tcp_transport::TcpTransport;
use peerdex::transport::traits::transport::Transport;

pub type TestState = Arc<TrackerState>;

pub fn create_test_config(dir: &TempDir) -> Arc<Configuration> {
    let mut config = Configuration::init();
    config.tracker_config.users_file = dir.path().join("users.csv").to_string_lossy().to_string();
    config.tracker_config.admin_stats_file = dir.path().join("admin_stats.csv").to_string_lossy().to_string();
    config.tracker_config.save_retry_delay_ms = 10;
    Arc::new(config)
}

pub async fn create_test_state(dir: &TempDir) -> TestState {
    let state = Arc::new(TrackerState::new(create_test_config(dir)));
    state.accounts.load().await.expect("Loading an empty store succeeds");
    state
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Grabs a free loopback TCP port by binding and dropping a listener.
pub async fn free_tcp_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Grabs a free loopback UDP port by binding and dropping a socket.
pub async fn free_udp_addr() -> SocketAddr {
    let socket = tokio::net::UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();
    drop(socket);
    addr
}

/// Starts a tracker on a fresh port and waits until it accepts.
pub async fn spawn_test_tracker(state: TestState) -> (SocketAddr, watch::Sender<bool>) {
    let addr = free_tcp_addr().await;
    let (tx, rx) = watch::channel(false);
    tracker_service(addr, state, rx).await;

    for _ in 0..50 {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return (addr, tx);
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    panic!("Tracker did not start listening on {addr}");
}

/// A raw protocol client for driving the tracker line by line.
pub struct TestClient {
    pub transport: TcpTransport,
}

impl TestClient {
    pub async fn connect(addr: SocketAddr) -> TestClient {
        let transport = TcpTransport::connect(&addr.to_string()).await.expect("Test client connects");
        TestClient { transport }
    }

    /// Sends one request line and returns the single reply line.
    pub async fn request(&mut self, line: &str) -> String {
        self.transport.send_line(line).await.expect("Request line sends");
        self.transport.read_line().await.expect("Reply read succeeds").expect("Tracker replied")
    }

    /// Sends a line without waiting for any reply.
    pub async fn send(&mut self, line: &str) {
        self.transport.send_line(line).await.expect("Line sends");
    }

    pub async fn read_line(&mut self) -> Option<String> {
        self.transport.read_line().await.expect("Read succeeds")
    }

    pub async fn close(&mut self) {
        self.transport.close().await.expect("Close succeeds");
    }

    pub async fn login(&mut self, username: &str, password: &str) -> String {
        self.request(&format!("LOGIN {username} {password}")).await
    }

    pub async fn signup_and_login(&mut self, username: &str, password: &str) {
        let signup = self.request(&format!("SIGNUP {username} {password}")).await;
        assert_eq!(signup, "SIGNUP_SUCCESS", "Signup should succeed for {username}");
        let login = self.login(username, password).await;
        assert!(login.starts_with("LOGIN_SUCCESS"), "Login should succeed for {username}: {login}");
    }
}
