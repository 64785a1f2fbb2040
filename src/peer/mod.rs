//! The peer node: tracker client, transfer listener and query responder.
//!
//! A peer registers with the tracker over the control channel, announces
//! its shared files, and then serves two local endpoints of its own:
//!
//! - the **transfer listener** on `listen_port` answers one
//!   `DOWNLOAD <fileName>` request per connection with the whole file as a
//!   raw byte stream
//! - the **query responder** on `listen_port + 1` answers `LIST_FILES` and
//!   `FILESIZE <name>` datagrams so other peers can enumerate and size
//!   files before committing to a transfer
//!
//! Outbound downloads stream a remote file into the download folder in
//! fixed-size chunks. The tracker is never in the data path.

/// Peer enumerations (errors).
pub mod enums;

/// Peer data structures.
pub mod structs;

/// Implementation blocks for peer types.
pub mod impls;

/// Transfer and query service loops plus best-effort query helpers.
#[allow(clippy::module_inception)]
pub mod peer;

/// Unit tests for the peer node.
pub mod tests;
