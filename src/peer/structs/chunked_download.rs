use std::path::PathBuf;

/// Sequential whole-file download in fixed-size chunks.
///
/// Appends to the local file (creating it when absent) until the remote
/// closes the stream. There is no partial-transfer resume beyond that
/// append behavior.
#[derive(Clone, Debug)]
pub struct ChunkedDownload {
    pub(crate) chunk_size: usize,
    pub(crate) download_folder: PathBuf,
}
