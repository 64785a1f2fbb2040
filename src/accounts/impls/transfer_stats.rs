use crate::accounts::structs::transfer_stats::TransferStats;

impl TransferStats {
    pub fn new(files: u64, bytes: u64) -> TransferStats {
        TransferStats { files, bytes }
    }

    pub fn to_csv(&self) -> String {
        format!("{},{}", self.files, self.bytes)
    }

    /// Defensive parse: only a well-formed `"<count>,<bytes>"` input
    /// replaces the current values. Missing or malformed input leaves the
    /// counters untouched and never errors upward.
    pub fn apply_csv(&mut self, input: &str)
    {
        let Some((files_raw, bytes_raw)) = input.trim().split_once(',') else {
            return;
        };
        let (Ok(files), Ok(bytes)) = (files_raw.trim().parse::<u64>(), bytes_raw.trim().parse::<u64>()) else {
            return;
        };
        self.files = files;
        self.bytes = bytes;
    }

    /// Count one completed transfer of `bytes` bytes.
    pub fn record(&mut self, bytes: u64)
    {
        self.files += 1;
        self.bytes += bytes;
    }
}
