use serde::Deserialize;

/// Lines returned when no explicit range is requested.
pub const DEFAULT_LINE_LIMIT: u64 = 2000;

#[derive(Debug, Deserialize)]
pub struct ReadArgs {
    /// Absolute path of the file to read on the remote host.
    pub file_path: String,

    /// 1-based line to start reading from; only honored together with `limit`.
    #[serde(default)]
    pub offset: Option<u64>,

    /// Number of lines to read.
    #[serde(default)]
    pub limit: Option<u64>,
}
