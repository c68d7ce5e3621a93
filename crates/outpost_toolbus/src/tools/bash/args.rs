use serde::Deserialize;

pub const DEFAULT_TIMEOUT_MS: u64 = 120_000;
pub const MAX_TIMEOUT_MS: u64 = 600_000;

#[derive(Debug, Deserialize)]
pub struct BashArgs {
    /// The command to execute on the remote host.
    pub command: String,

    /// Short human-readable description of the command; informational only.
    #[serde(default)]
    pub description: Option<String>,

    /// Timeout in milliseconds, clamped to [`MAX_TIMEOUT_MS`].
    #[serde(default = "default_timeout_ms")]
    pub timeout: u64,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}
