use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LsArgs {
    /// Absolute path of the directory to list on the remote host.
    pub path: String,

    /// Glob patterns to filter out of the listing.
    #[serde(default)]
    pub ignore: Vec<String>,
}
