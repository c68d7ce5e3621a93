use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WriteArgs {
    /// Absolute path of the file to write on the remote host.
    pub file_path: String,

    /// Full content to write.
    pub content: String,
}
