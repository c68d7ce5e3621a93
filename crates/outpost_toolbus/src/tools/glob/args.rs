use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GlobArgs {
    /// Glob pattern to match file names against.
    pub pattern: String,

    /// Directory to search in; defaults to the target path.
    #[serde(default)]
    pub path: Option<String>,
}
