use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MultiEditArgs {
    /// Absolute path of the file to modify on the remote host.
    pub file_path: String,

    /// Edit operations, applied strictly in order.
    pub edits: Vec<EditOperation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditOperation {
    /// The text to replace, matched literally.
    pub old_string: String,

    /// The replacement text.
    pub new_string: String,

    /// Replace every occurrence instead of requiring a unique match.
    #[serde(default)]
    pub replace_all: bool,
}
