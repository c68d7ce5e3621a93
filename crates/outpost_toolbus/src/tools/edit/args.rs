use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct EditArgs {
    /// Absolute path of the file to modify on the remote host.
    pub file_path: String,

    /// The text to replace, matched literally.
    pub old_string: String,

    /// The replacement text. Must differ from `old_string`.
    pub new_string: String,

    /// Replace every occurrence instead of requiring a unique match.
    #[serde(default)]
    pub replace_all: bool,
}
