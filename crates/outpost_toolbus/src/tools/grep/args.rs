use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GrepArgs {
    /// Regular expression to search for (ripgrep syntax).
    pub pattern: String,

    /// File or directory to search in; defaults to the target path.
    #[serde(default)]
    pub path: Option<String>,

    /// Glob filter forwarded as `rg --glob`.
    #[serde(default)]
    pub glob: Option<String>,

    /// File type filter forwarded as `rg --type`.
    #[serde(rename = "type", default)]
    pub file_type: Option<String>,

    #[serde(default)]
    pub output_mode: OutputMode,

    #[serde(rename = "-i", default)]
    pub case_insensitive: bool,

    #[serde(rename = "-n", default)]
    pub line_numbers: bool,

    #[serde(rename = "-A", default)]
    pub after_context: Option<u64>,

    #[serde(rename = "-B", default)]
    pub before_context: Option<u64>,

    #[serde(rename = "-C", default)]
    pub context: Option<u64>,

    /// Let patterns span lines (`rg -U --multiline-dotall`).
    #[serde(default)]
    pub multiline: bool,

    /// Keep only the first N output lines.
    #[serde(default)]
    pub head_limit: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    Content,
    #[default]
    FilesWithMatches,
    Count,
}
