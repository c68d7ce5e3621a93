//! Literal substring matching and replacement.
//!
//! Both edit tools decide success or failure based on these functions, so
//! they are deliberately built on `str` methods only: the needle is always
//! a literal, never a pattern, and occurrences are counted non-overlapping
//! left to right.

/// Counts non-overlapping occurrences of `needle` in `content`.
pub fn count_occurrences(content: &str, needle: &str) -> usize {
    content.matches(needle).count()
}

/// Replaces `old` with `new` in `content`.
///
/// With `all` set, every non-overlapping occurrence is replaced; otherwise
/// only the first.
pub fn replace(content: &str, old: &str, new: &str, all: bool) -> String {
    if all {
        content.replace(old, new)
    } else {
        content.replacen(old, new, 1)
    }
}
