//! Archive path checks for the file picker
//!
//! Paths are opaque strings here: nothing is ever opened or stat'ed.

/// Check whether `path` ends in one of `extensions`
///
/// Extensions are given without the leading dot and match
/// case-insensitively. The string is taken as typed: surrounding
/// whitespace is part of the path.
pub fn is_archive_path(path: &str, extensions: &[String]) -> bool {
    let Some((_, ext)) = path.rsplit_once('.') else {
        return false;
    };
    extensions.iter().any(|allowed| ext.eq_ignore_ascii_case(allowed))
}

/// Last path component of `path`, accepting both separators
pub fn file_name(path: &str) -> &str {
    path.rsplit(&['/', '\\'][..]).next().unwrap_or(path)
}

/// Directory part of `path` including the trailing separator
pub fn parent_dir(path: &str) -> &str {
    match path.rfind(&['/', '\\'][..]) {
        Some(idx) => &path[..=idx],
        None => "",
    }
}
