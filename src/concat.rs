//! Pure concatenation core: ordered fragments in, combined bytes out.
//!
//! Fragment order is significant — it determines the order of content in
//! the combined output. Line filtering preserves each kept line verbatim,
//! including its terminator, so concatenation never inserts or removes
//! bytes beyond whole dropped lines.

use std::path::PathBuf;

use crate::error::AssetError;

/// Token that marks a stylesheet import-directive line.
pub const IMPORT_TOKEN: &str = "@import";

/// Predicate deciding whether a line (terminator included) is dropped.
pub type LinePredicate = fn(&str) -> bool;

/// A single source file associated with one module.
#[derive(Debug, Clone)]
pub struct Fragment {
    /// Module the fragment belongs to, used in error reports.
    pub module: String,
    /// Location of the fragment file.
    pub path: PathBuf,
}

impl Fragment {
    /// Pair a module name with its fragment path.
    pub fn new(module: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            module: module.into(),
            path: path.into(),
        }
    }
}

/// Returns `true` if the line's first non-whitespace content starts with
/// the [`IMPORT_TOKEN`].
#[must_use]
pub fn is_import_directive(line: &str) -> bool {
    line.trim_start().starts_with(IMPORT_TOKEN)
}

/// Drop every line matching `drop_line`, keeping all other lines verbatim
/// (terminators included).
///
/// A final line without a trailing newline is still treated as a line.
#[must_use]
pub fn filter_lines(content: &str, drop_line: LinePredicate) -> String {
    content
        .split_inclusive('\n')
        .filter(|line| !drop_line(line))
        .collect()
}

/// Read each fragment in order and append its content to one combined
/// byte buffer.
///
/// With no predicate the fragment bytes are appended untouched — no
/// separators are inserted between fragments. With a predicate the
/// fragment is decoded as UTF-8 text and matching lines are dropped.
///
/// # Errors
///
/// Returns [`AssetError::MissingFragment`] for the first fragment that
/// cannot be read, and [`AssetError::Io`] if a fragment must be filtered
/// but is not valid UTF-8.
pub fn concatenate(
    fragments: &[Fragment],
    drop_line: Option<LinePredicate>,
) -> Result<Vec<u8>, AssetError> {
    let mut combined = Vec::new();
    for fragment in fragments {
        let bytes =
            std::fs::read(&fragment.path).map_err(|source| AssetError::MissingFragment {
                module: fragment.module.clone(),
                path: fragment.path.clone(),
                source,
            })?;
        match drop_line {
            None => combined.extend_from_slice(&bytes),
            Some(predicate) => {
                let text = String::from_utf8(bytes).map_err(|e| AssetError::Io {
                    context: format!("decoding {}", fragment.path.display()),
                    source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
                })?;
                combined.extend_from_slice(filter_lines(&text, predicate).as_bytes());
            }
        }
    }
    Ok(combined)
}
