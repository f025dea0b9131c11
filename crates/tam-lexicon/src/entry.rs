//! The `count<TAB>term` line format shared by every frequency list.

use std::path::Path;

use crate::LexiconError;

/// Parses one `count<TAB>term` line.
///
/// Returns `Ok(None)` for blank lines. `line` is 1-based and only used for errors.
pub fn parse_entry<'a>(
    text: &'a str,
    path: &Path,
    line: usize,
) -> Result<Option<(u64, &'a str)>, LexiconError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let malformed = |reason: String| LexiconError::MalformedLine {
        path: path.to_path_buf(),
        line,
        reason,
    };

    let fields: Vec<&str> = text.split('\t').collect();
    let &[count, term] = fields.as_slice() else {
        return Err(malformed(format!(
            "expected 2 columns, found {}",
            fields.len()
        )));
    };
    let count = count
        .parse::<u64>()
        .map_err(|_| malformed(format!("count is not an integer: {count:?}")))?;

    Ok(Some((count, term)))
}
