//! The fixed symbols of the tree grammar and the prefixes built from them.

/// Drawn before a directory entry (U+251C).
pub const BRANCH: char = '\u{251C}';
/// Drawn before a file entry (U+2500).
pub const LEAF: char = '\u{2500}';
/// Joins a nested line back to its ancestors (U+2502).
pub const VERTICAL: char = '\u{2502}';
/// One indentation unit, two characters wide.
pub const FILL: &str = "\u{2500}\u{2500}";
/// Opens the per-directory summary line (U+2514).
pub const TERMINATOR: char = '\u{2514}';

/// Prefix of an entry line at `depth`: empty at the top, otherwise
/// `depth - 1` fill units, a vertical continuation, and one more fill unit.
pub fn entry_prefix(depth: usize) -> String {
    if depth == 0 {
        return String::new();
    }

    let mut prefix = FILL.repeat(depth - 1);
    prefix.push(VERTICAL);
    prefix.push_str(FILL);
    prefix
}

pub fn summary_prefix(depth: usize) -> String {
    FILL.repeat(depth)
}
