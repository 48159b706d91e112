use std::io::{self, Write};

use crate::models::{DirTree, EntryKind};

use super::glyph::{self, BRANCH, LEAF, TERMINATOR};

/// Write `tree` as if it were listed at recursion level `depth`, closing
/// with its summary line.
pub fn write_tree<W: Write>(writer: &mut W, tree: &DirTree, depth: usize) -> io::Result<()> {
    let prefix = glyph::entry_prefix(depth);

    for node in &tree.children {
        let symbol = match node.kind {
            EntryKind::Directory => BRANCH,
            EntryKind::File => LEAF,
        };
        writeln!(writer, "{prefix}{symbol} {}", node.name)?;

        if let Some(subtree) = node.subtree.as_ref() {
            write_tree(writer, subtree, depth + 1)?;
        }
    }

    writeln!(
        writer,
        "{}{TERMINATOR} {} directories, {} files",
        glyph::summary_prefix(depth),
        tree.ndirectories,
        tree.nfiles
    )
}
