use super::EntryKind;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeNode {
    pub name: String,
    pub kind: EntryKind,
    /// Present for directories only.
    pub subtree: Option<DirTree>,
}

/// One listed directory with its children already sorted.
///
/// `nfiles` and `ndirectories` count everything strictly below this
/// directory; the directory itself is counted by its parent.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DirTree {
    pub children: Vec<TreeNode>,
    pub nfiles: u64,
    pub ndirectories: u64,
}
