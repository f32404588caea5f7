//! Text diffs shown by `setup --dry-run`.

use similar::{ChangeTag, TextDiff};

/// Line counts of a change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
}

impl DiffStats {
    /// Count inserted and deleted lines between `old` and `new`.
    pub fn compute(old: &str, new: &str) -> Self {
        let diff = TextDiff::from_lines(old, new);
        diff.iter_all_changes()
            .fold(Self::default(), |mut stats, change| {
                match change.tag() {
                    ChangeTag::Insert => stats.added += 1,
                    ChangeTag::Delete => stats.removed += 1,
                    ChangeTag::Equal => {}
                }
                stats
            })
    }

    pub fn is_empty(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}

/// Unified diff of `old` against `new`, labelled with `path`.
///
/// Returns an empty string when the texts are identical.
pub fn unified(old: &str, new: &str, path: &str) -> String {
    if old == new {
        return String::new();
    }
    let current = format!("{path} (current)");
    let updated = format!("{path} (updated)");
    let diff = TextDiff::from_lines(old, new);
    let mut unified = diff.unified_diff();
    unified.context_radius(3).header(&current, &updated);
    unified.to_string()
}
