//! Single-pass line classification for managed blocks.

use crate::syntax::BlockSyntax;

/// What a line is with respect to managed blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    /// Outside any block; copied through unchanged.
    Kept,
    /// Marker line opening a block.
    Marker,
    /// Blank or owned line continuing the current block.
    Owned,
}

/// A managed block found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSpan {
    /// 1-based line number of the marker.
    pub start_line: usize,
    /// 1-based line number of the last line belonging to the block.
    pub end_line: usize,
    /// The block's lines, marker included.
    pub lines: Vec<String>,
}

/// Classify every line of `lines` in one pass.
///
/// A marker outside a block opens one. Inside a block, blank and owned lines
/// continue it, another marker opens a fresh block right away, and any other
/// line closes the block and is itself [`LineRole::Kept`].
pub fn classify<S: AsRef<str>>(syntax: &BlockSyntax, lines: &[S]) -> Vec<LineRole> {
    let mut in_block = false;
    lines
        .iter()
        .map(|line| {
            let line = line.as_ref();
            if syntax.is_marker(line) {
                in_block = true;
                LineRole::Marker
            } else if in_block && syntax.is_owned(line) {
                LineRole::Owned
            } else {
                in_block = false;
                LineRole::Kept
            }
        })
        .collect()
}

/// Find every managed block in `lines`, in order of appearance.
pub fn parse_blocks<S: AsRef<str>>(syntax: &BlockSyntax, lines: &[S]) -> Vec<BlockSpan> {
    let roles = classify(syntax, lines);
    let mut blocks: Vec<BlockSpan> = Vec::new();

    for (idx, (line, role)) in lines.iter().zip(roles).enumerate() {
        match role {
            LineRole::Marker => blocks.push(BlockSpan {
                start_line: idx + 1,
                end_line: idx + 1,
                lines: vec![line.as_ref().to_string()],
            }),
            LineRole::Owned => {
                // classify only yields Owned after a Marker
                if let Some(current) = blocks.last_mut() {
                    current.end_line = idx + 1;
                    current.lines.push(line.as_ref().to_string());
                }
            }
            LineRole::Kept => {}
        }
    }

    blocks
}

/// Whether `lines` contain at least one managed block.
pub fn has_block<S: AsRef<str>>(syntax: &BlockSyntax, lines: &[S]) -> bool {
    lines.iter().any(|line| syntax.is_marker(line.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syntax() -> BlockSyntax {
        BlockSyntax::for_package("mycmd").unwrap()
    }

    #[test]
    fn test_parse_blocks_empty() {
        let lines = ["alias ll='ls -la'"];
        assert!(parse_blocks(&syntax(), &lines).is_empty());
        assert!(!has_block(&syntax(), &lines));
    }

    #[test]
    fn test_parse_single_block() {
        let lines = [
            "alias ll='ls -la'",
            "# Added by mycmd's setup on (Jan-01, 2025) © Tirupati",
            "declare -xr MYCMD=\"/home/u/mycmd\"",
            "source \"$MYCMD/my_bashrc.sh\"",
            "alias gs='git status'",
        ];
        let blocks = parse_blocks(&syntax(), &lines);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].start_line, 2);
        assert_eq!(blocks[0].end_line, 4);
        assert_eq!(blocks[0].lines.len(), 3);
    }

    #[test]
    fn test_boundary_line_is_kept() {
        let lines = [
            "# Added by mycmd's setup on (Jan-01, 2025) © Tirupati",
            "",
            "alias gs='git status'",
            "export PS1='outside'",
        ];
        let roles = classify(&syntax(), &lines);
        assert_eq!(
            roles,
            vec![
                LineRole::Marker,
                LineRole::Owned,
                LineRole::Kept,
                LineRole::Kept
            ]
        );
    }

    #[test]
    fn test_back_to_back_markers_are_separate_blocks() {
        let lines = [
            "# Added by mycmd's setup on (Jan-01, 2025) © Tirupati",
            "# Added by mycmd's setup on (Feb-02, 2025) © Tirupati",
            "declare -xr MYCMD=\"/home/u/mycmd\"",
        ];
        let blocks = parse_blocks(&syntax(), &lines);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].end_line, 1);
        assert_eq!(blocks[1].start_line, 2);
        assert_eq!(blocks[1].end_line, 3);
    }

    #[test]
    fn test_owned_lines_outside_block_are_kept() {
        let lines = ["export PS1='mine'", "", "declare -xr MYCMD=\"/x\""];
        assert!(
            classify(&syntax(), &lines)
                .iter()
                .all(|role| *role == LineRole::Kept)
        );
    }
}
