//! Managed-block replacement.
//!
//! [`rewrite`] is the pure core: old lines in, new lines out. [`replace_block`]
//! wraps it for whole documents, keeping the document's line terminator.

use mycmd_fs::LineEnding;

use crate::block::NewBlockSpec;
use crate::parser::{LineRole, classify};
use crate::syntax::BlockSyntax;

/// Drop every managed block from `lines` and append `new_block`.
///
/// Lines outside blocks keep their content and relative order. The first
/// non-owned line after a block is kept in place of the removed block.
pub fn rewrite<S: AsRef<str>>(
    syntax: &BlockSyntax,
    lines: &[S],
    new_block: &[String],
) -> Vec<String> {
    let roles = classify(syntax, lines);
    let mut output: Vec<String> = lines
        .iter()
        .zip(roles)
        .filter(|(_, role)| *role == LineRole::Kept)
        .map(|(line, _)| line.as_ref().to_string())
        .collect();

    let removed = lines.len() - output.len();
    tracing::debug!(
        package = syntax.package(),
        removed,
        appended = new_block.len(),
        "rewrote managed block"
    );

    output.extend(new_block.iter().cloned());
    output
}

/// Join `lines` with `ending`, terminating the last line exactly once.
pub fn render<S: AsRef<str>>(lines: &[S], ending: LineEnding) -> String {
    let terminator = ending.as_str();
    let mut out = String::new();
    for line in lines {
        out.push_str(line.as_ref());
        out.push_str(terminator);
    }
    out
}

/// Replace the managed block of a whole document.
///
/// The document's own terminator style is detected and reused; an empty
/// document (first run) is written with LF.
pub fn replace_block(syntax: &BlockSyntax, content: &str, block: &NewBlockSpec) -> String {
    let ending = LineEnding::detect_text(content);
    let lines: Vec<&str> = content.lines().collect();
    let rewritten = rewrite(syntax, &lines, &block.lines());
    render(&rewritten, ending)
}
