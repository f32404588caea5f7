//! The replacement block written on every setup run.

use chrono::NaiveDate;

use crate::syntax::BlockSyntax;

/// Date format inside the marker, e.g. `Feb-02, 2025`.
pub const MARKER_DATE_FORMAT: &str = "%b-%d, %Y";

/// A freshly generated managed block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlockSpec {
    marker: String,
    declaration: String,
    source: String,
    prompt: Option<String>,
}

impl NewBlockSpec {
    /// Build the marker, variable declaration and source lines.
    ///
    /// `date` is passed in rather than read from the clock so that two runs
    /// on the same inputs produce byte-identical blocks.
    pub fn new(
        syntax: &BlockSyntax,
        package_dir: &str,
        rc_script: &str,
        author: &str,
        date: NaiveDate,
    ) -> Self {
        let timestamp = date.format(MARKER_DATE_FORMAT).to_string();
        Self {
            marker: syntax.marker_line(&timestamp, author),
            declaration: syntax.declaration_line(package_dir),
            source: syntax.source_line(rc_script),
            prompt: None,
        }
    }

    /// Append a prompt assignment with the given PS1 value.
    pub fn with_prompt(mut self, syntax: &BlockSyntax, ps1: &str) -> Self {
        self.prompt = Some(syntax.prompt_line(ps1));
        self
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    /// The block's lines in file order.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            self.marker.clone(),
            self.declaration.clone(),
            self.source.clone(),
        ];
        lines.extend(self.prompt.clone());
        lines
    }
}
