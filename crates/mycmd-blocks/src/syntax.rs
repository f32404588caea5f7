//! Marker and owned-line syntax for one package.

use regex::Regex;

use crate::{Error, Result};

/// Prompt assignment prefix. Owned by every managed block regardless of
/// package, since only one tool can sensibly own the prompt.
pub const PROMPT_PREFIX: &str = "export PS1=";

/// The fixed strings that identify and build a package's managed block.
#[derive(Debug, Clone)]
pub struct BlockSyntax {
    package: String,
    var_name: String,
    marker_prefix: String,
    marker: Regex,
    owned_prefixes: Vec<String>,
}

impl BlockSyntax {
    /// Build the syntax for `package`.
    ///
    /// The variable name is the package name upper-cased with every
    /// character outside `[A-Za-z0-9_]` replaced by `_` (`my-cmd` becomes
    /// `MY_CMD`). The marker prefix ends at `setup`, so markers with or
    /// without the `.py` suffix are recognised.
    pub fn for_package(package: &str) -> Result<Self> {
        let package = package.trim();
        if package.is_empty() {
            return Err(Error::InvalidPackageName {
                name: package.to_string(),
                reason: "name is empty".into(),
            });
        }
        if package.chars().any(|c| c.is_control() || c == '"' || c == '\'') {
            return Err(Error::InvalidPackageName {
                name: package.to_string(),
                reason: "quotes and control characters are not allowed".into(),
            });
        }

        let mut var_name: String = package
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect();
        if var_name.starts_with(|c: char| c.is_ascii_digit()) {
            var_name.insert(0, '_');
        }

        let marker_prefix = format!("# Added by {package}'s setup");
        let marker = Regex::new(&format!(r"^\s*{}", regex::escape(&marker_prefix)))?;

        let owned_prefixes = vec![
            format!("declare -xr {var_name}="),
            format!("export {var_name}="),
            format!("source \"${var_name}/"),
            PROMPT_PREFIX.to_string(),
        ];

        Ok(Self {
            package: package.to_string(),
            var_name,
            marker_prefix,
            marker,
            owned_prefixes,
        })
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Name of the exported read-only variable, e.g. `MYCMD`.
    pub fn var_name(&self) -> &str {
        &self.var_name
    }

    pub fn marker_prefix(&self) -> &str {
        &self.marker_prefix
    }

    pub fn owned_prefixes(&self) -> &[String] {
        &self.owned_prefixes
    }

    /// Whether `line` opens a managed block.
    pub fn is_marker(&self, line: &str) -> bool {
        self.marker.is_match(line)
    }

    /// Whether `line` may continue a managed block: blank, or starting with
    /// one of the owned prefixes after leading whitespace.
    pub fn is_owned(&self, line: &str) -> bool {
        let line = line.trim_start();
        line.is_empty()
            || self
                .owned_prefixes
                .iter()
                .any(|prefix| line.starts_with(prefix.as_str()))
    }

    /// `# Added by <package>'s setup.py on (<timestamp>) © <author>`
    pub fn marker_line(&self, timestamp: &str, author: &str) -> String {
        format!("{}.py on ({timestamp}) © {author}", self.marker_prefix)
    }

    /// `declare -xr VAR="<dir>"`
    ///
    /// `\`, `"`, `$` and backticks in `package_dir` are backslash-escaped so
    /// the value is taken literally inside the double quotes.
    pub fn declaration_line(&self, package_dir: &str) -> String {
        let mut quoted = String::with_capacity(package_dir.len());
        for c in package_dir.chars() {
            if matches!(c, '\\' | '"' | '$' | '`') {
                quoted.push('\\');
            }
            quoted.push(c);
        }
        format!("declare -xr {}=\"{quoted}\"", self.var_name)
    }

    /// `source "$VAR/<script>"`
    pub fn source_line(&self, script: &str) -> String {
        format!("source \"${}/{script}\"", self.var_name)
    }

    /// `export PS1='<value>'`
    pub fn prompt_line(&self, ps1: &str) -> String {
        format!("{PROMPT_PREFIX}'{ps1}'")
    }
}
