//! Line-ending conversion command

use std::path::Path;

use colored::Colorize;
use mycmd_core::{InputSource, convert_file, detect_file};
use mycmd_fs::NormalizedPath;

use crate::error::Result;
use crate::interactive::TerminalInput;

/// Run the eol command
///
/// Reports the current style and, once confirmed, converts to the other one.
/// Declining is not an error.
pub fn run_eol(file: &Path, yes: bool) -> Result<()> {
    let path = NormalizedPath::new(file);
    let current = detect_file(&path)?;
    let target = current.other();

    println!(
        "Current line endings for '{}': {}",
        path,
        current.name().bold()
    );

    let confirmed = yes
        || TerminalInput::new().confirm(
            &format!("Convert {} -> {}?", current.name(), target.name()),
            false,
        )?;

    if !confirmed {
        println!("Conversion skipped.");
        return Ok(());
    }

    let report = convert_file(&path)?;
    if report.changed {
        println!(
            "{} Converted '{}' to {} successfully!",
            "OK".green().bold(),
            path,
            report.to.name()
        );
    } else {
        println!("Nothing to convert in '{}'.", path);
    }
    Ok(())
}
