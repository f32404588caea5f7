//! Terminal answers for the setup and eol questions
//!
//! Uses dialoguer when stdin and stderr are terminals. Otherwise answers are
//! read line by line from stdin, so the binary can be scripted.

use std::io::{self, BufRead, IsTerminal, Write};

use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use mycmd_core::InputSource;

fn prompt_error(e: dialoguer::Error) -> mycmd_core::Error {
    mycmd_core::Error::Io(io::Error::other(e))
}

/// [`InputSource`] backed by the user's terminal.
pub struct TerminalInput {
    interactive: bool,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal() && io::stderr().is_terminal(),
        }
    }

    /// Print `label` and read one line from stdin; `None` at end of input.
    fn read_line(&self, label: &str) -> mycmd_core::Result<Option<String>> {
        let mut stderr = io::stderr();
        write!(stderr, "{label}")?;
        stderr.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            writeln!(stderr)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Like [`Self::read_line`], but end of input is an error for `prompt`.
    fn require_line(&self, prompt: &str, label: &str) -> mycmd_core::Result<String> {
        self.read_line(label)?
            .ok_or_else(|| mycmd_core::Error::InputExhausted {
                prompt: prompt.to_string(),
            })
    }
}

impl InputSource for TerminalInput {
    fn text(&mut self, prompt: &str, default: Option<&str>) -> mycmd_core::Result<String> {
        if !self.interactive {
            let answer = match default {
                Some(default) => self.require_line(prompt, &format!("{prompt} [{default}]: "))?,
                None => self.require_line(prompt, &format!("{prompt}: "))?,
            };
            return Ok(match default {
                Some(default) if answer.trim().is_empty() => default.to_string(),
                _ => answer,
            });
        }

        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(prompt_error)
    }

    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> mycmd_core::Result<usize> {
        if !self.interactive {
            for (idx, item) in items.iter().enumerate() {
                eprintln!("  {}) {item}", idx + 1);
            }
            loop {
                let answer = self.require_line(prompt, &format!("{prompt} [{}]: ", default + 1))?;
                let answer = answer.trim();
                if answer.is_empty() {
                    return Ok(default);
                }
                match answer.parse::<usize>() {
                    Ok(n) if (1..=items.len()).contains(&n) => return Ok(n - 1),
                    _ => self.notify(&format!("Enter a number from 1 to {}.", items.len())),
                }
            }
        }

        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> mycmd_core::Result<bool> {
        if !self.interactive {
            let hint = if default { "[Y/n]" } else { "[y/N]" };
            // end of input takes the default
            let answer = self.read_line(&format!("{prompt} {hint}: "))?.unwrap_or_default();
            return Ok(match answer.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => true,
                "n" | "no" => false,
                _ => default,
            });
        }

        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }

    fn notify(&mut self, message: &str) {
        eprintln!("{}", message.yellow());
    }
}
