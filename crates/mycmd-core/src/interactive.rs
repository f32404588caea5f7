//! Prompt customization questions.
//!
//! The questions are asked through [`InputSource`] so the terminal front end
//! and tests share the same validation loop. Invalid answers are explained
//! through [`InputSource::notify`] and asked again; they never escape as
//! errors. The only errors are those of the source itself.

use std::collections::VecDeque;

use crate::color::{ColorCode, PRESETS, parse_channel};
use crate::{Error, Result};

/// Menu entry for a 256-color palette index.
pub const PALETTE_ITEM: &str = "256-color palette index";
/// Menu entry for a true-color value.
pub const RGB_ITEM: &str = "Custom RGB";
/// Menu entry selected when the user just presses enter.
pub const DEFAULT_COLOR: &str = "Magenta";

/// Where answers come from.
pub trait InputSource {
    /// Free text; an empty answer yields `default` when one is given.
    fn text(&mut self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Index into `items`.
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize>;

    /// Yes or no.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// Show a message without expecting an answer.
    fn notify(&mut self, message: &str);
}

/// Name and color for the generated prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptChoice {
    pub name: String,
    pub color: ColorCode,
}

impl PromptChoice {
    /// Build a choice, rejecting names that cannot sit inside the quoted PS1.
    pub fn new(name: &str, color: ColorCode) -> Result<Self> {
        let name = validate_name(name).map_err(|reason| Error::InvalidName {
            input: name.to_string(),
            reason,
        })?;
        Ok(Self { name, color })
    }

    /// The PS1 value: colored name, then the working directory in bold blue.
    pub fn ps1(&self) -> String {
        format!(
            r"\[\e[{}m\]{}\[\e[0m\]:\[\e[1;34m\]\w\[\e[0m\]\$ ",
            self.color.sgr(),
            self.name
        )
    }
}

/// Check a prompt name, returning it trimmed.
pub fn validate_name(input: &str) -> std::result::Result<String, String> {
    let name = input.trim();
    if name.is_empty() {
        return Err("the name cannot be empty".into());
    }
    if name.contains('\'') {
        return Err("single quotes are not allowed".into());
    }
    if name.chars().any(char::is_control) {
        return Err("control characters are not allowed".into());
    }
    Ok(name.to_string())
}

/// The color menu in display order.
pub fn color_menu() -> Vec<String> {
    PRESETS
        .iter()
        .map(|(name, _)| name.to_string())
        .chain([PALETTE_ITEM.to_string(), RGB_ITEM.to_string()])
        .collect()
}

/// Ask for a name until a usable one is given.
pub fn ask_name(input: &mut dyn InputSource, default: Option<&str>) -> Result<String> {
    loop {
        let answer = input.text("Name shown in the prompt", default)?;
        match validate_name(&answer) {
            Ok(name) => return Ok(name),
            Err(reason) => input.notify(&format!("Invalid name: {reason}. Try again.")),
        }
    }
}

/// Ask for one value in `0..=255` until a valid one is given.
pub fn ask_channel(input: &mut dyn InputSource, label: &str) -> Result<u8> {
    loop {
        let answer = input.text(&format!("{label} (0-255)"), None)?;
        match parse_channel(&answer) {
            Ok(value) => return Ok(value),
            Err(e) => input.notify(&format!("Invalid {label}: {e}. Try again.")),
        }
    }
}

/// Show the color menu and ask follow-up questions for numeric entries.
pub fn choose_color(input: &mut dyn InputSource) -> Result<ColorCode> {
    let items = color_menu();
    let default = items
        .iter()
        .position(|item| item == DEFAULT_COLOR)
        .unwrap_or(0);
    let index = input.select("Prompt color", &items, default)?;

    let color = match items.get(index).map(String::as_str) {
        Some(PALETTE_ITEM) => ColorCode::Palette(ask_channel(input, "Palette index")?),
        Some(RGB_ITEM) => {
            let r = ask_channel(input, "Red")?;
            let g = ask_channel(input, "Green")?;
            let b = ask_channel(input, "Blue")?;
            ColorCode::Rgb(r, g, b)
        }
        Some(name) => ColorCode::preset(name).unwrap_or(ColorCode::Ansi(35)),
        None => ColorCode::Ansi(35),
    };
    tracing::debug!(%color, "chose prompt color");
    Ok(color)
}

/// Ask for the whole prompt customization.
pub fn ask_prompt(input: &mut dyn InputSource, default_name: Option<&str>) -> Result<PromptChoice> {
    let name = ask_name(input, default_name)?;
    let color = choose_color(input)?;
    Ok(PromptChoice { name, color })
}

/// Answers fed from a list, for tests and non-interactive runs.
///
/// Menu answers may be an index or an item name. An empty answer takes the
/// default. Every prompt and notification is recorded.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    prompts: Vec<String>,
    messages: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Prompts asked so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Notifications shown so far.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or_else(|| Error::InputExhausted {
            prompt: prompt.to_string(),
        })
    }
}

impl InputSource for ScriptedInput {
    fn text(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        let answer = self.next(prompt)?;
        Ok(match default {
            Some(default) if answer.is_empty() => default.to_string(),
            _ => answer,
        })
    }

    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        loop {
            let answer = self.next(prompt)?;
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(default);
            }
            if let Ok(index) = answer.parse::<usize>() {
                if index < items.len() {
                    return Ok(index);
                }
            }
            if let Some(index) = items.iter().position(|i| i.eq_ignore_ascii_case(answer)) {
                return Ok(index);
            }
            self.notify(&format!("'{answer}' is not a menu entry"));
        }
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        loop {
            let answer = self.next(prompt)?;
            match answer.trim().to_ascii_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                other => self.notify(&format!("'{other}' is not yes or no")),
            }
        }
    }

    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn preset_by_name() {
        let mut input = ScriptedInput::new(["cyan"]);
        assert_eq!(choose_color(&mut input).unwrap(), ColorCode::Ansi(36));
    }

    #[test]
    fn enter_takes_default_color() {
        let mut input = ScriptedInput::new([""]);
        assert_eq!(choose_color(&mut input).unwrap(), ColorCode::Ansi(35));
    }

    #[test]
    fn palette_index() {
        let mut input = ScriptedInput::new([PALETTE_ITEM, "208"]);
        assert_eq!(choose_color(&mut input).unwrap(), ColorCode::Palette(208));
    }

    #[rstest]
    #[case("256")]
    #[case("-1")]
    #[case("abc")]
    #[case("")]
    fn invalid_channel_reprompts_for_each_channel(#[case] bad: &str) {
        let mut input = ScriptedInput::new([RGB_ITEM, bad, "10", bad, "20", bad, "30"]);

        let color = choose_color(&mut input).unwrap();

        assert_eq!(color, ColorCode::Rgb(10, 20, 30));
        assert_eq!(input.messages().len(), 3);
        assert!(input.messages()[0].starts_with("Invalid Red"));
        assert!(input.messages()[2].starts_with("Invalid Blue"));
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn exhausted_answers_are_an_error_not_a_loop() {
        let mut input = ScriptedInput::new([RGB_ITEM, "300"]);
        assert!(matches!(
            choose_color(&mut input),
            Err(Error::InputExhausted { .. })
        ));
    }

    #[test]
    fn name_with_quote_is_asked_again() {
        let mut input = ScriptedInput::new(["it's me", "me"]);
        assert_eq!(ask_name(&mut input, None).unwrap(), "me");
        assert_eq!(input.messages().len(), 1);
    }

    #[test]
    fn empty_name_uses_default() {
        let mut input = ScriptedInput::new([""]);
        assert_eq!(ask_name(&mut input, Some("tirupati")).unwrap(), "tirupati");
    }

    #[test]
    fn ps1_wraps_escapes_for_readline() {
        let choice = PromptChoice::new("dev", ColorCode::Ansi(35)).unwrap();
        assert_eq!(
            choice.ps1(),
            r"\[\e[1;35m\]dev\[\e[0m\]:\[\e[1;34m\]\w\[\e[0m\]\$ "
        );
    }

    #[test]
    fn prompt_choice_rejects_quotes() {
        assert!(matches!(
            PromptChoice::new("a'b", ColorCode::Ansi(31)),
            Err(Error::InvalidName { .. })
        ));
    }

    #[test]
    fn confirm_defaults_and_retries() {
        let mut input = ScriptedInput::new(["", "maybe", "Y"]);
        assert!(!input.confirm("Convert?", false).unwrap());
        assert!(input.confirm("Convert?", false).unwrap());
        assert_eq!(input.messages().len(), 1);
    }
}
