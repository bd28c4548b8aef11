//! Line-oriented prompts
//!
//! Every prompt re-asks until the answer is acceptable. There is no retry
//! limit; only end of input stops a prompt that needs an answer.

use std::io::{BufRead, Write};

use avd_wizard_core::{Result, WizardError};

/// Interpret a yes/no answer, case-insensitively
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Prompts over any reader/writer pair
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the underlying reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Print a line
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{}", message)?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Free text; an empty answer (or end of input) yields `default`
    pub fn string_or_default(&mut self, prompt: &str, default: &str) -> Result<String> {
        let answer = self.ask(&format!("{} [{}]: ", prompt, default))?;
        Ok(match answer {
            Some(a) if !a.is_empty() => a,
            _ => default.to_string(),
        })
    }

    /// Integer in `min..=max`
    pub fn int_in_range(&mut self, prompt: &str, min: u32, max: u32) -> Result<u32> {
        loop {
            let answer = self
                .ask(&format!("{} ({}-{}): ", prompt, min, max))?
                .ok_or(WizardError::InputClosed)?;
            match answer.parse::<u32>() {
                Ok(n) if (min..=max).contains(&n) => return Ok(n),
                _ => self.say(&format!("Please enter a number between {} and {}", min, max))?,
            }
        }
    }

    /// Numbered single-choice menu; returns the 0-based index
    pub fn choose(&mut self, title: &str, options: &[&str]) -> Result<usize> {
        debug_assert!(!options.is_empty());

        self.say(&format!("\n{}:", title))?;
        for (i, option) in options.iter().enumerate() {
            self.say(&format!("{}. {}", i + 1, option))?;
        }
        let choice = self.int_in_range("Enter number", 1, options.len() as u32)?;
        Ok(choice as usize - 1)
    }

    /// y/yes or n/no
    pub fn yes_no(&mut self, prompt: &str) -> Result<bool> {
        loop {
            let answer = self
                .ask(&format!("{} (y/n): ", prompt))?
                .ok_or(WizardError::InputClosed)?;
            match parse_yes_no(&answer) {
                Some(value) => return Ok(value),
                None => self.say("Please enter 'y' or 'n'")?,
            }
        }
    }
}
