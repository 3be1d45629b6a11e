// src/cli/prompt.rs
use std::io::{self, BufRead, Write};
use thiserror::Error;

use crate::models::GenerationRequest;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Input ended before all answers were given")]
    Exhausted,
}

pub type Result<T> = std::result::Result<T, InputError>;

/// Line-oriented prompt loop over any reader/writer pair.
pub struct InputCollector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InputCollector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn collect(&mut self) -> Result<GenerationRequest> {
        writeln!(self.output, "=== Password Generator ===")?;

        let length = self.ask_length()?;
        let include_uppercase = self.ask_yes_no("Include uppercase letters? (y/n): ")?;
        let include_digits = self.ask_yes_no("Include digits? (y/n): ")?;
        let include_special = self.ask_yes_no("Include special characters? (y/n): ")?;

        let request = GenerationRequest::new(length, include_uppercase, include_digits, include_special);
        log::info!("Collected request: {:?}", request);
        Ok(request)
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn ask_length(&mut self) -> Result<usize> {
        loop {
            let line = self.prompt("Enter password length (8-64): ")?;
            match line.trim().parse::<i64>() {
                Ok(value) => {
                    if let Ok(length) = usize::try_from(value) {
                        if GenerationRequest::length_in_range(length) {
                            return Ok(length);
                        }
                    }
                    log::warn!("Length {} out of range", value);
                    writeln!(
                        self.output,
                        "Please enter a number between {} and {}.",
                        GenerationRequest::MIN_LENGTH,
                        GenerationRequest::MAX_LENGTH
                    )?;
                }
                Err(e) => {
                    log::warn!("Unparseable length {:?}: {}", line.trim(), e);
                    writeln!(self.output, "Please enter a valid number.")?;
                }
            }
        }
    }

    // Anything but "y" (any case) counts as no.
    fn ask_yes_no(&mut self, question: &str) -> Result<bool> {
        let line = self.prompt(question)?;
        Ok(line.trim().eq_ignore_ascii_case("y"))
    }

    fn prompt(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            log::error!("Standard input closed while waiting for: {}", question.trim());
            return Err(InputError::Exhausted);
        }
        Ok(line)
    }
}
