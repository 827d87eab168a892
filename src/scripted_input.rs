use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::debug;

use crate::{command::Command, error::Result};

/// Pre-recorded command stream for headless play.
///
/// One character per command; blank lines and lines starting with `#` are
/// skipped, and whitespace inside a line is ignored.
pub struct ScriptedInput {
    script_commands: Vec<Command>,
    current_command_index: usize,
}

impl ScriptedInput {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let mut lines = Vec::new();
        for line in reader.lines() {
            lines.push(line?);
        }
        let script = Self::from_lines(lines.iter().map(String::as_str));
        debug!(
            "loaded {} scripted commands from {}",
            script.len(),
            path.as_ref().display()
        );
        Ok(script)
    }

    pub fn from_script(script: &str) -> Self {
        Self::from_lines(script.lines())
    }

    fn from_lines<'a, I: Iterator<Item = &'a str>>(lines: I) -> Self {
        let mut script_commands = Vec::new();
        for line in lines {
            let trimmed_line = line.trim();
            if trimmed_line.is_empty() || trimmed_line.starts_with('#') {
                continue;
            }
            script_commands.extend(
                trimmed_line
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .map(Command::from_char),
            );
        }

        Self {
            script_commands,
            current_command_index: 0,
        }
    }

    pub fn next_command(&mut self) -> Option<Command> {
        let command = self.script_commands.get(self.current_command_index).copied()?;
        self.current_command_index += 1;
        Some(command)
    }

    pub fn len(&self) -> usize {
        self.script_commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.script_commands.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.script_commands.len() - self.current_command_index
    }
}

impl Iterator for ScriptedInput {
    type Item = Command;

    fn next(&mut self) -> Option<Command> {
        self.next_command()
    }
}
