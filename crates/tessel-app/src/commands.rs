//! Line-oriented commands over stdin/stdout.

use crate::config::AppConfig;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tessel_core::{DynamicValue, NumberFormat, sort_by_less};

/// What to do with each input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Parse each line and print it formatted.
    Format,
    /// Sort lines by their numeric value.
    Sort,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "format" => Ok(Command::Format),
            "sort" => Ok(Command::Sort),
            other => Err(format!("Unknown command: {other}")),
        }
    }
}

/// Counts reported after a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines: usize,
    pub rejected: usize,
}

/// Run `command` over every line of `input`.
pub fn run(
    command: Command,
    config: &AppConfig,
    format: &NumberFormat,
    input: impl BufRead,
    mut output: impl Write,
) -> std::io::Result<RunSummary> {
    let mut summary = RunSummary::default();
    let mut rows = Vec::new();

    for line in input.lines() {
        let line = line?;
        summary.lines += 1;

        let value = if line.trim().is_empty() {
            DynamicValue::Absent
        } else {
            match format.parse(&line) {
                Ok(value) => DynamicValue::F64(value),
                Err(e) => {
                    log::warn!("{}", e);
                    summary.rejected += 1;
                    DynamicValue::error(e)
                }
            }
        };

        match command {
            Command::Format => match value {
                DynamicValue::F64(value) => writeln!(
                    output,
                    "{}",
                    format.format_with(value, config.precision, config.grouped)
                )?,
                _ => writeln!(output, "{}", line)?,
            },
            Command::Sort => rows.push((value, line)),
        }
    }

    if command == Command::Sort {
        sort_by_less(&mut rows, |(a, _), (b, _)| tessel_core::less(a, b, config.order));
        for (_, line) in rows {
            writeln!(output, "{}", line)?;
        }
    }

    Ok(summary)
}
