// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use clap::ValueEnum;
use gfs_core::FileRecord;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// One name per line
    #[default]
    Text,
    /// A JSON array of names
    Json,
}

/// Write file names exactly as they were read, in iteration order.
pub fn write_names<'a>(
    out: &mut dyn Write,
    files: impl IntoIterator<Item = &'a FileRecord>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for file in files {
                writeln!(out, "{}", file.name())?;
            }
        }
        OutputFormat::Json => {
            let names: Vec<&str> = files.into_iter().map(FileRecord::name).collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&names)?)?;
        }
    }
    out.flush()?;
    Ok(())
}
