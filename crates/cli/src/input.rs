// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented candidate input.

use std::io::BufRead;

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;

/// Read every newline-separated line from `reader`.
///
/// Lines that are not valid UTF-8 cannot carry a timestamp and are dropped
/// like any other non-matching line. Only I/O failures are errors.
pub fn read_lines(reader: impl BufRead) -> std::io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for raw in reader.split(b'\n') {
        match String::from_utf8(raw?) {
            Ok(line) => lines.push(line),
            Err(e) => tracing::debug!(error = %e, "skipping non UTF-8 line"),
        }
    }
    Ok(lines)
}
