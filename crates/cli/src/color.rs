// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::builder::styling::{Ansi256Color, Color, Style, Styles};
use std::io::IsTerminal;

/// Help headers: steel blue
const HEADER: u8 = 74;
/// Flags and literals: light grey
const LITERAL: u8 = 250;
/// Value placeholders: medium grey
const PLACEHOLDER: u8 = 245;

/// Color help output only on a terminal, and never when `NO_COLOR` is set.
pub fn should_colorize() -> bool {
    if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return false;
    }
    std::io::stdout().is_terminal()
}

fn fg(code: u8) -> Style {
    Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))))
}

/// Clap `Styles` for `--help`.
pub fn styles() -> Styles {
    if !should_colorize() {
        return Styles::plain();
    }
    Styles::styled().header(fg(HEADER)).literal(fg(LITERAL)).placeholder(fg(PLACEHOLDER))
}
