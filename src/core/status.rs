//! Status line styling
//!
//! Renders the fixed SUCCESS/FAIL labels and diagnostic tail lines.
//! Colors are applied only when stdout is a terminal.

use std::io::{self, IsTerminal};

use crossterm::style::{Color, Stylize};

/// Success label color
const SUCCESS_COLOR: Color = Color::Rgb {
    r: 0x34,
    g: 0xd3,
    b: 0x99,
};

/// Failure label and diagnostic color
const FAILURE_COLOR: Color = Color::Rgb {
    r: 0xef,
    g: 0x44,
    b: 0x44,
};

/// Styling mode for pipeline status output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusStyle {
    /// ANSI colored output
    Colored,
    /// Plain text output
    Plain,
}

impl StatusStyle {
    /// Pick a style based on whether stdout is a terminal
    pub fn auto() -> Self {
        if io::stdout().is_terminal() {
            Self::Colored
        } else {
            Self::Plain
        }
    }

    /// The fixed success label
    pub fn success(&self) -> String {
        match self {
            Self::Colored => "SUCCESS".with(SUCCESS_COLOR).to_string(),
            Self::Plain => "SUCCESS".to_string(),
        }
    }

    /// The fixed failure label
    pub fn failure(&self) -> String {
        match self {
            Self::Colored => "FAIL".with(FAILURE_COLOR).to_string(),
            Self::Plain => "FAIL".to_string(),
        }
    }

    /// One diagnostic tail line
    pub fn error_line(&self, line: &str) -> String {
        match self {
            Self::Colored => line.with(FAILURE_COLOR).to_string(),
            Self::Plain => line.to_string(),
        }
    }
}
