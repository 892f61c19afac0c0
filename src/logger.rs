//! leveled console logger
//!
//! formats and prints timestamped, colored messages. this is a pure
//! output collaborator: nothing in the core reads it or depends on it.

use chrono::Local;
use colored::{Color, ColoredString, Colorize};

/// log levels, lowest to highest severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// the bracketed tag text
    pub fn tag(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// the level's text color
    pub fn color(&self) -> Color {
        match self {
            Level::Debug => Color::BrightWhite,
            Level::Info => Color::Cyan,
            Level::Warn => Color::Yellow,
            Level::Error => Color::Red,
        }
    }
}

fn timestamp() -> ColoredString {
    format!("[{}]", Local::now().format("%d.%m.%Y %H:%M:%S"))
        .green()
        .bold()
}

fn log(level: Level, message: &str) {
    println!(
        "{} {} {}",
        timestamp(),
        format!("[{}]", level.tag()).color(level.color()).bold(),
        message.color(level.color()).bold(),
    );
}

/// log a debug message
pub fn debug(message: &str) {
    log(Level::Debug, message);
}

/// log an info message
pub fn info(message: &str) {
    log(Level::Info, message);
}

/// log a warning message
pub fn warn(message: &str) {
    log(Level::Warn, message);
}

/// log an error message
pub fn error(message: &str) {
    log(Level::Error, message);
}

/// a piece of custom log output with its own styling
#[derive(Debug, Clone)]
pub struct Styled {
    pub text: String,
    pub color: Color,
    pub bold: bool,
}

impl Styled {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn render(&self) -> ColoredString {
        let colored = self.text.color(self.color);
        if self.bold {
            colored.bold()
        } else {
            colored
        }
    }
}

/// log a custom formatted line: an optional timestamp, a title and a
/// sequence of styled fragments joined by spaces
pub fn custom(time: bool, title: &Styled, args: &[Styled]) {
    let rendered_args = args
        .iter()
        .map(|arg| arg.render().to_string())
        .collect::<Vec<_>>()
        .join(" ");

    if time {
        println!("{} {} {}", timestamp(), title.render(), rendered_args);
    } else {
        println!("{} {}", title.render(), rendered_args);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_tags() {
        assert_eq!(Level::Debug.tag(), "DEBUG");
        assert_eq!(Level::Info.tag(), "INFO");
        assert_eq!(Level::Warn.tag(), "WARN");
        assert_eq!(Level::Error.tag(), "ERROR");
    }

    #[test]
    fn test_level_colors_distinct_per_severity() {
        assert_eq!(Level::Info.color(), Color::Cyan);
        assert_eq!(Level::Warn.color(), Color::Yellow);
        assert_eq!(Level::Error.color(), Color::Red);
        assert_eq!(Level::Debug.color(), Color::BrightWhite);
    }

    #[test]
    fn test_styled_builder() {
        let s = Styled::new("hi", Color::Cyan).bold();
        assert_eq!(s.text, "hi");
        assert!(s.bold);
    }
}
