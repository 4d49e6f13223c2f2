//! Console output for the line-based game, with optional colors

use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::QueueableCommand;
use std::io::{self, Write};

pub struct Console<W: Write> {
    out: W,
    styled: bool,
}

impl<W: Write> Console<W> {
    /// Console that colors highlighted lines with ANSI escapes.
    pub fn styled(out: W) -> Self {
        Self { out, styled: true }
    }

    /// Console that never emits escape codes.
    pub fn plain(out: W) -> Self {
        Self { out, styled: false }
    }

    /// Print a line and flush, so prompts show up before input is read.
    pub fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }

    /// Print a colored line with automatic reset
    pub fn print_colored_line(&mut self, text: &str, color: TerminalColor) -> io::Result<()> {
        if self.styled {
            self.out.queue(SetForegroundColor(color.into()))?;
            write!(self.out, "{}", text)?;
            self.out.queue(ResetColor)?;
            writeln!(self.out)?;
            self.out.flush()
        } else {
            self.print_line(text)
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalColor {
    Red,
    Green,
    Yellow,
    Cyan,
}

impl From<TerminalColor> for Color {
    fn from(color: TerminalColor) -> Self {
        match color {
            TerminalColor::Red => Color::Red,
            TerminalColor::Green => Color::Green,
            TerminalColor::Yellow => Color::Yellow,
            TerminalColor::Cyan => Color::Cyan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_console_has_no_escapes() {
        let mut console = Console::plain(Vec::new());
        console.print_colored_line("You won!", TerminalColor::Green).unwrap();
        console.print_line("> ").unwrap();
        assert_eq!(String::from_utf8(console.into_inner()).unwrap(), "You won!\n> \n");
    }

    #[test]
    fn styled_console_wraps_text_in_color() {
        let mut console = Console::styled(Vec::new());
        console.print_colored_line("Too high", TerminalColor::Red).unwrap();
        let out = String::from_utf8(console.into_inner()).unwrap();
        assert!(out.starts_with("\u{1b}["), "{out:?}");
        assert!(out.contains("Too high"));
        assert!(out.ends_with("\u{1b}[0m\n"), "{out:?}");
    }
}
