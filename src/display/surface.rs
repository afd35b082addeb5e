//! The terminal the frames are written to.

use std::io::{self, Stdout};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    text::{Line as TextLine, Text},
    widgets::Paragraph,
};

use super::render::Frame;

/// Minimal terminal capability the refresh loop draws through.
pub trait Surface {
    /// Current `(columns, rows)`.
    fn size(&self) -> io::Result<(u16, u16)>;
    fn clear(&mut self) -> io::Result<()>;
    fn hide_cursor(&mut self) -> io::Result<()>;
    fn show_cursor(&mut self) -> io::Result<()>;
    fn draw(&mut self, frame: &Frame) -> io::Result<()>;
}

/// `ratatui` terminal on top of crossterm and stdout.
pub struct TerminalSurface {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSurface {
    pub fn new(stdout: Stdout) -> io::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Surface for TerminalSurface {
    fn size(&self) -> io::Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    fn clear(&mut self) -> io::Result<()> {
        self.terminal.clear()
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        self.terminal.hide_cursor()
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        self.terminal.show_cursor()
    }

    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        let text: Text = frame
            .rows
            .iter()
            .map(|row| TextLine::raw(row.as_str()))
            .collect::<Vec<_>>()
            .into();

        self.terminal.draw(|f| {
            f.render_widget(Paragraph::new(text), f.area());
        })?;
        Ok(())
    }
}
