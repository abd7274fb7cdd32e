//! Terminal rendering for markdown output
//!
//! Rich output goes through termimad; plain output prints the markdown
//! verbatim, which is what tests and pipes see with `--no-color`.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.bullet.set_fg(Color::Green);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            if !markdown.ends_with('\n') {
                println!();
            }
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("\x1b[36m{line}\x1b[0m");
            } else if line.starts_with("Error:") {
                println!("\x1b[31m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }

    /// Print an input prompt without a trailing newline
    pub fn prompt(&self, label: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{label}")?;
        stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
