use std::io::{self, Stdout};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::error::{AppError, AppResult};

use super::panic_hook::{install_panic_hook, set_screen_owned};

/// Raw-mode alternate screen owned by the UI loop; restored on drop.
pub(crate) struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl TerminalSession {
    pub(crate) fn enter() -> AppResult<Self> {
        enable_raw_mode()
            .map_err(|source| AppError::io_with_context(source, "failed to enable raw mode"))?;
        let mut stdout = io::stdout();
        if let Err(source) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::io_with_context(
                source,
                "failed to enter alternate screen",
            ));
        }

        let terminal = Terminal::new(CrosstermBackend::new(stdout)).and_then(|mut terminal| {
            terminal.clear()?;
            Ok(terminal)
        });
        match terminal {
            Ok(terminal) => {
                install_panic_hook();
                set_screen_owned(true);
                Ok(Self {
                    terminal,
                    active: true,
                })
            }
            Err(source) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                Err(AppError::io_with_context(
                    source,
                    "failed to initialize terminal",
                ))
            }
        }
    }

    pub(crate) fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        self.terminal.draw(render).map(|_| ())
    }

    pub(crate) fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        set_screen_owned(false);
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
