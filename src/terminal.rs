//! Alternate-screen and raw-mode handling for the quiz's terminal session.

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    ExecutableCommand,
    cursor::{Hide, Show},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type QuizTerminal = Terminal<CrosstermBackend<Stdout>>;

pub fn init() -> io::Result<QuizTerminal> {
    install_panic_hook();
    enable_raw_mode()?;

    // Raw mode is on from here; any failure must switch it back off.
    let terminal = undo_on_error(enter_screen, || {
        let _ = restore();
    })?;
    tracing::debug!("terminal switched to alternate screen");
    Ok(terminal)
}

pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?.execute(Show)?;
    tracing::debug!("terminal restored");
    Ok(())
}

fn enter_screen() -> io::Result<QuizTerminal> {
    io::stdout().execute(EnterAlternateScreen)?.execute(Hide)?;
    Terminal::new(CrosstermBackend::new(io::stdout()))
}

/// Run `setup`; if it fails, run `undo` before handing the error back.
fn undo_on_error<T>(
    setup: impl FnOnce() -> io::Result<T>,
    undo: impl FnOnce(),
) -> io::Result<T> {
    setup().inspect_err(|_| undo())
}

/// Leave the alternate screen before the panic message is printed, so it stays readable.
fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore();
        previous(info);
    }));
}
