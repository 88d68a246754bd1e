use super::Browser;
use crate::core::traits::KeyValueStore;
use crate::utils::error::{AppError, AppResult};
use crate::utils::toast;
use crossterm::{
    cursor,
    event::{Event, EventStream, KeyEventKind},
    execute, queue,
    style::Print,
    terminal::{self, ClearType},
};
use futures_util::StreamExt;
use std::io::{self, Stdout, Write};
use tokio::time::Instant;

fn io_error(e: io::Error) -> AppError {
    AppError::System(format!("Terminal error: {}", e))
}

/// Raw mode plus alternate screen, restored on drop
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> AppResult<Self> {
        terminal::enable_raw_mode().map_err(io_error)?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide).map_err(io_error)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn draw<S: KeyValueStore>(stdout: &mut Stdout, browser: &mut Browser<S>) -> AppResult<()> {
    let (width, height) = terminal::size().map_err(io_error)?;
    let body_rows = usize::from(height.saturating_sub(1));

    queue!(stdout, terminal::Clear(ClearType::All)).map_err(io_error)?;
    for (row, line) in browser.window(width, body_rows).iter().enumerate() {
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        queue!(stdout, cursor::MoveTo(0, row), Print(line)).map_err(io_error)?;
    }
    queue!(
        stdout,
        cursor::MoveTo(0, height.saturating_sub(1)),
        Print(browser.footer())
    )
    .map_err(io_error)?;

    stdout.flush().map_err(io_error)
}

/// Drive the session until the user quits
///
/// Key events and the toast deadline race in one `select!`, so a pending toast
/// disappears on time even when no key is pressed.
pub async fn run<S: KeyValueStore>(mut browser: Browser<S>) -> AppResult<()> {
    let _guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();
    let mut events = EventStream::new();

    draw(&mut stdout, &mut browser)?;

    while !browser.should_quit() {
        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    browser.handle_key(key, Instant::now());
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(io_error(e)),
                None => break,
            },
            generation = toast::wait_for(browser.toast().pending()) => {
                browser.expire_toast(generation);
            }
        }

        draw(&mut stdout, &mut browser)?;
    }

    tracing::debug!("browse session ended");
    Ok(())
}
