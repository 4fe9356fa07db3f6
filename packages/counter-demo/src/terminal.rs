use crate::{Canvas, HostEvent, Result};
use crossterm::{
    cursor,
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute, queue, terminal,
};
use futures::{
    future,
    stream::{Stream, StreamExt},
};
use std::io::{stdout, Stdout, Write};

/// `Terminal` hosts a tree interactively: it turns key presses and the mouse wheel into
/// [`HostEvent`]s and paints frames.
///
/// Creating it switches the terminal to raw mode on the alternate screen with mouse capture
/// enabled. Dropping it restores the terminal.
pub struct Terminal {
    stdout: Stdout,
}

impl Terminal {
    /// Takes over the terminal.
    pub fn new() -> Result<Self> {
        let mut stdout = stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        Ok(Self { stdout })
    }

    /// Returns the stream of host events read from the terminal.
    ///
    /// Enter and Space click the button with the given label, the mouse wheel scrolls by one
    /// row, and `q`, Esc or Ctrl-C unmount.
    pub fn events(&self, button_label: &str) -> impl Stream<Item = HostEvent> + Unpin {
        let button_label = button_label.to_string();
        EventStream::new().filter_map(move |event| {
            future::ready(match event {
                Ok(event) => host_event(event, &button_label),
                Err(err) => {
                    log::warn!("failed to read terminal event: {}", err);
                    None
                }
            })
        })
    }

    /// Paints a frame: the canvas followed by the given console lines.
    pub fn draw(&mut self, canvas: &Canvas, console: &[String]) -> Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(0, 0),
            terminal::Clear(terminal::ClearType::All)
        )?;
        canvas.write_ansi(&mut self.stdout)?;
        write!(self.stdout, "\r\nconsole:\r\n")?;
        for line in console {
            write!(self.stdout, "  {}\r\n", line)?;
        }
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            cursor::Show,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn host_event(event: Event, button_label: &str) -> Option<HostEvent> {
    match event {
        Event::Key(KeyEvent {
            code, modifiers, kind, ..
        }) if kind != KeyEventKind::Release => match code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(HostEvent::Click(button_label.to_string())),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                Some(HostEvent::Unmount)
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(HostEvent::Unmount),
            _ => None,
        },
        Event::Mouse(MouseEvent { kind, .. }) => match kind {
            MouseEventKind::ScrollDown => Some(HostEvent::ScrollBy(1.0)),
            MouseEventKind::ScrollUp => Some(HostEvent::ScrollBy(-1.0)),
            _ => None,
        },
        _ => None,
    }
}
