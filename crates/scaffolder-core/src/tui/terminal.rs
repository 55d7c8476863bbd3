//! Terminal side of the progress display
//!
//! [`TerminalSink`] paints frames on a single line. [`KeyListener`] puts the
//! terminal in raw mode and forwards quit/suspend keys from a polling thread.

use crate::pipeline::{Frame, FrameSink, KeyAction};
use colored::Colorize;
use console::Term;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Draws the progress line on stdout
pub struct TerminalSink {
    term: Term,
    /// A frame is on screen without a trailing newline
    dirty: bool,
}

impl TerminalSink {
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
            dirty: false,
        }
    }

    pub fn is_term(&self) -> bool {
        self.term.is_term()
    }

    pub fn hide_cursor(&self) -> io::Result<()> {
        self.term.hide_cursor()
    }

    /// End the progress line if one is still open and bring the cursor back
    pub fn release(&mut self) -> io::Result<()> {
        if self.dirty {
            self.term.write_str("\n")?;
            self.dirty = false;
        }
        self.term.show_cursor()
    }
}

impl FrameSink for TerminalSink {
    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        self.term.clear_line()?;
        self.term.write_str(&paint(frame))?;
        self.term.flush()?;
        self.dirty = true;
        Ok(())
    }

    fn finish(&mut self, frame: &Frame) -> io::Result<()> {
        self.draw(frame)?;
        // Raw mode may still be on, so return the carriage explicitly
        self.term.write_str("\r\n")?;
        self.dirty = false;
        Ok(())
    }

    fn suspend(&mut self) -> io::Result<()> {
        suspend_process(&self.term)
    }
}

/// Color each character of the frame text with its palette entry
pub fn paint(frame: &Frame) -> String {
    frame
        .text
        .chars()
        .enumerate()
        .map(|(i, c)| match frame.color_at(i) {
            Some(rgb) => c.to_string().truecolor(rgb.r, rgb.g, rgb.b).to_string(),
            None => c.to_string(),
        })
        .collect()
}

#[cfg(unix)]
fn suspend_process(term: &Term) -> io::Result<()> {
    use nix::sys::signal::{raise, Signal};

    disable_raw_mode()?;
    term.show_cursor()?;
    raise(Signal::SIGTSTP).map_err(io::Error::from)?;
    // Resumed by SIGCONT
    enable_raw_mode()?;
    term.hide_cursor()
}

#[cfg(not(unix))]
fn suspend_process(_term: &Term) -> io::Result<()> {
    Ok(())
}

/// Map a key press to a render-loop action
pub fn key_action(key: &KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(KeyAction::Quit),
        KeyCode::Char('z') if ctrl => Some(KeyAction::Suspend),
        KeyCode::Char('q') if !ctrl => Some(KeyAction::Quit),
        _ => None,
    }
}

/// Raw-mode key reader running on its own thread.
///
/// Dropping the listener stops the thread and restores the terminal mode.
pub struct KeyListener {
    stop: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl KeyListener {
    pub fn spawn(tx: mpsc::Sender<KeyAction>) -> io::Result<Self> {
        enable_raw_mode()?;

        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = thread::spawn(move || {
            while !flag.load(Ordering::Relaxed) {
                match event::poll(POLL_INTERVAL) {
                    Ok(true) => {
                        let action = match event::read() {
                            Ok(Event::Key(key)) => key_action(&key),
                            Ok(_) => None,
                            Err(_) => break,
                        };
                        if let Some(action) = action {
                            if tx.blocking_send(action).is_err() {
                                break;
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(_) => break,
                }
            }
        });

        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        let _ = disable_raw_mode();
    }
}
