//! Input handling for the Cardfolio TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use cardfolio_engine::{App, Mode};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking task and hands them to the frame loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a backpressured send in the input thread unblocks.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain pending input without blocking. Returns true when the app should quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    for _ in 0..MAX_EVENTS_PER_FRAME {
        let msg = match input.rx.try_recv() {
            Ok(msg) => msg,
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input channel closed"));
            }
        };

        match msg {
            InputMsg::Event(event) => handle_event(app, event),
            InputMsg::Error(err) => return Err(anyhow!("terminal input error: {err}")),
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(app.should_quit())
}

pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Paste(text) => {
            // Fields are single-line.
            let flattened = text.replace("\r\n", " ").replace(['\r', '\n'], " ");
            if !app.insert_text(&flattened) {
                debug!(field = ?app.focus(), "Paste rejected");
            }
        }
        _ => {}
    }
}

/// Map one key press onto the app.
///
/// | key                 | action                                |
/// |---------------------|---------------------------------------|
/// | Esc, Ctrl-C         | quit                                  |
/// | Tab, Down           | next field                            |
/// | Shift-Tab, Up       | previous field                        |
/// | Enter               | save when editable, edit when locked  |
/// | Ctrl-E              | edit                                  |
/// | Ctrl-T              | toggle the mode chip                  |
/// | Ctrl-U              | clear the focused field               |
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => app.request_quit(),
        KeyCode::Char('c') if ctrl => app.request_quit(),
        KeyCode::Char('e') if ctrl => app.unlock(),
        KeyCode::Char('t') if ctrl => app.toggle_mode(),
        KeyCode::Char('u') if ctrl => {
            app.clear_field();
        }
        KeyCode::Char(_) if ctrl || alt => {}
        KeyCode::Char(c) => {
            if !app.insert_char(c) {
                debug!(field = ?app.focus(), key = %c, "Keystroke rejected");
            }
        }
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Left => app.move_cursor_left(),
        KeyCode::Right => app.move_cursor_right(),
        KeyCode::Home => app.move_cursor_home(),
        KeyCode::End => app.move_cursor_end(),
        KeyCode::Backspace => {
            app.delete_char();
        }
        KeyCode::Delete => {
            app.delete_char_forward();
        }
        KeyCode::Enter => match app.mode() {
            Mode::Editable => app.commit(),
            Mode::Locked => app.unlock(),
        },
        _ => {}
    }
}
