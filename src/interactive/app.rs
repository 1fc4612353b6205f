//! TUI application state and logic

use crate::daily::{DATE_FORMAT, DailyController, DailyWordSelector, Timezone};
use anyhow::Result;
use chrono::{Days, NaiveDate};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest text the date field accepts (`YYYY-MM-DD`)
const DATE_INPUT_LEN: usize = 10;

/// Application state
pub struct App<'a> {
    pub controller: DailyController<'a>,
    pub timezone: Timezone,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the widget showing today's (hidden) word
    #[must_use]
    pub fn new(selector: DailyWordSelector<'a>, timezone: Timezone) -> Self {
        let mut app = Self {
            controller: DailyController::new(selector),
            timezone,
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
        };

        app.add_message(
            "Type a date (YYYY-MM-DD) and press Enter. Space reveals the word.",
            MessageStyle::Info,
        );
        app.go_to(timezone.today());
        app
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') | KeyCode::Tab => {
                self.controller.toggle();
            }
            KeyCode::Char('t') => {
                self.go_to(self.timezone.today());
            }
            KeyCode::Left => self.step_days(-1),
            KeyCode::Right => self.step_days(1),
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                if self.input_buffer.len() < DATE_INPUT_LEN {
                    self.input_buffer.push(c);
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_date(),
            _ => {}
        }
    }

    /// Select the word for the typed date; a bad date keeps the current word
    pub fn submit_date(&mut self) {
        let input = self.input_buffer.clone();
        let total = self.controller.selector().len();

        match self.controller.on_date_input(&input) {
            Ok(selection) => {
                let text = format!(
                    "{}: word #{} of {total}",
                    selection.date,
                    selection.day_index + 1
                );
                self.add_message(&text, MessageStyle::Success);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn step_days(&mut self, delta: i64) {
        let Some(current) = self.current_date() else {
            return;
        };

        let next = if delta < 0 {
            current.checked_sub_days(Days::new(delta.unsigned_abs()))
        } else {
            current.checked_add_days(Days::new(delta.unsigned_abs()))
        };

        match next {
            Some(date) => self.go_to(date),
            None => self.add_message("Date out of range", MessageStyle::Error),
        }
    }

    fn go_to(&mut self, date: NaiveDate) {
        self.controller.on_date(date);
        self.input_buffer = date.format(DATE_FORMAT).to_string();
    }

    /// Date of the current selection
    #[must_use]
    pub fn current_date(&self) -> Option<NaiveDate> {
        self.controller.selection().map(|s| s.date)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
