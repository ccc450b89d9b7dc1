//! Main TUI application state and logic

use crate::error::ValidationError;
use crate::snapshot::Trace;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use tracing::info;

/// The main application state
pub struct App {
    /// Text typed into the input line
    pub input: String,

    /// Result of the last successful sort
    pub trace: Option<Trace>,

    /// Result of the last rejected sort
    pub error: Option<ValidationError>,

    /// Highlighted row in the steps pane
    pub selected_step: usize,

    /// Scroll offset of the steps pane
    pub steps_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new() -> Self {
        App {
            input: String::new(),
            trace: None,
            error: None,
            selected_step: 0,
            steps_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Start with `input` already typed in
    pub fn with_input(input: impl Into<String>) -> Self {
        App {
            input: input.into(),
            ..App::new()
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Input (3) | error banner (1) | steps | status bar (1)
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        super::panes::render_input_pane(frame, rows[0], &self.input);
        super::panes::render_error_banner(frame, rows[1], self.error.as_ref());
        super::panes::render_steps_pane(
            frame,
            rows[2],
            self.trace.as_ref(),
            self.selected_step,
            &mut self.steps_scroll,
        );
        super::panes::render_status_bar(
            frame,
            rows[3],
            &self.status_message,
            self.selected_step,
            self.trace.as_ref().map(Trace::len),
            self.error.is_some(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
            }
            KeyCode::Up => self.select_step(self.selected_step.saturating_sub(1)),
            KeyCode::Down => self.select_step(self.selected_step.saturating_add(1)),
            KeyCode::Home => self.select_step(0),
            KeyCode::End => self.select_step(usize::MAX),
            _ => {}
        }
    }

    /// Sort the current input, replacing any previous result
    pub fn submit(&mut self) {
        self.selected_step = 0;
        self.steps_scroll = 0;

        match crate::sort(&self.input) {
            Ok(trace) => {
                info!(input = %self.input, steps = trace.len(), "sorted");
                self.status_message = format!("Sorted in {} steps", trace.len());
                self.trace = Some(trace);
                self.error = None;
            }
            Err(e) => {
                info!(input = %self.input, error = %e, "rejected");
                self.status_message = e.to_string();
                self.trace = None;
                self.error = Some(e);
            }
        }
    }

    /// Move the highlight, clamped to the available steps
    fn select_step(&mut self, step: usize) {
        if let Some(trace) = &self.trace {
            self.selected_step = step.min(trace.len().saturating_sub(1));
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
