//! The interactive read-eval loop.
//!
//! `SessionController` owns the displayed month and, while editing, the
//! editor state. Every command runs to completion (storage included) before
//! the next redraw. Store failures are caught here, at the dispatch
//! boundary, and shown inline so the session and its in-memory state survive.

use crate::core::calendar;
use crate::core::command::{CalendarCommand, EditorCommand, parse_calendar, parse_editor};
use crate::core::editor::EditorState;
use crate::db::store::EntryStore;
use crate::errors::AppResult;
use crate::models::year_month::YearMonth;
use crate::ui::messages::{error_line, success_line};
use crate::ui::screen;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    CalendarView,
    EditingToday(EditorState),
    Terminated,
}

/// What the loop should do after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Redraw,
    Saved,
    Quit,
}

pub struct SessionController {
    store: EntryStore,
    clock: fn() -> NaiveDate,
    displayed: YearMonth,
    state: SessionState,
    /// Error shown under the next redraw, then discarded.
    notice: Option<String>,
    save_pause: Duration,
}

impl SessionController {
    /// The displayed month starts at the month containing `clock()`.
    pub fn new(store: EntryStore, clock: fn() -> NaiveDate) -> Self {
        Self {
            store,
            clock,
            displayed: YearMonth::of(clock()),
            state: SessionState::CalendarView,
            notice: None,
            save_pause: Duration::ZERO,
        }
    }

    pub fn with_save_pause(mut self, pause: Duration) -> Self {
        self.save_pause = pause;
        self
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn displayed_month(&self) -> YearMonth {
        self.displayed
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_terminated(&self) -> bool {
        self.state == SessionState::Terminated
    }

    /// Apply one line of input to the current state.
    pub fn handle_line(&mut self, line: &str) -> Step {
        match self.state {
            SessionState::CalendarView => self.handle_calendar(parse_calendar(line)),
            SessionState::EditingToday(_) => self.handle_editor(parse_editor(line)),
            SessionState::Terminated => Step::Quit,
        }
    }

    fn handle_calendar(&mut self, cmd: CalendarCommand) -> Step {
        match cmd {
            CalendarCommand::NextMonth => self.displayed = self.displayed.next(),
            CalendarCommand::PrevMonth => self.displayed = self.displayed.prev(),
            CalendarCommand::EditToday => {
                let today = (self.clock)();
                match self.store.get(&today) {
                    Ok(stored) => {
                        self.state = SessionState::EditingToday(EditorState::open(today, stored))
                    }
                    Err(e) => self.notice = Some(format!("Cannot open {}: {}", today, e)),
                }
            }
            CalendarCommand::Quit => {
                self.state = SessionState::Terminated;
                return Step::Quit;
            }
            CalendarCommand::Redisplay => {}
        }
        Step::Redraw
    }

    fn handle_editor(&mut self, cmd: EditorCommand) -> Step {
        let SessionState::EditingToday(editor) = &mut self.state else {
            return Step::Redraw;
        };

        match cmd {
            EditorCommand::Toggle(n) => editor.toggle(n),
            EditorCommand::Clear => editor.clear(),
            EditorCommand::Save => {
                let entry = editor.entry();
                // On failure the editor stays open with the unsaved hours.
                if let Err(e) = self.store.upsert(&entry) {
                    self.notice = Some(format!("Save failed: {}", e));
                    return Step::Redraw;
                }
                self.state = SessionState::CalendarView;
                return Step::Saved;
            }
            EditorCommand::Ignore => {}
        }
        Step::Redraw
    }

    /// Current screen as text, without clearing or prompting.
    pub fn render(&mut self) -> String {
        let mut out = match &self.state {
            SessionState::CalendarView => {
                let hours = match self.store.month_hours(&self.displayed) {
                    Ok(h) => h,
                    Err(e) => {
                        self.notice = Some(format!("Cannot load {}: {}", self.displayed, e));
                        BTreeMap::new()
                    }
                };
                let grid = calendar::build_grid(self.displayed, |day| {
                    hours.get(&day).copied().unwrap_or(0)
                });
                calendar::render(&grid)
            }
            SessionState::EditingToday(editor) => editor.render(),
            SessionState::Terminated => String::new(),
        };

        if let Some(msg) = self.notice.take() {
            out.push_str(&error_line(msg));
            out.push('\n');
        }
        out
    }

    /// Drive the session until `q` or end of input.
    ///
    /// Terminal write failures are fatal; store failures are not.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> AppResult<()> {
        let mut line = String::new();

        while !self.is_terminated() {
            screen::clear(out)?;
            let frame = self.render();
            out.write_all(frame.as_bytes())?;
            screen::prompt(out)?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                // End of input behaves like `q`.
                writeln!(out)?;
                self.state = SessionState::Terminated;
                break;
            }

            match self.handle_line(&line) {
                Step::Saved => {
                    writeln!(out, "{}", success_line("Saved!"))?;
                    out.flush()?;
                    if !self.save_pause.is_zero() {
                        thread::sleep(self.save_pause);
                    }
                }
                Step::Quit | Step::Redraw => {}
            }
        }

        writeln!(out, "Goodbye!")?;
        out.flush()?;
        Ok(())
    }
}
