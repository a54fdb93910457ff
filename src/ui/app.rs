//! Main TUI application state and logic

use crate::interpreter::constants::{PLAY_INTERVAL_MS, RUN_TO_END_STEP_LIMIT};
use crate::interpreter::engine::{Interpreter, StepOutcome};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Program,
    Output,
    Tape,
}

impl FocusedPane {
    /// Move focus to the next pane (program -> output -> tape)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Program => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Tape,
            FocusedPane::Tape => FocusedPane::Program,
        }
    }
}

/// The main application state
pub struct App {
    /// The interpreter instance (history enabled)
    pub interpreter: Interpreter,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub program_scroll: usize,
    pub output_scroll: usize,
    pub tape_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the last step failed
    pub has_error: bool,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(interpreter: Interpreter) -> Self {
        App {
            interpreter,
            focused_pane: FocusedPane::Program,
            program_scroll: 0,
            output_scroll: 0,
            tape_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            has_error: false,
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing
                && self.last_play_time.elapsed() >= Duration::from_millis(PLAY_INTERVAL_MS)
            {
                let outcome = self.step_forward();
                if outcome != Some(StepOutcome::Executed) {
                    self.is_playing = false;
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(main_chunks[0]);

        // Left column: Program (top) | Output (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);

        super::panes::render_program_pane(
            frame,
            left_rows[0],
            self.interpreter.program(),
            self.interpreter.position(),
            self.focused_pane == FocusedPane::Program,
            &mut self.program_scroll,
        );

        super::panes::render_output_pane(
            frame,
            left_rows[1],
            self.interpreter.output(),
            self.interpreter.awaiting_input(),
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        super::panes::render_tape_pane(
            frame,
            columns[1],
            self.interpreter.machine(),
            self.focused_pane == FocusedPane::Tape,
            &mut self.tape_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            super::panes::StatusRenderData {
                message: &self.status_message,
                steps_executed: self.interpreter.steps_executed(),
                history_position: self.interpreter.history_position(),
                total_snapshots: self.interpreter.total_snapshots(),
                has_error: self.has_error,
                is_playing: self.is_playing,
                is_input_mode: self.interpreter.awaiting_input(),
                is_finished: self.interpreter.is_finished(),
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.interpreter.awaiting_input() {
            self.handle_input_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.step_forward() != Some(StepOutcome::Executed) {
                        break;
                    }
                    stepped += 1;
                }
                if !self.has_error && !self.interpreter.awaiting_input() {
                    self.status_message = format!("Stepped forward {} step(s)", stepped);
                }
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Program => {
                    self.program_scroll = self.program_scroll.saturating_sub(1);
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_sub(1);
                }
                FocusedPane::Tape => {
                    self.tape_scroll = self.tape_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Program => {
                    self.program_scroll = self.program_scroll.saturating_add(1);
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_add(1);
                }
                FocusedPane::Tape => {
                    self.tape_scroll = self.tape_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(Duration::from_secs(1))
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                // Run until the program ends, asks for input, or fails
                self.is_playing = false;
                let mut stepped = 0;
                while stepped < RUN_TO_END_STEP_LIMIT {
                    if self.step_forward() != Some(StepOutcome::Executed) {
                        break;
                    }
                    stepped += 1;
                }
                if stepped == RUN_TO_END_STEP_LIMIT {
                    self.status_message =
                        format!("Stopped after {} steps; press Enter to continue", stepped);
                }
            }
            KeyCode::Backspace => {
                // Jump to start of execution
                self.is_playing = false;
                match self.interpreter.rewind_to_start() {
                    Ok(()) => {
                        self.has_error = false;
                        self.status_message = "Jumped to start".to_string();
                    }
                    Err(e) => self.status_message = format!("Cannot rewind: {}", e),
                }
                self.output_scroll = usize::MAX;
            }
            _ => {}
        }
    }

    /// Keys while the program is blocked on `,`
    fn handle_input_key(&mut self, key: KeyEvent) {
        let supplied = match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Left => {
                self.step_backward();
                return;
            }
            KeyCode::Enter => '\n',
            KeyCode::Tab => '\t',
            KeyCode::Char(c) => c,
            _ => return,
        };

        match self.interpreter.provide_input(supplied) {
            Ok(()) => {
                self.has_error = false;
                self.status_message = format!("Read {:?}", supplied);
                self.output_scroll = usize::MAX;
            }
            Err(e) => {
                self.status_message = e.to_string();
            }
        }
    }

    /// Step forward in execution, reporting the outcome on the status bar.
    /// Returns `None` when the step failed.
    fn step_forward(&mut self) -> Option<StepOutcome> {
        match self.interpreter.step_forward() {
            Ok(outcome) => {
                self.has_error = false;
                self.status_message = match outcome {
                    StepOutcome::Executed => "Stepped forward".to_string(),
                    StepOutcome::NeedsInput => "Waiting for input: type one character".to_string(),
                    StepOutcome::Finished => "Execution finished".to_string(),
                };
                // Auto-scroll output to bottom
                self.output_scroll = usize::MAX;
                Some(outcome)
            }
            Err(e) => {
                self.has_error = true;
                self.is_playing = false;
                self.status_message = format!("Error: {}", e);
                None
            }
        }
    }

    /// Step backward in execution
    fn step_backward(&mut self) {
        match self.interpreter.step_backward() {
            Ok(()) => {
                self.has_error = false;
                self.status_message = "Stepped backward".to_string();
                self.output_scroll = usize::MAX;
            }
            Err(e) => {
                self.status_message = format!("Cannot step backward: {}", e);
            }
        }
    }
}
