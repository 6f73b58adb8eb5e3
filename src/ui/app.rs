//! Main TUI application state and logic

use crate::config::{AppConfig, StartView};
use crate::constants::UI_POLL_MILLIS;
use crate::controller::{ListController, QueueController};
use crate::errors::Rejection;
use crate::listing;
use crate::model::{list::ListKind, Value};
use crate::oplog::LogOrder;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Longest value the input field accepts, sign included
const MAX_INPUT_LEN: usize = 9;

/// Which visualizer is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Queue,
    List,
}

impl View {
    pub fn toggled(self) -> Self {
        match self {
            View::Queue => View::List,
            View::List => View::Queue,
        }
    }
}

impl From<StartView> for View {
    fn from(view: StartView) -> Self {
        match view {
            StartView::Queue => View::Queue,
            StartView::List => View::List,
        }
    }
}

/// The main application state
pub struct App {
    /// Queue visualizer instance
    pub queue: QueueController,

    /// Linked list visualizer instance (remounted on SLL/DLL switch)
    pub list: ListController,

    /// Visualizer currently on screen
    pub view: View,

    /// Whether the code listing replaces the operations pane
    pub show_code: bool,

    /// Value being typed
    pub input: String,

    /// Status message to display
    pub status_message: String,

    /// Per-pane scroll offsets
    pub operations_scroll: usize,
    pub code_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    step_duration: Duration,
    list_order: LogOrder,
    last_tick: Instant,
}

impl App {
    /// Create a new app from the resolved configuration
    pub fn new(config: &AppConfig) -> Self {
        let step_duration = config.animation.step_duration();
        App {
            queue: QueueController::new(
                config.queue.capacity,
                step_duration,
                config.queue.log_order,
            ),
            list: ListController::new(config.list.kind, step_duration, config.list.log_order),
            view: config.view.into(),
            show_code: false,
            input: String::new(),
            status_message: String::from("Ready!"),
            operations_scroll: 0,
            code_scroll: 0,
            should_quit: false,
            step_duration,
            list_order: config.list.log_order,
            last_tick: Instant::now(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        self.last_tick = Instant::now();

        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let now = Instant::now();
            self.tick(now.duration_since(self.last_tick));
            self.last_tick = now;

            if event::poll(Duration::from_millis(UI_POLL_MILLIS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        self.queue.teardown();
        self.list.teardown();
        Ok(())
    }

    /// Advance both visualizers' animation clocks
    pub fn tick(&mut self, elapsed: Duration) {
        let queue_done =
            self.queue.is_animating() && self.queue.tick(elapsed) && !self.queue.is_animating();
        let list_done =
            self.list.is_animating() && self.list.tick(elapsed) && !self.list.is_animating();

        let finished = match self.view {
            View::Queue if queue_done => self.queue.operations().last(),
            View::List if list_done => self.list.operations().last(),
            _ => None,
        };
        if let Some(record) = finished {
            self.status_message = record.description.clone();
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Structure on top, log or code listing below
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(main_chunks[0]);

        match self.view {
            View::Queue => {
                super::panes::render_queue_pane(
                    frame,
                    rows[0],
                    self.queue.display(),
                    self.queue.animation_state(),
                    self.queue.progress(),
                );
            }
            View::List => {
                super::panes::render_list_pane(
                    frame,
                    rows[0],
                    self.list.display(),
                    self.list.animation_state(),
                    self.list.progress(),
                );
            }
        }

        if self.show_code {
            let (title, code) = match self.view {
                View::Queue => (
                    "Queue C++ Code".to_string(),
                    listing::queue_listing(self.queue.queue()),
                ),
                View::List => (
                    format!("{} C++ Code", self.list.kind()),
                    listing::list_listing(self.list.list()),
                ),
            };
            super::panes::render_code_pane(frame, rows[1], &title, &code, &mut self.code_scroll);
        } else {
            let log = match self.view {
                View::Queue => self.queue.operations(),
                View::List => self.list.operations(),
            };
            super::panes::render_operations_pane(frame, rows[1], log, &mut self.operations_scroll);
        }

        let is_animating = match self.view {
            View::Queue => self.queue.is_animating(),
            View::List => self.list.is_animating(),
        };
        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            super::panes::StatusRenderData {
                message: &self.status_message,
                input: &self.input,
                view: self.view,
                is_animating,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.view = self.view.toggled();
                self.operations_scroll = 0;
                self.code_scroll = 0;
            }
            KeyCode::Char('c') => {
                self.show_code = !self.show_code;
            }
            KeyCode::Char(c @ '0'..='9') => {
                if self.input.len() < MAX_INPUT_LEN {
                    self.input.push(c);
                }
            }
            KeyCode::Char('-') => {
                if self.input.is_empty() {
                    self.input.push('-');
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Esc => {
                self.input.clear();
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            KeyCode::Char(c) => match self.view {
                View::Queue => self.handle_queue_key(c),
                View::List => self.handle_list_key(c),
            },
            _ => {}
        }
    }

    fn handle_queue_key(&mut self, c: char) {
        let result = match c {
            'e' => match self.take_value() {
                Some(value) => self.queue.enqueue(value),
                None => return,
            },
            'd' => self.queue.dequeue(),
            'x' => self.queue.clear(),
            _ => return,
        };
        self.report(result);
    }

    fn handle_list_key(&mut self, c: char) {
        let result = match c {
            'f' => match self.take_value() {
                Some(value) => self.list.insert_front(value),
                None => return,
            },
            'b' => match self.take_value() {
                Some(value) => self.list.insert_back(value),
                None => return,
            },
            'h' => self.list.delete_front(),
            'l' => self.list.delete_back(),
            'r' => self.list.reverse(),
            't' => {
                self.switch_list_kind(self.list.kind().toggled());
                return;
            }
            _ => return,
        };
        self.report(result);
    }

    /// Tear down the current list visualizer and mount an empty one of another kind
    fn switch_list_kind(&mut self, kind: ListKind) {
        if self.list.is_animating() {
            self.status_message = Rejection::ConcurrentOperationRejected.to_string();
            return;
        }
        self.list.teardown();
        self.list = ListController::new(kind, self.step_duration, self.list_order);
        self.operations_scroll = 0;
        self.code_scroll = 0;
        self.status_message = format!("Switched to {}", kind);
    }

    fn take_value(&mut self) -> Option<Value> {
        if self.input.is_empty() || self.input == "-" {
            self.status_message = "Type a value first".to_string();
            return None;
        }
        match self.input.parse::<Value>() {
            Ok(value) => {
                self.input.clear();
                Some(value)
            }
            Err(_) => {
                self.status_message = format!("Invalid value: {}", self.input);
                self.input.clear();
                None
            }
        }
    }

    fn report(&mut self, result: Result<(), Rejection>) {
        self.status_message = match result {
            Ok(()) => "Animating...".to_string(),
            Err(rejection) => rejection.to_string(),
        };
    }

    fn focused_scroll(&mut self) -> &mut usize {
        if self.show_code {
            &mut self.code_scroll
        } else {
            &mut self.operations_scroll
        }
    }
}
