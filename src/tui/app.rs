use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::board::Board;
use crate::model::config::{AppConfig, ThemePref};
use crate::model::task::{Status, Task};
use crate::ops::query::{SortField, SortOrder, TaskQuery};
use crate::seed;
use crate::util::text;

use super::input;
use super::render;
use super::theme::Theme;

/// Which view is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Board,
    Tasks,
    Projects,
    Reminders,
    Chats,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Board, Tab::Tasks, Tab::Projects, Tab::Reminders, Tab::Chats];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Board => "Board",
            Tab::Tasks => "Tasks",
            Tab::Projects => "Projects",
            Tab::Reminders => "Reminders",
            Tab::Chats => "Chats",
        }
    }

    pub fn next(self) -> Tab {
        let i = Tab::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Tab::ALL[(i + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        let i = Tab::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Tab::ALL[(i + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// Single-line text input with a grapheme-aware cursor.
#[derive(Debug, Clone, Default)]
pub struct Input {
    pub text: String,
    pub cursor: usize,
}

impl Input {
    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = text::prev_grapheme_boundary(&self.text, self.cursor) {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn left(&mut self) {
        if let Some(prev) = text::prev_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn right(&mut self) {
        if let Some(next) = text::next_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = next;
        }
    }
}

/// State of the new-task dialog
#[derive(Debug, Clone, Default)]
pub struct TaskForm {
    pub title: Input,
    pub description: Input,
    pub focus_description: bool,
}

/// Current interaction mode
#[derive(Debug, Clone)]
pub enum Mode {
    Normal,
    /// Editing the search box
    Search(Input),
    /// New-task dialog open
    NewTask(TaskForm),
    /// Waiting for confirmation to delete the given task
    ConfirmDelete(String),
    /// Composing a message to the given chat
    Compose { chat_id: String, input: Input },
}

pub struct App {
    pub board: Board,
    pub tab: Tab,
    pub mode: Mode,
    pub theme_pref: ThemePref,
    pub theme: Theme,

    /// Board view: selected column (status index) and row within it.
    pub column: usize,
    pub row: usize,
    /// Tasks view: selected row.
    pub table_row: usize,
    /// Reminders / chats selections.
    pub reminder_row: usize,
    pub chat_row: usize,
    /// Whether the selected chat's history pane is open.
    pub chat_open: bool,

    /// Active project filter: 0 = all, then index+1 into `board.projects`.
    pub project_idx: usize,
    /// Committed search text (empty = no filter).
    pub search: String,
    pub sort: Option<(SortField, SortOrder)>,

    pub notice: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(board: Board, config: AppConfig) -> Self {
        App {
            board,
            tab: Tab::Board,
            mode: Mode::Normal,
            theme_pref: config.theme,
            theme: Theme::from_pref(config.theme),
            column: 0,
            row: 0,
            table_row: 0,
            reminder_row: 0,
            chat_row: 0,
            chat_open: false,
            project_idx: 0,
            search: String::new(),
            sort: None,
            notice: None,
            should_quit: false,
        }
    }

    /// The active project filter id (`"all"` when none).
    pub fn project_filter(&self) -> String {
        if self.project_idx == 0 {
            "all".to_string()
        } else {
            self.board
                .projects
                .get(self.project_idx - 1)
                .map(|p| p.id.clone())
                .unwrap_or_else(|| "all".to_string())
        }
    }

    /// The query the board and table views read through.
    pub fn query(&self) -> TaskQuery {
        TaskQuery {
            project: Some(self.project_filter()),
            statuses: Default::default(),
            search: self.search.clone(),
            sort: self.sort,
        }
    }

    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.query().apply(&self.board.tasks)
    }

    pub fn column_tasks(&self, status: Status) -> Vec<&Task> {
        self.visible_tasks()
            .into_iter()
            .filter(|t| t.status == status)
            .collect()
    }

    /// Id of the task under the cursor in the current view, if any.
    pub fn selected_task_id(&self) -> Option<String> {
        match self.tab {
            Tab::Board => {
                let status = Status::ALL[self.column.min(2)];
                self.column_tasks(status)
                    .get(self.row)
                    .map(|t| t.id.clone())
            }
            Tab::Tasks => self
                .visible_tasks()
                .get(self.table_row)
                .map(|t| t.id.clone()),
            _ => None,
        }
    }

    /// Keep cursors inside the collections they point into after a
    /// mutation or filter change.
    pub fn clamp_cursors(&mut self) {
        let status = Status::ALL[self.column.min(2)];
        let column_len = self.column_tasks(status).len();
        self.row = self.row.min(column_len.saturating_sub(1));
        let table_len = self.visible_tasks().len();
        self.table_row = self.table_row.min(table_len.saturating_sub(1));
        self.reminder_row = self
            .reminder_row
            .min(self.board.reminders.len().saturating_sub(1));
        self.chat_row = self
            .chat_row
            .min(self.board.messengers.len().saturating_sub(1));
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    pub fn toggle_theme(&mut self) {
        self.theme_pref = self.theme_pref.toggled();
        self.theme = Theme::from_pref(self.theme_pref);
    }
}

/// Launch the dashboard on the seeded demo board.
pub fn run(config: AppConfig) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(seed::demo_board(), config);
    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| render::draw(frame, app))?;
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }
    }
    Ok(())
}
