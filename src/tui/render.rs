use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Row, Table, Wrap};

use crate::model::task::{Status, Task};
use crate::ops::stats::{self, ProgressTier};
use crate::util::text::truncate_to_width;

use super::app::{App, Input, Mode, Tab};

pub fn draw(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.text)),
        area,
    );

    let [tab_bar, body, status_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    draw_tab_bar(frame, app, tab_bar);
    match app.tab {
        Tab::Board => draw_board(frame, app, body),
        Tab::Tasks => draw_tasks(frame, app, body),
        Tab::Projects => draw_projects(frame, app, body),
        Tab::Reminders => draw_reminders(frame, app, body),
        Tab::Chats => draw_chats(frame, app, body),
    }
    draw_status_row(frame, app, status_row);

    match &app.mode {
        Mode::NewTask(form) => draw_task_dialog(frame, app, form),
        Mode::ConfirmDelete(task_id) => draw_confirm_dialog(frame, app, task_id),
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Chrome
// ---------------------------------------------------------------------------

fn draw_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let mut spans = vec![Span::styled(" plank ", Style::default().fg(theme.accent))];
    for tab in Tab::ALL {
        let style = if tab == app.tab {
            Style::default()
                .fg(theme.bright)
                .bg(theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim)
        };
        spans.push(Span::styled(format!(" {} ", tab.title()), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let line = match &app.mode {
        Mode::Search(input) => Line::from(vec![
            Span::styled("/", Style::default().fg(theme.accent)),
            input_span(input, theme.bright),
        ]),
        Mode::Compose { input, .. } => Line::from(vec![
            Span::styled("> ", Style::default().fg(theme.accent)),
            input_span(input, theme.bright),
        ]),
        _ => {
            if let Some(notice) = &app.notice {
                Line::styled(notice.clone(), Style::default().fg(theme.accent))
            } else {
                Line::styled(hints(app.tab), Style::default().fg(theme.dim))
            }
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn hints(tab: Tab) -> &'static str {
    match tab {
        Tab::Board | Tab::Tasks => {
            "h/l/j/k move · 1/2/3 status · m cycle · n new · d del · / search · s sort · o order · p project · T theme · q quit"
        }
        Tab::Projects => "tab views · T theme · q quit",
        Tab::Reminders => "j/k move · d delete · T theme · q quit",
        Tab::Chats => "j/k move · enter open · i write · esc close · q quit",
    }
}

fn input_span(input: &Input, fg: ratatui::style::Color) -> Span<'static> {
    let mut text = input.text.clone();
    text.insert(input.cursor, '\u{2588}');
    Span::styled(text, Style::default().fg(fg))
}

/// Query summary shown in the board/table block titles.
fn query_summary(app: &App) -> String {
    let mut parts = vec![format!("project: {}", app.project_filter())];
    if let Some((field, order)) = app.sort {
        parts.push(format!("sort: {:?} {:?}", field, order).to_lowercase());
    }
    if !app.search.is_empty() {
        parts.push(format!("search: \"{}\"", app.search));
    }
    parts.join(" · ")
}

// ---------------------------------------------------------------------------
// Board view
// ---------------------------------------------------------------------------

fn draw_board(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let columns = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas::<3>(area);

    for (idx, status) in Status::ALL.into_iter().enumerate() {
        let tasks = app.column_tasks(status);
        let active = app.column == idx;
        let border_style = if active {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.dim)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ({}) ", status.label(), tasks.len()))
            .title_style(Style::default().fg(theme.bright));

        let inner_width = columns[idx].width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = if tasks.is_empty() {
            vec![ListItem::new(Line::styled(
                "  no tasks",
                Style::default().fg(theme.dim),
            ))]
        } else {
            tasks
                .iter()
                .enumerate()
                .map(|(row, task)| task_card(app, task, active && row == app.row, inner_width))
                .collect()
        };

        frame.render_widget(List::new(items).block(block), columns[idx]);
    }
}

fn task_card<'a>(app: &App, task: &'a Task, selected: bool, width: usize) -> ListItem<'a> {
    let theme = &app.theme;
    let title_style = if selected {
        Style::default()
            .fg(theme.bright)
            .bg(theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };

    let bar = progress_bar(task, 10);
    let meta = format!(
        " {}/{} · {} · {}c {}a",
        task.progress, task.total_progress, task.date, task.comments, task.attachments
    );
    let text = Text::from(vec![
        Line::styled(truncate_to_width(&task.title, width.saturating_sub(1)), title_style),
        Line::from(vec![
            Span::raw(" "),
            Span::styled(bar, Style::default().fg(theme.tier_color(ProgressTier::of(task)))),
            Span::styled(meta, Style::default().fg(theme.dim)),
        ]),
        Line::raw(""),
    ]);
    ListItem::new(text)
}

fn progress_bar(task: &Task, cells: usize) -> String {
    let filled = (stats::progress_ratio(task) * cells as f64).round() as usize;
    let filled = filled.min(cells);
    let mut bar = "\u{2588}".repeat(filled);
    bar.push_str(&"\u{2591}".repeat(cells - filled));
    bar
}

// ---------------------------------------------------------------------------
// Tasks table view
// ---------------------------------------------------------------------------

fn draw_tasks(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let tasks = app.visible_tasks();

    let header = Row::new(["ID", "STATUS", "PROG", "DATE", "PROJECT", "TITLE"])
        .style(Style::default().fg(theme.dim));
    let rows: Vec<Row> = tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let style = if idx == app.table_row {
                Style::default().fg(theme.bright).bg(theme.selection_bg)
            } else {
                Style::default().fg(theme.text)
            };
            let project = if task.project.is_empty() { "-" } else { &task.project };
            Row::new([
                task.id.clone(),
                task.status.as_str().to_string(),
                format!("{}/{}", task.progress, task.total_progress),
                task.date.clone(),
                project.to_string(),
                task.title.clone(),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(7),
            Constraint::Length(12),
            Constraint::Length(6),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.dim))
            .title(format!(" Tasks · {} ", query_summary(app))),
    );
    frame.render_widget(table, area);
}

// ---------------------------------------------------------------------------
// Projects view
// ---------------------------------------------------------------------------

fn draw_projects(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let mut lines = Vec::new();
    for project in &app.board.projects {
        let tasks = crate::ops::query::by_project(&app.board.tasks, &project.id);
        let percent = stats::completion_rate(tasks.iter().copied());
        let health = stats::ProjectHealth::of(percent);
        let filled = (percent as usize * 20) / 100;
        let bar = format!(
            "{}{}",
            "\u{2588}".repeat(filled),
            "\u{2591}".repeat(20 - filled)
        );

        lines.push(Line::styled(
            project.name.clone(),
            Style::default().fg(theme.bright).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(vec![
            Span::styled(bar, Style::default().fg(theme.accent)),
            Span::styled(
                format!("  {percent:>3}%  {} tasks  {}", tasks.len(), health.label()),
                Style::default().fg(theme.dim),
            ),
        ]));
        lines.push(Line::raw(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dim))
        .title(" Projects ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

// ---------------------------------------------------------------------------
// Reminders view
// ---------------------------------------------------------------------------

fn draw_reminders(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let items: Vec<ListItem> = app
        .board
        .reminders
        .iter()
        .enumerate()
        .map(|(idx, reminder)| {
            let base = if idx == app.reminder_row {
                Style::default().fg(theme.bright).bg(theme.selection_bg)
            } else {
                Style::default().fg(theme.text)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("[{:<6}] ", reminder.priority.label()),
                    Style::default().fg(theme.priority_color(reminder.priority)),
                ),
                Span::styled(format!("{:<18} ", reminder.time), Style::default().fg(theme.dim)),
                Span::styled(reminder.title.clone(), base),
            ]))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dim))
        .title(format!(" Reminders ({}) ", app.board.reminders.len()));
    frame.render_widget(List::new(items).block(block), area);
}

// ---------------------------------------------------------------------------
// Chats view
// ---------------------------------------------------------------------------

fn draw_chats(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let [list_area, history_area] =
        Layout::horizontal([Constraint::Length(28), Constraint::Min(20)]).areas(area);

    let items: Vec<ListItem> = app
        .board
        .messengers
        .iter()
        .enumerate()
        .map(|(idx, chat)| {
            let style = if idx == app.chat_row {
                Style::default().fg(theme.bright).bg(theme.selection_bg)
            } else {
                Style::default().fg(theme.text)
            };
            let mut spans = vec![Span::styled(chat.name.clone(), style)];
            if chat.unread > 0 {
                spans.push(Span::styled(
                    format!(" ({})", chat.unread),
                    Style::default().fg(theme.accent),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();
    let list_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dim))
        .title(" Chats ");
    frame.render_widget(List::new(items).block(list_block), list_area);

    let history_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dim))
        .title(" History ");
    let lines: Vec<Line> = if app.chat_open {
        match app.board.messengers.get(app.chat_row) {
            Some(chat) => app
                .board
                .chats
                .get(&chat.id)
                .map(Vec::as_slice)
                .unwrap_or_default()
                .iter()
                .map(|message| {
                    let name = app
                        .board
                        .user(&message.sender)
                        .map(|u| u.name.as_str())
                        .unwrap_or(message.sender.as_str());
                    Line::from(vec![
                        Span::styled(format!("{name}: "), Style::default().fg(theme.accent)),
                        Span::styled(message.content.clone(), Style::default().fg(theme.text)),
                    ])
                })
                .collect(),
            None => Vec::new(),
        }
    } else {
        vec![Line::styled(
            "enter opens the selected chat",
            Style::default().fg(theme.dim),
        )]
    };
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(history_block),
        history_area,
    );
}

// ---------------------------------------------------------------------------
// Dialogs
// ---------------------------------------------------------------------------

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

fn draw_task_dialog(frame: &mut Frame, app: &App, form: &super::app::TaskForm) {
    let theme = &app.theme;
    let dialog = centered(frame.area(), 52, 8);
    frame.render_widget(Clear, dialog);

    let focused = Style::default().fg(theme.bright);
    let blurred = Style::default().fg(theme.dim);
    let (title_style, description_style) = if form.focus_description {
        (blurred, focused)
    } else {
        (focused, blurred)
    };

    let lines = vec![
        Line::styled("Title", title_style),
        Line::from(input_span(&form.title, theme.bright)),
        Line::raw(""),
        Line::styled("Description", description_style),
        Line::from(input_span(&form.description, theme.bright)),
        Line::raw(""),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(" New task · tab switches · enter creates · esc cancels ")
        .style(Style::default().bg(theme.panel));
    frame.render_widget(Paragraph::new(lines).block(block), dialog);
}

fn draw_confirm_dialog(frame: &mut Frame, app: &App, task_id: &str) {
    let theme = &app.theme;
    let dialog = centered(frame.area(), 44, 3);
    frame.render_widget(Clear, dialog);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.rose))
        .style(Style::default().bg(theme.panel));
    frame.render_widget(
        Paragraph::new(Line::styled(
            format!("delete {task_id}? y confirms, any other key cancels"),
            Style::default().fg(theme.bright),
        ))
        .block(block),
        dialog,
    );
}
