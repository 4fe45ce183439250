use crossterm::event::{KeyCode, KeyEvent};

use crate::io::config_io;
use crate::model::config::AppConfig;
use crate::model::task::{NewTask, Status};
use crate::ops::query::{SortField, SortOrder};
use crate::ops::{messenger_ops, reminder_ops, task_ops};

use super::app::{App, Input, Mode, Tab, TaskForm};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    app.notice = None;
    match app.mode.clone() {
        Mode::Normal => handle_normal(app, key),
        Mode::Search(input) => handle_search(app, key, input),
        Mode::NewTask(form) => handle_form(app, key, form),
        Mode::ConfirmDelete(task_id) => handle_confirm(app, key, task_id),
        Mode::Compose { chat_id, input } => handle_compose(app, key, chat_id, input),
    }
}

// ---------------------------------------------------------------------------
// Normal mode
// ---------------------------------------------------------------------------

fn handle_normal(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Tab => switch_tab(app, app.tab.next()),
        KeyCode::BackTab => switch_tab(app, app.tab.prev()),
        KeyCode::Char('T') => toggle_theme(app),
        _ => match app.tab {
            Tab::Board => handle_board_keys(app, key),
            Tab::Tasks => handle_table_keys(app, key),
            Tab::Projects => {}
            Tab::Reminders => handle_reminder_keys(app, key),
            Tab::Chats => handle_chat_keys(app, key),
        },
    }
}

fn switch_tab(app: &mut App, tab: Tab) {
    app.tab = tab;
    app.chat_open = false;
    app.clamp_cursors();
}

fn toggle_theme(app: &mut App) {
    app.toggle_theme();
    let config = AppConfig {
        theme: app.theme_pref,
    };
    if config_io::save(&config).is_err() {
        app.notify("theme changed (preference not saved)");
    }
}

fn handle_board_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => {
            app.column = app.column.saturating_sub(1);
            app.clamp_cursors();
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.column = (app.column + 1).min(2);
            app.clamp_cursors();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.row += 1;
            app.clamp_cursors();
        }
        KeyCode::Char('k') | KeyCode::Up => app.row = app.row.saturating_sub(1),
        _ => handle_task_commands(app, key),
    }
}

fn handle_table_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.table_row += 1;
            app.clamp_cursors();
        }
        KeyCode::Char('k') | KeyCode::Up => app.table_row = app.table_row.saturating_sub(1),
        _ => handle_task_commands(app, key),
    }
}

/// Keys shared by the board and table views: status moves, create, delete,
/// search, sort and project filter.
fn handle_task_commands(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('1') => move_selected(app, Status::Todo),
        KeyCode::Char('2') => move_selected(app, Status::InProgress),
        KeyCode::Char('3') => move_selected(app, Status::Done),
        KeyCode::Char('m') => {
            if let Some(id) = app.selected_task_id()
                && let Some(task) = app.board.task(&id)
            {
                let next = match task.status {
                    Status::Todo => Status::InProgress,
                    Status::InProgress => Status::Done,
                    Status::Done => Status::Todo,
                };
                move_selected(app, next);
            }
        }
        KeyCode::Char('n') => app.mode = Mode::NewTask(TaskForm::default()),
        KeyCode::Char('d') => {
            if let Some(id) = app.selected_task_id() {
                app.mode = Mode::ConfirmDelete(id);
            }
        }
        KeyCode::Char('/') => {
            app.mode = Mode::Search(Input {
                cursor: app.search.len(),
                text: app.search.clone(),
            });
        }
        KeyCode::Char('s') => {
            app.sort = match app.sort {
                None => Some((SortField::Date, SortOrder::Asc)),
                Some((SortField::Date, order)) => Some((SortField::Title, order)),
                Some((SortField::Title, order)) => Some((SortField::Progress, order)),
                Some((SortField::Progress, _)) => None,
            };
            app.clamp_cursors();
        }
        KeyCode::Char('o') => {
            if let Some((field, order)) = app.sort {
                app.sort = Some((field, order.flipped()));
            }
        }
        KeyCode::Char('p') => {
            app.project_idx = (app.project_idx + 1) % (app.board.projects.len() + 1);
            app.clamp_cursors();
        }
        KeyCode::Esc => {
            app.search.clear();
            app.clamp_cursors();
        }
        _ => {}
    }
}

fn move_selected(app: &mut App, status: Status) {
    let Some(id) = app.selected_task_id() else {
        return;
    };
    let by = app.board.session_user.clone();
    match task_ops::move_task(&mut app.board, &id, status, &by) {
        Ok(()) => {
            app.notify(format!("{id} → {}", status.label()));
            app.clamp_cursors();
        }
        Err(e) => app.notify(e.to_string()),
    }
}

fn handle_reminder_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.reminder_row += 1;
            app.clamp_cursors();
        }
        KeyCode::Char('k') | KeyCode::Up => app.reminder_row = app.reminder_row.saturating_sub(1),
        KeyCode::Char('d') => {
            let Some(reminder) = app.board.reminders.get(app.reminder_row) else {
                return;
            };
            let id = reminder.id.clone();
            match reminder_ops::delete_reminder(&mut app.board, &id) {
                Ok(()) => app.notify(format!("removed {id}")),
                Err(e) => app.notify(e.to_string()),
            }
            app.clamp_cursors();
        }
        _ => {}
    }
}

fn handle_chat_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.chat_row += 1;
            app.chat_open = false;
            app.clamp_cursors();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.chat_row = app.chat_row.saturating_sub(1);
            app.chat_open = false;
        }
        KeyCode::Enter => {
            let Some(chat) = app.board.messengers.get(app.chat_row) else {
                return;
            };
            let id = chat.id.clone();
            if messenger_ops::open_chat(&mut app.board, &id).is_ok() {
                app.chat_open = true;
            }
        }
        KeyCode::Char('i') => {
            if app.chat_open
                && let Some(chat) = app.board.messengers.get(app.chat_row)
            {
                app.mode = Mode::Compose {
                    chat_id: chat.id.clone(),
                    input: Input::default(),
                };
            }
        }
        KeyCode::Esc => app.chat_open = false,
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Modal modes
// ---------------------------------------------------------------------------

fn handle_search(app: &mut App, key: KeyEvent, mut input: Input) {
    match key.code {
        KeyCode::Enter => {
            app.search = input.text;
            app.mode = Mode::Normal;
            app.clamp_cursors();
            return;
        }
        KeyCode::Esc => {
            app.mode = Mode::Normal;
            return;
        }
        KeyCode::Backspace => input.backspace(),
        KeyCode::Left => input.left(),
        KeyCode::Right => input.right(),
        KeyCode::Char(c) => input.insert(c),
        _ => {}
    }
    app.mode = Mode::Search(input);
}

fn handle_form(app: &mut App, key: KeyEvent, mut form: TaskForm) {
    match key.code {
        KeyCode::Esc => {
            app.mode = Mode::Normal;
            return;
        }
        KeyCode::Tab | KeyCode::BackTab => form.focus_description = !form.focus_description,
        KeyCode::Enter => {
            let by = app.board.session_user.clone();
            let project = app.project_filter();
            let new = NewTask {
                title: form.title.text.clone(),
                description: form.description.text.clone(),
                project: (project != "all").then_some(project),
                ..NewTask::default()
            };
            match task_ops::add_task(&mut app.board, new, &by) {
                Ok(id) => {
                    app.notify(format!("created {id}"));
                    app.mode = Mode::Normal;
                    app.clamp_cursors();
                    return;
                }
                // Dialog stays open so the input can be fixed.
                Err(e) => app.notify(e.to_string()),
            }
        }
        _ => {
            let input = if form.focus_description {
                &mut form.description
            } else {
                &mut form.title
            };
            match key.code {
                KeyCode::Backspace => input.backspace(),
                KeyCode::Left => input.left(),
                KeyCode::Right => input.right(),
                KeyCode::Char(c) => input.insert(c),
                _ => {}
            }
        }
    }
    app.mode = Mode::NewTask(form);
}

fn handle_confirm(app: &mut App, key: KeyEvent, task_id: String) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            match task_ops::delete_task(&mut app.board, &task_id) {
                Ok(()) => app.notify(format!("deleted {task_id}")),
                Err(e) => app.notify(e.to_string()),
            }
            app.mode = Mode::Normal;
            app.clamp_cursors();
        }
        _ => app.mode = Mode::Normal,
    }
}

fn handle_compose(app: &mut App, key: KeyEvent, chat_id: String, mut input: Input) {
    match key.code {
        KeyCode::Enter => {
            let by = app.board.session_user.clone();
            match messenger_ops::send_message(&mut app.board, &chat_id, &by, &input.text) {
                Ok(_) => {
                    app.mode = Mode::Normal;
                    return;
                }
                Err(e) => app.notify(e.to_string()),
            }
        }
        KeyCode::Esc => {
            app.mode = Mode::Normal;
            return;
        }
        KeyCode::Backspace => input.backspace(),
        KeyCode::Left => input.left(),
        KeyCode::Right => input.right(),
        KeyCode::Char(c) => input.insert(c),
        _ => {}
    }
    app.mode = Mode::Compose { chat_id, input };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crossterm::event::KeyModifiers;

    fn app() -> App {
        App::new(seed::demo_board(), AppConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn status_keys_move_the_selected_task() {
        let mut app = app();
        // Board tab, todo column, first row = task1.
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.board.task("task1").unwrap().status, Status::Done);
        assert!(app.notice.is_some());
    }

    #[test]
    fn delete_asks_for_confirmation_first() {
        let mut app = app();
        press(&mut app, KeyCode::Char('d'));
        assert!(matches!(app.mode, Mode::ConfirmDelete(ref id) if id == "task1"));
        press(&mut app, KeyCode::Char('n'));
        assert!(app.board.task("task1").is_some());
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.board.task("task1").is_none());
    }

    #[test]
    fn dialog_validation_keeps_the_form_open() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Enter); // empty title
        assert!(matches!(app.mode, Mode::NewTask(_)));
        assert!(app.notice.as_deref().unwrap().contains("title"));
    }

    #[test]
    fn dialog_submit_creates_a_task_in_the_filtered_project() {
        let mut app = app();
        press(&mut app, KeyCode::Char('p')); // project filter → design
        press(&mut app, KeyCode::Char('n'));
        for c in "Review".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        for c in "palette".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.mode, Mode::Normal));
        let task = app.board.task("task12").unwrap();
        assert_eq!(task.title, "Review");
        assert_eq!(task.project, "design");
    }

    #[test]
    fn search_commits_on_enter_and_narrows_views() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        for c in "twitter".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.search, "twitter");
        assert_eq!(app.visible_tasks().len(), 2);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.visible_tasks().len(), 11);
    }

    #[test]
    fn sort_key_cycles_fields() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.sort, Some((SortField::Date, SortOrder::Asc)));
        press(&mut app, KeyCode::Char('o'));
        assert_eq!(app.sort, Some((SortField::Date, SortOrder::Desc)));
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.sort, None);
    }

    #[test]
    fn opening_a_chat_clears_unread() {
        let mut app = app();
        app.tab = Tab::Chats;
        app.chat_row = 2; // Development, 11 unread
        press(&mut app, KeyCode::Enter);
        assert!(app.chat_open);
        assert_eq!(app.board.messenger("messenger3").unwrap().unread, 0);
    }

    #[test]
    fn compose_sends_into_the_open_chat() {
        let mut app = app();
        app.tab = Tab::Chats;
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('i'));
        for c in "hey".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        let history = &app.board.chats["messenger1"];
        assert_eq!(history.last().unwrap().content, "hey");
        assert_eq!(history.last().unwrap().sender, "user1");
    }
}
