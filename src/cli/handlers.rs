use std::collections::BTreeSet;
use std::error::Error;

use crate::cli::commands::*;
use crate::cli::output::{self, BoardJson, ProjectJson, TaskDetailJson, UserJson};
use crate::model::board::Board;
use crate::model::reminder::Priority;
use crate::model::task::{NewTask, Status, Task};
use crate::ops::query::{SortField, SortOrder, TaskQuery};
use crate::ops::{messenger_ops, reminder_ops, stats, task_ops};
use crate::seed;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run one subcommand against a freshly seeded board. Mutating commands
/// print the post-mutation view and exit; nothing persists between
/// invocations.
pub fn dispatch(command: Commands, json: bool) -> Result<(), Box<dyn Error>> {
    let mut board = seed::demo_board();

    match command {
        // Read commands
        Commands::List(args) => cmd_list(&board, args, json),
        Commands::Show(args) => cmd_show(&board, args, json),
        Commands::Board(args) => cmd_board(&board, args, json),
        Commands::Stats(args) => cmd_stats(&board, args, json),
        Commands::Projects => cmd_projects(&board, json),
        Commands::Users(args) => cmd_users(&board, args, json),

        // Write commands
        Commands::Add(args) => cmd_add(&mut board, args, json),
        Commands::Move(args) => cmd_move(&mut board, args, json),
        Commands::Delete(args) => cmd_delete(&mut board, args),
        Commands::Comment(args) => cmd_comment(&mut board, args, json),
        Commands::Assign(args) => cmd_assign(&mut board, args, json),
        Commands::Progress(args) => cmd_progress(&mut board, args, json),

        // Reminders and chats
        Commands::Reminders(args) => cmd_reminders(&mut board, args, json),
        Commands::Chats(args) => cmd_chats(&mut board, args, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_statuses(raw: &[String]) -> Result<BTreeSet<Status>, Box<dyn Error>> {
    let mut statuses = BTreeSet::new();
    for s in raw {
        let status =
            Status::parse(s).ok_or_else(|| format!("unknown status '{s}' (todo, in-progress, done)"))?;
        statuses.insert(status);
    }
    Ok(statuses)
}

fn parse_sort(
    field: Option<&str>,
    order: &str,
) -> Result<Option<(SortField, SortOrder)>, Box<dyn Error>> {
    let Some(field) = field else {
        return Ok(None);
    };
    let field = SortField::parse(field)
        .ok_or_else(|| format!("unknown sort field '{field}' (date, title, progress)"))?;
    let order =
        SortOrder::parse(order).ok_or_else(|| format!("unknown sort order '{order}' (asc, desc)"))?;
    Ok(Some((field, order)))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(board: &Board, args: ListArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let query = TaskQuery {
        project: args.project,
        statuses: parse_statuses(&args.status)?,
        search: args.search.unwrap_or_default(),
        sort: parse_sort(args.sort.as_deref(), &args.order)?,
    };
    let tasks = query.apply(&board.tasks);

    if json {
        let out: Vec<_> = tasks.iter().map(|t| output::task_to_json(t)).collect();
        return print_json(&out);
    }
    print!("{}", output::task_table(&tasks));
    Ok(())
}

fn cmd_show(board: &Board, args: ShowArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let task = board
        .task(&args.id)
        .ok_or_else(|| format!("task not found: {}", args.id))?;

    if json {
        let detail = TaskDetailJson {
            task: output::task_to_json(task),
            comment_log: board.comments_for(&task.id).into_iter().cloned().collect(),
            activity: board.activity_for(&task.id).into_iter().cloned().collect(),
        };
        return print_json(&detail);
    }

    println!("{}  {}", task.id, task.title);
    println!("  {}", task.description);
    let project = if task.project.is_empty() { "-" } else { &task.project };
    println!("  status: {}   project: {}", task.status.as_str(), project);
    println!(
        "  progress: {}/{} ({}%)   created: {}",
        task.progress,
        task.total_progress,
        (stats::progress_ratio(task) * 100.0).round() as u32,
        task.date
    );
    let assignees: Vec<&str> = task
        .assignees
        .iter()
        .map(|id| output::user_name(board, id))
        .collect();
    println!(
        "  assignees: {}   comments: {}   attachments: {}",
        if assignees.is_empty() { "-".to_string() } else { assignees.join(", ") },
        task.comments,
        task.attachments
    );

    let comments = board.comments_for(&task.id);
    if !comments.is_empty() {
        println!("\ncomments:");
        for comment in comments {
            println!(
                "  [{}] {}: {}",
                comment.timestamp,
                output::user_name(board, &comment.user_id),
                comment.text
            );
        }
    }

    let activity = board.activity_for(&task.id);
    if !activity.is_empty() {
        println!("\nactivity:");
        for entry in activity {
            let details = entry.details.as_deref().unwrap_or("");
            println!(
                "  [{}] {} {} {}",
                entry.timestamp,
                output::user_name(board, &entry.user_id),
                entry.kind.as_str(),
                details
            );
        }
    }
    Ok(())
}

fn cmd_board(board: &Board, args: BoardArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let query = TaskQuery {
        project: args.project,
        ..TaskQuery::default()
    };
    let tasks = query.apply(&board.tasks);

    if json {
        let by_status = |status: Status| {
            tasks
                .iter()
                .filter(|t| t.status == status)
                .map(|t| output::task_to_json(t))
                .collect()
        };
        return print_json(&BoardJson {
            todo: by_status(Status::Todo),
            in_progress: by_status(Status::InProgress),
            done: by_status(Status::Done),
        });
    }
    println!("{}", output::board_columns(&tasks));
    Ok(())
}

fn cmd_stats(board: &Board, args: StatsArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let query = TaskQuery {
        project: args.project,
        ..TaskQuery::default()
    };
    let tasks = query.apply(&board.tasks);
    let counts = stats::status_counts(tasks.iter().copied());
    let completion = stats::completion_rate(tasks.iter().copied());

    if json {
        return print_json(&output::stats_to_json(counts, completion));
    }
    println!(
        "tasks: {}   todo: {}   in progress: {}   done: {}   completion: {}%",
        counts.total(),
        counts.todo,
        counts.in_progress,
        counts.done,
        completion
    );
    Ok(())
}

fn cmd_projects(board: &Board, json: bool) -> Result<(), Box<dyn Error>> {
    let rows: Vec<ProjectJson> = board
        .projects
        .iter()
        .map(|project| {
            let tasks = TaskQuery::for_project(&project.id).apply(&board.tasks);
            let percent = stats::completion_rate(tasks.iter().copied());
            ProjectJson {
                id: project.id.clone(),
                name: project.name.clone(),
                tasks: tasks.len(),
                percent,
                health: stats::ProjectHealth::of(percent).label(),
            }
        })
        .collect();

    if json {
        return print_json(&rows);
    }
    for row in rows {
        println!(
            "{:<8} {:<14} {:>2} tasks  {:>3}%  {}",
            row.id, row.name, row.tasks, row.percent, row.health
        );
    }
    Ok(())
}

fn cmd_users(board: &Board, args: UsersArgs, json: bool) -> Result<(), Box<dyn Error>> {
    match args.id {
        Some(id) => {
            let user = board
                .user(&id)
                .ok_or_else(|| format!("user not found: {id}"))?;
            let tasks = stats::assigned_tasks(&board.tasks, &user.id);
            let completion = stats::completion_rate(tasks.iter().copied());

            if json {
                let out: Vec<_> = tasks.iter().map(|t| output::task_to_json(t)).collect();
                return print_json(&out);
            }
            println!("{} ({})  {} tasks, {}% complete", user.name, user.id, tasks.len(), completion);
            print!("{}", output::task_table(&tasks));
            Ok(())
        }
        None => {
            let rows: Vec<UserJson> = board
                .users
                .iter()
                .map(|user| {
                    let tasks = stats::assigned_tasks(&board.tasks, &user.id);
                    let done = tasks.iter().filter(|t| t.status == Status::Done).count();
                    UserJson {
                        id: user.id.clone(),
                        name: user.name.clone(),
                        tasks: tasks.len(),
                        done,
                        completion: stats::completion_rate(tasks.iter().copied()),
                    }
                })
                .collect();

            if json {
                return print_json(&rows);
            }
            for row in rows {
                println!(
                    "{:<8} {:<8} {} tasks ({} done, {}%)",
                    row.id, row.name, row.tasks, row.done, row.completion
                );
            }
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn print_task(board: &Board, id: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let task: &Task = board.task(id).ok_or_else(|| format!("task not found: {id}"))?;
    if json {
        return print_json(&output::task_to_json(task));
    }
    println!("{}", output::task_row(task));
    Ok(())
}

fn cmd_add(board: &mut Board, args: AddArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let by = board.session_user.clone();
    let new = NewTask {
        title: args.title,
        description: args.description,
        project: args.project,
        assignees: args.assignees,
        ..NewTask::default()
    };
    let id = task_ops::add_task(board, new, &by)?;
    print_task(board, &id, json)
}

fn cmd_move(board: &mut Board, args: MoveArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let status = Status::parse(&args.status)
        .ok_or_else(|| format!("unknown status '{}' (todo, in-progress, done)", args.status))?;
    let by = board.session_user.clone();
    task_ops::move_task(board, &args.id, status, &by)?;
    print_task(board, &args.id, json)
}

fn cmd_delete(board: &mut Board, args: DeleteArgs) -> Result<(), Box<dyn Error>> {
    task_ops::delete_task(board, &args.id)?;
    println!("deleted {} ({} tasks remain)", args.id, board.tasks.len());
    Ok(())
}

fn cmd_comment(board: &mut Board, args: CommentArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let by = board.session_user.clone();
    task_ops::add_comment(board, &args.id, &by, &args.text)?;
    print_task(board, &args.id, json)
}

fn cmd_assign(board: &mut Board, args: AssignArgs, json: bool) -> Result<(), Box<dyn Error>> {
    if args.rm {
        task_ops::unassign_user(board, &args.id, &args.user)?;
    } else {
        task_ops::assign_user(board, &args.id, &args.user)?;
    }
    print_task(board, &args.id, json)
}

fn cmd_progress(board: &mut Board, args: ProgressArgs, json: bool) -> Result<(), Box<dyn Error>> {
    task_ops::set_progress(board, &args.id, args.value)?;
    print_task(board, &args.id, json)
}

// ---------------------------------------------------------------------------
// Reminders and chats
// ---------------------------------------------------------------------------

fn cmd_reminders(board: &mut Board, args: RemindersCmd, json: bool) -> Result<(), Box<dyn Error>> {
    match args.action {
        Some(RemindersAction::Add(add)) => {
            let priority = Priority::parse(&add.priority)
                .ok_or_else(|| format!("unknown priority '{}' (high, medium, low)", add.priority))?;
            reminder_ops::add_reminder(board, &add.title, &add.time, priority)?;
        }
        Some(RemindersAction::Rm(rm)) => {
            reminder_ops::delete_reminder(board, &rm.id)?;
        }
        None => {}
    }

    if json {
        return print_json(&board.reminders);
    }
    for reminder in &board.reminders {
        println!(
            "{:<10} [{:<6}] {:<18} {}",
            reminder.id,
            reminder.priority.label(),
            reminder.time,
            reminder.title
        );
    }
    Ok(())
}

fn cmd_chats(board: &mut Board, args: ChatsCmd, json: bool) -> Result<(), Box<dyn Error>> {
    match args.action {
        Some(ChatsAction::New(new)) => {
            messenger_ops::create_chat(board, &new.name)?;
        }
        Some(ChatsAction::Send(send)) => {
            let by = board.session_user.clone();
            messenger_ops::send_message(board, &send.id, &by, &send.text)?;
            return show_chat(board, &send.id, json);
        }
        Some(ChatsAction::Open(open)) => {
            messenger_ops::open_chat(board, &open.id)?;
            return show_chat(board, &open.id, json);
        }
        Some(ChatsAction::Rm(rm)) => {
            messenger_ops::delete_chat(board, &rm.id)?;
        }
        None => {}
    }

    if json {
        return print_json(&board.messengers);
    }
    for chat in &board.messengers {
        let unread = if chat.unread > 0 {
            format!(" ({} unread)", chat.unread)
        } else {
            String::new()
        };
        println!("{:<12} {}{}", chat.id, chat.name, unread);
    }
    Ok(())
}

fn show_chat(board: &Board, id: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let chat = board
        .messenger(id)
        .ok_or_else(|| format!("chat not found: {id}"))?;
    let history = board.chats.get(id).map(Vec::as_slice).unwrap_or_default();

    if json {
        return print_json(&history);
    }
    println!("{} ({} messages)", chat.name, history.len());
    for message in history {
        println!(
            "  [{}] {}: {}",
            message.timestamp,
            output::user_name(board, &message.sender),
            message.content
        );
    }
    Ok(())
}
