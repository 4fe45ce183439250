use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pl", about = concat!("[=] plank v", env!("CARGO_PKG_VERSION"), " - a project board that lives in memory"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks with filters, search and sort
    List(ListArgs),
    /// Show one task with its comments and activity
    Show(ShowArgs),
    /// Show the three board columns
    Board(BoardArgs),
    /// Show status counts and completion rate
    Stats(StatsArgs),
    /// List projects with per-project progress
    Projects,
    /// List users, or show one user's workload
    Users(UsersArgs),
    /// Add a task
    Add(AddArgs),
    /// Move a task to a new status
    Move(MoveArgs),
    /// Delete a task
    Delete(DeleteArgs),
    /// Comment on a task
    Comment(CommentArgs),
    /// Assign a user to a task (or remove one)
    Assign(AssignArgs),
    /// Set a task's progress counter
    Progress(ProgressArgs),
    /// List reminders, or add/remove one
    Reminders(RemindersCmd),
    /// List chats, or create, message and remove them
    Chats(ChatsCmd),
}

// ---------------------------------------------------------------------------
// Read command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ListArgs {
    /// Filter by project id ("all" lists everything)
    #[arg(long)]
    pub project: Option<String>,
    /// Filter by status (todo, in-progress, done; repeatable)
    #[arg(long)]
    pub status: Vec<String>,
    /// Case-insensitive search over title and description
    #[arg(long)]
    pub search: Option<String>,
    /// Sort field (date, title, progress)
    #[arg(long)]
    pub sort: Option<String>,
    /// Sort order (asc, desc)
    #[arg(long, default_value = "asc")]
    pub order: String,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Task id to show
    pub id: String,
}

#[derive(Args)]
pub struct BoardArgs {
    /// Limit the board to one project
    #[arg(long)]
    pub project: Option<String>,
}

#[derive(Args)]
pub struct StatsArgs {
    /// Limit the stats to one project
    #[arg(long)]
    pub project: Option<String>,
}

#[derive(Args)]
pub struct UsersArgs {
    /// User id to show in detail (omit to list everyone)
    pub id: Option<String>,
}

// ---------------------------------------------------------------------------
// Write command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    pub title: String,
    /// Task description
    pub description: String,
    /// Project id
    #[arg(long)]
    pub project: Option<String>,
    /// Assign a user by id (repeatable)
    #[arg(long = "assign")]
    pub assignees: Vec<String>,
}

#[derive(Args)]
pub struct MoveArgs {
    /// Task id
    pub id: String,
    /// New status (todo, in-progress, done)
    pub status: String,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Task id
    pub id: String,
}

#[derive(Args)]
pub struct CommentArgs {
    /// Task id
    pub id: String,
    /// Comment text
    pub text: String,
}

#[derive(Args)]
pub struct AssignArgs {
    /// Task id
    pub id: String,
    /// User id
    pub user: String,
    /// Remove the user instead of adding
    #[arg(long)]
    pub rm: bool,
}

#[derive(Args)]
pub struct ProgressArgs {
    /// Task id
    pub id: String,
    /// New progress value (clamped to the task's total)
    pub value: u32,
}

// ---------------------------------------------------------------------------
// Reminders
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct RemindersCmd {
    #[command(subcommand)]
    pub action: Option<RemindersAction>,
}

#[derive(Subcommand)]
pub enum RemindersAction {
    /// Add a reminder
    Add(ReminderAddArgs),
    /// Remove a reminder
    Rm(ReminderRmArgs),
}

#[derive(Args)]
pub struct ReminderAddArgs {
    /// Reminder title
    pub title: String,
    /// When, as free text ("Tomorrow, 10:00 AM")
    #[arg(long)]
    pub time: String,
    /// Priority (high, medium, low)
    #[arg(long, default_value = "medium")]
    pub priority: String,
}

#[derive(Args)]
pub struct ReminderRmArgs {
    /// Reminder id
    pub id: String,
}

// ---------------------------------------------------------------------------
// Chats
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ChatsCmd {
    #[command(subcommand)]
    pub action: Option<ChatsAction>,
}

#[derive(Subcommand)]
pub enum ChatsAction {
    /// Create a chat
    New(ChatNewArgs),
    /// Send a message to a chat
    Send(ChatSendArgs),
    /// Show a chat's history (marks it read)
    Open(ChatOpenArgs),
    /// Remove a chat
    Rm(ChatRmArgs),
}

#[derive(Args)]
pub struct ChatNewArgs {
    /// Chat name
    pub name: String,
}

#[derive(Args)]
pub struct ChatSendArgs {
    /// Chat id
    pub id: String,
    /// Message text
    pub text: String,
}

#[derive(Args)]
pub struct ChatOpenArgs {
    /// Chat id
    pub id: String,
}

#[derive(Args)]
pub struct ChatRmArgs {
    /// Chat id
    pub id: String,
}
