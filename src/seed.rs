//! The demo dataset every session starts from.
//!
//! Eleven tasks across three projects, three users, a short audit trail,
//! reminders and chats. Nothing here survives the process: the CLI seeds a
//! fresh board per invocation and the TUI per launch.

use indexmap::IndexMap;

use crate::model::activity::{ActivityEntry, ActivityKind, Comment};
use crate::model::board::Board;
use crate::model::messenger::{Message, Messenger};
use crate::model::project::Project;
use crate::model::reminder::{Priority, Reminder};
use crate::model::task::{Status, Task};
use crate::model::user::User;

/// Build the seeded demo board. `session_user` is John (`user1`), the
/// identity mutations are attributed to unless a caller says otherwise.
pub fn demo_board() -> Board {
    Board {
        tasks: demo_tasks(),
        projects: demo_projects(),
        users: demo_users(),
        comments: demo_comments(),
        activity: demo_activity(),
        reminders: demo_reminders(),
        messengers: demo_messengers(),
        chats: demo_chats(),
        session_user: "user1".to_string(),
    }
}

pub fn demo_users() -> Vec<User> {
    vec![
        User {
            id: "user1".into(),
            name: "John".into(),
            avatar: "https://ui-avatars.com/api/?name=J&background=a78bfa&color=fff".into(),
        },
        User {
            id: "user2".into(),
            name: "Sarah".into(),
            avatar: "https://ui-avatars.com/api/?name=S+P&background=a78bfa&color=fff".into(),
        },
        User {
            id: "user3".into(),
            name: "Alex".into(),
            avatar: "https://ui-avatars.com/api/?name=A+D&background=60a5fa&color=fff".into(),
        },
    ]
}

pub fn demo_projects() -> Vec<Project> {
    vec![
        Project {
            id: "design".into(),
            name: "Design system".into(),
            count: None,
        },
        Project {
            id: "user".into(),
            name: "User flow".into(),
            count: None,
        },
        Project {
            id: "ux".into(),
            name: "UX research".into(),
            count: None,
        },
    ]
}

pub fn demo_tasks() -> Vec<Task> {
    let t = |id: &str,
             title: &str,
             description: &str,
             project: &str,
             status: Status,
             progress: u32,
             total_progress: u32,
             date: &str,
             comments: u32,
             attachments: u32,
             assignees: &[&str]| Task {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        project: project.into(),
        status,
        progress,
        total_progress,
        date: date.into(),
        comments,
        attachments,
        assignees: assignees.iter().map(|a| a.to_string()).collect(),
    };

    vec![
        t(
            "task1",
            "Design new UI presentation",
            "Dribbble marketing",
            "design",
            Status::Todo,
            7,
            10,
            "24 Aug 2022",
            7,
            2,
            &["user1"],
        ),
        t(
            "task2",
            "Add more UI/UX mockups",
            "Pinterest promotion",
            "design",
            Status::Todo,
            4,
            10,
            "25 Aug 2022",
            0,
            0,
            &["user1", "user2"],
        ),
        t(
            "task3",
            "Design few mobile screens",
            "Dropbox mobile app",
            "design",
            Status::Todo,
            3,
            10,
            "26 Aug 2022",
            6,
            4,
            &["user1"],
        ),
        t(
            "task4",
            "Create a tweet and promote",
            "Twitter marketing",
            "ux",
            Status::Todo,
            2,
            14,
            "27 Aug 2022",
            0,
            0,
            &["user2", "user3"],
        ),
        t(
            "task5",
            "Design system update",
            "Oreo website project",
            "design",
            Status::InProgress,
            3,
            10,
            "12 Nov 2022",
            0,
            0,
            &["user1", "user2"],
        ),
        t(
            "task6",
            "Create brand guideline",
            "Oreo branding project",
            "design",
            Status::InProgress,
            7,
            10,
            "13 Nov 2022",
            2,
            13,
            &["user1"],
        ),
        t(
            "task7",
            "Create wireframe for ios app",
            "Oreo ios app project",
            "ux",
            Status::InProgress,
            4,
            10,
            "14 Nov 2022",
            0,
            0,
            &["user2", "user3"],
        ),
        t(
            "task8",
            "Create UI kit for layout",
            "Crypto mobile app",
            "ux",
            Status::InProgress,
            3,
            10,
            "15 Nov 2022",
            23,
            12,
            &["user1"],
        ),
        t(
            "task9",
            "Add product to the market",
            "UI8 marketplace",
            "user",
            Status::Done,
            10,
            10,
            "6 Jan 2022",
            1,
            5,
            &["user1"],
        ),
        t(
            "task10",
            "Launch product promotion",
            "Kickstarter campaign",
            "user",
            Status::Done,
            10,
            10,
            "7 Jan 2022",
            17,
            3,
            &["user1"],
        ),
        t(
            "task11",
            "Make twitter banner",
            "Twitter marketing",
            "user",
            Status::Done,
            10,
            10,
            "8 Jan 2022",
            0,
            0,
            &["user2", "user3"],
        ),
    ]
}

pub fn demo_comments() -> Vec<Comment> {
    let c = |id: &str, task_id: &str, user_id: &str, text: &str, timestamp: &str| Comment {
        id: id.into(),
        task_id: task_id.into(),
        user_id: user_id.into(),
        text: text.into(),
        timestamp: timestamp.into(),
    };
    vec![
        c(
            "com1",
            "task1",
            "user1",
            "Let's try to complete this by Friday.",
            "2023-10-15T11:22:00Z",
        ),
        c(
            "com2",
            "task1",
            "user2",
            "I agree, I'll work on the design part.",
            "2023-10-15T13:40:00Z",
        ),
        c(
            "com3",
            "task2",
            "user2",
            "This looks good. Let's proceed.",
            "2023-09-22T14:35:00Z",
        ),
    ]
}

pub fn demo_activity() -> Vec<ActivityEntry> {
    let a = |id: &str,
             task_id: &str,
             user_id: &str,
             kind: ActivityKind,
             timestamp: &str,
             details: Option<&str>| ActivityEntry {
        id: id.into(),
        task_id: task_id.into(),
        user_id: user_id.into(),
        kind,
        timestamp: timestamp.into(),
        details: details.map(|d| d.to_string()),
    };
    vec![
        a(
            "act1",
            "task1",
            "user1",
            ActivityKind::Created,
            "2023-10-12T14:30:00Z",
            None,
        ),
        a(
            "act2",
            "task1",
            "user2",
            ActivityKind::StatusChanged,
            "2023-10-14T09:15:00Z",
            Some("todo → in-progress"),
        ),
        a(
            "act3",
            "task1",
            "user1",
            ActivityKind::CommentAdded,
            "2023-10-15T11:22:00Z",
            Some("Let's try to complete this by Friday."),
        ),
        a(
            "act4",
            "task1",
            "user3",
            ActivityKind::Assigned,
            "2023-10-16T13:45:00Z",
            None,
        ),
        a(
            "act5",
            "task2",
            "user1",
            ActivityKind::Created,
            "2023-09-20T10:00:00Z",
            None,
        ),
        a(
            "act6",
            "task2",
            "user2",
            ActivityKind::CommentAdded,
            "2023-09-22T14:35:00Z",
            Some("This looks good. Let's proceed."),
        ),
    ]
}

pub fn demo_reminders() -> Vec<Reminder> {
    vec![
        Reminder {
            id: "reminder1".into(),
            title: "Team meeting".into(),
            time: "Today, 2:00 PM".into(),
            priority: Priority::High,
        },
        Reminder {
            id: "reminder2".into(),
            title: "Project deadline".into(),
            time: "Tomorrow, 10:00 AM".into(),
            priority: Priority::High,
        },
        Reminder {
            id: "reminder3".into(),
            title: "Follow up with client".into(),
            time: "Wed, 11:30 AM".into(),
            priority: Priority::Low,
        },
    ]
}

pub fn demo_messengers() -> Vec<Messenger> {
    vec![
        Messenger {
            id: "messenger1".into(),
            name: "Team Chat".into(),
            unread: 5,
        },
        Messenger {
            id: "messenger2".into(),
            name: "Marketing".into(),
            unread: 3,
        },
        Messenger {
            id: "messenger3".into(),
            name: "Development".into(),
            unread: 11,
        },
        Messenger {
            id: "messenger4".into(),
            name: "Design".into(),
            unread: 0,
        },
    ]
}

pub fn demo_chats() -> IndexMap<String, Vec<Message>> {
    let m = |id: &str, sender: &str, content: &str, timestamp: &str| Message {
        id: id.into(),
        sender: sender.into(),
        content: content.into(),
        timestamp: timestamp.into(),
    };

    let mut chats = IndexMap::new();
    chats.insert(
        "messenger1".to_string(),
        vec![
            m(
                "msg1",
                "user1",
                "Morning all, standup in ten.",
                "2023-10-16T08:50:00Z",
            ),
            m(
                "msg2",
                "user2",
                "The new mockups are up for review.",
                "2023-10-16T09:12:00Z",
            ),
            m(
                "msg3",
                "user3",
                "Looking now, first pass looks great.",
                "2023-10-16T09:20:00Z",
            ),
        ],
    );
    chats.insert(
        "messenger2".to_string(),
        vec![
            m(
                "msg4",
                "user1",
                "Campaign copy is due Thursday.",
                "2023-10-16T10:05:00Z",
            ),
            m(
                "msg5",
                "user2",
                "Draft is in the shared doc.",
                "2023-10-16T10:18:00Z",
            ),
        ],
    );
    chats.insert(
        "messenger3".to_string(),
        vec![
            m(
                "msg6",
                "user3",
                "Staging deploy went out clean.",
                "2023-10-16T11:02:00Z",
            ),
            m(
                "msg7",
                "user1",
                "Nice, I'll smoke-test the board view.",
                "2023-10-16T11:10:00Z",
            ),
        ],
    );
    chats.insert(
        "messenger4".to_string(),
        vec![m(
            "msg8",
            "user1",
            "Palette refresh lands with the next drop.",
            "2023-10-16T12:30:00Z",
        )],
    );
    chats
}
