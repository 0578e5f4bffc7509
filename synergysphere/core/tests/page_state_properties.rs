use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use std::collections::HashSet;
use synergysphere_core::{
    Author, Discussion, NewProject, NewTask, Priority, ProjectBoard, ProjectStatus, TaskBoard,
    TaskDetail, TaskStatus,
};

fn at(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 2, 9, 12, minute, 0).unwrap()
}

fn new_task(title: &str, assignee_id: &str) -> NewTask {
    NewTask {
        title: title.to_string(),
        assignee_id: assignee_id.to_string(),
        ..NewTask::default()
    }
}

const BLANKS: [&str; 5] = ["", " ", "   ", "\t", "\n \t"];

#[test]
fn blank_inputs_never_change_any_collection() {
    let mut projects = ProjectBoard::seeded();
    let mut tasks = TaskBoard::seeded();
    let mut discussion = Discussion::seeded();
    let mut detail = TaskDetail::seeded("1");

    for blank in BLANKS {
        projects.create(
            NewProject {
                name: blank.to_string(),
                description: "ignored".to_string(),
            },
            at(0),
        );
        tasks.create_task(new_task(blank, "1"), at(0));
        discussion.post_message(blank, Author::from_user(None), at(0));
        detail.add_comment(blank, at(0));
    }

    assert_eq!(projects, ProjectBoard::seeded());
    assert_eq!(tasks, TaskBoard::seeded());
    assert_eq!(discussion, Discussion::seeded());
    assert_eq!(detail, TaskDetail::seeded("1"));
}

#[test]
fn each_create_adds_exactly_one_record() {
    let mut projects = ProjectBoard::seeded();
    let mut tasks = TaskBoard::seeded();
    let mut discussion = Discussion::seeded();
    let mut detail = TaskDetail::seeded("1");

    for minute in 0..5 {
        let before = (
            projects.len(),
            tasks.tasks().len(),
            discussion.len(),
            detail.comments().len(),
        );

        projects.create(
            NewProject {
                name: format!("Project {minute}"),
                description: String::new(),
            },
            at(minute),
        );
        tasks.create_task(new_task(&format!("Task {minute}"), "2"), at(minute));
        discussion.post_message("hello", Author::from_user(None), at(minute));
        detail.add_comment("noted", at(minute));

        assert_eq!(projects.len(), before.0 + 1);
        assert_eq!(tasks.tasks().len(), before.1 + 1);
        assert_eq!(discussion.len(), before.2 + 1);
        assert_eq!(detail.comments().len(), before.3 + 1);
    }
}

#[test]
fn launch_project_scenario() {
    let mut board = ProjectBoard::new();
    let now = at(30);

    board.create(
        NewProject {
            name: "Launch".to_string(),
            description: String::new(),
        },
        now,
    );

    let project = &board.projects()[0];
    assert_eq!(project.status, ProjectStatus::Active);
    assert_eq!(project.progress, 0);
    assert_eq!(project.members, 1);
    assert_eq!(project.due_date, (now + Duration::days(30)).date_naive());
    assert_eq!(project.due_date, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
}

#[test]
fn fix_bug_with_unknown_assignee_scenario() {
    let mut board = TaskBoard::seeded();

    board.create_task(new_task("Fix bug", "not-on-roster"), at(1));

    let task = board.tasks().last().unwrap();
    assert_eq!(task.title, "Fix bug");
    assert_eq!(task.assignee.name, "Unassigned");
    assert_eq!(task.priority, Priority::Medium);
}

#[test]
fn status_round_trip_restores_original_record() {
    let mut board = TaskBoard::seeded();
    let original = board.get("3").unwrap().clone();
    assert_eq!(original.status, TaskStatus::Todo);

    board.set_task_status("3", TaskStatus::Done);
    let moved = board.get("3").unwrap().clone();
    board.set_task_status("3", TaskStatus::Todo);

    assert_eq!(moved.status, TaskStatus::Done);
    assert_eq!(
        moved,
        synergysphere_core::Task {
            status: TaskStatus::Done,
            ..original.clone()
        }
    );
    assert_eq!(board.get("3").unwrap(), &original);
}

#[test]
fn columns_partition_the_task_list_after_any_sequence() {
    let mut board = TaskBoard::seeded();
    let statuses = TaskStatus::ALL;

    for step in 0..12u32 {
        board.create_task(new_task(&format!("Task {step}"), "1"), at(step));
        let ids: Vec<String> = board.tasks().iter().map(|t| t.id.clone()).collect();
        let target = &ids[(step as usize * 7) % ids.len()];
        board.set_task_status(target, statuses[(step % 3) as usize]);

        let mut seen = HashSet::new();
        let mut total = 0;
        for (status, column) in board.columns() {
            for task in column {
                assert_eq!(task.status, status);
                assert!(seen.insert(task.id.clone()), "task listed twice");
                total += 1;
            }
        }
        assert_eq!(total, board.tasks().len());
        assert_eq!(seen, ids.into_iter().collect::<HashSet<_>>());
    }
}

#[test]
fn messages_and_comments_preserve_posting_order() {
    let mut discussion = Discussion::seeded();
    let mut detail = TaskDetail::seeded("1");

    discussion.post_message("M1", Author::from_user(None), at(5));
    discussion.post_message("M2", Author::from_user(None), at(5));
    detail.add_comment("C1", at(5));
    detail.add_comment("C2", at(5));

    let messages: Vec<_> = discussion.messages().iter().map(|m| m.content.as_str()).collect();
    let comments: Vec<_> = detail.comments().iter().map(|c| c.content.as_str()).collect();
    assert_eq!(&messages[messages.len() - 2..], ["M1", "M2"]);
    assert_eq!(&comments[comments.len() - 2..], ["C1", "C2"]);
    assert_ne!(
        discussion.messages()[2].id,
        discussion.messages()[3].id,
        "ids issued in the same millisecond must differ"
    );
}
