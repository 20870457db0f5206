//! Replay of JSONL command scripts from disk.

use std::io::Write;

use mess_config::MessConfig;
use mess_core::enums::{Meal, PollStatus};
use mess_store::MessService;
use mess_store::error::StoreError;
use mess_store::replay::CommandReplayer;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

fn script(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn replays_a_day_of_mess_operations() {
    let file = script(&[
        r#"{"v":1,"command":{"op":"create_announcement","title":"Diwali dinner","message":"Sweets after dinner","category":"menu"}}"#,
        r#"{"command":{"op":"create_poll","meal":"dinner","total_eligible":3}}"#,
        r#"{"command":{"op":"vote","poll_id":1,"choice":"yes","voter_id":"stu-1"}}"#,
        r#"{"command":{"op":"vote","poll_id":1,"choice":"no","voter_id":"stu-2"}}"#,
        r#"{"command":{"op":"close_poll","id":1}}"#,
        r#"{"command":{"op":"set_window","meal":"breakfast","start_time":"07:30","end_time":"09:30"}}"#,
        r#"{"command":{"op":"add_item","meal":"breakfast","name":"Upma"}}"#,
        r#"{"command":{"op":"create_payment","student_ref":"stu-1","student_name":"Rahul Sharma","period":"March 2024","due_date":"2024-03-05"}}"#,
        r#"{"command":{"op":"record_payment","id":1,"paid_on":"2024-03-02","transaction_id":"TXN1"}}"#,
    ]);

    let mut svc = MessService::new(&MessConfig::default());
    let response = CommandReplayer::replay(&mut svc, file.path(), true).unwrap();

    assert_eq!(response.script_lines, 9);
    assert_eq!(response.applied, 9);
    assert_eq!(response.failed, 0);

    let poll = svc.get_poll(1).unwrap();
    assert_eq!(poll.status, PollStatus::Closed);
    assert_eq!((poll.yes_count, poll.no_count), (1, 1));
    assert_eq!(svc.menu_for(Meal::Breakfast).unwrap().items, vec!["Upma"]);
    assert_eq!(svc.payment_summary().total_collected, 2500);
}

#[test]
fn lenient_replay_reports_failing_lines() {
    let file = script(&[
        r#"{"command":{"op":"respond","id":2,"response":"Tables are now wiped after every meal"}}"#,
        r#"{"command":{"op":"respond","id":2,"response":"Again"}}"#,
        r#"{"command":{"op":"resolve","id":99}}"#,
    ]);

    let mut svc = MessService::with_sample_data(&MessConfig::default()).unwrap();
    let response = CommandReplayer::replay(&mut svc, file.path(), false).unwrap();

    assert_eq!(response.applied, 1);
    assert_eq!(response.failed, 2);
    let lines: Vec<_> = response.failures.iter().map(|f| f.line).collect();
    assert_eq!(lines, vec![2, 3]);
    assert!(response.failures[1].error.contains("not found"));
}

#[test]
fn malformed_line_is_a_script_error() {
    let file = script(&[r#"{"command":{"op":"teleport"}}"#]);
    let mut svc = MessService::new(&MessConfig::default());

    let err = CommandReplayer::replay(&mut svc, file.path(), false).unwrap_err();
    assert!(matches!(err, StoreError::Script { .. }));
}

#[test]
fn missing_file_is_a_script_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut svc = MessService::new(&MessConfig::default());

    let err = CommandReplayer::replay(&mut svc, &dir.path().join("nope.jsonl"), false).unwrap_err();
    assert!(matches!(err, StoreError::Script { .. }));
}
