use pretty_assertions::assert_eq;
use roster_cli::{Command, Outcome, Shell, Snapshot};
use roster_core::RecordId;
use roster_test_utils::{populated_session, unlocked_session};

fn run(shell: &mut Shell, line: &str) -> String {
    let mut out = Vec::new();
    let command = Command::parse(line).unwrap().unwrap();
    assert_eq!(shell.execute(command, &mut out).unwrap(), Outcome::Continue);
    String::from_utf8(out).unwrap()
}

#[test]
fn snapshot_round_trip_preserves_records_and_counter() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.json");

    let mut session = populated_session(&[("A", "10 2"), ("B", "1 3")]);
    // Deleting the highest id must not let the counter slip backwards
    session.remove(RecordId(1)).unwrap();

    Snapshot::capture(session.records(), session.next_id())
        .save(&path)
        .unwrap();
    let snapshot = Snapshot::load(&path).unwrap();

    assert_eq!(snapshot.records, session.records().to_vec());
    assert_eq!(snapshot.next_id, RecordId(2));
}

#[test]
fn shell_save_then_load_into_fresh_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.json");

    let mut source = Shell::new(populated_session(&[("A", "9"), ("B", "4")]), Some(path.clone()));
    let output = run(&mut source, "save");
    assert!(output.contains("saved 2 record(s)"), "{output}");

    let mut target = Shell::new(unlocked_session(), Some(path));
    let output = run(&mut target, "load");
    assert!(output.contains("loaded 2 record(s)"), "{output}");

    let listing = run(&mut target, "list");
    let b_row = listing.find('B').unwrap();
    let a_row = listing.find('A').unwrap();
    assert!(b_row < a_row, "{listing}");

    // Imported counter continues the donor's sequence
    run(&mut target, "draft name C");
    let output = run(&mut target, "add");
    assert_eq!(output, "added record 2\n");
}

#[test]
fn load_into_locked_session_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.json");

    let mut source = Shell::new(populated_session(&[("A", "1")]), None);
    run(&mut source, &format!("save {}", path.display()));

    let mut locked = Shell::new(roster_test_utils::locked_session(), Some(path));
    let output = run(&mut locked, "load");
    assert_eq!(output, "session is locked\n");
    assert!(locked.session().records().is_empty());
}

#[test]
fn load_failure_is_a_notice_not_an_abort() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");

    let mut shell = Shell::new(unlocked_session(), Some(missing));
    let output = run(&mut shell, "load");
    assert!(output.contains("load failed"), "{output}");
}
