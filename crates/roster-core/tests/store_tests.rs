use pretty_assertions::assert_eq;
use proptest::prelude::*;
use roster_core::order::is_ordered;
use roster_core::{normalize, Field, RecordId, Roster};

fn add(roster: &mut Roster, name: &str, total_days: &str) -> RecordId {
    roster.update_draft(Field::Name, name);
    roster.update_draft(Field::TotalDays, total_days);
    roster.commit_draft()
}

#[test]
fn normalization_table() {
    assert_eq!(normalize("5 3 x 1"), "1 3 5");
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("a b"), "");
}

#[test]
fn add_delete_reset_scenario() {
    let mut roster = Roster::new();
    let a = add(&mut roster, "A", "10 2");
    let b = add(&mut roster, "B", "1 3");

    // B's minimum (1) beats A's (2)
    let names: Vec<_> = roster.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["B", "A"]);

    roster.remove(a).unwrap();
    assert_eq!(roster.records().len(), 1);
    assert_eq!(roster.records()[0].id, b);

    roster.clear();
    assert_eq!(roster.records(), &[]);
}

#[test]
fn direct_edit_is_rekeyed_but_not_rewritten() {
    let mut roster = Roster::new();
    let id = add(&mut roster, "A", "5");

    roster.edit_field(id, Field::TotalDays, "2 9").unwrap();

    let record = roster.get(id).unwrap();
    assert_eq!(record.total_days, "2 9");
    assert!(is_ordered(roster.records()));
}

#[test]
fn committed_records_are_normalized() {
    let mut roster = Roster::new();
    let id = add(&mut roster, "A", "  8 zz 3  ");
    assert_eq!(roster.get(id).unwrap().total_days, "3 8");
}

/// One scripted operation against the roster.
#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Edit(usize, String),
    Delete(usize),
    Reset,
}

fn op() -> impl Strategy<Value = Op> {
    let days = prop::collection::vec(
        prop_oneof![any::<i16>().prop_map(|n| n.to_string()), "[a-z]{1,3}"],
        0..4,
    )
    .prop_map(|tokens| tokens.join(" "));

    prop_oneof![
        3 => days.clone().prop_map(Op::Add),
        2 => (any::<usize>(), days).prop_map(|(i, d)| Op::Edit(i, d)),
        2 => any::<usize>().prop_map(Op::Delete),
        1 => Just(Op::Reset),
    ]
}

proptest! {
    #[test]
    fn prop_ids_strictly_increase_and_order_holds(ops in prop::collection::vec(op(), 0..40)) {
        let mut roster = Roster::new();
        let mut assigned: Vec<RecordId> = Vec::new();

        for op in ops {
            match op {
                Op::Add(days) => {
                    roster.update_draft(Field::TotalDays, days);
                    let id = roster.commit_draft();
                    if let Some(last) = assigned.last() {
                        prop_assert!(id > *last);
                    }
                    assigned.push(id);
                }
                Op::Edit(i, days) => {
                    // Resolve against whatever currently exists; misses are typed no-ops
                    let target = roster
                        .records()
                        .get(i % (roster.len() + 1))
                        .map(|r| r.id)
                        .unwrap_or(RecordId(u64::MAX));
                    let _ = roster.edit_field(target, Field::TotalDays, days);
                }
                Op::Delete(i) => {
                    let target = roster
                        .records()
                        .get(i % (roster.len() + 1))
                        .map(|r| r.id)
                        .unwrap_or(RecordId(u64::MAX));
                    let _ = roster.remove(target);
                }
                Op::Reset => roster.clear(),
            }
            prop_assert!(is_ordered(roster.records()));
        }

        // Every id handed out was unique
        let mut seen = assigned.clone();
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), assigned.len());
    }

    #[test]
    fn prop_commit_output_is_normal_form(days in "[ 0-9a-z-]{0,20}") {
        let mut roster = Roster::new();
        roster.update_draft(Field::TotalDays, days);
        let id = roster.commit_draft();
        let stored = roster.get(id).unwrap().total_days.clone();
        // Normalizing a committed value changes nothing
        prop_assert_eq!(normalize(&stored), stored);
    }
}
