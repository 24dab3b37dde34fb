//! Order maintenance
//!
//! The roster is kept globally ordered by each record's minimum day count.
//! Every store mutation composes its state change with [`restore`] before
//! returning, so the invariant holds continuously and no observer loop is
//! needed.

use crate::normalize::day_key;
use crate::types::TripRecord;

/// Re-sort the collection by minimum day count, ascending
///
/// Stable: records with equal keys keep their relative order, so the pass is
/// idempotent and a repeated application is a no-op. Records whose day-count
/// text parses to no numbers order after every record with a valid number.
pub fn restore(records: &mut [TripRecord]) {
    records.sort_by_key(|record| day_key(&record.total_days));
}

/// Whether the collection currently satisfies the ordering invariant
#[must_use]
pub fn is_ordered(records: &[TripRecord]) -> bool {
    records
        .windows(2)
        .all(|pair| day_key(&pair[0].total_days) <= day_key(&pair[1].total_days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RecordId;

    fn record(id: u64, total_days: &str) -> TripRecord {
        let mut record = TripRecord::new(RecordId(id));
        record.total_days = total_days.to_string();
        record
    }

    #[test]
    fn restore_sorts_by_minimum() {
        let mut records = vec![record(0, "10 2"), record(1, "1 3")];
        restore(&mut records);
        assert_eq!(records[0].id, RecordId(1));
        assert_eq!(records[1].id, RecordId(0));
        assert!(is_ordered(&records));
    }

    #[test]
    fn restore_is_idempotent() {
        let mut records = vec![record(0, "8"), record(1, "x"), record(2, "3 9"), record(3, "")];
        restore(&mut records);
        let once: Vec<_> = records.iter().map(|r| r.id).collect();
        restore(&mut records);
        let twice: Vec<_> = records.iter().map(|r| r.id).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn malformed_records_sink_to_the_bottom() {
        let mut records = vec![record(0, "junk"), record(1, "100"), record(2, "")];
        restore(&mut records);
        assert_eq!(records[0].id, RecordId(1));
        // The two malformed records keep their relative order
        assert_eq!(records[1].id, RecordId(0));
        assert_eq!(records[2].id, RecordId(2));
    }

    #[test]
    fn equal_keys_keep_relative_order() {
        let mut records = vec![record(0, "5 9"), record(1, "5"), record(2, "2")];
        restore(&mut records);
        let ids: Vec<_> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![RecordId(2), RecordId(0), RecordId(1)]);
    }

    #[test]
    fn restore_on_empty_is_a_no_op() {
        let mut records: Vec<TripRecord> = Vec::new();
        restore(&mut records);
        assert!(records.is_empty());
        assert!(is_ordered(&records));
    }
}
