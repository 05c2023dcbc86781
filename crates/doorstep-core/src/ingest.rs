//! Memo record construction for the ingestion entry point.

use chrono::Utc;
use doorstep_store::MemoRecord;
use uuid::Uuid;

/// Build a memo record from a raw submission.
///
/// Generates the id and creation timestamp. The geotag and text are stored
/// as given: no range validation, no length cap.
pub fn new_memo(latitude: f64, longitude: f64, memo: impl Into<String>) -> MemoRecord {
    MemoRecord {
        id: Uuid::new_v4(),
        latitude,
        longitude,
        memo: memo.into(),
        created_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::new_memo;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    #[test]
    fn preserves_submitted_fields() {
        let record = new_memo(32.3, -90.2, "wants ride to polls");
        assert_eq!(record.latitude, 32.3);
        assert_eq!(record.longitude, -90.2);
        assert_eq!(record.memo, "wants ride to polls");
    }

    #[test]
    fn generates_fresh_ids() {
        let first = new_memo(0.0, 0.0, "a");
        let second = new_memo(0.0, 0.0, "a");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn timestamps_at_creation_time() {
        let before = Utc::now();
        let record = new_memo(0.0, 0.0, "a");
        let after = Utc::now();
        assert!(record.created_at >= before);
        assert!(record.created_at <= after);
    }

    #[test]
    fn accepts_blank_and_out_of_range_values() {
        let record = new_memo(900.0, -900.0, "");
        assert_eq!(record.latitude, 900.0);
        assert_eq!(record.memo, "");
    }
}
