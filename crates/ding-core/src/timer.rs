use serde::Deserialize;
use serde::Serialize;

/// One pending delayed notification, as persisted in `simple_timers.json`.
///
/// Field names are fixed by the on-disk format and must not change: existing
/// state files use camelCase keys and the short `pid`/`duration`/`content`
/// spellings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timer {
    /// Opaque unique identifier, assigned at creation.
    pub id: String,
    /// Process-group handle of the detached background process.
    pub pid: i32,
    /// Creation timestamp, epoch milliseconds.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
    /// Requested delay in seconds.
    #[serde(rename = "duration")]
    pub duration_seconds: u64,
    /// Raw user input, preserved for display and debugging.
    #[serde(rename = "originalInput")]
    pub original_input: String,
    /// Notification text.
    #[serde(rename = "content")]
    pub label: String,
    /// Absolute deadline: `created_at + duration_seconds * 1000`.
    #[serde(rename = "dueTime")]
    pub due_time: i64,
}

impl Timer {
    /// Seconds until the deadline, clamped to zero once past due.
    pub fn remaining_seconds(&self, now_millis: i64) -> u64 {
        let remaining_ms = self.due_time.saturating_sub(now_millis);
        if remaining_ms <= 0 {
            0
        } else {
            (remaining_ms as u64) / 1000
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Timer {
        Timer {
            id: "t1".to_string(),
            pid: 4242,
            created_at: 1_000_000,
            duration_seconds: 600,
            original_input: "10m Meeting".to_string(),
            label: "Meeting".to_string(),
            due_time: 1_600_000,
        }
    }

    #[test]
    fn test_serializes_with_on_disk_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["pid"], 4242);
        assert_eq!(json["createdAt"], 1_000_000);
        assert_eq!(json["duration"], 600);
        assert_eq!(json["originalInput"], "10m Meeting");
        assert_eq!(json["content"], "Meeting");
        assert_eq!(json["dueTime"], 1_600_000);
    }

    #[test]
    fn test_remaining_seconds_clamps_past_due() {
        let timer = sample();
        assert_eq!(timer.remaining_seconds(1_000_000), 600);
        assert_eq!(timer.remaining_seconds(1_599_000), 1);
        assert_eq!(timer.remaining_seconds(1_600_000), 0);
        assert_eq!(timer.remaining_seconds(2_000_000), 0);
    }
}
