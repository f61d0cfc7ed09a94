//! Command handlers: thin presentation glue over the core lifecycle manager.

use chrono::Local;
use chrono::TimeZone;
use serde_json::json;

use ding_core::Clock;
use ding_core::ProcessController;
use ding_core::Spawner;
use ding_core::SystemClock;
use ding_core::Timer;
use ding_core::TimerManager;
use ding_core::TimerRepository;

use crate::error::CliError;
use crate::notify;

pub type HandlerResult = Result<(), Box<dyn std::error::Error>>;

/// Render seconds as `1h 2m 3s`, omitting leading zero units.
pub fn format_duration(seconds: u64) -> String {
    let mins = seconds / 60;
    let hours = mins / 60;
    if hours > 0 {
        format!("{}h {}m {}s", hours, mins % 60, seconds % 60)
    } else if mins > 0 {
        format!("{}m {}s", mins, seconds % 60)
    } else {
        format!("{}s", seconds)
    }
}

fn format_due_time(due_time_millis: i64) -> String {
    Local
        .timestamp_millis_opt(due_time_millis)
        .single()
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "?".to_string())
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

pub fn handle_set<R, S, P, C>(
    manager: &TimerManager<R, S, P, C>,
    input: &str,
    json: bool,
) -> HandlerResult
where
    R: TimerRepository,
    S: Spawner,
    P: ProcessController,
    C: Clock,
{
    let timer = manager.create(input)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&timer)?);
        return Ok(());
    }
    println!(
        "✓ Timer set - notifying in {}: {}",
        format_duration(timer.duration_seconds),
        timer.label
    );
    Ok(())
}

pub fn handle_list<R, S, P, C>(manager: &TimerManager<R, S, P, C>, json: bool) -> HandlerResult
where
    R: TimerRepository,
    S: Spawner,
    P: ProcessController,
    C: Clock,
{
    let timers = manager.list()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&timers)?);
        return Ok(());
    }
    if timers.is_empty() {
        println!("No active timers");
        println!("Use 'ding set <duration> [label]' to create one");
        return Ok(());
    }

    let now = SystemClock.now_millis();
    for timer in &timers {
        println!(
            "{}  {}  ends in {}  (at {})",
            short_id(&timer.id),
            timer.label,
            format_duration(timer.remaining_seconds(now)),
            format_due_time(timer.due_time),
        );
    }
    Ok(())
}

pub fn handle_cancel<R, S, P, C>(
    manager: &TimerManager<R, S, P, C>,
    id: &str,
    json: bool,
) -> HandlerResult
where
    R: TimerRepository,
    S: Spawner,
    P: ProcessController,
    C: Clock,
{
    // Reconcile first so prefix resolution only sees timers that are real.
    let timers = manager.list()?;
    let matches: Vec<&Timer> = timers.iter().filter(|t| t.id.starts_with(id)).collect();

    let (cancelled, full_id, label) = match matches.as_slice() {
        [] => {
            // Not an error: the timer may have fired or been cancelled
            // already. Run the removal anyway for idempotent store state.
            manager.cancel(id)?;
            (false, id.to_string(), None)
        }
        [timer] => {
            manager.cancel(&timer.id)?;
            (true, timer.id.clone(), Some(timer.label.clone()))
        }
        _ => {
            return Err(CliError::AmbiguousId {
                prefix: id.to_string(),
                count: matches.len(),
            }
            .into());
        }
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "cancelled": cancelled,
                "id": full_id,
            }))?
        );
        return Ok(());
    }
    if cancelled {
        println!("✓ Timer cancelled: {}", label.unwrap_or_default());
    } else {
        println!("No active timer matches '{id}'");
    }
    Ok(())
}

/// The detached worker: sleep out the delay, then notify. A failed
/// notification is logged, not propagated; there is nobody left to report to.
pub fn handle_fire(seconds: u64, message: &str) -> HandlerResult {
    std::thread::sleep(std::time::Duration::from_secs(seconds));
    if let Err(e) = notify::send("Ding", message) {
        tracing::warn!(error = %e, "failed to emit notification");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ding_core::MockClock;
    use ding_core::MockProcessController;
    use ding_core::MockSpawner;
    use ding_core::MockTimerStore;

    fn manager(
        store: MockTimerStore,
        processes: MockProcessController,
    ) -> TimerManager<MockTimerStore, MockSpawner, MockProcessController, MockClock> {
        TimerManager::new(store, MockSpawner::returning(100), processes, MockClock::at(0))
    }

    fn timer(id: &str, pid: i32) -> Timer {
        Timer {
            id: id.to_string(),
            pid,
            created_at: 0,
            duration_seconds: 60,
            original_input: "1m".to_string(),
            label: "Test".to_string(),
            due_time: 60_000,
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0s");
        assert_eq!(format_duration(59), "59s");
        assert_eq!(format_duration(60), "1m 0s");
        assert_eq!(format_duration(3661), "1h 1m 1s");
        assert_eq!(format_duration(4230), "1h 10m 30s");
    }

    #[test]
    fn test_short_id_truncates() {
        assert_eq!(short_id("0123456789abcdef"), "01234567");
        assert_eq!(short_id("abc"), "abc");
    }

    #[test]
    fn test_cancel_resolves_unique_prefix() {
        let store = MockTimerStore::with_timers(vec![
            timer("aaaa-1111", 1),
            timer("bbbb-2222", 2),
        ]);
        let processes = MockProcessController::new().with_alive(1).with_alive(2);
        let m = manager(store, processes);

        handle_cancel(&m, "aa", false).unwrap();
        assert_eq!(m.store().load().len(), 1);
        assert_eq!(m.store().load()[0].id, "bbbb-2222");
    }

    #[test]
    fn test_cancel_ambiguous_prefix_is_usage_error() {
        let store = MockTimerStore::with_timers(vec![
            timer("aaaa-1111", 1),
            timer("aaaa-2222", 2),
        ]);
        let processes = MockProcessController::new().with_alive(1).with_alive(2);
        let m = manager(store, processes);

        let err = handle_cancel(&m, "aa", false).unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().unwrap();
        assert_eq!(cli_err.exit_code(), 64);
        assert_eq!(m.store().load().len(), 2);
    }

    #[test]
    fn test_cancel_absent_id_is_not_an_error() {
        let store = MockTimerStore::with_timers(vec![timer("aaaa-1111", 1)]);
        let processes = MockProcessController::new().with_alive(1);
        let m = manager(store, processes);

        handle_cancel(&m, "zz", false).unwrap();
        assert_eq!(m.store().load().len(), 1);
    }
}
