//! Timer lifecycle orchestration: create, list, cancel, reconcile.
//!
//! The process table is the source of truth for "still pending". The store
//! only mirrors it, and every listing doubles as a garbage-collection pass
//! over records whose process has exited or whose deadline is well past.

use uuid::Uuid;

use crate::clock::Clock;
use crate::error::TimerError;
use crate::parse::parse_timer_input;
use crate::process::ProcessController;
use crate::spawner::Spawner;
use crate::store::TimerRepository;
use crate::timer::Timer;

/// Tolerance past `due_time` before a still-alive process's timer is
/// considered expired anyway. Covers slightly-late process exit.
pub const GRACE_WINDOW_MS: i64 = 5_000;

pub struct TimerManager<R, S, P, C> {
    store: R,
    spawner: S,
    processes: P,
    clock: C,
}

impl<R, S, P, C> TimerManager<R, S, P, C>
where
    R: TimerRepository,
    S: Spawner,
    P: ProcessController,
    C: Clock,
{
    pub fn new(store: R, spawner: S, processes: P, clock: C) -> Self {
        Self {
            store,
            spawner,
            processes,
            clock,
        }
    }

    pub fn store(&self) -> &R {
        &self.store
    }

    /// Parse `raw_input`, spawn the detached notification process, and
    /// persist the new timer.
    ///
    /// Fail-closed: if the spawner cannot produce a process handle, nothing
    /// is persisted — no phantom record for a process that never started.
    pub fn create(&self, raw_input: &str) -> Result<Timer, TimerError> {
        let parsed = parse_timer_input(raw_input).ok_or_else(|| TimerError::InvalidFormat {
            input: raw_input.to_string(),
        })?;

        let pid = self.spawner.spawn(parsed.duration_seconds, &parsed.label)?;

        let now = self.clock.now_millis();
        let timer = Timer {
            id: Uuid::new_v4().to_string(),
            pid,
            created_at: now,
            duration_seconds: parsed.duration_seconds,
            original_input: raw_input.trim().to_string(),
            label: parsed.label,
            due_time: now + (parsed.duration_seconds as i64) * 1000,
        };
        self.store.add(timer.clone())?;
        tracing::debug!(id = %timer.id, pid, seconds = timer.duration_seconds, "timer created");
        Ok(timer)
    }

    /// The reconciled active set. Every listing prunes stale records.
    pub fn list(&self) -> Result<Vec<Timer>, TimerError> {
        self.reconcile()
    }

    /// Cancel the timer with `id`: best-effort group termination, then
    /// unconditional removal. Returns whether the id was found; cancelling
    /// a non-existent id is not an error.
    pub fn cancel(&self, id: &str) -> Result<bool, TimerError> {
        let timers = self.store.load();
        let found = match timers.iter().find(|t| t.id == id) {
            Some(timer) => {
                // Fire-and-forget: the record goes away regardless of
                // whether the signal lands.
                self.processes.terminate_group(timer.pid);
                true
            }
            None => false,
        };
        let remaining: Vec<Timer> = timers.into_iter().filter(|t| t.id != id).collect();
        self.store.save(&remaining)?;
        Ok(found)
    }

    /// Prune the persisted set down to timers whose process is still alive
    /// and whose deadline (plus the grace window) has not passed. The file
    /// is rewritten only when something was dropped.
    pub fn reconcile(&self) -> Result<Vec<Timer>, TimerError> {
        let timers = self.store.load();
        let now = self.clock.now_millis();
        let before = timers.len();

        let active: Vec<Timer> = timers
            .into_iter()
            .filter(|t| self.processes.is_alive(t.pid) && now <= t.due_time + GRACE_WINDOW_MS)
            .collect();

        if active.len() != before {
            tracing::info!(pruned = before - active.len(), kept = active.len(), "pruned expired timers");
            self.store.save(&active)?;
        }
        Ok(active)
    }
}
