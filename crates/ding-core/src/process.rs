//! Process liveness checks and termination for detached timer processes.

/// Oracle over the OS process table.
///
/// `pid` is the process-group handle returned by the spawner: the detached
/// timer process leads its own group, so termination targets the whole group
/// (the shell and its sleeping child both die).
pub trait ProcessController: Send + Sync {
    /// True if the process still exists and is signalable. Never fails:
    /// anything other than a definitive "no such process" counts as alive.
    fn is_alive(&self, pid: i32) -> bool;

    /// Best-effort SIGTERM to the process group led by `pid`. A target that
    /// is already gone is the expected success path for a completed timer,
    /// so failures are swallowed and logged.
    fn terminate_group(&self, pid: i32);
}

#[cfg(unix)]
pub struct UnixProcessController;

#[cfg(unix)]
impl ProcessController for UnixProcessController {
    fn is_alive(&self, pid: i32) -> bool {
        // Signal 0 probes existence without delivering anything.
        let result = unsafe { libc::kill(pid, 0) };
        if result == 0 {
            return true;
        }
        match std::io::Error::last_os_error().raw_os_error() {
            Some(libc::ESRCH) => false,
            // EPERM means the process exists but belongs to someone else.
            _ => true,
        }
    }

    fn terminate_group(&self, pid: i32) {
        // Negative pid targets the whole process group.
        let result = unsafe { libc::kill(-pid, libc::SIGTERM) };
        if result != 0 {
            let err = std::io::Error::last_os_error();
            tracing::debug!(pid, error = %err, "process group already gone or not signalable");
        }
    }
}

pub mod mock {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    /// Controller with a scripted process table, recording signals sent.
    #[derive(Default)]
    pub struct MockProcessController {
        alive: Mutex<HashMap<i32, bool>>,
        terminated: Mutex<Vec<i32>>,
    }

    impl MockProcessController {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_alive(self, pid: i32) -> Self {
            self.alive.lock().unwrap().insert(pid, true);
            self
        }

        pub fn with_dead(self, pid: i32) -> Self {
            self.alive.lock().unwrap().insert(pid, false);
            self
        }

        /// Pids whose groups received a termination signal, in order.
        pub fn terminated(&self) -> Vec<i32> {
            self.terminated.lock().unwrap().clone()
        }
    }

    impl ProcessController for MockProcessController {
        fn is_alive(&self, pid: i32) -> bool {
            self.alive.lock().unwrap().get(&pid).copied().unwrap_or(false)
        }

        fn terminate_group(&self, pid: i32) {
            self.terminated.lock().unwrap().push(pid);
        }
    }
}
