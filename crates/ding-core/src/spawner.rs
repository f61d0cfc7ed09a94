use crate::error::TimerError;

/// Port for launching the detached delay-then-notify process.
///
/// The implementation must start a process that survives the invoking
/// command's exit, sleeps for `delay_seconds`, then emits a notification
/// containing `message`. The returned pid is the handle of a process group
/// the whole subtree can be terminated through.
pub trait Spawner: Send + Sync {
    fn spawn(&self, delay_seconds: u64, message: &str) -> Result<i32, TimerError>;
}

pub mod mock {
    use std::sync::Mutex;

    use super::*;

    /// Spawner that hands out scripted pids, or fails on demand.
    pub struct MockSpawner {
        next_pid: Mutex<i32>,
        fail: bool,
        calls: Mutex<Vec<(u64, String)>>,
    }

    impl MockSpawner {
        pub fn returning(first_pid: i32) -> Self {
            Self {
                next_pid: Mutex::new(first_pid),
                fail: false,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn failing() -> Self {
            Self {
                next_pid: Mutex::new(0),
                fail: true,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<(u64, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Spawner for MockSpawner {
        fn spawn(&self, delay_seconds: u64, message: &str) -> Result<i32, TimerError> {
            self.calls
                .lock()
                .unwrap()
                .push((delay_seconds, message.to_string()));
            if self.fail {
                return Err(TimerError::SpawnFailed("mock spawner set to fail".to_string()));
            }
            let mut next = self.next_pid.lock().unwrap();
            let pid = *next;
            *next += 1;
            Ok(pid)
        }
    }
}
