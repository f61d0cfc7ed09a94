use std::process::Command;
use std::process::Stdio;

use ding_core::Spawner;
use ding_core::TimerError;

/// Spawner that re-executes the current binary as a detached `fire` worker.
///
/// The child gets its own process group (`process_group(0)`), so it survives
/// this command's exit and can later be terminated as a whole subtree with
/// one signal to the group. Its pid is therefore also its group handle.
pub struct DetachedSpawner;

impl Spawner for DetachedSpawner {
    fn spawn(&self, delay_seconds: u64, message: &str) -> Result<i32, TimerError> {
        let exe = std::env::current_exe().map_err(|e| TimerError::SpawnFailed(e.to_string()))?;

        let mut cmd = Command::new(exe);
        cmd.arg("fire")
            .arg("--seconds")
            .arg(delay_seconds.to_string())
            .arg("--message")
            .arg(message)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.process_group(0);
        }

        let child = cmd
            .spawn()
            .map_err(|e| TimerError::SpawnFailed(e.to_string()))?;

        i32::try_from(child.id())
            .map_err(|_| TimerError::SpawnFailed(format!("pid {} out of range", child.id())))
    }
}
