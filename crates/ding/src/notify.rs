//! Desktop notification emission for the detached fire worker.

use std::io;
use std::process::Command;

/// Emit a desktop notification. Blocking; the fire worker has nothing else
/// to do afterwards.
pub fn send(title: &str, body: &str) -> io::Result<()> {
    let status = notifier_command(title, body).status()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::Other,
            format!("notifier exited with {status}"),
        ))
    }
}

#[cfg(target_os = "macos")]
fn notifier_command(title: &str, body: &str) -> Command {
    let script = format!(
        "display notification \"{}\" with title \"{}\"",
        escape_applescript(body),
        escape_applescript(title),
    );
    let mut cmd = Command::new("osascript");
    cmd.arg("-e").arg(script);
    cmd
}

#[cfg(target_os = "macos")]
fn escape_applescript(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(not(target_os = "macos"))]
fn notifier_command(title: &str, body: &str) -> Command {
    let mut cmd = Command::new("notify-send");
    cmd.arg(title).arg(body);
    cmd
}
