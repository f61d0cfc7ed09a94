use std::path::PathBuf;

/// Resolve the state directory holding `simple_timers.json`.
///
/// `DING_STATE_DIR` overrides everything (tests rely on this), then
/// `XDG_STATE_HOME`, then `~/.local/state`, then `/tmp` as a last resort.
pub fn state_dir() -> PathBuf {
    if let Ok(custom) = std::env::var("DING_STATE_DIR") {
        return PathBuf::from(custom);
    }

    if let Ok(xdg) = std::env::var("XDG_STATE_HOME") {
        return PathBuf::from(xdg).join("ding");
    }

    std::env::var("HOME")
        .map(|home| {
            PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("ding")
        })
        .unwrap_or_else(|_| PathBuf::from("/tmp/ding"))
}
