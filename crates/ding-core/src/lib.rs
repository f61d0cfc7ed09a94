//! Core timer engine for ding.
//!
//! The pieces, leaf to root:
//! - [`parse`]: the compact `<digits><unit>...` duration grammar
//! - [`store`]: the JSON-backed timer list on disk
//! - [`process`]: liveness checks and termination of detached timer processes
//! - [`lifecycle`]: create/list/cancel/reconcile orchestration
//!
//! The actual delay-then-notify work happens in a detached background process
//! spawned through the [`Spawner`] port; this crate only tracks those
//! processes and keeps the persisted list consistent with the process table.

pub mod clock;
pub mod error;
pub mod lifecycle;
pub mod parse;
pub mod process;
pub mod spawner;
pub mod store;
pub mod timer;

pub use clock::mock::MockClock;
pub use clock::{Clock, SystemClock};
pub use error::TimerError;
pub use lifecycle::{TimerManager, GRACE_WINDOW_MS};
pub use parse::{parse_timer_input, ParsedInput, DEFAULT_LABEL};
pub use process::mock::MockProcessController;
pub use process::ProcessController;
#[cfg(unix)]
pub use process::UnixProcessController;
pub use spawner::mock::MockSpawner;
pub use spawner::Spawner;
pub use store::mock::MockTimerStore;
pub use store::{FileTimerStore, TimerRepository, TIMERS_FILE_NAME};
pub use timer::Timer;
