use thiserror::Error;

/// CLI-layer errors (id resolution happens here, not in the core).
#[derive(Error, Debug)]
pub enum CliError {
    #[error("ambiguous timer id {prefix:?}: matches {count} timers")]
    AmbiguousId { prefix: String, count: usize },
}

impl CliError {
    pub fn suggestion(&self) -> String {
        match self {
            CliError::AmbiguousId { .. } => {
                "Run 'ding list' and use a longer id prefix.".to_string()
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::AmbiguousId { .. } => 64, // EX_USAGE
        }
    }
}
