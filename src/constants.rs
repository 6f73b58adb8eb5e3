// Defaults for the visualizers

/// Queue capacity used when none is configured
pub const DEFAULT_QUEUE_CAPACITY: usize = 8;

/// How long each animation step stays on screen, in milliseconds
pub const DEFAULT_STEP_MILLIS: u64 = 700;

/// Log filter used when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Event poll interval of the UI loop, in milliseconds
pub const UI_POLL_MILLIS: u64 = 30;
