/// Version shown in the window title
pub const RELEASE_VERSION_STR: &str = "0.1";

/// Input poll timeout while the process timer is stopped
pub const IDLE_POLL_MS: u64 = 250;

/// Height of the input panel below the canvas in rows
pub const INPUT_PANEL_HEIGHT: u16 = 3;

/// Default log filter while the terminal UI owns the screen
pub const TUI_LOG_FILTER: &str = "warn";

/// Default log filter for headless runs and log files
pub const LOG_FILTER: &str = "info";
