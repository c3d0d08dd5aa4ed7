//! Fixed configuration for the refresh loop.
//!
//! There is no configuration file: timing and layout are compile-time
//! constants, and the command line only chooses the output mode.

use std::time::Duration;

/// Literal placed between two non-empty fragments.
pub const SEPARATOR: &str = "   ";

/// Seconds between two normal refreshes.
pub const INTERVAL: Duration = Duration::from_secs(5);

/// How long the normal line stays visible before an alert flash starts.
pub const HOLD: Duration = Duration::from_secs(2);

pub const FLASH_ON: Duration = Duration::from_millis(500);
pub const FLASH_OFF: Duration = Duration::from_millis(500);

/// Number of on/off pairs in one flash sequence.
pub const URGENT_FLASHES: usize = 5;

pub const URGENT_PREFIX: &str = "!!!";
pub const URGENT_SUFFIX: &str = "!!!";

/// Size of the window-title buffer, terminator included.
pub const TITLE_CAPACITY: usize = 4096;

/// Maximum length in bytes of a pending alert message.
pub const ALERT_CAPACITY: usize = 128;

/// Where rendered lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Stream,
    Title,
}

/// Options chosen on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub mode: OutputMode,
    /// Render exactly one line and stop.
    pub once: bool,
}

/// Durations driving the loop's wait states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub interval: Duration,
    pub hold: Duration,
    pub flash_on: Duration,
    pub flash_off: Duration,
    pub flashes: usize,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            interval: INTERVAL,
            hold: HOLD,
            flash_on: FLASH_ON,
            flash_off: FLASH_OFF,
            flashes: URGENT_FLASHES,
        }
    }
}
