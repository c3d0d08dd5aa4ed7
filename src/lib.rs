// astatus library - public API

// Re-export error types
pub mod error;
pub use error::{Result, StatusError};

// Module declarations
pub mod blocks;
pub mod core;
pub mod platform;

// Re-export commonly used types
pub use crate::core::{AlertChannel, LineRenderer, LoopControl, Options, OutputMode, RefreshLoop};

/// Initialize logging on stderr, `warn` unless `RUST_LOG` says otherwise
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
