// Platform-specific code module

pub mod signals;
pub mod title;

// Re-exports for cleaner imports
pub use signals::{install as install_signal_handlers, SignalEffect};
pub use title::TitleSetter;
