// Status engine: rendering, alerts, sinks and the refresh loop

pub mod alert;
pub mod config;
pub mod control;
pub mod refresh;
pub mod render;
pub mod sink;

// Re-export commonly used items
pub use alert::AlertChannel;
pub use config::{Options, OutputMode, Timing};
pub use control::{LoopControl, Sleeper, WakeReason};
pub use refresh::RefreshLoop;
pub use render::LineRenderer;
pub use sink::{OverflowPolicy, Sink, StreamSink, TitleSink};
