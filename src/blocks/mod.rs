//! Status blocks.
//!
//! A block inspects one aspect of the host and appends a short fragment to
//! the line. A block that cannot read its data source appends nothing; it
//! never reports an error and never logs. The next cycle tries again.

mod battery;
mod datetime;
mod disks;
mod load;
mod memory;
mod volume;
mod wifi;

pub use battery::Batteries;
pub use datetime::DateTime;
pub use disks::Disks;
pub use load::Load;
pub use memory::Memory;
pub use volume::Volume;
pub use wifi::Wifi;

use std::fs;
use std::path::Path;

use crate::core::alert::AlertChannel;

/// One producer of line fragments
pub trait Block {
    fn name(&self) -> &'static str;

    /// Append this cycle's fragment to `out`, or leave it untouched.
    /// May post an urgent message to `alerts`.
    fn run(&self, out: &mut String, alerts: &mut AlertChannel);
}

/// The blocks shown by default, in display order
pub fn default_blocks() -> Vec<Box<dyn Block>> {
    vec![
        Box::new(Wifi::default()),
        Box::new(Disks),
        Box::new(Memory::default()),
        Box::new(Load),
        Box::new(Volume),
        Box::new(Batteries::default()),
        Box::new(DateTime),
    ]
}

/// First whitespace-separated word of a small pseudo-file
fn read_word(path: &Path) -> Option<String> {
    let text = fs::read_to_string(path).ok()?;
    text.split_whitespace().next().map(str::to_string)
}

/// Entry names of a directory, sorted
fn sorted_entries(dir: &Path) -> Option<Vec<String>> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .ok()?
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    Some(names)
}
