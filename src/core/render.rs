//! Line renderer: runs every block in order and joins their fragments.

use super::alert::AlertChannel;
use super::config::SEPARATOR;
use super::sink::Sink;
use crate::blocks::Block;
use crate::error::Result;

/// Ordered, immutable list of blocks plus the layout used to join them
pub struct LineRenderer {
    blocks: Vec<Box<dyn Block>>,
    separator: String,
    padding: Option<String>,
}

impl LineRenderer {
    pub fn new(blocks: Vec<Box<dyn Block>>) -> Self {
        Self {
            blocks,
            separator: SEPARATOR.to_string(),
            padding: None,
        }
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Frame non-empty lines with `pad` on both ends.
    pub fn padding(mut self, pad: char) -> Self {
        self.padding = Some(pad.to_string());
        self
    }

    pub fn block_names(&self) -> Vec<&'static str> {
        self.blocks.iter().map(|b| b.name()).collect()
    }

    /// Render one line into `sink` without committing it.
    ///
    /// Blocks that write nothing are skipped, so separators only ever sit
    /// between two fragments. Returns the number of bytes written, framing
    /// and separators included.
    pub fn render(&self, sink: &mut dyn Sink, alerts: &mut AlertChannel) -> Result<usize> {
        let mut total = 0;
        let mut emitted = false;
        let mut fragment = String::new();
        let pad = self.padding.as_deref();

        for block in &self.blocks {
            fragment.clear();
            block.run(&mut fragment, alerts);
            if fragment.is_empty() {
                continue;
            }

            if emitted {
                total += sink.write_str(&self.separator)?;
            } else if let Some(pad) = pad {
                total += sink.write_str(pad)?;
            }
            total += sink.write_str(&fragment)?;
            emitted = true;
        }

        if emitted {
            if let Some(pad) = pad {
                total += sink.write_str(pad)?;
            }
        }
        Ok(total)
    }
}
