//! Destinations for rendered lines.
//!
//! A sink accepts text through `write_str` and makes it visible on `commit`.
//! The stream variant writes to a terminal (or any `io::Write`); the title
//! variant fills a fixed-size buffer and hands it to a [`TitleSetter`].

use std::io::Write;

use super::alert::truncate_on_boundary;
use super::config::TITLE_CAPACITY;
use crate::error::{Result, StatusError};
use crate::platform::title::TitleSetter;

/// Appended to a title that did not fit in the buffer.
pub const TRUNCATION_MARKER: &str = ">";

/// Something a line can be rendered into
pub trait Sink {
    /// Append text to the line in progress. Returns the bytes accepted.
    fn write_str(&mut self, text: &str) -> Result<usize>;

    /// Make the line in progress visible and start a new one.
    fn commit(&mut self) -> Result<()>;

    /// Release the sink at shutdown.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Writes lines to a live output stream, one per commit
pub struct StreamSink<W: Write> {
    out: W,
}

impl<W: Write> StreamSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for StreamSink<W> {
    fn write_str(&mut self, text: &str) -> Result<usize> {
        self.out.write_all(text.as_bytes())?;
        Ok(text.len())
    }

    fn commit(&mut self) -> Result<()> {
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}

/// What a title sink does when a line outgrows its buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Keep what fits and end the title with [`TRUNCATION_MARKER`].
    #[default]
    Truncate,
    /// Report [`StatusError::Overflow`].
    Fail,
}

/// Buffers a line in fixed-capacity memory and pushes it to a window title
pub struct TitleSink<T: TitleSetter> {
    setter: T,
    buf: String,
    capacity: usize,
    policy: OverflowPolicy,
    truncated: bool,
}

impl<T: TitleSetter> TitleSink<T> {
    pub fn new(setter: T) -> Self {
        Self::with_capacity(setter, TITLE_CAPACITY)
    }

    /// `capacity` counts the terminator the window system expects, so one
    /// byte less is available for text.
    pub fn with_capacity(setter: T, capacity: usize) -> Self {
        Self {
            setter,
            buf: String::with_capacity(capacity),
            capacity,
            policy: OverflowPolicy::default(),
            truncated: false,
        }
    }

    pub fn overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn setter(&self) -> &T {
        &self.setter
    }

    fn limit(&self) -> usize {
        self.capacity.saturating_sub(1)
    }
}

impl<T: TitleSetter> Sink for TitleSink<T> {
    fn write_str(&mut self, text: &str) -> Result<usize> {
        if self.truncated {
            return Ok(0);
        }
        let limit = self.limit();
        if self.buf.len() + text.len() <= limit {
            self.buf.push_str(text);
            return Ok(text.len());
        }
        if self.policy == OverflowPolicy::Fail {
            return Err(StatusError::Overflow {
                capacity: self.capacity,
            });
        }

        let before = self.buf.len();
        self.buf.push_str(text);
        truncate_on_boundary(&mut self.buf, limit.saturating_sub(TRUNCATION_MARKER.len()));
        self.truncated = true;
        log::debug!("title truncated at {} bytes", self.buf.len());
        Ok(self.buf.len().saturating_sub(before))
    }

    fn commit(&mut self) -> Result<()> {
        if self.truncated {
            self.buf.push_str(TRUNCATION_MARKER);
        }
        let result = self.setter.set_title(&self.buf);
        self.buf.clear();
        self.truncated = false;
        result
    }

    fn close(&mut self) -> Result<()> {
        self.buf.clear();
        self.truncated = false;
        self.setter.set_title("")?;
        self.setter.close()
    }
}
