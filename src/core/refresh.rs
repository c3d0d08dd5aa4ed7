//! The refresh loop.
//!
//! Each cycle renders a line and commits it, then either sleeps for the normal
//! interval or, when a block raised an alert, holds the line briefly and
//! flashes the alert before clearing it:
//!
//! ```text
//! RENDER -> DECIDE -> SLEEP_NORMAL -> RENDER
//! RENDER -> DECIDE -> HOLD -> FLASH -> CLEAR_ALERT -> RENDER
//! ```
//!
//! The termination flag is checked once per cycle, after its work is done. A
//! stop request skips the normal sleep but never an alert raised by the last
//! RENDER: that alert is still held, flashed and cleared before the sink is
//! closed, which blanks a window title.

use super::alert::AlertChannel;
use super::config::{Timing, URGENT_PREFIX, URGENT_SUFFIX};
use super::control::{LoopControl, Sleeper};
use super::render::LineRenderer;
use super::sink::Sink;
use crate::error::Result;

pub struct RefreshLoop<S: Sink, P: Sleeper> {
    renderer: LineRenderer,
    sink: S,
    sleeper: P,
    control: LoopControl,
    alerts: AlertChannel,
    timing: Timing,
    cycles: usize,
}

impl<S: Sink, P: Sleeper> RefreshLoop<S, P> {
    pub fn new(renderer: LineRenderer, sink: S, sleeper: P, control: LoopControl) -> Self {
        Self {
            renderer,
            sink,
            sleeper,
            control,
            alerts: AlertChannel::new(),
            timing: Timing::default(),
            cycles: 0,
        }
    }

    pub fn timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn alerts(&self) -> &AlertChannel {
        &self.alerts
    }

    /// Number of RENDER phases executed so far
    pub fn cycles(&self) -> usize {
        self.cycles
    }

    /// Run until the termination flag is observed, then release the sink.
    pub fn run(&mut self) -> Result<()> {
        log::debug!("refresh loop started with blocks {:?}", self.renderer.block_names());
        loop {
            self.render()?;
            match self.alerts.peek().map(str::to_string) {
                Some(message) => self.present_alert(&message)?,
                None if !self.control.should_stop() => {
                    let reason = self.sleeper.sleep(self.timing.interval);
                    log::trace!("sleep ended: {:?}", reason);
                }
                None => {}
            }
            if self.control.should_stop() {
                break;
            }
        }
        log::debug!("refresh loop stopped after {} cycles", self.cycles);
        self.sink.close()
    }

    fn render(&mut self) -> Result<()> {
        let written = self.renderer.render(&mut self.sink, &mut self.alerts)?;
        self.sink.commit()?;
        self.cycles += 1;
        log::trace!("cycle {}: {} bytes", self.cycles, written);
        Ok(())
    }

    fn present_alert(&mut self, message: &str) -> Result<()> {
        self.sleeper.hold(self.timing.hold);
        self.flash(message)?;
        // Anything posted during the flash is dropped along with the flashed message.
        self.alerts.take_and_clear();
        Ok(())
    }

    fn flash(&mut self, message: &str) -> Result<()> {
        let visible = alert_frame(message);
        let hidden = blank_frame(message);
        for _ in 0..self.timing.flashes {
            self.show(&visible)?;
            self.sleeper.hold(self.timing.flash_on);
            self.show(&hidden)?;
            self.sleeper.hold(self.timing.flash_off);
        }
        Ok(())
    }

    fn show(&mut self, frame: &str) -> Result<()> {
        self.sink.write_str(frame)?;
        self.sink.commit()
    }
}

/// `<prefix> <message> <suffix>`
pub fn alert_frame(message: &str) -> String {
    format!("{} {} {}", URGENT_PREFIX, message, URGENT_SUFFIX)
}

/// The alert frame with the message blanked out, same width
pub fn blank_frame(message: &str) -> String {
    let blanks = " ".repeat(message.chars().count());
    format!("{} {} {}", URGENT_PREFIX, blanks, URGENT_SUFFIX)
}
