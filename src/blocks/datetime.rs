use chrono::{Local, NaiveDateTime};

use super::Block;
use crate::core::alert::AlertChannel;

/// Local date and time, e.g. `Sun Oct 18 14:03`
pub struct DateTime;

/// ctime(3) layout without seconds and year
pub fn format_clock(now: &NaiveDateTime) -> String {
    now.format("%a %b %e %H:%M").to_string()
}

impl Block for DateTime {
    fn name(&self) -> &'static str {
        "datetime"
    }

    fn run(&self, out: &mut String, _alerts: &mut AlertChannel) {
        out.push_str(&format_clock(&Local::now().naive_local()));
    }
}
