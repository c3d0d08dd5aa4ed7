//! Battery charge from `/sys/class/power_supply`.

use std::fs;
use std::path::PathBuf;

use super::{read_word, sorted_entries, Block};
use crate::core::alert::AlertChannel;
use crate::core::config::SEPARATOR;

pub struct Batteries {
    root: PathBuf,
    alert_percent: u32,
}

impl Batteries {
    /// Read power supplies from `root` instead of `/sys/class/power_supply`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            alert_percent: 10,
        }
    }

    fn collect(&self, alerts: &mut AlertChannel) -> Option<String> {
        let supplies = sorted_entries(&self.root)?;
        let mut entries = Vec::new();

        for supply in supplies {
            let Some(battery) = self.read_battery(&supply) else {
                continue;
            };
            if battery.status == 'D' && battery.capacity <= self.alert_percent {
                alerts.set(format!("battery {} at {}%", battery.label, battery.capacity));
            }
            entries.push(format!(
                "{} {}{}%",
                battery.label,
                state_char(battery.status),
                battery.capacity
            ));
        }
        Some(entries.join(SEPARATOR))
    }

    fn read_battery(&self, supply: &str) -> Option<Reading> {
        let dir = self.root.join(supply);
        if !read_word(&dir.join("type"))?.starts_with('B') {
            return None;
        }
        let capacity = read_word(&dir.join("capacity"))?.parse().ok()?;
        let status = fs::read_to_string(dir.join("status")).ok()?.chars().next()?;
        Some(Reading {
            label: label(supply).to_string(),
            capacity,
            status,
        })
    }
}

impl Default for Batteries {
    fn default() -> Self {
        Self::with_root("/sys/class/power_supply")
    }
}

struct Reading {
    label: String,
    capacity: u32,
    status: char,
}

/// Supply name up to its last dash
fn label(supply: &str) -> &str {
    supply.rsplit_once('-').map_or(supply, |(head, _)| head)
}

/// Compact marker for the first letter of the kernel's status string
fn state_char(status: char) -> char {
    match status {
        'C' => '+', // Charging
        'D' => '-', // Discharging
        'N' => 'o', // Not charging
        'F' => '=', // Full
        _ => '?',
    }
}

impl Block for Batteries {
    fn name(&self) -> &'static str {
        "batteries"
    }

    fn run(&self, out: &mut String, alerts: &mut AlertChannel) {
        if let Some(text) = self.collect(alerts) {
            out.push_str(&text);
        }
    }
}
