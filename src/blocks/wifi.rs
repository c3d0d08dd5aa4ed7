//! Wireless link quality.
//!
//! Wireless interfaces are listed under `/sys/class/ieee80211/*/device/net/`.
//! Connected ones show up in `/proc/net/wireless` with a link quality out of
//! 70; the rest are reported with their operstate from `/sys/class/net`.

use std::fs;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{read_word, sorted_entries, Block};
use crate::core::alert::AlertChannel;
use crate::core::config::SEPARATOR;

static WIRELESS_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([^:\s]+):\s+[0-9a-fA-F]+\s+(-?\d+)\.?").expect("valid wireless regex")
});

/// Highest link quality value the kernel reports.
const MAX_LINK_QUALITY: i64 = 70;

pub struct Wifi {
    sys: PathBuf,
    proc: PathBuf,
}

impl Wifi {
    /// Read from alternative sysfs and procfs mount points
    pub fn with_roots(sys: impl Into<PathBuf>, proc: impl Into<PathBuf>) -> Self {
        Self {
            sys: sys.into(),
            proc: proc.into(),
        }
    }

    fn wireless_interfaces(&self) -> Option<Vec<String>> {
        let phys = sorted_entries(&self.sys.join("class/ieee80211"))?;
        let mut names = Vec::new();
        for phy in phys {
            let net = self.sys.join("class/ieee80211").join(phy).join("device/net");
            if let Some(ifaces) = sorted_entries(&net) {
                names.extend(ifaces);
            }
        }
        Some(names)
    }

    fn collect(&self) -> Option<String> {
        let mut remaining = self.wireless_interfaces()?;
        if remaining.is_empty() {
            return None;
        }
        let table = fs::read_to_string(self.proc.join("net/wireless")).ok()?;

        let mut entries = Vec::new();
        for (name, quality) in parse_wireless(&table) {
            remaining.retain(|n| n != &name);
            entries.push(format!("{} {}", name, quality_percent(quality)));
        }
        for name in remaining {
            let operstate = self.sys.join("class/net").join(&name).join("operstate");
            if let Some(state) = read_word(&operstate) {
                entries.push(format!("{} {}", name, state));
            }
        }
        Some(entries.join(SEPARATOR))
    }
}

impl Default for Wifi {
    fn default() -> Self {
        Self::with_roots("/sys", "/proc")
    }
}

impl Block for Wifi {
    fn name(&self) -> &'static str {
        "wifi"
    }

    fn run(&self, out: &mut String, _alerts: &mut AlertChannel) {
        if let Some(text) = self.collect() {
            out.push_str(&text);
        }
    }
}

fn quality_percent(quality: i64) -> i64 {
    quality.saturating_mul(100) / MAX_LINK_QUALITY
}

/// Interface names and link qualities from `/proc/net/wireless`
fn parse_wireless(table: &str) -> Vec<(String, i64)> {
    table
        .lines()
        .skip(2)
        .filter_map(|line| {
            let caps = WIRELESS_LINE.captures(line)?;
            let quality = caps[2].parse().ok()?;
            Some((caps[1].to_string(), quality))
        })
        .collect()
}
