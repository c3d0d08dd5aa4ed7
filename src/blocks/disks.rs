//! NVMe disk usage, summed over each disk's partitions.

use std::collections::{BTreeMap, HashSet};

use humansize::{format_size, FormatSizeOptions, BINARY};
use once_cell::sync::Lazy;
use regex::Regex;

use super::Block;
use crate::core::alert::AlertChannel;

static NVME_PARTITION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/dev/(nvme\d+)n\d+p\d+$").expect("valid nvme regex"));

/// Usage percentage at which a disk raises an alert.
const ALERT_PERCENT: u64 = 95;

pub struct Disks;

/// Space used on one physical disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskUsage {
    pub disk: String,
    pub total_bytes: u64,
    pub used_bytes: u64,
}

impl DiskUsage {
    pub fn percent(&self) -> u64 {
        if self.total_bytes == 0 {
            return 0;
        }
        100 * self.used_bytes / self.total_bytes
    }

    pub fn free_bytes(&self) -> u64 {
        self.total_bytes.saturating_sub(self.used_bytes)
    }
}

/// Group `(device, total, used)` rows by NVMe disk.
///
/// Non-NVMe devices are ignored and a device mounted several times is only
/// counted once.
pub fn summarize<I>(rows: I) -> Vec<DiskUsage>
where
    I: IntoIterator<Item = (String, u64, u64)>,
{
    let mut seen = HashSet::new();
    let mut by_disk: BTreeMap<String, (u64, u64)> = BTreeMap::new();

    for (device, total, used) in rows {
        let Some(caps) = NVME_PARTITION.captures(&device) else {
            continue;
        };
        if !seen.insert(device.clone()) {
            continue;
        }
        let entry = by_disk.entry(caps[1].to_string()).or_default();
        entry.0 += total;
        entry.1 += used;
    }

    by_disk
        .into_iter()
        .map(|(disk, (total_bytes, used_bytes))| DiskUsage {
            disk,
            total_bytes,
            used_bytes,
        })
        .collect()
}

/// Alert text for the first disk at or above the alert threshold
pub fn full_disk_alert(usage: &[DiskUsage]) -> Option<String> {
    usage
        .iter()
        .find(|u| u.percent() >= ALERT_PERCENT)
        .map(|full| format!("disk {} at {}%", full.disk, full.percent()))
}

fn format_free(bytes: u64) -> String {
    let options = FormatSizeOptions::from(BINARY)
        .space_after_value(false)
        .decimal_places(1);
    format_size(bytes, options)
}

impl Block for Disks {
    fn name(&self) -> &'static str {
        "disks"
    }

    fn run(&self, out: &mut String, alerts: &mut AlertChannel) {
        let disks = sysinfo::Disks::new_with_refreshed_list();
        let rows = disks.list().iter().map(|disk| {
            let total = disk.total_space();
            (
                disk.name().to_string_lossy().into_owned(),
                total,
                total.saturating_sub(disk.available_space()),
            )
        });

        let usage = summarize(rows);
        let entries: Vec<String> = usage
            .iter()
            .map(|u| format!("{} {}% {}", u.disk, u.percent(), format_free(u.free_bytes())))
            .collect();
        out.push_str(&entries.join(" "));

        if let Some(message) = full_disk_alert(&usage) {
            alerts.set(message);
        }
    }
}
