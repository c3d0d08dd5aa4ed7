use sysinfo::{MemoryRefreshKind, RefreshKind, System};

use super::Block;
use crate::core::alert::AlertChannel;

/// Memory in use as a share of total, counting reclaimable memory as free
pub struct Memory {
    alert_percent: u64,
}

impl Memory {
    pub fn with_alert_percent(alert_percent: u64) -> Self {
        Self { alert_percent }
    }

    /// Alert text when `pct` reaches the threshold
    pub fn alert_for(&self, pct: u64) -> Option<String> {
        (pct >= self.alert_percent).then(|| format!("memory at {}%", pct))
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::with_alert_percent(90)
    }
}

/// `100 * (total - available) / total`, or `None` when total is unknown
pub fn usage_percent(total: u64, available: u64) -> Option<u64> {
    if total == 0 {
        return None;
    }
    Some(100 * total.saturating_sub(available) / total)
}

impl Block for Memory {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn run(&self, out: &mut String, alerts: &mut AlertChannel) {
        let refresh = RefreshKind::nothing().with_memory(MemoryRefreshKind::nothing().with_ram());
        let sys = System::new_with_specifics(refresh);

        let Some(pct) = usage_percent(sys.total_memory(), sys.available_memory()) else {
            return;
        };
        out.push_str(&format!("mem {}%", pct));
        if let Some(message) = self.alert_for(pct) {
            alerts.set(message);
        }
    }
}
