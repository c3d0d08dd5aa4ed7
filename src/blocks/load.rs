use sysinfo::System;

use super::Block;
use crate::core::alert::AlertChannel;

/// One-minute load average
pub struct Load;

impl Block for Load {
    fn name(&self) -> &'static str {
        "load"
    }

    fn run(&self, out: &mut String, _alerts: &mut AlertChannel) {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return;
        }
        let load = System::load_average();
        out.push_str(&format!("load {:.2}", load.one));
    }
}
