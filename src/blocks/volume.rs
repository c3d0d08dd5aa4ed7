//! ALSA master volume, scraped from `amixer sget Master`.

use std::process::{Command, Stdio};

use once_cell::sync::Lazy;
use regex::Regex;

use super::Block;
use crate::core::alert::AlertChannel;

static PERCENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(\d+)%\]").expect("valid percent regex"));
static SWITCH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(on|off)\]").expect("valid switch regex"));

pub struct Volume;

/// Volume state of the master channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Percent(u32),
    Muted,
}

/// Read the level from `amixer` output, using the front-left (or mono) channel
pub fn parse_amixer(output: &str) -> Option<Level> {
    output
        .lines()
        .map(str::trim_start)
        .filter(|l| l.starts_with("Front Left:") || l.starts_with("Mono:"))
        .find_map(parse_channel)
}

fn parse_channel(line: &str) -> Option<Level> {
    let percent = PERCENT.captures(line)?[1].parse().ok()?;
    match &SWITCH.captures(line)?[1] {
        "on" => Some(Level::Percent(percent)),
        _ => Some(Level::Muted),
    }
}

impl Block for Volume {
    fn name(&self) -> &'static str {
        "volume"
    }

    fn run(&self, out: &mut String, _alerts: &mut AlertChannel) {
        let Ok(output) = Command::new("amixer")
            .args(["sget", "Master"])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
        else {
            return;
        };
        if !output.status.success() {
            return;
        }
        match parse_amixer(&String::from_utf8_lossy(&output.stdout)) {
            Some(Level::Percent(pct)) => out.push_str(&format!("vol {}%", pct)),
            Some(Level::Muted) => out.push_str("vol muted"),
            None => {}
        }
    }
}
