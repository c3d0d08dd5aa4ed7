// Refresh loop state machine: sleeping, flashing, one-shot and shutdown

use astatus::blocks::Block;
use astatus::core::config::{Timing, URGENT_FLASHES};
use astatus::core::refresh::{alert_frame, blank_frame};
use astatus::core::{LineRenderer, LoopControl, RefreshLoop, StreamSink, TitleSink};
use astatus::StatusError;

use super::support::{Alerting, Fixed, RecordingTitle, ScriptedSleeper, Wait};

fn title_loop(
    blocks: Vec<Box<dyn Block>>,
    stop_after: usize,
) -> (
    RefreshLoop<TitleSink<RecordingTitle>, ScriptedSleeper>,
    ScriptedSleeper,
) {
    let control = LoopControl::new();
    let sleeper = ScriptedSleeper::new(&control, stop_after);
    let refresh = RefreshLoop::new(
        LineRenderer::new(blocks).separator(" | "),
        TitleSink::new(RecordingTitle::default()),
        sleeper.clone(),
        control,
    );
    (refresh, sleeper)
}

#[test]
fn test_normal_cycles_sleep_for_interval() {
    let blocks: Vec<Box<dyn Block>> = vec![Box::new(Fixed("mem 40%")), Box::new(Fixed("load 0.20"))];
    let (mut refresh, sleeper) = title_loop(blocks, 3);
    refresh.run().unwrap();

    let timing = Timing::default();
    assert_eq!(refresh.cycles(), 3);
    assert_eq!(sleeper.recorded(), vec![Wait::Sleep(timing.interval); 3]);

    let title = refresh.sink().setter();
    assert_eq!(
        title.titles,
        vec!["mem 40% | load 0.20", "mem 40% | load 0.20", "mem 40% | load 0.20", ""]
    );
    assert!(title.closed);
}

#[test]
fn test_alert_holds_then_flashes_then_clears() {
    let blocks: Vec<Box<dyn Block>> = vec![
        Box::new(Fixed("x 1")),
        Box::new(Fixed("")),
        Box::new(Alerting::new("y 2", "battery 9", 1)),
    ];
    let (mut refresh, sleeper) = title_loop(blocks, 1);
    refresh.run().unwrap();

    let timing = Timing::default();
    let mut expected_waits = vec![Wait::Hold(timing.hold)];
    for _ in 0..URGENT_FLASHES {
        expected_waits.push(Wait::Hold(timing.flash_on));
        expected_waits.push(Wait::Hold(timing.flash_off));
    }
    expected_waits.push(Wait::Sleep(timing.interval));
    assert_eq!(sleeper.recorded(), expected_waits);

    let mut expected_titles = vec!["x 1 | y 2".to_string()];
    for _ in 0..URGENT_FLASHES {
        expected_titles.push(alert_frame("battery 9"));
        expected_titles.push(blank_frame("battery 9"));
    }
    expected_titles.push("x 1 | y 2".to_string());
    expected_titles.push(String::new());
    assert_eq!(refresh.sink().setter().titles, expected_titles);

    assert_eq!(refresh.cycles(), 2);
    assert!(!refresh.alerts().is_pending());
}

#[test]
fn test_flash_frames_keep_message_width() {
    let blocks: Vec<Box<dyn Block>> = vec![Box::new(Alerting::new("mem 97%", "memory at 97%", 1))];
    let (mut refresh, _sleeper) = title_loop(blocks, 1);
    refresh.run().unwrap();

    let titles = &refresh.sink().setter().titles;
    let on = &titles[1];
    let off = &titles[2];
    assert!(on.contains("memory at 97%"));
    assert_eq!(on.len(), off.len());
    assert!(!off.contains("memory"));
}

#[test]
fn test_persistent_alert_flashes_every_cycle() {
    let blocks: Vec<Box<dyn Block>> = vec![Box::new(Alerting::new("mem 99%", "memory at 99%", 2))];
    let (mut refresh, sleeper) = title_loop(blocks, 1);
    refresh.run().unwrap();

    let holds = sleeper
        .recorded()
        .iter()
        .filter(|w| **w == Wait::Hold(Timing::default().hold))
        .count();
    assert_eq!(holds, 2);
    assert_eq!(refresh.cycles(), 3);
}

#[test]
fn test_once_renders_exactly_one_line() {
    let control = LoopControl::new();
    control.request_stop();
    let sleeper = ScriptedSleeper::new(&control, usize::MAX);
    let blocks: Vec<Box<dyn Block>> = vec![Box::new(Fixed("a")), Box::new(Fixed("b"))];
    let mut refresh = RefreshLoop::new(
        LineRenderer::new(blocks),
        StreamSink::new(Vec::new()),
        sleeper.clone(),
        control,
    );
    refresh.run().unwrap();

    assert_eq!(refresh.cycles(), 1);
    assert!(sleeper.recorded().is_empty());
    assert_eq!(refresh.sink().get_ref().as_slice(), b"a   b\n");
}

fn expected_alert_waits() -> Vec<Wait> {
    let timing = Timing::default();
    let mut waits = vec![Wait::Hold(timing.hold)];
    for _ in 0..URGENT_FLASHES {
        waits.push(Wait::Hold(timing.flash_on));
        waits.push(Wait::Hold(timing.flash_off));
    }
    waits
}

fn expected_alert_output(line: &str, message: &str) -> String {
    let mut output = format!("{}\n", line);
    for _ in 0..URGENT_FLASHES {
        output.push_str(&format!("{}\n{}\n", alert_frame(message), blank_frame(message)));
    }
    output
}

#[test]
fn test_once_still_flashes_pending_alert() {
    let control = LoopControl::new();
    control.request_stop();
    let sleeper = ScriptedSleeper::new(&control, usize::MAX);
    let blocks: Vec<Box<dyn Block>> = vec![Box::new(Alerting::new("BAT0 -3%", "battery BAT0 at 3%", 1))];
    let mut refresh = RefreshLoop::new(
        LineRenderer::new(blocks),
        StreamSink::new(Vec::new()),
        sleeper.clone(),
        control,
    );
    refresh.run().unwrap();

    assert_eq!(refresh.cycles(), 1);
    assert_eq!(sleeper.recorded(), expected_alert_waits());
    let output = String::from_utf8(refresh.sink().get_ref().clone()).unwrap();
    assert_eq!(output, expected_alert_output("BAT0 -3%", "battery BAT0 at 3%"));
    assert!(!refresh.alerts().is_pending());
}

#[test]
fn test_stop_during_render_finishes_alert_first() {
    let control = LoopControl::new();
    let sleeper = ScriptedSleeper::new(&control, usize::MAX);
    let blocks: Vec<Box<dyn Block>> = vec![Box::new(
        Alerting::new("BAT0 -3%", "battery BAT0 at 3%", 1).stopping(&control),
    )];
    let mut refresh = RefreshLoop::new(
        LineRenderer::new(blocks),
        StreamSink::new(Vec::new()),
        sleeper.clone(),
        control,
    );
    refresh.run().unwrap();

    assert_eq!(refresh.cycles(), 1);
    assert_eq!(sleeper.recorded(), expected_alert_waits());
    let output = String::from_utf8(refresh.sink().get_ref().clone()).unwrap();
    assert_eq!(output, expected_alert_output("BAT0 -3%", "battery BAT0 at 3%"));
    assert!(!refresh.alerts().is_pending());
}

#[test]
fn test_wake_triggers_immediate_render() {
    let control = LoopControl::new();
    let sleeper = ScriptedSleeper::new(&control, 3).woken_early();
    let blocks: Vec<Box<dyn Block>> = vec![Box::new(Fixed("t"))];
    let mut refresh = RefreshLoop::new(
        LineRenderer::new(blocks),
        StreamSink::new(Vec::new()),
        sleeper,
        control,
    );
    refresh.run().unwrap();

    assert_eq!(refresh.cycles(), 3);
    assert_eq!(refresh.sink().get_ref().as_slice(), b"t\nt\nt\n");
}

#[test]
fn test_all_empty_blocks_commit_empty_lines() {
    let control = LoopControl::new();
    control.request_stop();
    let blocks: Vec<Box<dyn Block>> = vec![Box::new(Fixed("")), Box::new(Fixed(""))];
    let mut refresh = RefreshLoop::new(
        LineRenderer::new(blocks).padding(' '),
        StreamSink::new(Vec::new()),
        ScriptedSleeper::new(&control, usize::MAX),
        control,
    );
    refresh.run().unwrap();
    assert_eq!(refresh.sink().get_ref().as_slice(), b"\n");
}

#[test]
fn test_title_failure_is_fatal() {
    let control = LoopControl::new();
    let title = RecordingTitle {
        fail_on: Some(1),
        ..Default::default()
    };
    let blocks: Vec<Box<dyn Block>> = vec![Box::new(Fixed("x"))];
    let mut refresh = RefreshLoop::new(
        LineRenderer::new(blocks),
        TitleSink::new(title),
        ScriptedSleeper::new(&control, usize::MAX),
        control,
    );

    let err = refresh.run().unwrap_err();
    assert!(matches!(err, StatusError::Title { op: "XStoreName", .. }));
    assert_eq!(refresh.cycles(), 1);
}
