//! Live clock lifecycle.

use matchboard_core::{BoardConfig, ClockState, MatchStatus, TimerTask, UNKNOWN_ELAPSED};
use matchboard_test::{Harness, MemoryPage, PageFixture};
use std::time::Duration;
use tracing_test::traced_test;

fn live_match() -> PageFixture {
    PageFixture::new().clock("2024-05-01 11:00:00.0", "2024-05-01 12:10:00")
}

fn secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

#[test]
fn test_start_renders_immediately() {
    let mut harness = Harness::new(&live_match());
    harness.start_clock().unwrap();
    harness
        .assert_text("current_time", "12:30:00")
        .assert_text("match_time", "01:30:00")
        .assert_text("set_time", "00:20:00");
    assert!(harness.board().clock_state().is_running());
}

#[test]
fn test_ticks_every_second() {
    let mut harness = Harness::new(&live_match());
    harness.start_clock().unwrap();
    harness.advance(secs(1));
    harness.assert_text("current_time", "12:30:01");
    harness.advance(secs(61));
    harness
        .assert_text("current_time", "12:31:02")
        .assert_text("match_time", "01:31:02")
        .assert_text("set_time", "00:21:02");
}

#[test]
fn test_start_twice_keeps_one_timer() {
    let mut harness = Harness::new(&live_match());
    harness.start_clock().unwrap();
    let first = harness.board().clock_state();
    harness.advance(Duration::from_millis(400));
    harness.start_clock().unwrap();
    assert_eq!(harness.board().clock_state(), first);
    assert_eq!(harness.time().pending_tasks(), [TimerTask::ClockTick]);
}

#[test]
fn test_restart_updates_immediately() {
    let mut harness = Harness::new(&live_match());
    harness.start_clock().unwrap();
    harness.time().settle(Duration::from_millis(2500));
    harness.start_clock().unwrap();
    harness.assert_text("current_time", "12:30:02");
}

#[test]
fn test_time_of_day_wraps_at_midnight() {
    let fixture = PageFixture::new().clock("2024-05-01 23:00:00", "2024-05-01 23:59:00");
    // 2024-05-01T23:59:59Z
    let epoch = 1_714_607_999_000;
    let mut harness = Harness::with_config(&fixture, BoardConfig::default(), epoch);
    harness.start_clock().unwrap();
    harness.assert_text("current_time", "23:59:59");
    harness.advance(secs(2));
    harness
        .assert_text("current_time", "00:00:01")
        .assert_text("match_time", "01:00:01");
}

#[test]
fn test_match_longer_than_a_day() {
    let fixture = PageFixture::new().clock("2024-04-30 11:30:00", "2024-05-01 12:30:00");
    let mut harness = Harness::new(&fixture);
    harness.start_clock().unwrap();
    harness
        .assert_text("match_time", "25:00:00")
        .assert_text("set_time", "00:00:00");
}

#[test]
fn test_future_start_shows_zero() {
    let fixture = PageFixture::new().clock("2024-05-01 13:00:00", "2024-05-01 13:00:00");
    let mut harness = Harness::new(&fixture);
    harness.start_clock().unwrap();
    harness.assert_text("match_time", "00:00:00");
}

#[traced_test]
#[test]
fn test_unparseable_start_keeps_running() {
    let fixture = PageFixture::new().clock("not started", "2024-05-01 12:10:00");
    let mut harness = Harness::new(&fixture);
    harness.start_clock().unwrap();
    harness
        .assert_text("match_time", UNKNOWN_ELAPSED)
        .assert_text("set_time", "00:20:00");
    assert!(harness.board().clock_state().is_running());
    assert!(logs_contain("unparseable start timestamp"));
}

#[traced_test]
#[test]
fn test_removed_target_stops_clock() {
    let mut harness = Harness::new(&live_match());
    harness.start_clock().unwrap();
    harness.advance(secs(1));

    assert!(harness.page().remove_by_id("current_time"));
    let match_time = harness.text("match_time");
    harness.advance(secs(1));

    assert_eq!(harness.board().clock_state(), ClockState::Idle);
    assert_eq!(harness.time().pending(), 0);
    assert!(logs_contain("clock stopped"));

    // No update happened on the aborted tick or after it.
    harness.advance(secs(5));
    harness.assert_text("match_time", &match_time);
}

#[test]
fn test_missing_target_aborts_whole_tick() {
    let mut harness = Harness::new(&live_match());
    harness.start_clock().unwrap();
    harness.page().remove_by_id("set_time");
    harness.advance(secs(1));
    // current_time precedes set_time but must not have been written.
    harness.assert_text("current_time", "12:30:00");
    assert!(!harness.board().clock_state().is_running());
}

#[test]
fn test_start_without_fields_goes_idle() {
    let mut harness = Harness::new(&PageFixture::new());
    harness.start_clock().unwrap();
    assert_eq!(harness.board().clock_state(), ClockState::Idle);
    assert_eq!(harness.time().pending(), 0);
}

#[test]
fn test_start_again_after_stop() {
    let mut harness = Harness::new(&live_match());
    harness.start_clock().unwrap();
    harness.page().remove_by_id("match_start");
    harness.advance(secs(1));
    assert!(!harness.board().clock_state().is_running());

    // Fields come back when the next set starts.
    harness.page().add(
        MemoryPage::ROOT,
        Some("match_start"),
        &[],
        "2024-05-01 12:00:00",
    );
    harness.start_clock().unwrap();
    assert!(harness.board().clock_state().is_running());
    harness.assert_text("match_time", "00:30:01");
}

#[test]
fn test_clock_and_clipboard_timers_coexist() {
    let fixture = live_match().entry("f", "2024-05-01", MatchStatus::Finished);
    let mut harness = Harness::new(&fixture);
    harness.start_clock().unwrap();
    harness.copy("f", "2:0").unwrap();
    assert_eq!(harness.time().pending(), 2);
    harness.advance(secs(1));
    assert!(!harness.is_confirmed("f"));
    assert!(harness.board().clock_state().is_running());
    harness.assert_text("current_time", "12:30:01");
}
