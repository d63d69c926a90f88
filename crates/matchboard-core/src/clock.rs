//! Live clock: current time plus match and set elapsed time.
//!
//! The clock is either idle or running a single repeating timer. It stops
//! itself when its display fields disappear from the page, which is how it
//! goes quiet after a match finishes and the fields are no longer rendered.

use crate::config::ClockConfig;
use crate::error::{BoardError, ClockError};
use crate::page::{Page, Scheduler, TimerHandle, TimerTask};
use chrono::{DateTime, NaiveDateTime};
use tracing::{debug, warn};

/// Milliseconds in one day.
pub const DAY_MILLIS: i64 = 86_400_000;

/// Shown in an elapsed field whose start timestamp cannot be parsed.
pub const UNKNOWN_ELAPSED: &str = "--:--:--";

const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Format a duration as `HH:MM:SS`.
///
/// Milliseconds are truncated, hours are not wrapped, and negative
/// durations render as zero.
///
/// ```
/// use matchboard_core::format_duration;
///
/// assert_eq!(format_duration(3_661_000), "01:01:01");
/// assert_eq!(format_duration(90_000_000), "25:00:00");
/// ```
#[must_use]
pub fn format_duration(millis: i64) -> String {
    let total = millis.max(0) / 1000;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Parse a rendered start timestamp into epoch milliseconds.
///
/// Timestamps without an offset are read as UTC wall time.
#[must_use]
pub fn parse_timestamp(text: &str) -> Option<i64> {
    let text = text.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.timestamp_millis());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|naive| naive.and_utc().timestamp_millis())
}

/// Clock lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    /// No timer.
    Idle,
    /// Ticking on the given interval.
    Running(TimerHandle),
}

impl ClockState {
    /// Whether a timer is active.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self, Self::Running(_))
    }
}

/// Values written by one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockReading {
    /// Time of day, UTC.
    pub current: String,
    /// Time since the match started.
    pub match_elapsed: String,
    /// Time since the current set started.
    pub set_elapsed: String,
}

/// Live clock unit.
#[derive(Debug, Clone)]
pub struct LiveClock {
    config: ClockConfig,
    timer: Option<TimerHandle>,
}

impl LiveClock {
    /// Create an idle clock.
    #[must_use]
    pub const fn new(config: ClockConfig) -> Self {
        Self {
            config,
            timer: None,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> ClockState {
        match self.timer {
            Some(handle) => ClockState::Running(handle),
            None => ClockState::Idle,
        }
    }

    /// Start ticking unless already running, then update immediately.
    pub fn start<P, S>(
        &mut self,
        page: &P,
        scheduler: &S,
        now_millis: i64,
    ) -> Result<(), BoardError>
    where
        P: Page,
        S: Scheduler + ?Sized,
    {
        let scheduled = if self.timer.is_none() {
            scheduler
                .set_interval(TimerTask::ClockTick, self.config.period())
                .map(|handle| {
                    debug!(timer = handle.0, "clock started");
                    self.timer = Some(handle);
                })
        } else {
            Ok(())
        };
        // Missing targets are handled inside the tick by stopping the clock.
        let _ = self.tick(page, scheduler, now_millis);
        scheduled.map_err(Into::into)
    }

    /// Update all three displays. A missing target stops the clock.
    pub fn tick<P, S>(
        &mut self,
        page: &P,
        scheduler: &S,
        now_millis: i64,
    ) -> Result<ClockReading, ClockError>
    where
        P: Page,
        S: Scheduler + ?Sized,
    {
        let result = self.render(page, now_millis);
        if let Err(ClockError::MissingTarget(id)) = &result {
            if let Some(handle) = self.timer.take() {
                scheduler.clear(handle);
                debug!(missing = %id, timer = handle.0, "clock stopped");
            }
        }
        result
    }

    fn render<P: Page>(&self, page: &P, now_millis: i64) -> Result<ClockReading, ClockError> {
        let current_field = self.target(page, &self.config.current_time_id)?;
        let match_start = self.target(page, &self.config.match_start_id)?;
        let match_field = self.target(page, &self.config.match_time_id)?;
        let set_start = self.target(page, &self.config.set_start_id)?;
        let set_field = self.target(page, &self.config.set_time_id)?;

        let reading = ClockReading {
            current: format_duration(now_millis.rem_euclid(DAY_MILLIS)),
            match_elapsed: elapsed_since(&page.inner_html(&match_start), now_millis),
            set_elapsed: elapsed_since(&page.inner_html(&set_start), now_millis),
        };
        page.set_inner_html(&current_field, &reading.current);
        page.set_inner_html(&match_field, &reading.match_elapsed);
        page.set_inner_html(&set_field, &reading.set_elapsed);
        Ok(reading)
    }

    fn target<P: Page>(&self, page: &P, id: &str) -> Result<P::Element, ClockError> {
        page.element_by_id(id)
            .ok_or_else(|| ClockError::MissingTarget(id.to_string()))
    }
}

fn elapsed_since(start_text: &str, now_millis: i64) -> String {
    match parse_timestamp(start_text) {
        Some(start) => format_duration(now_millis - start),
        None => {
            warn!(text = %start_text.trim(), "unparseable start timestamp");
            UNKNOWN_ELAPSED.to_string()
        }
    }
}
