//! Virtual time: a manual timer queue that also serves as the wall clock.

use matchboard_core::{ScheduleError, Scheduler, TimerHandle, TimerTask, WallClock};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
struct Pending {
    task: TimerTask,
    due: u64,
    period: Option<u64>,
}

#[derive(Debug)]
struct TimeState {
    epoch_millis: i64,
    elapsed: u64,
    next_handle: i32,
    timers: BTreeMap<TimerHandle, Pending>,
    refuse: bool,
}

/// Deterministic time for tests. Clones share one timeline.
#[derive(Debug, Clone)]
pub struct VirtualTime {
    state: Rc<RefCell<TimeState>>,
}

impl VirtualTime {
    /// Start the timeline at `epoch_millis` on the wall clock.
    #[must_use]
    pub fn starting_at(epoch_millis: i64) -> Self {
        Self {
            state: Rc::new(RefCell::new(TimeState {
                epoch_millis,
                elapsed: 0,
                next_handle: 1,
                timers: BTreeMap::new(),
                refuse: false,
            })),
        }
    }

    /// Time advanced since the start.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.state.borrow().elapsed)
    }

    /// Number of pending timers.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Whether `handle` is still pending.
    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.state.borrow().timers.contains_key(&handle)
    }

    /// Pending tasks, in handle order.
    #[must_use]
    pub fn pending_tasks(&self) -> Vec<TimerTask> {
        self.state.borrow().timers.values().map(|p| p.task).collect()
    }

    /// Make every following timer request fail.
    pub fn refuse_timers(&self, refuse: bool) {
        self.state.borrow_mut().refuse = refuse;
    }

    /// Pop the earliest timer due at or before `until` (measured from the
    /// start), moving the clock to its due time. Intervals are re-armed.
    pub fn next_due(&self, until: Duration) -> Option<TimerTask> {
        let until = until.as_millis() as u64;
        let mut state = self.state.borrow_mut();
        let (handle, pending) = state
            .timers
            .iter()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(handle, p)| (p.due, **handle))
            .map(|(handle, p)| (*handle, *p))?;

        state.elapsed = state.elapsed.max(pending.due);
        match pending.period {
            Some(period) => {
                if let Some(timer) = state.timers.get_mut(&handle) {
                    timer.due += period;
                }
            }
            None => {
                state.timers.remove(&handle);
            }
        }
        Some(pending.task)
    }

    /// Move the clock to `until` without firing anything.
    pub fn settle(&self, until: Duration) {
        let mut state = self.state.borrow_mut();
        state.elapsed = state.elapsed.max(until.as_millis() as u64);
    }

    fn schedule(
        &self,
        task: TimerTask,
        delay: Duration,
        period: Option<u64>,
    ) -> Result<TimerHandle, ScheduleError> {
        let mut state = self.state.borrow_mut();
        if state.refuse {
            return Err(ScheduleError("timers refused".to_string()));
        }
        let handle = TimerHandle(state.next_handle);
        state.next_handle += 1;
        let due = state.elapsed + delay.as_millis() as u64;
        state.timers.insert(handle, Pending { task, due, period });
        Ok(handle)
    }
}

impl Scheduler for VirtualTime {
    fn set_timeout(&self, task: TimerTask, delay: Duration) -> Result<TimerHandle, ScheduleError> {
        self.schedule(task, delay, None)
    }

    fn set_interval(
        &self,
        task: TimerTask,
        period: Duration,
    ) -> Result<TimerHandle, ScheduleError> {
        let period_ms = (period.as_millis() as u64).max(1);
        self.schedule(task, period, Some(period_ms))
    }

    fn clear(&self, handle: TimerHandle) {
        self.state.borrow_mut().timers.remove(&handle);
    }
}

impl WallClock for VirtualTime {
    fn now_millis(&self) -> i64 {
        let state = self.state.borrow();
        state.epoch_millis + state.elapsed as i64
    }
}
