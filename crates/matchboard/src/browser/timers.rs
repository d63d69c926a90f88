//! `setTimeout`/`setInterval` scheduling and the `Date.now()` wall clock.

use matchboard_core::{ScheduleError, Scheduler, TimerHandle, TimerTask, WallClock};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

type Dispatch = Rc<dyn Fn(TimerTask)>;

/// Window timers delivering [`TimerTask`]s to a dispatch callback.
///
/// Timeout callbacks are one-shot and free themselves when they run.
/// Interval callbacks stay owned here until the interval is cleared.
pub struct BrowserScheduler {
    window: Window,
    dispatch: Dispatch,
    intervals: RefCell<HashMap<i32, Closure<dyn FnMut()>>>,
}

impl BrowserScheduler {
    /// Schedule on `window`, handing elapsed tasks to `dispatch`.
    pub fn new(window: Window, dispatch: impl Fn(TimerTask) + 'static) -> Self {
        Self {
            window,
            dispatch: Rc::new(dispatch),
            intervals: RefCell::new(HashMap::new()),
        }
    }

    /// Number of live intervals.
    pub fn active_intervals(&self) -> usize {
        self.intervals.borrow().len()
    }
}

fn millis(duration: Duration) -> i32 {
    i32::try_from(duration.as_millis()).unwrap_or(i32::MAX)
}

fn schedule_error(err: &JsValue) -> ScheduleError {
    ScheduleError(format!("{err:?}"))
}

impl Scheduler for BrowserScheduler {
    fn set_timeout(&self, task: TimerTask, delay: Duration) -> Result<TimerHandle, ScheduleError> {
        let dispatch = Rc::clone(&self.dispatch);
        let callback = Closure::once_into_js(move || dispatch(task));
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                millis(delay),
            )
            .map(TimerHandle)
            .map_err(|err| schedule_error(&err))
    }

    fn set_interval(
        &self,
        task: TimerTask,
        period: Duration,
    ) -> Result<TimerHandle, ScheduleError> {
        let dispatch = Rc::clone(&self.dispatch);
        let callback = Closure::<dyn FnMut()>::new(move || dispatch(task));
        let id = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis(period),
            )
            .map_err(|err| schedule_error(&err))?;
        self.intervals.borrow_mut().insert(id, callback);
        Ok(TimerHandle(id))
    }

    fn clear(&self, handle: TimerHandle) {
        let interval = self.intervals.borrow_mut().remove(&handle.0);
        match interval {
            Some(callback) => {
                self.window.clear_interval_with_handle(handle.0);
                // The clear may come from inside this very callback.
                wasm_bindgen_futures::spawn_local(async move { drop(callback) });
                debug!(timer = handle.0, "interval released");
            }
            None => self.window.clear_timeout_with_handle(handle.0),
        }
    }
}

impl Drop for BrowserScheduler {
    fn drop(&mut self) {
        for (id, callback) in self.intervals.get_mut().drain() {
            self.window.clear_interval_with_handle(id);
            wasm_bindgen_futures::spawn_local(async move { drop(callback) });
        }
    }
}

/// Wall clock backed by `Date.now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateClock;

impl WallClock for DateClock {
    fn now_millis(&self) -> i64 {
        js_sys::Date::now() as i64
    }
}
