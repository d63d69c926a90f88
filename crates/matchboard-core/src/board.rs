//! The board: filter, display, clipboard feedback and clock behind the
//! page lifecycle hooks.

use crate::clipboard::ClipboardFeedback;
use crate::clock::{ClockState, LiveClock};
use crate::config::BoardConfig;
use crate::display::DisplayCoordinator;
use crate::error::BoardError;
use crate::filter::{FilterController, FilterState};
use crate::page::{ClipboardWriter, Interaction, Page, Scheduler, TimerTask, WallClock};
use tracing::debug;

/// Controller for one match-listing page.
///
/// Generic over the platform: `P` is the page, `S` the timer host, `C` the
/// clipboard and `W` the wall clock.
pub struct MatchBoard<P: Page, S, C, W> {
    config: BoardConfig,
    page: P,
    scheduler: S,
    clipboard: C,
    wall_clock: W,
    filter: FilterController<P::Element>,
    display: DisplayCoordinator,
    feedback: ClipboardFeedback<P::Element>,
    clock: LiveClock,
}

impl<P, S, C, W> MatchBoard<P, S, C, W>
where
    P: Page,
    S: Scheduler,
    C: ClipboardWriter,
    W: WallClock,
{
    /// Create a board. Nothing touches the page until a hook runs.
    pub fn new(config: BoardConfig, page: P, scheduler: S, clipboard: C, wall_clock: W) -> Self {
        Self {
            filter: FilterController::new(&config),
            display: DisplayCoordinator::new(&config),
            feedback: ClipboardFeedback::new(config.clipboard.clone()),
            clock: LiveClock::new(config.clock.clone()),
            config,
            page,
            scheduler,
            clipboard,
            wall_clock,
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// The page the board drives.
    #[must_use]
    pub const fn page(&self) -> &P {
        &self.page
    }

    /// Current filter state.
    #[must_use]
    pub const fn filter_state(&self) -> FilterState {
        self.filter.state()
    }

    /// Current clock state.
    #[must_use]
    pub const fn clock_state(&self) -> ClockState {
        self.clock.state()
    }

    /// Whether a clipboard confirmation is showing.
    #[must_use]
    pub const fn has_active_feedback(&self) -> bool {
        self.feedback.session().is_some()
    }

    /// Page load hook: style and wire the filter buttons, then check for an
    /// empty list.
    pub fn matches_load(&mut self) -> Result<usize, BoardError> {
        self.filter.initialize(&self.page)?;
        self.display.check_empty(&self.page)
    }

    /// List update hook: resort and re-filter after the list changed.
    pub fn matches_update(&mut self) -> Result<usize, BoardError> {
        self.display.resort(&self.page, &self.filter)
    }

    /// Toggle filter `slot`. Returns the number of visible entries.
    pub fn toggle(&mut self, slot: usize) -> Result<usize, BoardError> {
        self.filter.on_toggle(&self.page, slot)?;
        self.display.check_empty(&self.page)
    }

    /// Copy `text` with feedback on the interaction's indicator.
    pub fn copy<I>(&mut self, interaction: &I, text: &str) -> Result<bool, BoardError>
    where
        I: Interaction<P::Element> + ?Sized,
    {
        self.feedback
            .copy(&self.page, &self.scheduler, &self.clipboard, interaction, text)
    }

    /// Start the live clock.
    pub fn start_clock(&mut self) -> Result<(), BoardError> {
        let now = self.wall_clock.now_millis();
        self.clock.start(&self.page, &self.scheduler, now)
    }

    /// Deliver an elapsed timer.
    pub fn fire(&mut self, task: TimerTask) {
        match task {
            TimerTask::ClipboardRevert => self.feedback.reset(&self.page),
            TimerTask::ClockTick => {
                let now = self.wall_clock.now_millis();
                // Errors stop the clock; nothing to report.
                let _ = self.clock.tick(&self.page, &self.scheduler, now);
            }
        }
    }

    /// Clear the error-message region.
    pub fn close_error(&self) -> Result<(), BoardError> {
        let region = self
            .page
            .element_by_id(&self.config.error_id)
            .ok_or_else(|| BoardError::MissingElement(self.config.error_id.clone()))?;
        self.page.set_inner_html(&region, "");
        debug!("error message closed");
        Ok(())
    }
}
