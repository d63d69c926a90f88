//! Copy-to-clipboard with a transient confirmation icon.
//!
//! At most one indicator is confirmed at any time: a new copy reverts the
//! previous indicator and cancels its timer before confirming its own.

use crate::config::ClipboardConfig;
use crate::error::BoardError;
use crate::page::{ClipboardWriter, Interaction, Page, Scheduler, TimerHandle, TimerTask};
use tracing::{debug, warn};

/// A confirmed indicator waiting for its revert timer.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackSession<E> {
    /// Indicator currently showing the confirmed icon.
    pub indicator: E,
    /// Pending revert timer.
    pub timer: TimerHandle,
}

/// Clipboard feedback unit.
#[derive(Debug, Clone)]
pub struct ClipboardFeedback<E> {
    config: ClipboardConfig,
    session: Option<FeedbackSession<E>>,
}

impl<E: Clone + PartialEq> ClipboardFeedback<E> {
    /// Create an idle unit.
    #[must_use]
    pub const fn new(config: ClipboardConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    /// The active session, if an indicator is currently confirmed.
    #[must_use]
    pub const fn session(&self) -> Option<&FeedbackSession<E>> {
        self.session.as_ref()
    }

    /// Copy `text` and confirm on the indicator inside the interaction's
    /// target. Returns whether a confirmation is now showing.
    ///
    /// The clipboard write is not awaited; confirmation does not depend on
    /// whether it succeeds.
    pub fn copy<P, S, C, I>(
        &mut self,
        page: &P,
        scheduler: &S,
        clipboard: &C,
        interaction: &I,
        text: &str,
    ) -> Result<bool, BoardError>
    where
        P: Page<Element = E>,
        S: Scheduler + ?Sized,
        C: ClipboardWriter + ?Sized,
        I: Interaction<E> + ?Sized,
    {
        clipboard.write_text(text);
        self.cancel(page, scheduler);
        let result = self.confirm(page, scheduler, interaction);
        interaction.stop_propagation();
        result
    }

    /// Revert the confirmed indicator, if any. Called when the timer fires.
    pub fn reset<P: Page<Element = E>>(&mut self, page: &P) {
        if let Some(session) = self.session.take() {
            page.set_inner_html(&session.indicator, &self.config.default_icon);
            debug!(timer = session.timer.0, "clipboard indicator reverted");
        }
    }

    /// Cancel the pending timer and revert immediately.
    pub fn cancel<P, S>(&mut self, page: &P, scheduler: &S)
    where
        P: Page<Element = E>,
        S: Scheduler + ?Sized,
    {
        if let Some(session) = &self.session {
            scheduler.clear(session.timer);
        }
        self.reset(page);
    }

    fn confirm<P, S, I>(
        &mut self,
        page: &P,
        scheduler: &S,
        interaction: &I,
    ) -> Result<bool, BoardError>
    where
        P: Page<Element = E>,
        S: Scheduler + ?Sized,
        I: Interaction<E> + ?Sized,
    {
        let indicator = interaction
            .current_target()
            .and_then(|target| page.find_by_class(&target, &self.config.indicator_class));
        let Some(indicator) = indicator else {
            warn!(
                class = %self.config.indicator_class,
                "copy target has no clipboard indicator"
            );
            return Ok(false);
        };

        page.set_inner_html(&indicator, &self.config.confirmed_icon);
        match scheduler.set_timeout(TimerTask::ClipboardRevert, self.config.revert_after()) {
            Ok(timer) => {
                debug!(timer = timer.0, "clipboard indicator confirmed");
                self.session = Some(FeedbackSession { indicator, timer });
                Ok(true)
            }
            Err(err) => {
                page.set_inner_html(&indicator, &self.config.default_icon);
                Err(err.into())
            }
        }
    }
}
