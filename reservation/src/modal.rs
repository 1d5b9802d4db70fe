use std::time::Duration;

/// How long the success confirmation stays up before the modal closes on
/// its own. Dismissing the modal earlier cancels the pending close.
pub const SUCCESS_AUTO_CLOSE: Duration = Duration::from_millis(3000);

/// What the reservation modal is currently showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    /// No overlay; the page scrolls normally.
    #[default]
    Closed,
    /// The booking form.
    OpenForm,
    /// The post-submit confirmation, queued to auto-close.
    OpenSuccess,
}

impl ModalState {
    /// True while the overlay is up in either state. Background scroll is
    /// suspended exactly while this holds.
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }
}

/// [`ModalState`] paired with the handle of any scheduled auto-close.
///
/// `H` is whatever handle the UI's timer API returns. Each transition hands
/// back the handle it invalidated so the caller can cancel the timer; no
/// transition leaves an earlier auto-close armed.
#[derive(Debug)]
pub struct ModalLifecycle<H> {
    state: ModalState,
    pending_close: Option<H>,
}

impl<H> ModalLifecycle<H> {
    pub fn new() -> Self {
        ModalLifecycle {
            state: ModalState::Closed,
            pending_close: None,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    /// Call-to-action activation. The overlay only blocks pointer events, so
    /// this stays reachable from the keyboard while the confirmation is up;
    /// cancelling the returned handle keeps the old timer from closing the
    /// fresh form mid-entry.
    pub fn open_form(&mut self) -> Option<H> {
        self.state = ModalState::OpenForm;
        self.pending_close.take()
    }

    /// Manual dismissal from either open view.
    pub fn close(&mut self) -> Option<H> {
        self.state = ModalState::Closed;
        self.pending_close.take()
    }

    /// A submit passed validation: show the confirmation. The caller
    /// schedules the auto-close and records it with
    /// [`auto_close_scheduled`](Self::auto_close_scheduled).
    pub fn confirm(&mut self) -> Option<H> {
        self.state = ModalState::OpenSuccess;
        self.pending_close.take()
    }

    pub fn auto_close_scheduled(&mut self, handle: H) {
        self.pending_close = Some(handle);
    }

    /// The scheduled auto-close fired. The spent handle is dropped; there is
    /// nothing left to cancel.
    pub fn auto_close_fired(&mut self) {
        self.pending_close = None;
        self.state = ModalState::Closed;
    }

    /// Strips any pending auto-close without a state change, for teardown
    /// while the modal is still up.
    pub fn take_pending_close(&mut self) -> Option<H> {
        self.pending_close.take()
    }
}

impl<H> Default for ModalLifecycle<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(ModalState::default(), ModalState::Closed);
        assert_eq!(ModalLifecycle::<u32>::new().state(), ModalState::Closed);
    }

    #[test]
    fn open_covers_both_form_and_success() {
        assert!(!ModalState::Closed.is_open());
        assert!(ModalState::OpenForm.is_open());
        assert!(ModalState::OpenSuccess.is_open());
    }

    #[test]
    fn auto_close_delay_is_three_seconds() {
        assert_eq!(SUCCESS_AUTO_CLOSE, Duration::from_secs(3));
    }

    #[test]
    fn booking_walks_open_confirm_auto_close() {
        let mut modal = ModalLifecycle::new();

        assert_eq!(modal.open_form(), None);
        assert_eq!(modal.state(), ModalState::OpenForm);

        assert_eq!(modal.confirm(), None);
        modal.auto_close_scheduled(1u32);
        assert_eq!(modal.state(), ModalState::OpenSuccess);

        modal.auto_close_fired();
        assert_eq!(modal.state(), ModalState::Closed);
        assert_eq!(modal.take_pending_close(), None);
    }

    #[test]
    fn manual_close_hands_back_the_pending_auto_close() {
        let mut modal = ModalLifecycle::new();
        modal.open_form();
        modal.confirm();
        modal.auto_close_scheduled(7u32);

        assert_eq!(modal.close(), Some(7));
        assert_eq!(modal.state(), ModalState::Closed);
        assert_eq!(modal.take_pending_close(), None);
    }

    #[test]
    fn reopening_during_the_confirmation_hands_back_the_stale_auto_close() {
        let mut modal = ModalLifecycle::new();
        modal.open_form();
        modal.confirm();
        modal.auto_close_scheduled(7u32);

        // A call-to-action activated while the confirmation is showing.
        assert_eq!(modal.open_form(), Some(7));
        assert_eq!(modal.state(), ModalState::OpenForm);
        // The old deadline has nothing left to fire; only an explicit close
        // or a fresh confirmation may take the form down now.
        assert_eq!(modal.take_pending_close(), None);
    }

    #[test]
    fn teardown_strips_the_pending_close_without_a_transition() {
        let mut modal = ModalLifecycle::new();
        modal.open_form();
        modal.confirm();
        modal.auto_close_scheduled(3u32);

        assert_eq!(modal.take_pending_close(), Some(3));
        assert_eq!(modal.state(), ModalState::OpenSuccess);
    }
}
