//! Event reduction core for the destination browser.
//!
//! Every discrete UI event (dot press, strip notice, pointer gesture,
//! visibility crossing, card press) is a [`BrowseEvent`]; the view's
//! coroutine folds them into [`BrowseState`] one at a time, in arrival
//! order. Reduction is pure apart from its return value: when an event asks
//! for navigation the adopted target comes back to the caller, which owns
//! the fire-and-forget dispatch.

use crate::core::nav::NavTarget;

use super::reveal::Reveal;
use super::strip::{SlideStrip, StripNotice};

/// Pointer movement below this many pixels still counts as a tap on the
/// card underneath; anything larger is a swipe and swallows the click the
/// browser synthesizes after pointer-up.
const CLICK_SLOP_PX: f64 = 8.0;

/// Width assumed for the strip until its first measurement arrives.
const FALLBACK_STRIP_WIDTH_PX: f64 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BrowseEvent {
    /// The slide widget settled and announced its position.
    Notice(StripNotice),
    /// Indicator dot `i` pressed; forwarded to the widget as a command.
    DotPressed(usize),
    DragStarted(f64),
    DragReleased(f64),
    DragCancelled,
    StripResized(f64),
    /// Intersection ratio reported for the grid container.
    GridVisibility(f64),
    CardPressed(u32),
    ReservePressed,
    SeeMorePressed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrowseState {
    strip: SlideStrip,
    current_index: usize,
    reveal: Reveal,
    drag_origin: Option<f64>,
    strip_width: f64,
    swallow_next_card_press: bool,
}

impl BrowseState {
    pub fn new(len: usize) -> Self {
        Self {
            strip: SlideStrip::new(len),
            current_index: 0,
            reveal: Reveal::hidden(),
            drag_origin: None,
            strip_width: FALLBACK_STRIP_WIDTH_PX,
            swallow_next_card_press: false,
        }
    }

    /// Index the indicator highlights: the last confirmed strip position.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn grid_revealed(&self) -> bool {
        self.reveal.is_visible()
    }

    /// Fold one event. Returns the navigation target to dispatch, if the
    /// event resolved to one.
    pub fn reduce(&mut self, event: BrowseEvent) -> Option<NavTarget> {
        match event {
            BrowseEvent::Notice(notice) => {
                self.apply_notice(notice);
                None
            }
            BrowseEvent::DotPressed(index) => {
                // No optimistic update: the widget resolves the command and
                // its confirmation is what moves `current_index`.
                if let Some(notice) = self.strip.scroll_to(index) {
                    self.apply_notice(notice);
                }
                None
            }
            BrowseEvent::DragStarted(x) => {
                self.drag_origin = Some(x);
                None
            }
            BrowseEvent::DragCancelled => {
                self.drag_origin = None;
                None
            }
            BrowseEvent::DragReleased(x) => {
                if let Some(origin) = self.drag_origin.take() {
                    let delta = x - origin;
                    self.swallow_next_card_press = delta.abs() > CLICK_SLOP_PX;
                    if let Some(notice) = self.strip.settle_drag(delta, self.strip_width) {
                        self.apply_notice(notice);
                    }
                }
                None
            }
            BrowseEvent::StripResized(width) => {
                if width > 0.0 {
                    self.strip_width = width;
                }
                None
            }
            BrowseEvent::GridVisibility(ratio) => {
                self.reveal.observe(ratio);
                None
            }
            BrowseEvent::CardPressed(id) => {
                if std::mem::take(&mut self.swallow_next_card_press) {
                    None
                } else {
                    Some(NavTarget::DestinationInfo { id })
                }
            }
            BrowseEvent::ReservePressed => Some(NavTarget::Reservations),
            BrowseEvent::SeeMorePressed => Some(NavTarget::Destinations),
        }
    }

    fn apply_notice(&mut self, notice: StripNotice) {
        // Widget-originated updates always win.
        let StripNotice::IndexSelected(index) = notice;
        self.current_index = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_press_lands_through_the_confirmation() {
        let mut state = BrowseState::new(8);
        assert_eq!(state.reduce(BrowseEvent::DotPressed(5)), None);
        assert_eq!(state.current_index(), 5);
    }

    #[test]
    fn unsolicited_widget_notice_wins() {
        let mut state = BrowseState::new(8);
        state.reduce(BrowseEvent::DotPressed(5));
        state.reduce(BrowseEvent::Notice(StripNotice::IndexSelected(2)));
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn clamped_dot_press_converges_on_the_adopted_slide() {
        let mut state = BrowseState::new(8);
        state.reduce(BrowseEvent::DotPressed(42));
        assert_eq!(state.current_index(), 7);
    }

    #[test]
    fn swipe_updates_only_after_settling() {
        let mut state = BrowseState::new(4);
        state.reduce(BrowseEvent::StripResized(400.0));
        state.reduce(BrowseEvent::DragStarted(300.0));
        assert_eq!(state.current_index(), 0);
        state.reduce(BrowseEvent::DragReleased(120.0));
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn cancelled_drag_leaves_the_strip_alone() {
        let mut state = BrowseState::new(4);
        state.reduce(BrowseEvent::DragStarted(300.0));
        state.reduce(BrowseEvent::DragCancelled);
        state.reduce(BrowseEvent::DragReleased(0.0));
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn card_press_dispatches_the_detail_target() {
        let mut state = BrowseState::new(8);
        assert_eq!(
            state.reduce(BrowseEvent::CardPressed(3)),
            Some(NavTarget::DestinationInfo { id: 3 })
        );
    }

    #[test]
    fn swipe_swallows_the_synthesized_card_click_once() {
        let mut state = BrowseState::new(4);
        state.reduce(BrowseEvent::StripResized(400.0));
        state.reduce(BrowseEvent::DragStarted(300.0));
        state.reduce(BrowseEvent::DragReleased(100.0));
        assert_eq!(state.reduce(BrowseEvent::CardPressed(2)), None);
        assert_eq!(
            state.reduce(BrowseEvent::CardPressed(2)),
            Some(NavTarget::DestinationInfo { id: 2 })
        );
    }

    #[test]
    fn tap_sized_release_still_counts_as_a_click() {
        let mut state = BrowseState::new(4);
        state.reduce(BrowseEvent::DragStarted(100.0));
        state.reduce(BrowseEvent::DragReleased(103.0));
        assert_eq!(
            state.reduce(BrowseEvent::CardPressed(1)),
            Some(NavTarget::DestinationInfo { id: 1 })
        );
    }

    #[test]
    fn fixed_route_buttons_dispatch_their_targets() {
        let mut state = BrowseState::new(4);
        assert_eq!(
            state.reduce(BrowseEvent::ReservePressed),
            Some(NavTarget::Reservations)
        );
        assert_eq!(
            state.reduce(BrowseEvent::SeeMorePressed),
            Some(NavTarget::Destinations)
        );
    }

    #[test]
    fn visibility_threshold_drives_the_reveal_flag() {
        let mut state = BrowseState::new(4);
        state.reduce(BrowseEvent::GridVisibility(0.25));
        assert!(state.grid_revealed());
        state.reduce(BrowseEvent::GridVisibility(0.1));
        assert!(!state.grid_revealed());
    }

    #[test]
    fn non_positive_measurements_are_ignored() {
        let mut state = BrowseState::new(4);
        state.reduce(BrowseEvent::StripResized(0.0));
        state.reduce(BrowseEvent::DragStarted(500.0));
        // Fallback width still allows the gesture to resolve.
        state.reduce(BrowseEvent::DragReleased(200.0));
        assert_eq!(state.current_index(), 1);
    }
}
