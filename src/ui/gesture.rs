/// Swipe gesture interpretation
///
/// Turns a touch-start / touch-end x-coordinate pair into a navigation
/// intent. Independent of how events are delivered, so the canvas overlay
/// and tests drive it the same way.

/// A discrete navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    Previous,
    Next,
}

/// Interpret a horizontal swipe from `start` to `end`.
///
/// Leftward travel beyond `threshold` means "next", rightward means
/// "previous". Travel of exactly `threshold` or less is ignored.
pub fn interpret_swipe(start: f32, end: f32, threshold: f32) -> Option<NavIntent> {
    let dx = end - start;
    if dx.abs() <= threshold {
        return None;
    }
    if dx < 0.0 {
        Some(NavIntent::Next)
    } else {
        Some(NavIntent::Previous)
    }
}

/// Idle / Tracking state machine around `interpret_swipe`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    threshold: f32,
    origin: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            origin: None,
        }
    }

    /// Record the swipe origin. Overwrites any unfinished swipe.
    pub fn touch_start(&mut self, x: f32) {
        self.origin = Some(x);
    }

    /// Finish the swipe and return to idle
    pub fn touch_end(&mut self, x: f32) -> Option<NavIntent> {
        let origin = self.origin.take()?;
        interpret_swipe(origin, x, self.threshold)
    }

    /// Drop an unfinished swipe (e.g. the touch was cancelled)
    pub fn cancel(&mut self) {
        self.origin = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fox_catalog;
    use crate::state::gallery::Gallery;
    use crate::state::reactions::ReactionStore;
    use crate::state::storage::MemoryStorage;
    use proptest::prelude::*;

    const THRESHOLD: f32 = 50.0;

    fn apply<S: crate::state::storage::Storage>(gallery: &mut Gallery<S>, intent: Option<NavIntent>) {
        match intent {
            Some(NavIntent::Next) => {
                gallery.navigate_next();
            }
            Some(NavIntent::Previous) => {
                gallery.navigate_previous();
            }
            None => {}
        }
    }

    #[test]
    fn test_direction() {
        assert_eq!(interpret_swipe(200.0, 100.0, THRESHOLD), Some(NavIntent::Next));
        assert_eq!(interpret_swipe(100.0, 200.0, THRESHOLD), Some(NavIntent::Previous));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(interpret_swipe(100.0, 50.0, THRESHOLD), None);
        assert_eq!(interpret_swipe(100.0, 150.0, THRESHOLD), None);
        assert_eq!(interpret_swipe(100.0, 49.0, THRESHOLD), Some(NavIntent::Next));
    }

    #[test]
    fn test_tracker_returns_to_idle() {
        let mut tracker = SwipeTracker::new(THRESHOLD);
        assert!(!tracker.is_tracking());

        tracker.touch_start(300.0);
        assert!(tracker.is_tracking());
        assert_eq!(tracker.touch_end(290.0), None);
        assert!(!tracker.is_tracking());

        tracker.touch_start(300.0);
        assert_eq!(tracker.touch_end(100.0), Some(NavIntent::Next));
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn test_touch_end_while_idle() {
        let mut tracker = SwipeTracker::new(THRESHOLD);
        assert_eq!(tracker.touch_end(0.0), None);
    }

    #[test]
    fn test_new_start_overwrites_origin() {
        let mut tracker = SwipeTracker::new(THRESHOLD);
        tracker.touch_start(0.0);
        tracker.touch_start(500.0);
        assert_eq!(tracker.touch_end(400.0), Some(NavIntent::Next));
    }

    #[test]
    fn test_cancel() {
        let mut tracker = SwipeTracker::new(THRESHOLD);
        tracker.touch_start(500.0);
        tracker.cancel();
        assert_eq!(tracker.touch_end(0.0), None);
    }

    #[test]
    fn test_swipe_past_threshold_advances_once() {
        let mut gallery = Gallery::new(ReactionStore::new(MemoryStorage::new(), "fox"));
        gallery.initialize(fox_catalog(3), 0);
        let mut tracker = SwipeTracker::new(THRESHOLD);

        for expected in [1, 2, 2] {
            tracker.touch_start(400.0);
            apply(&mut gallery, tracker.touch_end(400.0 - (THRESHOLD + 1.0)));
            assert_eq!(gallery.cursor(), expected);
        }
    }

    proptest! {
        #[test]
        fn test_short_swipes_never_navigate(
            start in -1000i32..1000,
            dx in -50i32..=50,
            cursor in 0usize..5,
        ) {
            let mut gallery = Gallery::new(ReactionStore::new(MemoryStorage::new(), "fox"));
            gallery.initialize(fox_catalog(5), cursor);
            let mut tracker = SwipeTracker::new(THRESHOLD);

            tracker.touch_start(start as f32);
            let intent = tracker.touch_end((start + dx) as f32);
            prop_assert_eq!(intent, None);

            apply(&mut gallery, intent);
            prop_assert_eq!(gallery.cursor(), cursor);
        }
    }
}
