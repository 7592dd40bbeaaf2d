//! Touchpad gesture recognition.
//! Turns raw touch-contact samples into pointer intents: single-finger drag
//! moves the cursor, two-finger drag scrolls in discrete ticks, and a quick
//! tap-tap is a double click. The caller supplies timestamps so the 300ms
//! double-tap window stays deterministic in tests.

/// One touch point on the pad surface, in pad-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub x: f64,
    pub y: f64,
}

impl Contact {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Discrete pointer intent produced by the recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureIntent {
    /// Relative cursor movement; the remote side integrates deltas.
    Move { dx: f64, dy: f64 },
    /// One scroll tick, always +SCROLL_STEP or -SCROLL_STEP.
    Scroll { delta: i32 },
    DoubleClick,
}

/// Vertical travel (px) of the two-finger midpoint needed per scroll tick.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;
/// Magnitude of one scroll tick. Ticks are rate-limited by the threshold so
/// a long two-finger drag does not flood the socket.
pub const SCROLL_STEP: i32 = 3;
/// Two taps closer together than this count as a double click.
pub const DOUBLE_TAP_WINDOW_MS: f64 = 300.0;

/// Per-surface gesture tracking state.
///
/// Exactly one of single-contact tracking (`last_touch`) and two-contact
/// tracking (`scroll_ref_y`) drives intent emission at a time; a
/// contact-start with a different finger count resets the other branch.
#[derive(Default, Debug, Clone)]
pub struct GestureState {
    last_touch: Option<(f64, f64)>,
    last_tap_ms: Option<f64>,
    scroll_ref_y: Option<f64>,
}

impl GestureState {
    /// Contact-start: record the primary contact as the tracking reference,
    /// and with exactly two fingers also the midpoint-y scroll reference.
    /// An empty contact list is ignored.
    pub fn touch_start(&mut self, contacts: &[Contact]) {
        let Some(first) = contacts.first() else {
            return;
        };
        self.last_touch = Some((first.x, first.y));
        self.scroll_ref_y = if contacts.len() == 2 {
            Some((contacts[0].y + contacts[1].y) / 2.0)
        } else {
            None
        };
    }

    /// Contact-move: emits at most one intent per sample.
    pub fn touch_move(&mut self, contacts: &[Contact]) -> Option<GestureIntent> {
        let (last_x, last_y) = self.last_touch?;

        // Two-finger scroll. A multi-finger sample never feeds the
        // single-finger move tracking, even without a scroll reference.
        if contacts.len() >= 2 {
            let ref_y = self.scroll_ref_y?;
            let current_y = (contacts[0].y + contacts[1].y) / 2.0;
            let travel = ref_y - current_y;
            if travel.abs() > SCROLL_THRESHOLD_PX {
                self.scroll_ref_y = Some(current_y);
                // Fingers moving up scroll the page down and vice versa.
                let delta = if travel > 0.0 { -SCROLL_STEP } else { SCROLL_STEP };
                return Some(GestureIntent::Scroll { delta });
            }
            return None;
        }

        // Single-finger move, relative to the previous sample.
        let touch = contacts.first()?;
        let dx = touch.x - last_x;
        let dy = touch.y - last_y;
        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        self.last_touch = Some((touch.x, touch.y));
        Some(GestureIntent::Move { dx, dy })
    }

    /// Contact-end (all fingers lifted). A tap landing within the double-tap
    /// window of the previous one emits `DoubleClick` and consumes the
    /// pending tap, so a third rapid tap starts a fresh sequence. A lone tap
    /// only records its timestamp; single-tap-as-left-click is left to the
    /// explicit click buttons.
    pub fn touch_end(&mut self, now_ms: f64) -> Option<GestureIntent> {
        self.scroll_ref_y = None;
        if self.last_touch.take().is_none() {
            return None;
        }
        match self.last_tap_ms {
            Some(tap_ms) if now_ms - tap_ms < DOUBLE_TAP_WINDOW_MS => {
                self.last_tap_ms = None;
                Some(GestureIntent::DoubleClick)
            }
            _ => {
                self.last_tap_ms = Some(now_ms);
                None
            }
        }
    }

    /// Abort the gesture in flight without tap bookkeeping. Used when a
    /// finger lifts mid-gesture (or on touchcancel) so the remaining contact
    /// cannot continue as a cursor move.
    pub fn cancel(&mut self) {
        self.last_touch = None;
        self.scroll_ref_y = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one(x: f64, y: f64) -> Vec<Contact> {
        vec![Contact::new(x, y)]
    }

    fn two(y0: f64, y1: f64) -> Vec<Contact> {
        vec![Contact::new(40.0, y0), Contact::new(80.0, y1)]
    }

    #[test]
    fn drag_emits_incremental_moves_summing_to_net_displacement() {
        let mut gs = GestureState::default();
        gs.touch_start(&one(100.0, 100.0));

        let samples = [(105.0, 103.0), (112.0, 101.0), (112.0, 95.0), (130.0, 95.0)];
        let (mut sum_dx, mut sum_dy) = (0.0, 0.0);
        for (x, y) in samples {
            match gs.touch_move(&one(x, y)) {
                Some(GestureIntent::Move { dx, dy }) => {
                    sum_dx += dx;
                    sum_dy += dy;
                }
                other => panic!("expected move, got {other:?}"),
            }
        }
        assert_eq!((sum_dx, sum_dy), (30.0, -5.0));
    }

    #[test]
    fn first_move_sample_is_relative_to_start() {
        let mut gs = GestureState::default();
        gs.touch_start(&one(100.0, 100.0));
        assert_eq!(
            gs.touch_move(&one(105.0, 103.0)),
            Some(GestureIntent::Move { dx: 5.0, dy: 3.0 })
        );
    }

    #[test]
    fn stationary_sample_emits_nothing() {
        let mut gs = GestureState::default();
        gs.touch_start(&one(50.0, 60.0));
        assert_eq!(gs.touch_move(&one(50.0, 60.0)), None);
    }

    #[test]
    fn move_without_start_is_ignored() {
        let mut gs = GestureState::default();
        assert_eq!(gs.touch_move(&one(10.0, 10.0)), None);
    }

    #[test]
    fn sub_threshold_two_finger_travel_does_not_scroll() {
        let mut gs = GestureState::default();
        gs.touch_start(&two(100.0, 120.0)); // midpoint 110
        assert_eq!(gs.touch_move(&two(95.0, 115.0)), None); // moved 5 < 10
        assert_eq!(gs.touch_move(&two(92.0, 112.0)), None); // still 8 from ref
    }

    #[test]
    fn each_threshold_crossing_emits_one_tick_with_direction_sign() {
        let mut gs = GestureState::default();
        gs.touch_start(&two(100.0, 120.0)); // midpoint 110

        // Fingers move up 15px: midpoint 95, travel +15 -> scroll down.
        assert_eq!(
            gs.touch_move(&two(85.0, 105.0)),
            Some(GestureIntent::Scroll { delta: -3 })
        );
        // Reference advanced to 95; another 8px up is below threshold.
        assert_eq!(gs.touch_move(&two(77.0, 97.0)), None);
        // Fingers move down past the reference: travel -13 -> scroll up.
        assert_eq!(
            gs.touch_move(&two(98.0, 118.0)),
            Some(GestureIntent::Scroll { delta: 3 })
        );
    }

    #[test]
    fn two_finger_sample_never_emits_a_move() {
        let mut gs = GestureState::default();
        gs.touch_start(&one(100.0, 100.0));
        // Second finger lands without a fresh touch_start: no scroll
        // reference, and no fallthrough to move tracking either.
        assert_eq!(gs.touch_move(&two(120.0, 140.0)), None);
    }

    #[test]
    fn two_finger_start_then_end_emits_nothing() {
        let mut gs = GestureState::default();
        gs.touch_start(&two(100.0, 120.0));
        assert_eq!(gs.touch_end(1_000.0), None);
    }

    #[test]
    fn quick_second_tap_is_a_double_click_and_consumes_the_pending_tap() {
        let mut gs = GestureState::default();
        gs.touch_start(&one(10.0, 10.0));
        assert_eq!(gs.touch_end(1_000.0), None); // pending tap recorded
        gs.touch_start(&one(11.0, 9.0));
        assert_eq!(gs.touch_end(1_200.0), Some(GestureIntent::DoubleClick));
        // Third rapid tap starts a fresh sequence rather than chaining.
        gs.touch_start(&one(11.0, 9.0));
        assert_eq!(gs.touch_end(1_350.0), None);
    }

    #[test]
    fn slow_second_tap_only_rearms_the_pending_tap() {
        let mut gs = GestureState::default();
        gs.touch_start(&one(10.0, 10.0));
        assert_eq!(gs.touch_end(1_000.0), None);
        gs.touch_start(&one(10.0, 10.0));
        assert_eq!(gs.touch_end(1_400.0), None);
        // ...which a third tap inside the window then completes.
        gs.touch_start(&one(10.0, 10.0));
        assert_eq!(gs.touch_end(1_500.0), Some(GestureIntent::DoubleClick));
    }

    #[test]
    fn double_tap_is_time_gated_only_not_distance_gated() {
        let mut gs = GestureState::default();
        gs.touch_start(&one(0.0, 0.0));
        assert_eq!(gs.touch_end(100.0), None);
        gs.touch_start(&one(300.0, 400.0));
        assert_eq!(gs.touch_end(250.0), Some(GestureIntent::DoubleClick));
    }

    #[test]
    fn end_without_tracking_reference_does_not_tap() {
        let mut gs = GestureState::default();
        assert_eq!(gs.touch_end(1_000.0), None);
        // No pending tap was recorded above.
        gs.touch_start(&one(5.0, 5.0));
        assert_eq!(gs.touch_end(1_100.0), None);
    }

    #[test]
    fn cancel_stops_move_tracking_but_keeps_tap_history() {
        let mut gs = GestureState::default();
        gs.touch_start(&one(10.0, 10.0));
        assert_eq!(gs.touch_end(1_000.0), None);

        gs.touch_start(&two(100.0, 120.0));
        gs.cancel(); // one finger lifted mid-gesture
        assert_eq!(gs.touch_move(&one(150.0, 150.0)), None);

        gs.touch_start(&one(10.0, 10.0));
        assert_eq!(gs.touch_end(1_200.0), Some(GestureIntent::DoubleClick));
    }

    #[test]
    fn restarting_with_one_finger_clears_the_scroll_reference() {
        let mut gs = GestureState::default();
        gs.touch_start(&two(100.0, 120.0));
        gs.touch_start(&one(50.0, 50.0));
        // Two contacts again, but the scroll reference is gone.
        assert_eq!(gs.touch_move(&two(60.0, 80.0)), None);
        assert_eq!(
            gs.touch_move(&one(55.0, 52.0)),
            Some(GestureIntent::Move { dx: 5.0, dy: 2.0 })
        );
    }
}
