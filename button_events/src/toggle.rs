use crate::debounced::{Edge, EdgeSource};
use log::debug;

/// A latched on/off state that flips on every confirmed press.
///
/// Release edges never touch the latch, so one physical press is one toggle.
pub struct ToggleInput<S> {
    inner: S,
    state: bool,
}

impl<S: EdgeSource> ToggleInput<S> {
    /// Starts off.
    pub fn new(inner: S) -> Self {
        Self::with_initial_state(inner, false)
    }

    pub fn with_initial_state(inner: S, state: bool) -> Self {
        ToggleInput { inner, state }
    }

    /// Poll the wrapped input; `true` if this poll flipped the latch.
    pub fn poll(&mut self, now_ms: u32) -> bool {
        match self.inner.poll(now_ms) {
            Some(Edge::Pressed) => {
                self.state = !self.state;
                debug!("toggled to {} at {}ms", self.state, now_ms);
                true
            }
            Some(Edge::Released) | None => false,
        }
    }

    pub fn current_state(&self) -> bool {
        self.state
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debounced::DebouncedInput;
    use crate::line::scripted::ScriptedLine;
    use crate::timing::Timing;

    /// Replays a fixed list of edges, one per poll.
    struct Replay<'a> {
        edges: &'a [Option<Edge>],
        polled: usize,
    }

    impl<'a> Replay<'a> {
        fn new(edges: &'a [Option<Edge>]) -> Self {
            Replay { edges, polled: 0 }
        }
    }

    impl EdgeSource for Replay<'_> {
        fn poll(&mut self, _now_ms: u32) -> Option<Edge> {
            let edge = self.edges.get(self.polled).copied().flatten();
            self.polled += 1;
            edge
        }
    }

    const P: Option<Edge> = Some(Edge::Pressed);
    const R: Option<Edge> = Some(Edge::Released);

    #[test]
    fn flips_only_on_press_edges() {
        let script = [None, P, None, R, None, P, R, P];
        let mut toggle = ToggleInput::new(Replay::new(&script));

        let flips: [bool; 8] = core::array::from_fn(|i| toggle.poll(i as u32));
        assert_eq!(flips, [false, true, false, false, false, true, false, true]);
        assert!(toggle.current_state());
        assert_eq!(toggle.inner().polled, 8);
    }

    #[test]
    fn parity_of_presses() {
        for &initial in &[false, true] {
            for presses in 0..6u32 {
                let mut toggle = ToggleInput::with_initial_state(
                    Replay::new(&[P, R, P, R, P, R, P, R, P, R, P, R]),
                    initial,
                );
                for t in 0..presses * 2 {
                    toggle.poll(t);
                }
                assert_eq!(toggle.current_state(), initial ^ (presses % 2 == 1));
            }
        }
    }

    #[test]
    fn releases_never_toggle() {
        let mut toggle = ToggleInput::with_initial_state(Replay::new(&[R, R, R, None]), true);
        for t in 0..4 {
            assert!(!toggle.poll(t));
        }
        assert!(toggle.current_state());
    }

    #[test]
    fn debounced_button_toggles_once_per_press() {
        let mut toggle = ToggleInput::new(DebouncedInput::with_timing(
            ScriptedLine::released(2),
            Timing::new(50, 1000),
        ));
        assert!(!toggle.current_state());

        let mut now = 0;
        for press in 1..=3 {
            toggle.inner().line_for_test().press();
            let mut flips = 0;
            for _ in 0..100 {
                now += 1;
                if toggle.poll(now) {
                    flips += 1;
                }
            }
            assert_eq!(flips, 1);
            assert!(toggle.inner().is_held());

            toggle.inner().line_for_test().release();
            for _ in 0..100 {
                now += 1;
                assert!(!toggle.poll(now));
            }
            assert!(!toggle.inner().is_held());
            assert_eq!(toggle.current_state(), press % 2 == 1);
        }
    }

    #[test]
    fn long_press_is_visible_through_the_toggle() {
        let mut toggle = ToggleInput::new(DebouncedInput::new(ScriptedLine::released(2)));
        toggle.inner().line_for_test().press();
        toggle.poll(0);
        assert!(toggle.poll(51));
        toggle.poll(1051);
        assert!(toggle.inner().is_long_pressed(1051));

        let button = toggle.into_inner();
        assert_eq!(button.pin(), 2);
    }

    #[test]
    fn inner_mut_reaches_the_button() {
        let mut toggle = ToggleInput::new(DebouncedInput::new(ScriptedLine::released(4)));
        toggle.inner_mut().init();
        assert_eq!(toggle.inner().line_for_test().configured, 1);
    }
}
