use crate::line::InputLine;
use crate::timing::{elapsed_ms, Timing};
use log::{debug, trace};

/// A confirmed change of the debounced level.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Edge {
    Pressed,
    Released,
}

/// Anything that can be polled once per loop iteration for debounced edges.
pub trait EdgeSource {
    fn poll(&mut self, now_ms: u32) -> Option<Edge>;
}

/// One physical push-button, debounced against a caller-supplied millisecond clock.
///
/// Every raw change, noise included, restarts the debounce window, so a
/// chattering contact has to settle completely before anything is reported.
pub struct DebouncedInput<L> {
    line: L,
    timing: Timing,
    /// raw level seen by the previous poll, `true` is HIGH
    raw_level: bool,
    /// the level we currently believe, `true` is HIGH (released)
    confirmed_level: bool,
    timestamp_last_transition: u32,
    /// only meaningful while `confirmed_level` is LOW
    timestamp_press_start: u32,
}

impl<L: InputLine> DebouncedInput<L> {
    pub fn new(line: L) -> Self {
        Self::with_timing(line, Timing::default())
    }

    pub fn with_timing(line: L, timing: Timing) -> Self {
        DebouncedInput {
            line,
            timing,
            raw_level: true,
            confirmed_level: true,
            timestamp_last_transition: 0,
            timestamp_press_start: 0,
        }
    }

    /// Configure the pad as an input with pull-up.  Call once before the first poll.
    pub fn init(&mut self) {
        self.line.configure_pull_up();
    }

    /// Sample the line once and report the edge, if any, that this sample confirmed.
    pub fn poll(&mut self, now_ms: u32) -> Option<Edge> {
        let raw = self.line.is_set();
        if raw != self.raw_level {
            trace!("raw level {} at {}ms, debounce window restarted", raw, now_ms);
            self.timestamp_last_transition = now_ms;
        }

        let mut edge = None;
        if raw != self.confirmed_level
            && elapsed_ms(now_ms, self.timestamp_last_transition) > self.timing.debounce_window_ms
        {
            self.confirmed_level = raw;
            let confirmed = if raw {
                Edge::Released
            } else {
                self.timestamp_press_start = now_ms;
                Edge::Pressed
            };
            debug!("{:?} edge at {}ms", confirmed, now_ms);
            edge = Some(confirmed);
        }

        self.raw_level = raw;
        edge
    }

    /// True while the debounced level is "pressed".
    pub fn is_held(&self) -> bool {
        !self.confirmed_level
    }

    /// How long the current confirmed press has lasted, or `None` while released.
    ///
    /// Reads only what the last [`poll`](Self::poll) established; poll first in the same iteration.
    pub fn held_for(&self, now_ms: u32) -> Option<u32> {
        if self.is_held() {
            Some(elapsed_ms(now_ms, self.timestamp_press_start))
        } else {
            None
        }
    }

    /// Held for at least the long-press threshold.
    ///
    /// Does not sample the pin, so it must follow [`poll`](Self::poll) in the
    /// same loop iteration or it answers for a stale level.
    pub fn is_long_pressed(&self, now_ms: u32) -> bool {
        match self.held_for(now_ms) {
            Some(held) => held >= self.timing.long_press_threshold_ms,
            None => false,
        }
    }

    pub fn pin(&self) -> L::Id {
        self.line.id()
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    #[cfg(test)]
    pub(crate) fn line_for_test(&self) -> &L {
        &self.line
    }
}

impl<L: InputLine> EdgeSource for DebouncedInput<L> {
    fn poll(&mut self, now_ms: u32) -> Option<Edge> {
        DebouncedInput::poll(self, now_ms)
    }
}
