/// Time constants for one button, in milliseconds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Timing {
    /// A raw level must hold unchanged for longer than this before it is believed.
    pub debounce_window_ms: u32,
    /// A confirmed press at least this old counts as a long press.
    pub long_press_threshold_ms: u32,
}

impl Timing {
    pub const DEFAULT_DEBOUNCE_WINDOW_MS: u32 = 50;
    pub const DEFAULT_LONG_PRESS_THRESHOLD_MS: u32 = 1000;

    pub const fn new(debounce_window_ms: u32, long_press_threshold_ms: u32) -> Self {
        Timing {
            debounce_window_ms,
            long_press_threshold_ms,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Timing::new(
            Self::DEFAULT_DEBOUNCE_WINDOW_MS,
            Self::DEFAULT_LONG_PRESS_THRESHOLD_MS,
        )
    }
}

/// Milliseconds from `since` to `now` on a counter that wraps at `u32::MAX`.
///
/// Correct as long as the real interval is shorter than one full wrap (~49.7 days).
pub fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}
