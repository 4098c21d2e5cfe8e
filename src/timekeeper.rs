/// Monotonic millisecond counter.
///
/// Advanced from the main loop each time the tick timer elapses; wraps after `u32::MAX`.
pub struct Timekeeper {
    millis: u32,
}

impl Timekeeper {
    pub const fn new() -> Self {
        Timekeeper { millis: 0 }
    }

    pub fn millis(&self) -> u32 {
        self.millis
    }

    pub fn incr_timestamp(&mut self, plus: u32) {
        self.millis = self.millis.wrapping_add(plus);
    }
}
