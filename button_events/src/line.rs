/// A single digital input line, wired active-low with a pull-up.
///
/// HIGH (`true`) means released, LOW (`false`) means the switch is
/// connecting the pin to ground.
pub trait InputLine {
    /// Whatever the board uses to name the pin.
    type Id: Copy;

    fn id(&self) -> Self::Id;

    /// The raw electrical level, `true` for HIGH.
    fn is_set(&self) -> bool;

    /// Configure the pad as an input with its internal pull-up enabled.
    ///
    /// Lines whose pads were rigged when they were built can leave this as a no-op.
    fn configure_pull_up(&mut self) {}
}

#[cfg(test)]
pub(crate) mod scripted {
    use super::InputLine;
    use core::cell::Cell;

    /// Test double: the level is whatever the test last wrote.
    pub struct ScriptedLine {
        pub id: u8,
        level: Cell<bool>,
        pub configured: u32,
    }

    impl ScriptedLine {
        pub fn released(id: u8) -> Self {
            ScriptedLine {
                id,
                level: Cell::new(true),
                configured: 0,
            }
        }

        pub fn set(&self, high: bool) {
            self.level.set(high);
        }

        pub fn press(&self) {
            self.set(false)
        }

        pub fn release(&self) {
            self.set(true)
        }
    }

    impl InputLine for ScriptedLine {
        type Id = u8;

        fn id(&self) -> u8 {
            self.id
        }

        fn is_set(&self) -> bool {
            self.level.get()
        }

        fn configure_pull_up(&mut self) {
            self.configured += 1;
        }
    }
}
