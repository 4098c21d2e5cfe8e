use crate::support;
use button_events::InputLine;
use core::convert::Infallible;
use embedded_hal::digital::v2::{OutputPin, PinState};
use imxrt_hal::gpio::{Input, GPIO};
use imxrt_hal::iomuxc;
use imxrt_hal::iomuxc::gpio::Pin;

/// A switch configured with a pull-up resistor that will be overwhelmed by a connnection to ground.
pub struct SwitchPullUp<P> {
    switch_pin: GPIO<P, Input>,
    number: u8,
}

impl<P: Pin + iomuxc::IOMUX> SwitchPullUp<P> {
    /// `number` is the Teensy pin label, used in log lines.
    pub fn new(pad: P, number: u8) -> Self {
        SwitchPullUp {
            switch_pin: GPIO::new(support::rigged_pull_up_switch(pad)),
            number,
        }
    }
}

impl<P: Pin> InputLine for SwitchPullUp<P> {
    type Id = u8;

    fn id(&self) -> u8 {
        self.number
    }

    /// High while the switch is open.
    fn is_set(&self) -> bool {
        self.switch_pin.is_set()
    }

    // the pad was rigged in `new`, before the GPIO took it over
}

/// an LED with the anode connected to 3.3V and cathode connected to a signal pin
pub struct LED3VAndSignal<O> {
    led: O,
}

impl<O: OutputPin<Error = Infallible>> LED3VAndSignal<O> {
    pub fn new(led: O) -> Self {
        LED3VAndSignal { led }
    }

    pub fn shine(&mut self, on: bool) {
        // low creates a voltage difference between signal and 3.3v
        let state = if on { PinState::Low } else { PinState::High };
        self.led
            .set_state(state)
            .unwrap_or_else(|never: Infallible| match never {})
    }
}
