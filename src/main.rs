#![no_std]
#![no_main]

use crate::timekeeper::Timekeeper;
use crate::wiring::{LED3VAndSignal, SwitchPullUp};
use button_events::{DebouncedInput, Edge, InputLine, ToggleInput};
use imxrt_hal::gpio::{Output, GPIO};
use imxrt_hal::gpt::GPT;
use log::info;
use teensy4_bsp as bsp;
use teensy4_bsp::hal;
use teensy4_panic as _;

mod support;
mod timekeeper;
mod wiring;

const LOGGING_BAUD: u32 = 115_200;
const TICK_MILLIS: u32 = 1;

/// Teensy pin labels, for the log.
const POWER_PIN: u8 = 3;
const MODE_PIN: u8 = 4;

//

pub type MyLED = LED3VAndSignal<GPIO<bsp::common::P16, Output>>;
type PowerSwitch = SwitchPullUp<bsp::common::P3>;
type ModeSwitch = SwitchPullUp<bsp::common::P4>;

//

struct HardwareParts {
    gpt1: GPT,
    led: MyLED,
    power_switch: PowerSwitch,
    mode_switch: ModeSwitch,
}

impl HardwareParts {
    /// pin 3 is the power (toggle) button.
    /// pin 4 is the mode (momentary) button.
    /// pin 16 is the LED.
    pub fn start_up(peripherals: hal::Peripherals) -> HardwareParts {
        let hal::Peripherals {
            iomuxc,
            mut ccm,
            dma,
            uart,
            mut dcdc,
            gpt1,
            ..
        } = peripherals;

        let pins = bsp::t40::into_pins(iomuxc);
        let led = {
            let mut led = GPIO::new(pins.p16);
            led.set_fast(true);
            LED3VAndSignal::new(led.output())
        };
        let power_switch = SwitchPullUp::new(pins.p3, POWER_PIN);
        let mode_switch = SwitchPullUp::new(pins.p4, MODE_PIN);

        support::initialize_uart(LOGGING_BAUD, dma, uart, &mut ccm.handle, pins.p14, pins.p15);

        let (mut gpt1, _clock_config) = support::rig_tick_timer(
            core::time::Duration::from_millis(TICK_MILLIS as u64),
            &mut dcdc,
            gpt1,
            &mut ccm.pll1,
            &mut ccm.handle,
            ccm.perclk,
        );
        gpt1.set_enable(true);

        HardwareParts {
            gpt1,
            led,
            power_switch,
            mode_switch,
        }
    }
}

//

/// Reports a long press once per hold, not on every poll while it lasts.
struct LongPressLatch {
    reported: bool,
}

impl LongPressLatch {
    pub fn new() -> Self {
        LongPressLatch { reported: false }
    }

    /// `true` on the first poll at which the held button crosses the threshold.
    pub fn crossed<L: InputLine>(&mut self, button: &DebouncedInput<L>, now: u32) -> bool {
        if !button.is_held() {
            self.reported = false;
            return false;
        }
        if self.reported || !button.is_long_pressed(now) {
            return false;
        }
        self.reported = true;
        true
    }
}

//

#[cortex_m_rt::entry]
fn main() -> ! {
    let HardwareParts {
        mut gpt1,
        mut led,
        power_switch,
        mode_switch,
    } = HardwareParts::start_up(hal::Peripherals::take().unwrap());

    let mut power = ToggleInput::new(DebouncedInput::new(power_switch));
    power.inner_mut().init();
    let mut mode = DebouncedInput::new(mode_switch);
    mode.init();

    led.shine(power.current_state());
    info!(
        "buttons ready: power on pin {}, mode on pin {}",
        power.inner().pin(),
        mode.pin()
    );

    core_application_loop(&mut gpt1, &mut led, &mut power, &mut mode)
}

fn core_application_loop(
    gpt1: &mut GPT,
    led: &mut MyLED,
    power: &mut ToggleInput<DebouncedInput<PowerSwitch>>,
    mode: &mut DebouncedInput<ModeSwitch>,
) -> ! {
    let mut clock = Timekeeper::new();
    let mut long_press = LongPressLatch::new();

    loop {
        support::poll_logger();

        support::time_elapse(gpt1, || clock.incr_timestamp(TICK_MILLIS));
        let now = clock.millis();

        if power.poll(now) {
            let on = power.current_state();
            led.shine(on);
            info!("pin {}: power {}", power.inner().pin(), if on { "on" } else { "off" });
        }

        match mode.poll(now) {
            Some(Edge::Pressed) => info!("pin {}: pressed at {}ms", mode.pin(), now),
            Some(Edge::Released) => info!("pin {}: released at {}ms", mode.pin(), now),
            None => {}
        }
        if long_press.crossed(mode, now) {
            info!("pin {}: long press", mode.pin());
        }
    }
}
