//! Board bring-up helpers for the Teensy 4.0: logging UART, tick timer, switch pads.

use core::time::Duration;

pub use bsp::hal;
pub use teensy4_bsp as bsp;

use crate::support::bsp::common::{P14, P15};
use crate::support::bsp::hal::ccm::perclk::Configured;
use crate::support::bsp::hal::dcdc::DCDC;
use crate::support::bsp::hal::gpt::{Unclocked, GPT};
use crate::support::bsp::hal::iomuxc;
use crate::support::bsp::hal::iomuxc::{Hysteresis, PullKeep, PullKeepSelect, PullUpDown};

/// Drive the logging implementation.
pub fn poll_logger() {
    imxrt_uart_log::dma::poll();
}

/// Required for proper function of `time_elapse`.
const GPT_OCR: hal::gpt::OutputCompareRegister = hal::gpt::OutputCompareRegister::One;

/// Once the GPT has elapsed, invoke `func`.
pub fn time_elapse(gpt: &mut hal::gpt::GPT, func: impl FnOnce()) {
    let mut status = gpt.output_compare_status(GPT_OCR);
    if status.is_set() {
        status.clear();
        func();
    }
}

/// 22k pull-up with hysteresis; a closed switch pulls the pad to ground.
fn rig_pull_up_switch<I: iomuxc::IOMUX>(switch_pin: &mut I) {
    let cfg = teensy4_bsp::hal::iomuxc::Config::zero()
        .set_hysteresis(Hysteresis::Enabled)
        .set_pull_keep(PullKeep::Enabled)
        .set_pull_keep_select(PullKeepSelect::Pull)
        .set_pullupdown(PullUpDown::Pullup22k);

    iomuxc::configure(switch_pin, cfg);
}

pub fn rigged_pull_up_switch<I: iomuxc::IOMUX>(mut switch_pin: I) -> I {
    rig_pull_up_switch(&mut switch_pin);
    switch_pin
}

/// Route `log` output through DMA channel 7 to UART2 (TX on pin 14, RX on pin 15).
pub fn initialize_uart(
    logging_baud: u32,
    dma: imxrt_hal::dma::Unclocked,
    uart: imxrt_hal::uart::Unclocked,
    ccm_handle: &mut imxrt_hal::ccm::Handle,
    pin14: P14,
    pin15: P15,
) {
    let mut dma_channels = dma.clock(ccm_handle);
    let mut channel = dma_channels[7].take().unwrap();
    channel.set_interrupt_on_completion(false);
    let uarts = uart.clock(
        ccm_handle,
        hal::ccm::uart::ClockSelect::OSC,
        hal::ccm::uart::PrescalarSelect::DIVIDE_1,
    );
    let uart = uarts.uart2.init(pin14, pin15, logging_baud).unwrap();
    let (tx, _) = uart.split();
    imxrt_uart_log::dma::init(tx, channel, Default::default()).unwrap();
}

/// Clock GPT1 from the peripheral clock and arm its output compare to elapse every `tick`.
///
/// The caller still has to `set_enable(true)`.
pub fn rig_tick_timer<'a>(
    tick: Duration,
    dcdc: &mut DCDC,
    gpt1: Unclocked,
    ccm_pll1: &mut imxrt_hal::ccm::PLL1,
    ccm_handle: &'a mut imxrt_hal::ccm::Handle,
    ccm_perclk: imxrt_hal::ccm::perclk::Multiplexer,
) -> (GPT, Configured<'a>) {
    let (_frequency, ipg_hz) = ccm_pll1.set_arm_clock(hal::ccm::PLL1::ARM_HZ, ccm_handle, dcdc);
    let mut cfg = ccm_perclk.configure(
        ccm_handle,
        hal::ccm::perclk::PODF::DIVIDE_3,
        hal::ccm::perclk::CLKSEL::IPG(ipg_hz),
    );

    let mut gpt = gpt1.clock(&mut cfg);
    gpt.set_wait_mode_enable(true);
    gpt.set_mode(hal::gpt::Mode::Reset);
    gpt.set_output_compare_duration(GPT_OCR, tick);

    (gpt, cfg)
}
