//! Sample-rate display for a USB/I2S DAC interface.
//!
//! Runs on a Raspberry Pi Pico RP2040. The scan runs on a high-priority interrupt
//! executor; the code is sampled by the ordinary thread-mode executor.
#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::gpio;
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_time::{Ticker, Timer};
use panic_probe as _;
use rate_led4::{
    DisplayContext, Hardware, Led4Pins, Never, PollOutcome, Result, SAMPLE_PERIOD, ScanTiming,
};

static DISPLAY: DisplayContext = DisplayContext::new();

static EXECUTOR_SCAN: InterruptExecutor = InterruptExecutor::new();

#[expect(unsafe_code, reason = "Interrupt vector for the scan executor")]
#[interrupt]
unsafe fn SWI_IRQ_1() {
    // SAFETY: `EXECUTOR_SCAN` was started on this interrupt in `inner_main`.
    unsafe { EXECUTOR_SCAN.on_interrupt() }
}

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    // If it returns, something went wrong.
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(_spawner: Spawner) -> Result<Never> {
    let hardware = Hardware::default();
    let timing = ScanTiming::from_config()?;
    info!(
        "scan tick {} us, segments lit {}% of each tick",
        timing.tick().as_micros(),
        timing.duty_percent()
    );

    interrupt::SWI_IRQ_1.set_priority(Priority::P1);
    let scan_spawner = EXECUTOR_SCAN.start(interrupt::SWI_IRQ_1);
    let token = scan_loop(hardware.display, timing)?;
    scan_spawner.spawn(token);

    let mut code_pins = hardware.code;
    let mut sampler = Ticker::every(SAMPLE_PERIOD);
    loop {
        match DISPLAY.poll(&mut code_pins) {
            PollOutcome::Unchanged => {}
            PollOutcome::Reserved(code) => info!("code {} is reserved", code.value()),
            PollOutcome::Displayed(code, label) => {
                info!("code {} -> {}", code.value(), label.as_str());
            }
        }
        sampler.next().await;
    }
}

#[embassy_executor::task]
async fn scan_loop(mut display: Led4Pins<gpio::Output<'static>>, timing: ScanTiming) -> ! {
    let mut ticker = Ticker::every(timing.tick());
    loop {
        DISPLAY.on_tick(&mut display);
        if let Some(on_time) = timing.on_time() {
            Timer::after(on_time).await;
            DISPLAY.on_blank(&mut display);
        }
        ticker.next().await;
    }
}
